use linelog::fmt::RESET;
use linelog::{Capture, Color, ColorMode, ColorToken, Level};

#[test]
fn palette_escape_sequences() {
    assert_eq!(Color::DarkGray.ansi(), "\x1b[01;30m");
    assert_eq!(Color::Black.ansi(), "\x1b[00;30m");
    assert_eq!(Color::Red.ansi(), "\x1b[01;31m");
    assert_eq!(Color::DarkRed.ansi(), "\x1b[00;31m");
    assert_eq!(Color::Orange.ansi(), "\x1b[00;33m");
    assert_eq!(Color::Gray.ansi(), "\x1b[00;37m");
    assert_eq!(Color::NoColor.ansi(), RESET);
    assert_eq!(RESET, "\x1b[0m");
}

#[test]
fn palette_has_seventeen_distinct_entries() {
    let mut codes: Vec<_> = Color::ALL.iter().map(|c| c.ansi()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), 17);
}

#[test]
fn level_colors() {
    assert_eq!(Color::for_level(Level::Warn), Some(Color::Orange));
    assert_eq!(Color::for_level(Level::Error), Some(Color::DarkRed));
    assert_eq!(Color::for_level(Level::Fatal), Some(Color::Red));
    assert_eq!(Color::for_level(Level::Info), Some(Color::DarkGreen));
    assert_eq!(Color::for_level(Level::Debug), Some(Color::DarkBlue));
    assert_eq!(Color::for_level(Level::Trace), None);
    assert_eq!(Color::for_level(Level::All), None);
    assert_eq!(Color::for_level(Level::Off), None);
}

#[test]
fn tokens_are_one_shot_by_default() {
    let token = ColorToken::from(Color::Blue);
    assert!(!token.sticky);
    assert!(token.resets_after_value());
}

#[test]
fn not_operator_persists() {
    let token = !Color::Cyan;
    assert!(token.sticky);
    assert_eq!(token.color, Color::Cyan);
    assert_eq!(!ColorToken::new(Color::Red), Color::Red.persist());
    assert!(!token.resets_after_value());
}

#[test]
fn no_color_never_schedules_a_reset() {
    assert!(!ColorToken::new(Color::NoColor).resets_after_value());
}

#[test]
fn color_mode_resolution() {
    let pipe = Capture::new();
    let tty = Capture::terminal();
    assert!(!ColorMode::Auto.resolve(&pipe));
    assert!(ColorMode::Auto.resolve(&tty));
    assert!(ColorMode::Always.resolve(&pipe));
    assert!(!ColorMode::Never.resolve(&tty));
}

#[test]
fn color_mode_from_str() {
    assert_eq!("auto".parse::<ColorMode>().unwrap(), ColorMode::Auto);
    assert_eq!("Always".parse::<ColorMode>().unwrap(), ColorMode::Always);
    assert_eq!("false".parse::<ColorMode>().unwrap(), ColorMode::Never);
    assert!("sometimes".parse::<ColorMode>().is_err());
}
