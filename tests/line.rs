//! Golden-output tests for single lines. Timestamps vary, so they are
//! normalized to `[T]` before comparing.

use linelog::{Capture, Color, Destination, Level, LineMode, Logger};
use regex::Regex;
use std::fmt::Write as _;
use std::io;

fn logger(verbosity: Level, colorize: bool) -> (Logger<Capture>, Capture) {
    let out = Capture::new();
    let logger = Logger::builder()
        .verbosity(verbosity)
        .colorize(colorize)
        .destination(out.clone())
        .build()
        .unwrap();
    (logger, out)
}

fn normalize(s: &str) -> String {
    Regex::new(r"\[\d{2}\D\d{2}\D\d{2}\]")
        .unwrap()
        .replace_all(s, "[T]")
        .into_owned()
}

#[test]
fn warn_threshold_scenario() {
    let (mut logger, out) = logger(Level::Warn, false);
    logger.set_area_name("base").unwrap();

    logger.info().append("x");
    assert!(out.is_empty());

    logger.warn().append("y");
    assert_eq!(normalize(&out.contents()), "[T] WARNING base: y\n");
}

#[test]
fn prefix_matches_layout() {
    let (logger, out) = logger(Level::All, false);
    logger.info().append("hello");
    let re = Regex::new(r"^\[([01]\d|2[0-3]):[0-5]\d:[0-5]\d\] INFO: hello\n$").unwrap();
    assert!(re.is_match(&out.contents()), "{:?}", out.contents());
}

#[test]
fn colorized_error_scenario() {
    let (logger, out) = logger(Level::All, true);
    logger.error().append("bad");
    assert_eq!(
        normalize(&out.contents()),
        "\x1b[00;31m[T] ERROR: \x1b[0mbad\n"
    );
    assert_eq!(out.lines().len(), 1);
}

#[test]
fn every_level_uses_its_name_and_color() {
    let (logger, out) = logger(Level::All, true);
    logger.trace().append("t");
    logger.debug().append("d");
    logger.info().append("i");
    logger.warn().append("w");
    logger.error().append("e");
    logger.fatal().append("f");

    let expected = [
        "[T] TRACE: t",
        "\x1b[00;34m[T] DEBUG: \x1b[0md",
        "\x1b[00;32m[T] INFO: \x1b[0mi",
        "\x1b[00;33m[T] WARNING: \x1b[0mw",
        "\x1b[00;31m[T] ERROR: \x1b[0me",
        "\x1b[01;31m[T] FATAL: \x1b[0mf",
    ];
    let lines: Vec<_> = out.lines().iter().map(|l| normalize(l)).collect();
    if cfg!(debug_assertions) {
        assert_eq!(lines, expected);
    } else {
        assert_eq!(lines, expected[2..]);
    }
}

#[test]
fn area_name_sits_before_the_colon() {
    let (mut logger, out) = logger(Level::All, true);
    logger.set_area_name("net").unwrap();
    logger.info().append("up");
    assert_eq!(
        normalize(&out.contents()),
        "\x1b[00;32m[T] INFO net: \x1b[0mup\n"
    );
}

#[test]
fn one_shot_and_sticky_colors() {
    let (logger, out) = logger(Level::All, true);
    let _ = logger.info()
        << "a "
        << Color::Blue
        << "blue "
        << "normal "
        << !Color::Cyan
        << "cyan "
        << "cyan "
        << Color::NoColor
        << "normal";

    assert_eq!(
        normalize(&out.contents()),
        "\x1b[00;32m[T] INFO: \x1b[0ma \x1b[01;34mblue \x1b[0mnormal \
         \x1b[01;36mcyan cyan \x1b[0mnormal\n"
    );
}

#[test]
fn sticky_color_is_reset_before_terminator() {
    let (logger, out) = logger(Level::All, true);
    let _ = logger.trace() << Color::Magenta.persist() << "m";
    let _ = logger.fatal() << "next";
    let lines: Vec<_> = out.lines().iter().map(|l| normalize(l)).collect();
    if cfg!(debug_assertions) {
        assert_eq!(lines[0], "[T] TRACE: \x1b[01;35mm\x1b[0m");
    }
    assert!(lines.last().unwrap().ends_with("\x1b[0mnext"));
}

#[test]
fn pending_one_shot_reset_is_written_at_close() {
    let (logger, out) = logger(Level::All, true);
    let _ = logger.warn() << "tail" << Color::Red;
    assert_eq!(
        normalize(&out.contents()),
        "\x1b[00;33m[T] WARNING: \x1b[0mtail\x1b[01;31m\x1b[0m\n"
    );
}

#[test]
fn colors_are_inert_without_colorize() {
    let (logger, out) = logger(Level::All, false);
    let _ = logger.info() << "a " << Color::Blue << "blue " << !Color::Cyan << "cyan";
    assert_eq!(normalize(&out.contents()), "[T] INFO: a blue cyan\n");
    assert!(!out.contents().contains('\x1b'));
}

#[test]
fn disabled_line_writes_nothing() {
    let (logger, out) = logger(Level::Warn, true);
    let mut line = logger.trace();
    assert!(!line.is_enabled());
    for i in 0..1000 {
        line.push(&i).push_color(Color::Red);
    }
    drop(line);
    logger.info().append("still nothing");
    assert!(out.is_empty());
}

#[test]
fn format_specs_do_not_leak_into_next_line() {
    let (logger, out) = logger(Level::All, false);
    {
        let mut line = logger.info();
        line.push(&"Exponential float ");
        write!(line, "{:e}", 1.0f32).unwrap();
    }
    let _ = logger.info() << "Default float " << 1.0f32;

    let lines: Vec<_> = out.lines().iter().map(|l| normalize(l)).collect();
    assert_eq!(lines, ["[T] INFO: Exponential float 1e0", "[T] INFO: Default float 1"]);
}

#[test]
fn formatted_write_counts_as_one_colored_value() {
    let (logger, out) = logger(Level::All, true);
    {
        let mut line = logger.info();
        line.push_color(Color::Red);
        write!(line, "{:e}", 1.5f64).unwrap();
        line.push(&" plain");
    }
    assert_eq!(
        normalize(&out.contents()),
        "\x1b[00;32m[T] INFO: \x1b[0m\x1b[01;31m1.5e0\x1b[0m plain\n"
    );
}

#[test]
fn prefix_is_written_when_the_line_opens() {
    let (logger, out) = logger(Level::All, false);
    let line = logger.error();
    assert_eq!(normalize(&out.contents()), "[T] ERROR: ");
    drop(line);
    assert_eq!(normalize(&out.contents()), "[T] ERROR: \n");
}

#[test]
fn buffered_line_is_written_at_close() {
    let (mut logger, out) = logger(Level::All, false);
    logger.set_line_mode(LineMode::Buffered);
    let line = logger.error().append("partial");
    assert!(out.is_empty());
    line.finish().unwrap();
    assert_eq!(normalize(&out.contents()), "[T] ERROR: partial\n");
}

#[test]
fn custom_time_separator() {
    let (mut logger, out) = logger(Level::All, false);
    logger.set_time_separator('.');
    logger.info().append("x");
    let re = Regex::new(r"^\[\d{2}\.\d{2}\.\d{2}\] INFO: x\n$").unwrap();
    assert!(re.is_match(&out.contents()));
}

#[test]
fn multiline_values_are_written_verbatim() {
    let (logger, out) = logger(Level::All, false);
    logger.info().append("Testing\nMultiline\n");
    assert_eq!(normalize(&out.contents()), "[T] INFO: Testing\nMultiline\n\n");
}

#[test]
fn detached_logger_is_inert() {
    let logger = Logger::builder()
        .verbosity(Level::All)
        .detached()
        .build()
        .unwrap();
    let line = logger.fatal();
    assert!(!line.is_enabled());
    assert!(line.append("x").finish().is_ok());
}

struct Broken;

impl Destination for Broken {
    fn write_all(&self, _bytes: &[u8]) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

#[test]
fn finish_reports_write_errors() {
    let logger = Logger::builder()
        .verbosity(Level::All)
        .destination(Broken)
        .build()
        .unwrap();
    let err = logger.error().append("x").finish().unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

    // Dropping without finish swallows the error instead of panicking.
    logger.error().append("y");
}

#[test]
fn buffered_finish_reports_write_errors() {
    let mut logger = Logger::builder()
        .verbosity(Level::All)
        .destination(Broken)
        .build()
        .unwrap();
    logger.set_line_mode(LineMode::Buffered);
    assert!(logger.warn().append("x").finish().is_err());
}
