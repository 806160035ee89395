//! Configuration struct definitions.
//!
//! Values stay strings here and are validated by the `parse_*` methods on
//! [`Config`](super::Config), so one bad value reports a precise error instead
//! of failing the whole deserialization.

use serde::Deserialize;

/// Settings that apply to every line.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Runtime verbosity threshold.
    pub verbosity: String,
    /// Area name shown after the level; empty for none.
    pub area: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbosity: "warn".to_string(),
            area: String::new(),
        }
    }
}

/// Console rendering.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// `auto`, `always` or `never`.
    pub colors: String,
    /// Exactly one character.
    pub time_separator: String,
    /// `immediate` or `buffered`.
    pub line_mode: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            colors: "auto".to_string(),
            time_separator: ":".to_string(),
            line_mode: "immediate".to_string(),
        }
    }
}

/// Per-area overrides from `[areas.<name>]`. Unset fields keep the global value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AreaConfig {
    pub verbosity: Option<String>,
    pub colors: Option<String>,
    pub time_separator: Option<String>,
    pub line_mode: Option<String>,
}
