//! Runtime configuration from environment variables.

use thiserror::Error;

use stockroom_observability::LogFormat;

pub const COLOR_VAR: &str = "STOCKROOM_COLOR";
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";
pub const NO_COLOR_VAR: &str = "NO_COLOR";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}' (expected one of: {expected})")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// When to style output lines.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub color: ColorMode,
    pub log_format: LogFormat,
    /// `NO_COLOR` was present (any value).
    pub no_color: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let color = match lookup(COLOR_VAR) {
            None => ColorMode::default(),
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "" | "auto" => ColorMode::Auto,
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: COLOR_VAR,
                        value: raw,
                        expected: "auto, always, never",
                    });
                }
            },
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            None => LogFormat::default(),
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "" | "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: LOG_FORMAT_VAR,
                        value: raw,
                        expected: "pretty, json",
                    });
                }
            },
        };

        Ok(Self {
            color,
            log_format,
            no_color: lookup(NO_COLOR_VAR).is_some(),
        })
    }

    /// Resolve the color mode against the actual output stream.
    pub fn color_enabled(&self, stdout_is_terminal: bool) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => stdout_is_terminal && !self.no_color,
        }
    }
}
