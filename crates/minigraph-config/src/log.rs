use serde::{Deserialize, Deserializer};
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub level: LogLevel,
    pub style: LogStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Completely disables logging
    Off,
    /// Only errors from minigraph crates
    Error,
    /// Warnings and errors from minigraph crates
    Warn,
    /// Info, warning and error messages from minigraph crates
    #[default]
    Info,
    /// Debug, info, warning and error messages from minigraph crates
    Debug,
    /// Everything, from all dependencies
    Trace,
}

impl LogLevel {
    const VALUES: &'static [(&'static str, LogLevel)] = &[
        ("off", LogLevel::Off),
        ("error", LogLevel::Error),
        ("warn", LogLevel::Warn),
        ("info", LogLevel::Info),
        ("debug", LogLevel::Debug),
        ("trace", LogLevel::Trace),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// The `EnvFilter` directive for this level.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "minigraph=error,off",
            LogLevel::Warn => "minigraph=warn,off",
            LogLevel::Info => "minigraph=info,off",
            LogLevel::Debug => "minigraph=debug,off",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str_any_case(s, Self::VALUES, "log level")
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogStyle {
    /// Standard text, colored on interactive terminals
    #[default]
    Text,
    /// JSON objects
    Json,
}

impl LogStyle {
    const VALUES: &'static [(&'static str, LogStyle)] = &[("text", LogStyle::Text), ("json", LogStyle::Json)];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogStyle::Text => "text",
            LogStyle::Json => "json",
        }
    }
}

impl fmt::Display for LogStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str_any_case(s, Self::VALUES, "log style")
    }
}

impl<'de> Deserialize<'de> for LogStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}

fn from_str_any_case<T: Copy>(s: &str, values: &[(&str, T)], what: &str) -> Result<T, String> {
    values
        .iter()
        .find(|(string, _)| string.eq_ignore_ascii_case(s))
        .map(|(_, value)| *value)
        .ok_or_else(|| {
            format!(
                r#""{s}" is not a valid {what} (expected one of {})."#,
                values.iter().map(|(string, _)| *string).collect::<Vec<_>>().join(", ")
            )
        })
}
