//! Engine configuration.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// How the serializer engine prints JSON text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// No insignificant whitespace.
    #[default]
    Compact,
    /// Two-space indentation, one member per line.
    Pretty,
}

impl OutputStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            other => Err(format!(
                "unknown output style '{other}' (expected 'compact' or 'pretty')"
            )),
        }
    }
}

/// Settings shared by the engines an [`ObjectFactory`](crate::ObjectFactory)
/// builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Printing style for serialized results. Never affects content.
    pub output_style: OutputStyle,
}
