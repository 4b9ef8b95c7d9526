//! # CLI Configuration
//!
//! Loaded from an optional YAML file (`--config <PATH>`; JSON works too),
//! then overridden by environment variables:
//!
//! | Variable | Field |
//! |---|---|
//! | `AUTOJSON_OUTPUT_STYLE` | `engine.output_style` (`compact` / `pretty`) |

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use autojson_engine::{EngineConfig, OutputStyle};

/// Environment variable overriding the serializer output style.
pub const OUTPUT_STYLE_ENV: &str = "AUTOJSON_OUTPUT_STYLE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub engine: EngineConfig,
}

impl CliConfig {
    /// Apply an output style override, as read from [`OUTPUT_STYLE_ENV`].
    pub fn apply_output_style(&mut self, raw: Option<&str>) -> Result<()> {
        if let Some(raw) = raw {
            self.engine.output_style = raw
                .parse::<OutputStyle>()
                .map_err(|e| anyhow!("{OUTPUT_STYLE_ENV}: {e}"))?;
        }
        Ok(())
    }
}

/// Parse a configuration document.
pub fn parse_config(text: &str) -> Result<CliConfig> {
    if text.trim().is_empty() {
        return Ok(CliConfig::default());
    }
    serde_yaml::from_str(text).context("malformed configuration")
}

/// Load the configuration file (if any) and apply environment overrides.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            parse_config(&text).with_context(|| format!("in {}", path.display()))?
        }
        None => CliConfig::default(),
    };

    let env_style = std::env::var(OUTPUT_STYLE_ENV).ok();
    config.apply_output_style(env_style.as_deref())?;

    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
