//! # autojson-cli: Command-Line Front End
//!
//! Provides the `autojson` binary on top of the engine facades.
//!
//! ## Subcommands
//!
//! - `autojson`: print the startup banner and exit 0.
//! - `autojson validate <PATH>`: well-formedness check of a JSON file.
//! - `autojson policy <PATH>`: validate, deserialize, and list a policy file.
//!
//! `PATH` may be `-` to read standard input. Exit codes: 0 on success,
//! 1 on a rejected payload or an operational error.

pub mod config;
pub mod policy;
pub mod validate;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Printed when the binary runs without a subcommand.
pub const BANNER: &str = "**** Auto JSON Serializer ****";

/// Read a payload from `path`, or from standard input when `path` is `-`.
pub fn read_payload(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut payload = String::new();
        std::io::stdin()
            .read_to_string(&mut payload)
            .context("failed to read payload from stdin")?;
        return Ok(payload);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
