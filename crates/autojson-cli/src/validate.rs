//! # Validate Subcommand
//!
//! Well-formedness check of a JSON file. Structure is not checked: use
//! `autojson policy` for that.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use autojson_engine::ObjectFactory;

/// Arguments for the `autojson validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// JSON file to check, or `-` for standard input.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Execute the validate subcommand, writing the verdict to `out`.
///
/// Returns exit code: 0 if the payload is well-formed, 1 otherwise.
pub fn run_validate(
    args: &ValidateArgs,
    factory: &ObjectFactory,
    out: &mut impl Write,
) -> Result<u8> {
    let payload = crate::read_payload(&args.path)?;
    let label = args.path.display();

    match factory.validator().validate(&payload) {
        Ok(()) => {
            writeln!(out, "OK: {label}")?;
            Ok(0)
        }
        Err(e) => {
            tracing::info!(path = %label, error = %e, "payload rejected");
            writeln!(out, "FAIL: {label}: {e}")?;
            Ok(1)
        }
    }
}
