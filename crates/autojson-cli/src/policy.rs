//! # Policy Subcommand
//!
//! Validates a policy file, deserializes it, and lists every entry with
//! its scalar kind, one per line, sorted by section then key:
//!
//! ```text
//! Capabilities.intKey = 123 (int64)
//! Settings.stringKey = "value2" (string)
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use autojson_core::model::keys;
use autojson_core::{Policy, PolicyMap};
use autojson_engine::ObjectFactory;

/// Arguments for the `autojson policy` subcommand.
#[derive(Args, Debug)]
pub struct PolicyArgs {
    /// Policy JSON file, or `-` for standard input.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Execute the policy subcommand, writing the listing or the failure to `out`.
///
/// Returns exit code: 0 if the policy deserialized, 1 otherwise.
pub fn run_policy(
    args: &PolicyArgs,
    factory: &ObjectFactory,
    out: &mut impl Write,
) -> Result<u8> {
    let payload = crate::read_payload(&args.path)?;
    let label = args.path.display();

    let outcome = factory
        .validator()
        .validate(&payload)
        .and_then(|()| factory.serializer().deserialize(&payload));

    match outcome {
        Ok(policy) => {
            tracing::info!(
                path = %label,
                capabilities = policy.capabilities.len(),
                settings = policy.settings.len(),
                "policy loaded"
            );
            for line in describe_policy(&policy) {
                writeln!(out, "{line}")?;
            }
            Ok(0)
        }
        Err(e) => {
            tracing::info!(path = %label, kind = ?e.kind(), "policy rejected");
            writeln!(out, "FAIL: {label}: {e}")?;
            Ok(1)
        }
    }
}

/// One `<section>.<key> = <value> (<kind>)` line per entry.
pub fn describe_policy(policy: &Policy) -> Vec<String> {
    let mut lines = Vec::with_capacity(policy.capabilities.len() + policy.settings.len());
    describe_section(keys::CAPABILITIES, &policy.capabilities, &mut lines);
    describe_section(keys::SETTINGS, &policy.settings, &mut lines);
    lines
}

fn describe_section(section: &str, entries: &PolicyMap, lines: &mut Vec<String>) {
    for (key, value) in entries {
        lines.push(format!("{section}.{key} = {value} ({})", value.kind_name()));
    }
}
