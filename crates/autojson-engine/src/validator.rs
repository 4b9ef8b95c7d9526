//! # Validator Engine
//!
//! Well-formedness check only. The text is parsed into a
//! [`serde_json::Value`] with the same rules the serializer engine applies,
//! so string escapes are decoded and checked. No structural expectations
//! are applied: a payload can validate and still fail
//! [`SerializerEngine::deserialize`](crate::SerializerEngine::deserialize).

use serde_json::Value;

use autojson_core::{AutoJsonError, Result};

use crate::engine::ValidatorEngine;

/// The `serde_json`-backed validator engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonValidatorEngine;

impl JsonValidatorEngine {
    pub fn new() -> Self {
        Self
    }
}

impl ValidatorEngine for JsonValidatorEngine {
    fn validate(&self, payload: &str) -> Result<()> {
        tracing::debug!(bytes = payload.len(), "validating payload");
        serde_json::from_str::<Value>(payload).map_err(|e| {
            tracing::debug!(line = e.line(), column = e.column(), "payload is not well-formed");
            AutoJsonError::invalid_format(e)
        })?;
        Ok(())
    }
}
