//! # Serializer Engine
//!
//! Parse-then-map for [`Policy`] input and map-then-print for [`Results`]
//! output, backed by `serde_json`.
//!
//! Every failure is captured as a [`BackendError`] and passed through
//! [`AutoJsonError::classify`] with the stage of the call. Allow-listed
//! categories surface as `AutoJsonError::Serialization` with a
//! `"Deserialization -> "` or `"Serialization -> "` prefix; the rest are
//! propagated unmodified. Mapping results to JSON is total, but the print
//! step goes through the same classification so both directions share one
//! error contract.

use serde_json::Value;

use autojson_core::{
    AutoJsonError, BackendError, FromJson, Policy, Result, Results, Stage, ToJson,
};

use crate::config::{EngineConfig, OutputStyle};
use crate::engine::SerializerEngine;

/// The `serde_json`-backed serializer engine.
#[derive(Debug, Clone, Default)]
pub struct JsonSerializerEngine {
    output_style: OutputStyle,
}

impl JsonSerializerEngine {
    /// An engine printing compact output.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            output_style: config.output_style,
        }
    }
}

impl SerializerEngine for JsonSerializerEngine {
    fn deserialize(&self, payload: &str) -> Result<Policy> {
        tracing::debug!(bytes = payload.len(), "deserializing policy payload");
        let policy = parse_policy(payload)
            .map_err(|e| AutoJsonError::classify(Stage::Deserialization, e))?;
        tracing::debug!(
            capabilities = policy.capabilities.len(),
            settings = policy.settings.len(),
            "policy deserialized"
        );
        Ok(policy)
    }

    fn serialize(&self, entity: &Results) -> Result<String> {
        tracing::debug!(
            monitors = entity.monitor_results.len(),
            style = %self.output_style,
            "serializing results"
        );
        print_results(entity, self.output_style)
            .map_err(|e| AutoJsonError::classify(Stage::Serialization, e))
    }
}

fn parse_policy(payload: &str) -> std::result::Result<Policy, BackendError> {
    let value: Value = serde_json::from_str(payload)?;
    Ok(Policy::from_json(&value)?)
}

fn print_results(
    entity: &Results,
    style: OutputStyle,
) -> std::result::Result<String, BackendError> {
    let value = entity.to_json();
    let text = match style {
        OutputStyle::Compact => serde_json::to_string(&value)?,
        OutputStyle::Pretty => serde_json::to_string_pretty(&value)?,
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use autojson_core::{ErrorKind, Metrics, MonitorResults, SerializationValue, StepResults};

    fn engine() -> JsonSerializerEngine {
        JsonSerializerEngine::new()
    }

    #[test]
    fn deserializes_minimal_policy() {
        let policy = engine()
            .deserialize(r#"{"Capabilities": {}, "Settings": {}}"#)
            .unwrap();
        assert_eq!(policy, Policy::default());
    }

    #[test]
    fn empty_payload_is_a_serialization_error() {
        let err = engine().deserialize("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Serialization);
        assert!(err.to_string().starts_with("Deserialization -> "));
    }

    #[test]
    fn missing_section_names_the_key() {
        let err = engine()
            .deserialize(r#"{"Settings": {"stringKey": "value2"}}"#)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Deserialization -> required field 'Capabilities' is missing"
        );
    }

    #[test]
    fn non_object_root_is_a_serialization_error() {
        let err = engine().deserialize("[1, 2, 3]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Serialization);
    }

    #[test]
    fn null_entry_is_rejected() {
        let err = engine()
            .deserialize(r#"{"Capabilities": {"k": null}, "Settings": {}}"#)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Serialization);
        assert!(err.to_string().contains("Capabilities.k"));
    }

    #[test]
    fn serializes_empty_results() {
        let text = engine().serialize(&Results::default()).unwrap();
        assert_eq!(text, r#"{"MonitorResults":[],"OtherData":{}}"#);
    }

    #[test]
    fn pretty_output_has_same_content() {
        let mut results = Results::default();
        results
            .other_data
            .insert("run".into(), SerializationValue::UInt8(3));
        results.monitor_results.push(MonitorResults {
            step_results: vec![StepResults {
                metrics: vec![Metrics::default()],
                ..StepResults::default()
            }],
            ..MonitorResults::default()
        });

        let compact = engine().serialize(&results).unwrap();
        let pretty = JsonSerializerEngine::with_config(&EngineConfig {
            output_style: OutputStyle::Pretty,
        })
        .serialize(&results)
        .unwrap();

        assert!(pretty.contains('\n'));
        assert!(!compact.contains('\n'));
        let a: Value = serde_json::from_str(&compact).unwrap();
        let b: Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        let engine = std::sync::Arc::new(engine());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let engine = std::sync::Arc::clone(&engine);
                std::thread::spawn(move || {
                    let payload = format!(r#"{{"Capabilities": {{"n": {i}}}, "Settings": {{}}}}"#);
                    engine.deserialize(&payload).unwrap().capabilities["n"].as_i64()
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Some(i as i64));
        }
    }
}
