//! Object factory: builds facades wired to the default `serde_json` engines.

use crate::config::EngineConfig;
use crate::facade::{JsonDataSerializer, JsonDataValidator};
use crate::serializer::JsonSerializerEngine;
use crate::validator::JsonValidatorEngine;

/// Owns the engine configuration and hands out fully wired facades.
#[derive(Debug, Clone, Default)]
pub struct ObjectFactory {
    config: EngineConfig,
}

impl ObjectFactory {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// A serializer facade over a [`JsonSerializerEngine`].
    pub fn serializer(&self) -> JsonDataSerializer {
        tracing::trace!(style = %self.config.output_style, "creating serializer");
        JsonDataSerializer::with_engine(JsonSerializerEngine::with_config(&self.config))
    }

    /// A validator facade over a [`JsonValidatorEngine`].
    pub fn validator(&self) -> JsonDataValidator {
        tracing::trace!("creating validator");
        JsonDataValidator::with_engine(JsonValidatorEngine::new())
    }
}
