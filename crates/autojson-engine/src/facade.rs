//! # Facades
//!
//! Public-facing serializer and validator objects. Each exclusively owns
//! one engine, supplied at construction and never replaced, and forwards
//! every call to it unchanged: arguments go in as given, results and errors
//! come back as the engine produced them.

use autojson_core::{AutoJsonError, Policy, Result, Results};

use crate::engine::{SerializerEngine, ValidatorEngine};

/// Forwards serialization calls to its engine.
#[derive(Debug)]
pub struct JsonDataSerializer {
    engine: Box<dyn SerializerEngine>,
}

impl JsonDataSerializer {
    /// Wrap `engine`.
    ///
    /// # Errors
    ///
    /// `AutoJsonError::InvalidArgument` if no engine is supplied.
    pub fn new(engine: Option<Box<dyn SerializerEngine>>) -> Result<Self> {
        let engine =
            engine.ok_or_else(|| AutoJsonError::argument_null("JsonDataSerializer::engine"))?;
        Ok(Self { engine })
    }

    pub fn with_engine(engine: impl SerializerEngine + 'static) -> Self {
        Self {
            engine: Box::new(engine),
        }
    }

    pub fn deserialize(&self, payload: &str) -> Result<Policy> {
        self.engine.deserialize(payload)
    }

    pub fn serialize(&self, entity: &Results) -> Result<String> {
        self.engine.serialize(entity)
    }
}

/// Forwards validation calls to its engine.
#[derive(Debug)]
pub struct JsonDataValidator {
    engine: Box<dyn ValidatorEngine>,
}

impl JsonDataValidator {
    /// Wrap `engine`.
    ///
    /// # Errors
    ///
    /// `AutoJsonError::InvalidArgument` if no engine is supplied.
    pub fn new(engine: Option<Box<dyn ValidatorEngine>>) -> Result<Self> {
        let engine =
            engine.ok_or_else(|| AutoJsonError::argument_null("JsonDataValidator::engine"))?;
        Ok(Self { engine })
    }

    pub fn with_engine(engine: impl ValidatorEngine + 'static) -> Self {
        Self {
            engine: Box::new(engine),
        }
    }

    pub fn validate(&self, payload: &str) -> Result<()> {
        self.engine.validate(payload)
    }
}
