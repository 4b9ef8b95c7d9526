//! # autojson-engine: Serializer and Validator Engines
//!
//! The engines do the parse/map/print work on top of `autojson-core`; the
//! facades are what callers hold.
//!
//! ```text
//! ObjectFactory ──► JsonDataSerializer ──► dyn SerializerEngine (JsonSerializerEngine)
//!               └─► JsonDataValidator  ──► dyn ValidatorEngine  (JsonValidatorEngine)
//! ```
//!
//! ## Contracts
//!
//! - [`SerializerEngine::deserialize`]: text to [`Policy`](autojson_core::Policy).
//!   Every classified failure is an `AutoJsonError::Serialization`.
//! - [`SerializerEngine::serialize`]: [`Results`](autojson_core::Results) to text.
//! - [`ValidatorEngine::validate`]: well-formedness only; failure is
//!   `AutoJsonError::InvalidFormat`.
//!
//! Engines hold no mutable state. One instance may serve concurrent calls
//! from any number of threads.

pub mod config;
pub mod engine;
pub mod facade;
pub mod factory;
pub mod serializer;
pub mod validator;

pub use config::{EngineConfig, OutputStyle};
pub use engine::{SerializerEngine, ValidatorEngine};
pub use facade::{JsonDataSerializer, JsonDataValidator};
pub use factory::ObjectFactory;
pub use serializer::JsonSerializerEngine;
pub use validator::JsonValidatorEngine;
