//! # autojson-core: Reflection-Free JSON Mapping
//!
//! Converts between JSON text values and two fixed data models: the input
//! [`Policy`] and the output [`Results`] tree. Everything the serializer and
//! validator engines need lives here; this crate performs no I/O.
//!
//! ## Modules
//!
//! - [`value`]: the scalar variant codec: closed tagged unions for policy
//!   and result leaves, and their single-scalar JSON mapping.
//! - [`mapper`]: the structural mapper: manifest-driven conversion of
//!   structures, sequences, and ordered maps.
//! - [`model`]: the policy and results structures with their manifests.
//! - [`error`]: the domain error taxonomy and backend failure
//!   reclassification.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `autojson-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod mapper;
pub mod model;
pub mod value;

pub use error::{AutoJsonError, BackendError, ErrorCategory, ErrorKind, MappingError, Stage};
pub use mapper::{
    map_object_to_struct, map_struct_to_object, DeserializeFields, FromJson, SerializeFields,
    ToJson,
};
pub use model::{MonitorResults, Metrics, Policy, PolicyMap, ResultMap, Results, StepResults};
pub use value::{DeserializationValue, SerializationValue};

/// Result alias for operations that surface domain errors.
pub type Result<T> = std::result::Result<T, AutoJsonError>;
