//! Engine traits: the two call shapes the facades forward to.

use std::fmt;

use autojson_core::{Policy, Result, Results};

/// Converts between JSON text and the fixed data models.
pub trait SerializerEngine: Send + Sync + fmt::Debug {
    /// Parse `payload` and map it onto a [`Policy`].
    ///
    /// # Errors
    ///
    /// `AutoJsonError::Serialization` for malformed text, a missing
    /// `Capabilities`/`Settings` key, or a non-scalar entry value.
    fn deserialize(&self, payload: &str) -> Result<Policy>;

    /// Map `entity` to JSON and print it.
    fn serialize(&self, entity: &Results) -> Result<String>;
}

/// Checks that text is well-formed JSON, without mapping it.
pub trait ValidatorEngine: Send + Sync + fmt::Debug {
    /// # Errors
    ///
    /// `AutoJsonError::InvalidFormat` carrying the parser's diagnostic.
    fn validate(&self, payload: &str) -> Result<()>;
}
