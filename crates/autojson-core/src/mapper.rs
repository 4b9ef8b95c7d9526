//! # Structural Mapper
//!
//! Converts structure instances to and from JSON objects, driven by a
//! per-type field manifest: an ordered list of `(json name, accessor)` pairs
//! declared next to each structure in [`crate::model`].
//!
//! ## Conversion Rules
//!
//! | Target shape | From JSON | To JSON |
//! |---|---|---|
//! | scalar | [`DeserializationValue::from_json`] | [`SerializationValue::to_json`] |
//! | `Vec<T>` | array, element-wise | array, element-wise |
//! | `BTreeMap<String, T>` | object, value-wise | object, value-wise |
//! | manifest struct | [`map_object_to_struct`] | [`map_struct_to_object`] |
//!
//! Deserializing is fallible: a missing required key and a JSON kind that
//! disagrees with the target shape both yield a [`MappingError`], whose path
//! points at the offending value. Serializing is total.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::MappingError;
use crate::value::{json_kind_name, DeserializationValue, SerializationValue};

/// Types that can be built from a JSON value.
pub trait FromJson: Sized {
    fn from_json(value: &Value) -> Result<Self, MappingError>;
}

/// Types that always have a JSON rendering.
pub trait ToJson {
    fn to_json(&self) -> Value;
}

// ---------------------------------------------------------------------------
// Field manifests
// ---------------------------------------------------------------------------

/// One manifest entry on the serialization side: reads a member out of `S`.
pub struct FieldReader<S> {
    /// JSON key the member is written under.
    pub name: &'static str,
    pub read: fn(&S) -> Value,
}

/// One manifest entry on the deserialization side: writes a member of `S`.
pub struct FieldWriter<S> {
    /// JSON key the member is read from.
    pub name: &'static str,
    pub write: fn(&mut S, &Value) -> Result<(), MappingError>,
}

/// A structure whose members are written to JSON through a manifest.
///
/// Manifest order is the insertion order of keys in the produced object.
/// Consumers must not rely on it.
pub trait SerializeFields: Sized + 'static {
    const FIELDS: &'static [FieldReader<Self>];
}

/// A structure whose members are read from JSON through a manifest.
///
/// Every manifest key is required. Keys absent from the manifest are ignored.
pub trait DeserializeFields: Default + Sized + 'static {
    const FIELDS: &'static [FieldWriter<Self>];
}

/// Replace `slot` with the conversion of `value`. Used by manifest writers.
pub fn assign<T: FromJson>(slot: &mut T, value: &Value) -> Result<(), MappingError> {
    *slot = T::from_json(value)?;
    Ok(())
}

/// Build a `T` from a JSON object by walking `T`'s manifest.
///
/// Starts from `T::default()` and fills each manifest member from the value
/// under its key.
///
/// # Errors
///
/// - [`MappingError::UnexpectedShape`] if `value` is not an object, or a
///   member's value has the wrong JSON kind.
/// - [`MappingError::MissingField`] if a manifest key is absent.
/// - [`MappingError::UnsupportedScalar`] if a scalar position holds `null`,
///   an array, or an object.
pub fn map_object_to_struct<T: DeserializeFields>(value: &Value) -> Result<T, MappingError> {
    let object = value
        .as_object()
        .ok_or_else(|| MappingError::unexpected("object", json_kind_name(value)))?;

    let mut target = T::default();
    for field in T::FIELDS {
        let located = object
            .get(field.name)
            .ok_or_else(|| MappingError::missing(field.name))?;
        tracing::trace!(field = field.name, kind = json_kind_name(located), "mapping field");
        (field.write)(&mut target, located).map_err(|e| e.within(field.name))?;
    }
    Ok(target)
}

/// Render a `T` as a JSON object by walking `T`'s manifest.
pub fn map_struct_to_object<T: SerializeFields>(source: &T) -> Value {
    let mut object = Map::with_capacity(T::FIELDS.len());
    for field in T::FIELDS {
        object.insert(field.name.to_string(), (field.read)(source));
    }
    Value::Object(object)
}

// ---------------------------------------------------------------------------
// Leaves and containers
// ---------------------------------------------------------------------------

impl FromJson for DeserializationValue {
    fn from_json(value: &Value) -> Result<Self, MappingError> {
        DeserializationValue::from_json(value)
    }
}

impl ToJson for SerializationValue {
    fn to_json(&self) -> Value {
        SerializationValue::to_json(self)
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(value: &Value) -> Result<Self, MappingError> {
        let array = value
            .as_array()
            .ok_or_else(|| MappingError::unexpected("array", json_kind_name(value)))?;
        array
            .iter()
            .enumerate()
            .map(|(i, element)| T::from_json(element).map_err(|e| e.within(&format!("[{i}]"))))
            .collect()
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(ToJson::to_json).collect())
    }
}

impl<T: FromJson> FromJson for BTreeMap<String, T> {
    fn from_json(value: &Value) -> Result<Self, MappingError> {
        let object = value
            .as_object()
            .ok_or_else(|| MappingError::unexpected("object", json_kind_name(value)))?;
        object
            .iter()
            .map(|(key, entry)| {
                T::from_json(entry)
                    .map(|converted| (key.clone(), converted))
                    .map_err(|e| e.within(key))
            })
            .collect()
    }
}

impl<T: ToJson> ToJson for BTreeMap<String, T> {
    fn to_json(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, entry)| (key.clone(), entry.to_json()))
                .collect(),
        )
    }
}
