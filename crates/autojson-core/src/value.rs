//! # Scalar Variant Codec
//!
//! Two closed tagged unions hold the leaf values of the data models:
//!
//! - [`DeserializationValue`]: built from a JSON scalar read from policy
//!   input. Keeps the backend's scalar classification exactly: an integer is
//!   never widened to a double and a double is never narrowed to an integer.
//! - [`SerializationValue`]: written into results output. Every arm has
//!   exactly one JSON rendering, so conversion cannot fail.
//!
//! Both directions dispatch with an exhaustive `match`; adding an arm to
//! either enum is a compile error until the codec handles it.

use std::fmt;

use serde_json::{Number, Value};

use crate::error::MappingError;

/// Name of a JSON value's kind, as used in mapping diagnostics.
pub fn json_kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Deserialization side
// ---------------------------------------------------------------------------

/// A scalar read from policy input.
#[derive(Debug, Clone, PartialEq)]
pub enum DeserializationValue {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Double(f64),
    Boolean(bool),
}

impl DeserializationValue {
    /// Copy a JSON scalar into the matching arm.
    ///
    /// Integers that fit `i64` (including non-negative ones) become
    /// [`Signed`](Self::Signed); only integers above `i64::MAX` become
    /// [`Unsigned`](Self::Unsigned). Numbers written with a fraction or an
    /// exponent become [`Double`](Self::Double).
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::UnsupportedScalar`] for `null`, arrays, and
    /// objects, and [`MappingError::NumberOutOfRange`] for a number too large
    /// for `f64`.
    pub fn from_json(value: &Value) -> Result<Self, MappingError> {
        match value {
            Value::String(s) => Ok(Self::Text(s.clone())),
            Value::Bool(b) => Ok(Self::Boolean(*b)),
            Value::Number(n) => from_number(n),
            Value::Null | Value::Array(_) | Value::Object(_) => {
                Err(MappingError::unsupported(json_kind_name(value)))
            }
        }
    }

    /// Name of the active arm.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Signed(_) => "int64",
            Self::Unsigned(_) => "uint64",
            Self::Double(_) => "double",
            Self::Boolean(_) => "bool",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Signed(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Unsigned(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }
}

// `Number` keeps the literal text (`arbitrary_precision`), so `-0` parses as
// an integer and only literals with a fraction or exponent reach `as_f64`.
fn from_number(n: &Number) -> Result<DeserializationValue, MappingError> {
    if let Some(v) = n.as_i64() {
        Ok(DeserializationValue::Signed(v))
    } else if let Some(v) = n.as_u64() {
        Ok(DeserializationValue::Unsigned(v))
    } else if let Some(v) = n.as_f64() {
        Ok(DeserializationValue::Double(v))
    } else {
        Err(MappingError::out_of_range(n.to_string()))
    }
}

impl fmt::Display for DeserializationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Signed(v) => write!(f, "{v}"),
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Boolean(v) => write!(f, "{v}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Serialization side
// ---------------------------------------------------------------------------

/// A scalar written into results output.
#[derive(Debug, Clone, PartialEq)]
pub enum SerializationValue {
    Text(String),
    Boolean(bool),
    Float(f32),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
}

impl SerializationValue {
    /// Render this value as a JSON scalar.
    ///
    /// `Float` is widened to `f64`; a non-finite float has no JSON number
    /// form and renders as `null`.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Text(s) => Value::String(s.clone()),
            Self::Boolean(b) => Value::Bool(*b),
            Self::Float(v) => Number::from_f64(f64::from(*v))
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Self::Int8(v) => Value::from(*v),
            Self::Int16(v) => Value::from(*v),
            Self::Int32(v) => Value::from(*v),
            Self::Int64(v) => Value::from(*v),
            Self::UInt8(v) => Value::from(*v),
            Self::UInt16(v) => Value::from(*v),
            Self::UInt32(v) => Value::from(*v),
            Self::UInt64(v) => Value::from(*v),
        }
    }
}

macro_rules! serialization_value_from {
    ($($ty:ty => $arm:ident),* $(,)?) => {
        $(
            impl From<$ty> for SerializationValue {
                fn from(v: $ty) -> Self {
                    Self::$arm(v)
                }
            }
        )*
    };
}

serialization_value_from! {
    String => Text,
    bool => Boolean,
    f32 => Float,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
}

impl From<&str> for SerializationValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn positive_integer_is_signed() {
        let v = DeserializationValue::from_json(&json!(123)).unwrap();
        assert_eq!(v, DeserializationValue::Signed(123));
    }

    #[test]
    fn negative_integer_is_signed() {
        let v = DeserializationValue::from_json(&json!(-123)).unwrap();
        assert_eq!(v, DeserializationValue::Signed(-123));
    }

    #[test]
    fn negative_zero_literal_is_signed() {
        let parsed: Value = serde_json::from_str("-0").unwrap();
        let v = DeserializationValue::from_json(&parsed).unwrap();
        assert_eq!(v, DeserializationValue::Signed(0));
    }

    #[test]
    fn negative_zero_with_fraction_is_double() {
        let parsed: Value = serde_json::from_str("-0.0").unwrap();
        let v = DeserializationValue::from_json(&parsed).unwrap();
        assert!(matches!(v, DeserializationValue::Double(d) if d == 0.0 && d.is_sign_negative()));
    }

    #[test]
    fn integer_below_i64_min_is_double() {
        let parsed: Value = serde_json::from_str("-9223372036854775809").unwrap();
        let v = DeserializationValue::from_json(&parsed).unwrap();
        assert_eq!(v.kind_name(), "double");
    }

    #[test]
    fn number_beyond_f64_is_out_of_range() {
        let parsed: Value = serde_json::from_str("1e400").unwrap();
        let err = DeserializationValue::from_json(&parsed).unwrap_err();
        assert_eq!(
            err,
            MappingError::NumberOutOfRange {
                path: String::new(),
                literal: "1e400".to_string()
            }
        );
    }

    #[test]
    fn integer_above_i64_max_is_unsigned() {
        let v = DeserializationValue::from_json(&json!(u64::MAX)).unwrap();
        assert_eq!(v, DeserializationValue::Unsigned(u64::MAX));
    }

    #[test]
    fn fraction_is_double() {
        let v = DeserializationValue::from_json(&json!(-1.23)).unwrap();
        assert_eq!(v.as_f64(), Some(-1.23));
    }

    #[test]
    fn whole_double_is_not_narrowed() {
        let parsed: Value = serde_json::from_str("5.0").unwrap();
        let v = DeserializationValue::from_json(&parsed).unwrap();
        assert_eq!(v, DeserializationValue::Double(5.0));
        assert_eq!(v.as_i64(), None);
    }

    #[test]
    fn string_and_bool() {
        assert_eq!(
            DeserializationValue::from_json(&json!("value")).unwrap(),
            DeserializationValue::Text("value".to_string())
        );
        assert_eq!(
            DeserializationValue::from_json(&json!(false)).unwrap(),
            DeserializationValue::Boolean(false)
        );
    }

    #[test]
    fn non_scalars_are_rejected() {
        for (value, kind) in [
            (json!(null), "null"),
            (json!([1, 2, 3]), "array"),
            (json!({"key": "value"}), "object"),
        ] {
            let err = DeserializationValue::from_json(&value).unwrap_err();
            assert_eq!(
                err,
                MappingError::UnsupportedScalar {
                    path: String::new(),
                    found: kind
                }
            );
        }
    }

    #[test]
    fn accessors_only_answer_for_their_arm() {
        let v = DeserializationValue::Signed(7);
        assert_eq!(v.as_i64(), Some(7));
        assert_eq!(v.as_u64(), None);
        assert_eq!(v.as_f64(), None);
        assert_eq!(v.as_bool(), None);
        assert_eq!(v.as_str(), None);
        assert_eq!(v.kind_name(), "int64");
    }

    #[test]
    fn display_quotes_text() {
        assert_eq!(DeserializationValue::Text("a b".into()).to_string(), "\"a b\"");
        assert_eq!(DeserializationValue::Unsigned(9).to_string(), "9");
    }

    #[test]
    fn serialization_scalars_render_by_kind() {
        assert_eq!(SerializationValue::from(true).to_json(), json!(true));
        assert_eq!(SerializationValue::from(123).to_json(), json!(123));
        assert_eq!(SerializationValue::from(-123).to_json(), json!(-123));
        assert_eq!(
            SerializationValue::from("string_value").to_json(),
            json!("string_value")
        );
        assert_eq!(SerializationValue::from(u64::MAX).to_json(), json!(u64::MAX));
        assert_eq!(SerializationValue::from(i8::MIN).to_json(), json!(-128));
        assert_eq!(SerializationValue::from(u16::MAX).to_json(), json!(65535));
    }

    #[test]
    fn float_renders_as_double() {
        let rendered = SerializationValue::from(123.45f32).to_json();
        let f = rendered.as_f64().expect("float renders as a number");
        assert!((f - 123.45).abs() < 0.001);
        assert!(rendered.is_f64());
    }

    #[test]
    fn non_finite_float_renders_null() {
        assert_eq!(SerializationValue::Float(f32::NAN).to_json(), Value::Null);
        assert_eq!(SerializationValue::Float(f32::INFINITY).to_json(), Value::Null);
    }

    #[test]
    fn json_kind_names() {
        assert_eq!(json_kind_name(&json!(null)), "null");
        assert_eq!(json_kind_name(&json!(1)), "number");
        assert_eq!(json_kind_name(&json!({})), "object");
    }
}
