//! # Error Taxonomy
//!
//! Structured error types for the auto JSON serializer, built with `thiserror`.
//!
//! ## Domain Kinds
//!
//! Callers only ever see three classified kinds:
//!
//! - [`AutoJsonError::InvalidArgument`]: a required collaborator was not
//!   supplied at construction.
//! - [`AutoJsonError::InvalidFormat`]: text failed the well-formedness check.
//! - [`AutoJsonError::Serialization`]: the serializer engine failed in either
//!   direction. Missing keys and shape mismatches both land here; only the
//!   message tells them apart.
//!
//! ## Reclassification
//!
//! Low-level failures are first captured as a [`BackendError`], whose
//! [`ErrorCategory`] is determined by inspection (`serde_json::Error::classify`
//! or the [`MappingError`] variant), never by matching message text. Only the
//! categories in the allow-list become a `Serialization` error; anything else
//! passes through untouched as [`AutoJsonError::Backend`].

use std::fmt;

use thiserror::Error;

/// The direction of a serializer engine call, used as the message prefix of
/// a classified failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Text to [`Policy`](crate::Policy).
    Deserialization,
    /// [`Results`](crate::Results) to text.
    Serialization,
}

impl Stage {
    /// The label prefixed to classified error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deserialization => "Deserialization",
            Self::Serialization => "Serialization",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level error type surfaced to callers.
#[derive(Error, Debug)]
pub enum AutoJsonError {
    /// A required collaborator reference was not supplied.
    #[error("{0}")]
    InvalidArgument(String),

    /// Text failed well-formedness parsing.
    #[error("{0}")]
    InvalidFormat(String),

    /// The serializer engine failed; `message` is the backend diagnostic.
    #[error("{stage} -> {message}")]
    Serialization {
        /// Which direction failed.
        stage: Stage,
        /// The original low-level message.
        message: String,
    },

    /// A backend failure outside the reclassification allow-list, carried
    /// through unmodified.
    #[error("unclassified backend failure: {0}")]
    Backend(#[source] serde_json::Error),
}

/// Discriminant of [`AutoJsonError`], for callers that branch on the kind
/// without caring about the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidFormat,
    Serialization,
    Unclassified,
}

impl AutoJsonError {
    /// The null-dependency error raised by facade constructors.
    pub fn argument_null(param_name: &str) -> Self {
        Self::InvalidArgument(format!("A null argument was supplied: {param_name}"))
    }

    /// A well-formedness failure carrying the parser's diagnostic.
    pub fn invalid_format(diagnostic: impl fmt::Display) -> Self {
        Self::InvalidFormat(format!("Invalid JSON payload: {diagnostic}"))
    }

    /// Reclassify a backend failure raised during `stage`.
    ///
    /// Allow-listed categories become [`AutoJsonError::Serialization`] with
    /// the stage label and the original message. Everything else is returned
    /// as [`AutoJsonError::Backend`] without alteration.
    pub fn classify(stage: Stage, err: BackendError) -> Self {
        let category = err.category();
        match err {
            BackendError::Json(inner) if !category.is_classified() => {
                tracing::debug!(%stage, ?category, "propagating unclassified backend failure");
                Self::Backend(inner)
            }
            err => {
                tracing::debug!(%stage, ?category, "reclassified backend failure");
                Self::Serialization {
                    stage,
                    message: err.to_string(),
                }
            }
        }
    }

    /// The domain kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::InvalidFormat(_) => ErrorKind::InvalidFormat,
            Self::Serialization { .. } => ErrorKind::Serialization,
            Self::Backend(_) => ErrorKind::Unclassified,
        }
    }
}

// ---------------------------------------------------------------------------
// Backend failures
// ---------------------------------------------------------------------------

/// Errors raised by the structural mapper.
///
/// `path` locates the offending value from the document root, e.g.
/// `Capabilities.arrayKey` or `MonitorResults[0].OtherData`. An empty path
/// is the root itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// A required object key was absent.
    #[error("required field '{path}' is missing")]
    MissingField { path: String },

    /// A value's JSON kind disagrees with the shape the target expects.
    #[error("{}: expected {expected}, found {found}", display_path(.path))]
    UnexpectedShape {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A scalar position held a JSON kind outside the accepted scalar set.
    #[error("{}: unexpected JSON value type {found}", display_path(.path))]
    UnsupportedScalar { path: String, found: &'static str },

    /// A number literal that no scalar arm can represent, e.g. `1e400`.
    #[error("{}: number out of range: {literal}", display_path(.path))]
    NumberOutOfRange { path: String, literal: String },
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "<root>"
    } else {
        path
    }
}

impl MappingError {
    pub(crate) fn missing(field: &str) -> Self {
        Self::MissingField {
            path: field.to_string(),
        }
    }

    pub(crate) fn unexpected(expected: &'static str, found: &'static str) -> Self {
        Self::UnexpectedShape {
            path: String::new(),
            expected,
            found,
        }
    }

    pub(crate) fn unsupported(found: &'static str) -> Self {
        Self::UnsupportedScalar {
            path: String::new(),
            found,
        }
    }

    pub(crate) fn out_of_range(literal: String) -> Self {
        Self::NumberOutOfRange {
            path: String::new(),
            literal,
        }
    }

    /// Prefix the error path with the segment it was found under.
    ///
    /// Index segments are written as `[n]` and join without a dot.
    pub(crate) fn within(self, segment: &str) -> Self {
        match self {
            Self::MissingField { path } => Self::MissingField {
                path: join_path(segment, &path),
            },
            Self::UnexpectedShape {
                path,
                expected,
                found,
            } => Self::UnexpectedShape {
                path: join_path(segment, &path),
                expected,
                found,
            },
            Self::UnsupportedScalar { path, found } => Self::UnsupportedScalar {
                path: join_path(segment, &path),
                found,
            },
            Self::NumberOutOfRange { path, literal } => Self::NumberOutOfRange {
                path: join_path(segment, &path),
                literal,
            },
        }
    }

    /// Path of the offending value from the document root.
    pub fn path(&self) -> &str {
        match self {
            Self::MissingField { path }
            | Self::UnexpectedShape { path, .. }
            | Self::UnsupportedScalar { path, .. }
            | Self::NumberOutOfRange { path, .. } => path,
        }
    }
}

fn join_path(segment: &str, rest: &str) -> String {
    if rest.is_empty() {
        segment.to_string()
    } else if rest.starts_with('[') {
        format!("{segment}{rest}")
    } else {
        format!("{segment}.{rest}")
    }
}

/// The closed set of low-level failure categories the engines can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed or truncated text.
    Syntax,
    /// Text was well-formed but did not fit the requested type.
    Data,
    /// A lookup missed or a number exceeded every scalar range.
    OutOfRange,
    /// A value had the wrong kind for its position.
    InvalidArgument,
    /// The backend failed to read or write its byte stream.
    Io,
}

impl ErrorCategory {
    /// Whether a failure in this category is reclassified as a domain
    /// serialization error.
    pub fn is_classified(self) -> bool {
        match self {
            Self::Syntax | Self::Data | Self::OutOfRange | Self::InvalidArgument => true,
            Self::Io => false,
        }
    }
}

/// A low-level failure from the JSON backend or the structural mapper.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl BackendError {
    /// Category of this failure, determined by inspection.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Json(err) => match err.classify() {
                serde_json::error::Category::Syntax | serde_json::error::Category::Eof => {
                    ErrorCategory::Syntax
                }
                serde_json::error::Category::Data => ErrorCategory::Data,
                serde_json::error::Category::Io => ErrorCategory::Io,
            },
            Self::Mapping(err) => match err {
                MappingError::MissingField { .. } | MappingError::NumberOutOfRange { .. } => {
                    ErrorCategory::OutOfRange
                }
                MappingError::UnexpectedShape { .. } | MappingError::UnsupportedScalar { .. } => {
                    ErrorCategory::InvalidArgument
                }
            },
        }
    }
}
