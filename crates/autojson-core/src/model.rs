//! # Data Models
//!
//! The two fixed structure families the serializer understands, with the
//! field manifests the [structural mapper](crate::mapper) walks.
//!
//! - [`Policy`] is read from input text.
//! - [`Results`] (with [`MonitorResults`], [`StepResults`], [`Metrics`]) is
//!   written to output text.
//!
//! ```text
//! Results
//! ├── MonitorResults: [MonitorResults]
//! │   ├── StepResults: [StepResults]
//! │   │   ├── Metrics: [Metrics]
//! │   │   │   └── MetricData: {string: scalar}
//! │   │   ├── OtherData: {string: scalar}
//! │   │   └── PageResults: {string: scalar}
//! │   └── OtherData: {string: scalar}
//! └── OtherData: {string: scalar}
//! ```

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::MappingError;
use crate::mapper::{
    assign, map_object_to_struct, map_struct_to_object, DeserializeFields, FieldReader,
    FieldWriter, FromJson, SerializeFields, ToJson,
};
use crate::value::{DeserializationValue, SerializationValue};

/// JSON keys used by the manifests.
pub mod keys {
    pub const CAPABILITIES: &str = "Capabilities";
    pub const SETTINGS: &str = "Settings";
    pub const METRIC_DATA: &str = "MetricData";
    pub const METRICS: &str = "Metrics";
    pub const OTHER_DATA: &str = "OtherData";
    pub const PAGE_RESULTS: &str = "PageResults";
    pub const STEP_RESULTS: &str = "StepResults";
    pub const MONITOR_RESULTS: &str = "MonitorResults";
}

/// Key/value map of policy scalars.
pub type PolicyMap = BTreeMap<String, DeserializationValue>;

/// Key/value map of result scalars.
pub type ResultMap = BTreeMap<String, SerializationValue>;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// The input configuration: capability and setting scalars by key.
///
/// Both maps are required in the source JSON but may be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Policy {
    pub capabilities: PolicyMap,
    pub settings: PolicyMap,
}

impl DeserializeFields for Policy {
    const FIELDS: &'static [FieldWriter<Self>] = &[
        FieldWriter {
            name: keys::CAPABILITIES,
            write: |p: &mut Policy, v: &Value| assign(&mut p.capabilities, v),
        },
        FieldWriter {
            name: keys::SETTINGS,
            write: |p: &mut Policy, v: &Value| assign(&mut p.settings, v),
        },
    ];
}

impl FromJson for Policy {
    fn from_json(value: &Value) -> Result<Self, MappingError> {
        map_object_to_struct(value)
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metrics {
    pub metric_data: ResultMap,
}

/// Results of one monitor step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepResults {
    pub metrics: Vec<Metrics>,
    pub other_data: ResultMap,
    pub page_results: ResultMap,
}

/// Results of one monitor, step by step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonitorResults {
    pub step_results: Vec<StepResults>,
    pub other_data: ResultMap,
}

/// The top-level output document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Results {
    pub monitor_results: Vec<MonitorResults>,
    pub other_data: ResultMap,
}

impl SerializeFields for Metrics {
    const FIELDS: &'static [FieldReader<Self>] = &[FieldReader {
        name: keys::METRIC_DATA,
        read: |m: &Metrics| m.metric_data.to_json(),
    }];
}

impl SerializeFields for StepResults {
    const FIELDS: &'static [FieldReader<Self>] = &[
        FieldReader {
            name: keys::METRICS,
            read: |s: &StepResults| s.metrics.to_json(),
        },
        FieldReader {
            name: keys::OTHER_DATA,
            read: |s: &StepResults| s.other_data.to_json(),
        },
        FieldReader {
            name: keys::PAGE_RESULTS,
            read: |s: &StepResults| s.page_results.to_json(),
        },
    ];
}

impl SerializeFields for MonitorResults {
    const FIELDS: &'static [FieldReader<Self>] = &[
        FieldReader {
            name: keys::STEP_RESULTS,
            read: |m: &MonitorResults| m.step_results.to_json(),
        },
        FieldReader {
            name: keys::OTHER_DATA,
            read: |m: &MonitorResults| m.other_data.to_json(),
        },
    ];
}

impl SerializeFields for Results {
    const FIELDS: &'static [FieldReader<Self>] = &[
        FieldReader {
            name: keys::MONITOR_RESULTS,
            read: |r: &Results| r.monitor_results.to_json(),
        },
        FieldReader {
            name: keys::OTHER_DATA,
            read: |r: &Results| r.other_data.to_json(),
        },
    ];
}

macro_rules! to_json_via_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToJson for $ty {
                fn to_json(&self) -> Value {
                    map_struct_to_object(self)
                }
            }
        )*
    };
}

to_json_via_fields!(Metrics, StepResults, MonitorResults, Results);
