//! # Policy and Results Mapping
//!
//! End-to-end checks of the structural mapper against parsed JSON text,
//! covering the documented policy sample and the nested results shape.

use autojson_core::mapper::FromJson;
use autojson_core::model::keys;
use autojson_core::{
    DeserializationValue, Metrics, MonitorResults, Policy, Results, SerializationValue,
    StepResults, ToJson,
};

const SAMPLE_POLICY: &str = r#"{
    "Capabilities": {
        "intKey": 123,
        "stringKey": "value",
        "boolKey": false,
        "doubleKey": 1.23,
        "negativeIntKey": -123,
        "negativeDoubleKey": -1.23
    },
    "Settings": {
        "intKey": 456,
        "stringKey": "value2",
        "boolKey": true,
        "doubleKey": 4.56,
        "negativeIntKey": -456,
        "negativeDoubleKey": -4.56
    }
}"#;

#[test]
fn sample_policy_keeps_every_scalar_kind() {
    let value: serde_json::Value = serde_json::from_str(SAMPLE_POLICY).unwrap();
    let policy = Policy::from_json(&value).unwrap();

    assert_eq!(policy.capabilities.len(), 6);
    assert_eq!(policy.settings.len(), 6);

    let caps = &policy.capabilities;
    assert_eq!(caps["intKey"], DeserializationValue::Signed(123));
    assert_eq!(caps["stringKey"], DeserializationValue::Text("value".into()));
    assert_eq!(caps["boolKey"], DeserializationValue::Boolean(false));
    assert_eq!(caps["doubleKey"], DeserializationValue::Double(1.23));
    assert_eq!(caps["negativeIntKey"], DeserializationValue::Signed(-123));
    assert_eq!(caps["negativeDoubleKey"], DeserializationValue::Double(-1.23));

    let settings = &policy.settings;
    assert_eq!(settings["intKey"], DeserializationValue::Signed(456));
    assert_eq!(settings["stringKey"], DeserializationValue::Text("value2".into()));
    assert_eq!(settings["boolKey"], DeserializationValue::Boolean(true));
    assert_eq!(settings["doubleKey"], DeserializationValue::Double(4.56));
    assert_eq!(settings["negativeIntKey"], DeserializationValue::Signed(-456));
    assert_eq!(settings["negativeDoubleKey"], DeserializationValue::Double(-4.56));
}

#[test]
fn later_duplicate_key_wins() {
    let value: serde_json::Value =
        serde_json::from_str(r#"{"Capabilities": {"k": 1, "k": "two"}, "Settings": {}}"#)
            .unwrap();
    let policy = Policy::from_json(&value).unwrap();
    assert_eq!(policy.capabilities.len(), 1);
    assert_eq!(policy.capabilities["k"].as_str(), Some("two"));
}

#[test]
fn results_tree_uses_manifest_keys_at_every_level() {
    let mut metrics = Metrics::default();
    metrics
        .metric_data
        .insert("int_key".into(), SerializationValue::from(123));
    let mut step = StepResults::default();
    step.metrics.push(metrics);
    step.page_results
        .insert("page".into(), SerializationValue::from("index"));
    let mut monitor = MonitorResults::default();
    monitor.step_results.push(step);
    let mut results = Results::default();
    results.monitor_results.push(monitor);

    let rendered = results.to_json();
    let monitor = &rendered[keys::MONITOR_RESULTS][0];
    let step = &monitor[keys::STEP_RESULTS][0];
    assert_eq!(step[keys::METRICS][0][keys::METRIC_DATA]["int_key"], 123);
    assert_eq!(step[keys::PAGE_RESULTS]["page"], "index");
    assert!(step[keys::OTHER_DATA].as_object().unwrap().is_empty());
    assert!(monitor[keys::OTHER_DATA].as_object().unwrap().is_empty());
    assert!(rendered[keys::OTHER_DATA].as_object().unwrap().is_empty());
}
