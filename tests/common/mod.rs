// Shared test helpers

#![allow(dead_code)]

use sci_m::models::*;
use serde_json::json;

/// 1000 gCO2e hardware, reserved 1 h of a 1 y lifespan, 2 of 8 vCPUs.
pub fn vcpu_record() -> Record {
    Record::new()
        .with(TOTAL_EMBODIED_EMISSIONS, 1000)
        .with(DURATION, 3600)
        .with(EXPECTED_LIFESPAN, 31_536_000)
        .with(VCPUS_ALLOCATED, 2)
        .with(VCPUS_TOTAL, 8)
}

/// Same hardware described with the resources-* spelling.
pub fn resources_record() -> Record {
    Record::new()
        .with(TOTAL_EMBODIED_EMISSIONS, 1000)
        .with(DURATION, 3600)
        .with(EXPECTED_LIFESPAN, 31_536_000)
        .with(RESOURCES_RESERVED, 2)
        .with(TOTAL_RESOURCES, 8)
}

pub fn without(record: &Record, key: &str) -> Record {
    let fields: serde_json::Map<String, serde_json::Value> = record
        .fields()
        .iter()
        .filter(|(k, _)| k.as_str() != key)
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    Record::from(fields)
}

pub fn vcpu_record_json() -> serde_json::Value {
    json!({
        "total-embodied-emissions": 1000,
        "duration": 3600,
        "expected-lifespan": 31536000,
        "vcpus-allocated": 2,
        "vcpus-total": 8
    })
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}
