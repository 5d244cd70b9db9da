//! Tests for record conversion
//!
//! Unit tests for assembly, delivery, routing and statistics. The complete
//! conversion scenarios live in the crate's integration tests.


use crate::app::models::{AttributeMap, FlowRecord};
use crate::app::services::attribute_selector::SelectionConfig;

/// Beach attributes used by the schema scenarios, in insertion order
pub fn create_schema_attributes() -> AttributeMap {
    [
        ("beach-name", "Malibu Beach"),
        ("beach-location", "California, US"),
        ("attribute-should-be-eliminated", "This should not be in CSVData!"),
    ]
    .into_iter()
    .collect()
}

/// A record with fixed core identity attributes
pub fn create_test_record(attributes: AttributeMap) -> FlowRecord {
    let mut record_attributes: AttributeMap = [
        ("path", "target"),
        ("filename", "beach.record"),
        ("uuid", "5b3b7c2e-0000-4000-8000-000000000001"),
    ]
    .into_iter()
    .collect();

    for (name, value) in attributes.iter() {
        record_attributes.insert(name, value);
    }
    FlowRecord::from_parts(record_attributes, "original body")
}

/// Pattern `beach-.*` with a header line and no core attributes
pub fn create_schema_config() -> SelectionConfig {
    SelectionConfig::default()
        .with_pattern("beach-.*")
        .expect("valid pattern")
        .with_core_attributes_included(false)
        .with_schema(true)
}
