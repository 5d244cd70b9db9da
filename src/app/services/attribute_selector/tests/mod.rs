//! Tests for attribute selection
//!
//! Fixtures mirror the beach records used by the original conversion
//! scenarios, with and without core identity attributes.

pub mod selector_tests;

use crate::app::models::AttributeMap;
use crate::app::services::attribute_selector::SelectionConfig;

/// Beach attributes in a fixed insertion order
pub fn create_beach_attributes() -> AttributeMap {
    [
        ("beach-name", "Malibu Beach"),
        ("beach-location", "California, US"),
        ("beach-endorsement", "Great beach.\n\nThanks, Jim"),
        ("attribute-should-be-eliminated", "This should not be in CSVData!"),
    ]
    .into_iter()
    .collect()
}

/// Beach attributes preceded by the core identity attributes
pub fn create_beach_attributes_with_core() -> AttributeMap {
    let mut attributes: AttributeMap = [
        ("uuid", "5b3b7c2e-0000-4000-8000-000000000001"),
        ("filename", "beach.record"),
        ("path", "target"),
    ]
    .into_iter()
    .collect();

    for (name, value) in create_beach_attributes().iter() {
        attributes.insert(name, value);
    }
    attributes
}

/// Configuration with every optional mechanism switched off
pub fn create_bare_config() -> SelectionConfig {
    SelectionConfig::default()
        .with_core_attributes_included(false)
        .with_schema(false)
        .with_null_for_empty(false)
}
