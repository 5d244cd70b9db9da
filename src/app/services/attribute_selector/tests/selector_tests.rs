//! Tests for full attribute selection

use super::{create_bare_config, create_beach_attributes, create_beach_attributes_with_core};
use crate::app::models::AttributeMap;
use crate::app::services::attribute_selector::select_attributes;

#[test]
fn test_default_selects_all_in_insertion_order() {
    let selected = select_attributes(&create_beach_attributes(), &create_bare_config());

    assert_eq!(
        selected.into_vec(),
        vec![
            "beach-name",
            "beach-location",
            "beach-endorsement",
            "attribute-should-be-eliminated"
        ]
    );
}

#[test]
fn test_default_excludes_core_names() {
    let selected = select_attributes(&create_beach_attributes_with_core(), &create_bare_config());

    assert_eq!(selected.len(), 4);
    assert_eq!(selected.as_slice()[0], "beach-name");
    assert!(!selected.contains("uuid"));
}

#[test]
fn test_default_with_core_appends_core_last() {
    let config = create_bare_config().with_core_attributes_included(true);
    let selected = select_attributes(&create_beach_attributes_with_core(), &config);

    assert_eq!(
        selected.into_vec(),
        vec![
            "beach-name",
            "beach-location",
            "beach-endorsement",
            "attribute-should-be-eliminated",
            "path",
            "filename",
            "uuid"
        ]
    );
}

#[test]
fn test_empty_map_selects_nothing() {
    let selected = select_attributes(&AttributeMap::new(), &create_bare_config());
    assert!(selected.is_empty());
}

#[test]
fn test_explicit_list_limits_selection() {
    let config = create_bare_config().with_attribute_list("beach-name,beach-location,beach-endorsement");
    let selected = select_attributes(&create_beach_attributes(), &config);

    assert_eq!(
        selected.into_vec(),
        vec!["beach-name", "beach-location", "beach-endorsement"]
    );
}

#[test]
fn test_explicit_core_name_selected_without_core_flag() {
    let config = create_bare_config()
        .with_attribute_list("beach-name,beach-location,beach-endorsement,uuid");
    let selected = select_attributes(&create_beach_attributes_with_core(), &config);

    assert_eq!(selected.len(), 4);
    assert!(selected.contains("uuid"));
    assert!(!selected.contains("path"));
    assert!(!selected.contains("filename"));
}

#[test]
fn test_explicit_core_name_claims_position() {
    let config = create_bare_config()
        .with_attribute_list("uuid,beach-name")
        .with_core_attributes_included(true);
    let selected = select_attributes(&create_beach_attributes_with_core(), &config);

    assert_eq!(
        selected.into_vec(),
        vec!["uuid", "beach-name", "path", "filename"]
    );
}

#[test]
fn test_explicit_list_duplicates_collapse() {
    let config = create_bare_config().with_attribute_list("beach-name,beach-name,beach-type");
    let selected = select_attributes(&create_beach_attributes(), &config);

    assert_eq!(selected.into_vec(), vec!["beach-name", "beach-type"]);
}

#[test]
fn test_pattern_then_list() {
    let mut attributes = create_beach_attributes();
    attributes.insert("moreInfo1", "A+ Rating");
    attributes.insert("moreInfo2", "Avg Temp: 61f");

    let config = create_bare_config()
        .with_pattern("beach-.*")
        .unwrap()
        .with_attribute_list("moreInfo1,moreInfo2");
    let selected = select_attributes(&attributes, &config);

    assert_eq!(
        selected.into_vec(),
        vec![
            "beach-name",
            "beach-location",
            "beach-endorsement",
            "moreInfo1",
            "moreInfo2"
        ]
    );
}

#[test]
fn test_name_in_pattern_and_list_keeps_pattern_position() {
    let config = create_bare_config()
        .with_pattern("beach-.*")
        .unwrap()
        .with_attribute_list("beach-endorsement,extra");
    let selected = select_attributes(&create_beach_attributes(), &config);

    assert_eq!(
        selected.into_vec(),
        vec!["beach-name", "beach-location", "beach-endorsement", "extra"]
    );
}

#[test]
fn test_unmatched_pattern_selects_nothing() {
    let config = create_bare_config().with_pattern("ocean-.*").unwrap();
    let selected = select_attributes(&create_beach_attributes(), &config);

    assert!(selected.is_empty());
}

#[test]
fn test_pattern_can_claim_core_attribute() {
    let config = create_bare_config()
        .with_pattern("uuid|beach-name")
        .unwrap()
        .with_core_attributes_included(true);
    let selected = select_attributes(&create_beach_attributes_with_core(), &config);

    assert_eq!(
        selected.into_vec(),
        vec!["uuid", "beach-name", "path", "filename"]
    );
}

#[test]
fn test_core_names_selected_even_when_absent() {
    let config = create_bare_config()
        .with_attribute_list("beach-name")
        .with_core_attributes_included(true);
    let selected = select_attributes(&create_beach_attributes(), &config);

    assert_eq!(
        selected.into_vec(),
        vec!["beach-name", "path", "filename", "uuid"]
    );
}

#[test]
fn test_unbalanced_pattern_never_selects_partial_names() {
    let attributes: AttributeMap = [("apple-pie", "1"), ("crab", "2"), ("b", "3")]
        .into_iter()
        .collect();

    assert!(create_bare_config().with_pattern("a)|(b").is_err());

    let config = create_bare_config().with_pattern("a|b").unwrap();
    let selected = select_attributes(&attributes, &config);
    assert_eq!(selected.into_vec(), vec!["b"]);
}
