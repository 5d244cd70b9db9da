//! Attribute selection over a single record

use crate::app::models::AttributeMap;
use tracing::debug;

use super::config::SelectionConfig;
use super::selected::SelectedNames;

/// Select the attribute names to encode for one record
///
/// Applies every strategy of the configuration in priority order (pattern,
/// explicit list, all non-core attributes, core attributes), discarding names
/// already selected. Never fails: a configuration that matches nothing
/// yields an empty selection.
///
/// # Arguments
///
/// * `attributes` - The record's attributes
/// * `config` - Selection configuration
///
/// # Returns
///
/// Distinct attribute names in output order
pub fn select_attributes(attributes: &AttributeMap, config: &SelectionConfig) -> SelectedNames {
    let mut selected = SelectedNames::new();

    for strategy in config.strategies() {
        let added = strategy.apply(attributes, &mut selected);
        debug!(
            "Selection strategy '{}' added {} attribute(s)",
            strategy.label(),
            added
        );
    }

    debug!(
        "Selected {} of {} attribute(s)",
        selected.len(),
        attributes.len()
    );

    selected
}
