//! Selection strategies
//!
//! Each strategy appends names to a shared [`SelectedNames`] set. Strategies
//! are independent; their combined effect comes only from the order in which
//! [`SelectionConfig::strategies`](super::SelectionConfig::strategies) lists
//! them.

use crate::app::models::AttributeMap;

use super::config::SelectionPattern;
use super::selected::SelectedNames;

/// One way of contributing attribute names to a selection
#[derive(Debug, Clone, Copy)]
pub enum SelectionStrategy<'a> {
    /// Record attributes whose whole name matches the pattern, in record order
    Pattern(&'a SelectionPattern),
    /// Listed names in list order, present on the record or not
    Explicit(&'a [String]),
    /// Every record attribute except the excluded names, in record order
    AllAttributes { excluded: &'a [String] },
    /// Reserved core names in their fixed order
    CoreAttributes(&'a [String]),
}

impl SelectionStrategy<'_> {
    /// Append this strategy's names to the selection
    ///
    /// # Returns
    ///
    /// Number of names newly added (already selected names are skipped)
    pub fn apply(&self, attributes: &AttributeMap, selected: &mut SelectedNames) -> usize {
        let before = selected.len();

        match self {
            SelectionStrategy::Pattern(pattern) => {
                for name in attributes.keys().filter(|name| pattern.matches(name)) {
                    selected.push(name);
                }
            }
            SelectionStrategy::Explicit(names) | SelectionStrategy::CoreAttributes(names) => {
                for name in names.iter() {
                    selected.push(name);
                }
            }
            SelectionStrategy::AllAttributes { excluded } => {
                for name in attributes
                    .keys()
                    .filter(|name| !excluded.iter().any(|core| core.as_str() == *name))
                {
                    selected.push(name);
                }
            }
        }

        selected.len() - before
    }

    /// Short label for logging
    pub fn label(&self) -> &'static str {
        match self {
            SelectionStrategy::Pattern(_) => "pattern",
            SelectionStrategy::Explicit(_) => "explicit",
            SelectionStrategy::AllAttributes { .. } => "all",
            SelectionStrategy::CoreAttributes(_) => "core",
        }
    }
}
