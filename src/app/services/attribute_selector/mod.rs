//! Attribute selection for CSV conversion
//!
//! This module decides which attributes of a record become CSV columns, and in
//! which order. Selection is additive: each configured strategy appends names
//! to one ordered set, and a name claimed by an earlier strategy is never
//! repeated by a later one.
//!
//! # Architecture
//!
//! - [`config`] - Immutable `SelectionConfig` and output `Destination`
//! - [`strategy`] - The selection strategies and their fixed priority
//! - [`selected`] - `SelectedNames`, the ordered duplicate-free name set
//! - [`selector`] - `select_attributes`, folding the strategies over a record
//!
//! # Strategy Order
//!
//! 1. **Pattern**: attribute names fully matching the configured regex
//! 2. **Explicit list**: listed names, whether or not the record has them
//! 3. **All attributes**: every non-core attribute, only when neither of the
//!    above is configured
//! 4. **Core attributes**: the reserved identity names, when enabled
//!
//! # Example Usage
//!
//! ```rust
//! use attributes_to_csv::app::models::AttributeMap;
//! use attributes_to_csv::app::services::attribute_selector::{select_attributes, SelectionConfig};
//!
//! # fn example() -> attributes_to_csv::Result<()> {
//! let attributes: AttributeMap = [("beach-name", "Malibu Beach"), ("other", "x")]
//!     .into_iter()
//!     .collect();
//! let config = SelectionConfig::default()
//!     .with_pattern("beach-.*")?
//!     .with_core_attributes_included(false);
//!
//! let selected = select_attributes(&attributes, &config);
//! assert_eq!(selected.into_vec(), vec!["beach-name"]);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod selected;
pub mod selector;
pub mod strategy;

#[cfg(test)]
pub mod tests;

pub use config::{Destination, SelectionConfig, SelectionPattern};
pub use selected::SelectedNames;
pub use selector::select_attributes;
pub use strategy::SelectionStrategy;
