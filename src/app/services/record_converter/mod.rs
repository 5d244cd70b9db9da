//! Record conversion module for attribute-to-CSV processing
//!
//! This module turns the attributes of a record into CSV and delivers the
//! result back onto the record. It builds on the attribute selector and the
//! CSV line codec.
//!
//! # Architecture
//!
//! - [`assembler`] - Resolves selected names to values and encodes the lines
//! - [`destination`] - Writes lines as attributes or as the record body
//! - [`processor`] - `RecordConverter`, single-record and batch orchestration
//! - [`stats`] - Conversion statistics and batch results
//!
//! # Conversion Pipeline
//!
//! 1. **Selection**: choose attribute names with the configured strategies
//! 2. **Assembly**: look up values, substitute missing ones, encode lines
//! 3. **Delivery**: store `CSVData`/`CSVSchema`, or replace the body and set
//!    the `mime.type` attribute to `text/csv`
//!
//! # Example Usage
//!
//! ```rust
//! use attributes_to_csv::app::models::{AttributeMap, FlowRecord};
//! use attributes_to_csv::app::services::attribute_selector::SelectionConfig;
//! use attributes_to_csv::app::services::record_converter::RecordConverter;
//!
//! # fn example() -> attributes_to_csv::Result<()> {
//! let config = SelectionConfig::default()
//!     .with_pattern("beach-.*")?
//!     .with_core_attributes_included(false)
//!     .with_schema(true);
//! let converter = RecordConverter::new(config);
//!
//! let attributes: AttributeMap = [("beach-name", "Malibu Beach")].into_iter().collect();
//! let record = converter.convert(FlowRecord::new(attributes, ""))?;
//!
//! assert_eq!(record.attribute("CSVData"), Some("Malibu Beach"));
//! assert_eq!(record.attribute("CSVSchema"), Some("beach-name"));
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod destination;
pub mod processor;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use assembler::{AssembledRow, assemble_row};
pub use destination::write_destination;
pub use processor::{RecordConverter, Route, RoutedRecord};
pub use stats::{ConversionResult, ConversionStats};
