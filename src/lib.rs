//! Attributes to CSV Library
//!
//! A Rust library for turning selected attributes of flow records into a
//! single RFC 4180 CSV line, optionally preceded by a header line naming the
//! selected attributes.
//!
//! This library provides tools for:
//! - Splitting quoted, comma-separated attribute lists
//! - Selecting attributes by pattern, explicit list, or all non-core names
//! - Appending the core identity attributes (`path`, `filename`, `uuid`)
//! - Encoding values with necessary-only quoting
//! - Delivering the result as new attributes or as the record body
//! - Converting large batches in parallel with per-record routing

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod attribute_selector;
        pub mod csv_codec;
        pub mod record_converter;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AttributeMap, FlowRecord};
pub use app::services::attribute_selector::{Destination, SelectionConfig};
pub use app::services::record_converter::{ConversionResult, ConversionStats, RecordConverter};
pub use config::ConverterConfig;
pub use error::{Error, Result};
