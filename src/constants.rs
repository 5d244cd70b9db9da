//! Application constants for attribute-to-CSV conversion
//!
//! This module contains output attribute names, the reserved core attribute
//! list, configuration defaults and property names used throughout the crate.

// =============================================================================
// Output Attributes
// =============================================================================

/// Attribute that receives the encoded data line in new-field mode
pub const CSV_DATA_ATTRIBUTE: &str = "CSVData";

/// Attribute that receives the encoded header line in new-field mode
pub const CSV_SCHEMA_ATTRIBUTE: &str = "CSVSchema";

/// Attribute holding the content-type marker of a record body
pub const MIME_TYPE_ATTRIBUTE: &str = "mime.type";

/// Media type assigned to a record body replaced with CSV
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Substitute emitted for a selected attribute that is absent, when enabled
pub const NULL_VALUE: &str = "null";

/// Record separator placed between header and data lines in a replaced body
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";

/// Record separator placed between header and data lines in a replaced body
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

// =============================================================================
// Core Attributes
// =============================================================================

/// Identity attributes every record carries, in their fixed output order
pub mod core_attributes {
    /// Location of the record's origin
    pub const PATH: &str = "path";

    /// Name of the record's content
    pub const FILENAME: &str = "filename";

    /// Unique record identifier
    pub const UUID: &str = "uuid";

    /// Default path assigned to records created without one
    pub const DEFAULT_PATH: &str = "./";

    /// All core attribute names in output order
    pub const ALL: &[&str] = &[PATH, FILENAME, UUID];
}

/// Core attribute names used when the configuration does not override them
pub const DEFAULT_CORE_ATTRIBUTES: &[&str] = core_attributes::ALL;

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Core attributes are appended unless disabled
pub const DEFAULT_INCLUDE_CORE_ATTRIBUTES: bool = true;

/// Header line is not produced unless enabled
pub const DEFAULT_INCLUDE_SCHEMA: bool = false;

/// Missing values become empty strings unless enabled
pub const DEFAULT_NULL_VALUE: bool = false;

/// Upper bound accepted for batch workers
pub const MAX_WORKERS: usize = 256;

/// Minimum batch size before work is split across workers
pub const MIN_RECORDS_PER_WORKER: usize = 64;

/// Directory name under the user config directory
pub const CONFIG_DIR_NAME: &str = "attributes-to-csv";

/// Configuration file name looked up in the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default number of parallel workers for batch conversion
pub fn default_workers() -> usize {
    num_cpus::get().clamp(1, MAX_WORKERS)
}
