//! Configuration management and validation.
//!
//! Provides the converter configuration, loaded in layers: built-in
//! defaults, then an optional TOML file, then command-line overrides. Keys
//! use kebab-case; legacy destination names are accepted as aliases.

use crate::app::services::attribute_selector::{Destination, SelectionConfig};
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CORE_ATTRIBUTES, DEFAULT_INCLUDE_CORE_ATTRIBUTES,
    DEFAULT_INCLUDE_SCHEMA, DEFAULT_NULL_VALUE, MAX_WORKERS, default_workers,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Converter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ConverterConfig {
    /// Comma-separated, optionally quoted list of attribute names
    pub attribute_list: Option<String>,

    /// Regular expression matched against whole attribute names
    pub attribute_regex: Option<String>,

    /// Where the encoded CSV is delivered
    pub destination: Destination,

    /// Append the core identity attributes after selected ones
    pub include_core_attributes: bool,

    /// Produce a header line naming the selected attributes
    pub include_schema: bool,

    /// Emit `null` instead of an empty field for missing attributes
    #[serde(rename = "null-value")]
    pub null_for_empty: bool,

    /// Reserved core attribute names in output order
    pub core_attributes: Vec<String>,

    /// Number of parallel workers for batch conversion
    pub workers: usize,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            attribute_list: None,
            attribute_regex: None,
            destination: Destination::default(),
            include_core_attributes: DEFAULT_INCLUDE_CORE_ATTRIBUTES,
            include_schema: DEFAULT_INCLUDE_SCHEMA,
            null_for_empty: DEFAULT_NULL_VALUE,
            core_attributes: DEFAULT_CORE_ATTRIBUTES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            workers: default_workers(),
        }
    }
}

impl ConverterConfig {
    /// Default configuration file location (`<config dir>/attributes-to-csv/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::configuration("Could not determine user configuration directory")
        })?;

        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse configuration from TOML text, filling unspecified keys with defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ConverterConfig = toml::from_str(text)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;

        let config = Self::from_toml_str(&text)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load defaults, overlaid by the file when one is given
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Set the explicit attribute list
    pub fn with_attribute_list(mut self, list: impl Into<String>) -> Self {
        self.attribute_list = Some(list.into());
        self
    }

    /// Set the attribute-name pattern
    pub fn with_attribute_regex(mut self, pattern: impl Into<String>) -> Self {
        self.attribute_regex = Some(pattern.into());
        self
    }

    /// Set the output destination
    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    /// Set the worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Validate settings, compiling the pattern to surface syntax errors early
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::configuration(
                "Number of workers must be greater than 0",
            ));
        }

        if self.workers > MAX_WORKERS {
            return Err(Error::configuration(format!(
                "Number of workers cannot exceed {}",
                MAX_WORKERS
            )));
        }

        if let Some(name) = self.core_attributes.iter().find(|name| name.is_empty()) {
            return Err(Error::configuration(format!(
                "Core attribute names cannot be empty: {:?}",
                name
            )));
        }

        self.selection_config().map(|_| ())
    }

    /// Build the immutable selection configuration
    pub fn selection_config(&self) -> Result<SelectionConfig> {
        let mut config = SelectionConfig::default()
            .with_destination(self.destination)
            .with_core_attributes_included(self.include_core_attributes)
            .with_schema(self.include_schema)
            .with_null_for_empty(self.null_for_empty)
            .with_core_attributes(self.core_attributes.iter().cloned());

        if let Some(list) = &self.attribute_list {
            config = config.with_attribute_list(list);
        }

        if let Some(pattern) = &self.attribute_regex {
            config = config.with_pattern(pattern)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = ConverterConfig::default();

        assert!(config.validate().is_ok());
        assert!(config.include_core_attributes);
        assert!(!config.include_schema);
        assert!(!config.null_for_empty);
        assert_eq!(config.destination, Destination::NewField);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ConverterConfig::from_toml_str(
            r#"
            attribute-regex = "beach-.*"
            destination = "replace-body"
            include-schema = true
            "#,
        )
        .unwrap();

        assert_eq!(config.attribute_regex.as_deref(), Some("beach-.*"));
        assert_eq!(config.destination, Destination::ReplaceBody);
        assert!(config.include_schema);
        assert!(config.include_core_attributes);
        assert_eq!(config.core_attributes, vec!["path", "filename", "uuid"]);
    }

    #[test]
    fn test_legacy_destination_names() {
        let config = ConverterConfig::from_toml_str(
            r#"
            destination = "flowfile-content"
            null-value = true
            attribute-list = '"beach,name",uuid'
            "#,
        )
        .unwrap();

        assert_eq!(config.destination, Destination::ReplaceBody);
        assert!(config.null_for_empty);

        let selection = config.selection_config().unwrap();
        assert_eq!(
            selection.explicit_list().unwrap(),
            &["beach,name".to_string(), "uuid".to_string()]
        );
        assert!(selection.null_for_empty());
    }

    #[test]
    fn test_unknown_destination_rejected() {
        let result = ConverterConfig::from_toml_str(r#"destination = "somewhere""#);
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_invalid_regex_fails_validation() {
        let config = ConverterConfig::default().with_attribute_regex("[unclosed");

        let error = config.validate().unwrap_err();
        assert!(error.is_invalid_pattern());
    }

    #[test]
    fn test_worker_bounds() {
        assert!(ConverterConfig::default().with_workers(0).validate().is_err());
        assert!(
            ConverterConfig::default()
                .with_workers(MAX_WORKERS + 1)
                .validate()
                .is_err()
        );
        assert!(ConverterConfig::default().with_workers(1).validate().is_ok());
    }

    #[test]
    fn test_empty_core_attribute_rejected() {
        let mut config = ConverterConfig::default();
        config.core_attributes.push(String::new());

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "include-core-attributes = false").unwrap();
        writeln!(temp_file, "workers = 2").unwrap();

        let config = ConverterConfig::load_layered(Some(temp_file.path())).unwrap();

        assert!(!config.include_core_attributes);
        assert_eq!(config.workers, 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ConverterConfig::from_file(Path::new("/nonexistent/attributes-to-csv.toml"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_selection_config_mirrors_settings() {
        let config = ConverterConfig::default()
            .with_attribute_regex("beach-.*")
            .with_attribute_list("moreInfo1")
            .with_destination(Destination::ReplaceBody);

        let selection = config.selection_config().unwrap();

        assert_eq!(selection.pattern().unwrap().as_str(), "beach-.*");
        assert_eq!(selection.explicit_list().unwrap(), &["moreInfo1".to_string()]);
        assert_eq!(selection.destination(), Destination::ReplaceBody);
        assert!(selection.include_core_attributes());
    }
}
