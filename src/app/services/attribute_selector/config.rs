//! Selection configuration
//!
//! A `SelectionConfig` is built once from already-resolved strings and flags,
//! then shared across any number of conversions.

use crate::app::services::csv_codec::split_fields;
use crate::constants::{
    DEFAULT_CORE_ATTRIBUTES, DEFAULT_INCLUDE_CORE_ATTRIBUTES, DEFAULT_INCLUDE_SCHEMA,
    DEFAULT_NULL_VALUE,
};
use crate::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::strategy::SelectionStrategy;

/// Where the encoded CSV is delivered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Destination {
    /// Store lines as `CSVData` / `CSVSchema` attributes
    #[default]
    #[serde(alias = "flowfile-attribute")]
    NewField,
    /// Replace the record body and mark it as CSV
    #[serde(alias = "flowfile-content")]
    ReplaceBody,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::NewField => write!(f, "new-field"),
            Destination::ReplaceBody => write!(f, "replace-body"),
        }
    }
}

/// Compiled attribute-name pattern that only accepts whole-name matches
#[derive(Debug, Clone)]
pub struct SelectionPattern {
    source: String,
    regex: Regex,
}

impl SelectionPattern {
    /// Compile a pattern, anchoring it to the full attribute name
    ///
    /// The pattern must be valid on its own before it is wrapped, so that
    /// unbalanced groups such as `a)|(b` cannot close the anchoring group.
    pub fn new(pattern: &str) -> Result<Self> {
        Regex::new(pattern).map_err(|e| Error::invalid_selection_pattern(pattern, e))?;

        let regex = Regex::new(&format!("^(?:{})$", pattern))
            .map_err(|e| Error::invalid_selection_pattern(pattern, e))?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Whether the whole name matches the pattern
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// The pattern as configured, without anchors
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// Immutable configuration for one attribute-to-CSV conversion
#[derive(Debug, Clone)]
pub struct SelectionConfig {
    explicit_list: Option<Vec<String>>,
    pattern: Option<SelectionPattern>,
    include_core_attributes: bool,
    include_schema: bool,
    null_for_empty: bool,
    destination: Destination,
    core_attributes: Vec<String>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            explicit_list: None,
            pattern: None,
            include_core_attributes: DEFAULT_INCLUDE_CORE_ATTRIBUTES,
            include_schema: DEFAULT_INCLUDE_SCHEMA,
            null_for_empty: DEFAULT_NULL_VALUE,
            destination: Destination::default(),
            core_attributes: DEFAULT_CORE_ATTRIBUTES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl SelectionConfig {
    /// Set the explicit list from a comma-separated, optionally quoted string
    ///
    /// Empty tokens are dropped; a list with no remaining names counts as
    /// absent.
    pub fn with_attribute_list(self, list: &str) -> Self {
        self.with_explicit_list(split_fields(list))
    }

    /// Set the explicit list from already separated names
    pub fn with_explicit_list<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .filter(|name| !name.is_empty())
            .collect();

        self.explicit_list = if names.is_empty() { None } else { Some(names) };
        self
    }

    /// Set the attribute-name pattern; an empty pattern counts as absent
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.pattern = if pattern.is_empty() {
            None
        } else {
            Some(SelectionPattern::new(pattern)?)
        };
        Ok(self)
    }

    /// Enable or disable appending the core attributes
    pub fn with_core_attributes_included(mut self, include: bool) -> Self {
        self.include_core_attributes = include;
        self
    }

    /// Enable or disable the header line
    pub fn with_schema(mut self, include: bool) -> Self {
        self.include_schema = include;
        self
    }

    /// Substitute `null` instead of the empty string for missing attributes
    pub fn with_null_for_empty(mut self, null_for_empty: bool) -> Self {
        self.null_for_empty = null_for_empty;
        self
    }

    /// Set where the encoded CSV is delivered
    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    /// Replace the reserved core attribute names, keeping their order
    pub fn with_core_attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.core_attributes = names.into_iter().map(Into::into).collect();
        self
    }

    /// Explicitly listed attribute names
    pub fn explicit_list(&self) -> Option<&[String]> {
        self.explicit_list.as_deref()
    }

    /// Attribute-name pattern
    pub fn pattern(&self) -> Option<&SelectionPattern> {
        self.pattern.as_ref()
    }

    /// Whether core attributes are appended
    pub fn include_core_attributes(&self) -> bool {
        self.include_core_attributes
    }

    /// Whether a header line is produced
    pub fn include_schema(&self) -> bool {
        self.include_schema
    }

    /// Whether missing attributes become `null`
    pub fn null_for_empty(&self) -> bool {
        self.null_for_empty
    }

    /// Output destination
    pub fn destination(&self) -> Destination {
        self.destination
    }

    /// Reserved core attribute names in output order
    pub fn core_attributes(&self) -> &[String] {
        &self.core_attributes
    }

    /// Check whether a name is one of the reserved core attributes
    pub fn is_core_attribute(&self, name: &str) -> bool {
        self.core_attributes.iter().any(|core| core == name)
    }

    /// Strategies this configuration applies, in priority order
    pub fn strategies(&self) -> Vec<SelectionStrategy<'_>> {
        let mut strategies = Vec::with_capacity(3);

        if let Some(pattern) = &self.pattern {
            strategies.push(SelectionStrategy::Pattern(pattern));
        }

        if let Some(names) = &self.explicit_list {
            strategies.push(SelectionStrategy::Explicit(names));
        }

        if self.pattern.is_none() && self.explicit_list.is_none() {
            strategies.push(SelectionStrategy::AllAttributes {
                excluded: &self.core_attributes,
            });
        }

        if self.include_core_attributes {
            strategies.push(SelectionStrategy::CoreAttributes(&self.core_attributes));
        }

        strategies
    }
}
