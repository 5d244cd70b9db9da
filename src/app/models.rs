//! Data models for attribute conversion
//!
//! This module contains the ordered attribute map and the record type the
//! converter reads from and writes to. Attribute order is significant: it
//! drives the column order of default and pattern-based selections.

use crate::constants::core_attributes;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Attribute Map
// =============================================================================

/// Insertion-ordered mapping from attribute name to value
///
/// Names are unique. Inserting an existing name replaces its value without
/// moving it, so iteration order always reflects first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl AttributeMap {
    /// Create an empty attribute map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute, returning the previous value if any
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();

        match self.index.get(&name) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, value)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Look up an attribute value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&position| self.entries[position].1.as_str())
    }

    /// Check whether an attribute is present
    pub fn contains_key(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no attributes
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Iterate over attribute names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AttributeMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttributeMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttributeMapVisitor;

        impl<'de> Visitor<'de> for AttributeMapVisitor {
            type Value = AttributeMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of string attribute names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<AttributeMap, A::Error> {
                let mut map = AttributeMap::new();
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    map.insert(name, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(AttributeMapVisitor)
    }
}

// =============================================================================
// Flow Record
// =============================================================================

/// A unit of data carrying an attribute map and a text body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowRecord {
    /// Named string attributes in insertion order
    #[serde(default)]
    pub attributes: AttributeMap,

    /// Record body
    #[serde(default)]
    pub content: String,
}

impl FlowRecord {
    /// Create a record, assigning any missing core identity attributes
    pub fn new(attributes: AttributeMap, content: impl Into<String>) -> Self {
        let mut record = Self::from_parts(attributes, content);
        record.ensure_core_attributes();
        record
    }

    /// Create a record exactly as given, without identity attributes
    pub fn from_parts(attributes: AttributeMap, content: impl Into<String>) -> Self {
        Self {
            attributes,
            content: content.into(),
        }
    }

    /// Assign `uuid`, `filename` and `path` when the record lacks them
    ///
    /// A fresh record gets a v4 UUID, the same UUID as its filename and the
    /// current directory as its path. Existing values are never replaced.
    pub fn ensure_core_attributes(&mut self) {
        let uuid = match self.attributes.get(core_attributes::UUID) {
            Some(existing) => existing.to_string(),
            None => {
                let generated = uuid::Uuid::new_v4().to_string();
                self.attributes
                    .insert(core_attributes::UUID, generated.clone());
                generated
            }
        };

        if !self.attributes.contains_key(core_attributes::FILENAME) {
            self.attributes.insert(core_attributes::FILENAME, uuid);
        }

        if !self.attributes.contains_key(core_attributes::PATH) {
            self.attributes
                .insert(core_attributes::PATH, core_attributes::DEFAULT_PATH);
        }
    }

    /// Look up an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }
}
