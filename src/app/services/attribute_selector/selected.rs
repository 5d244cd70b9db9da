//! Ordered, duplicate-free attribute name set

use std::collections::HashSet;

/// Attribute names chosen for one conversion, in output order
///
/// Backed by a sequence for order and a hash set for O(1) membership, so a
/// name pushed a second time keeps its first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedNames {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl SelectedNames {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a name unless already selected
    ///
    /// # Returns
    ///
    /// True if the name was added
    pub fn push(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }

        self.seen.insert(name.to_string());
        self.names.push(name.to_string());
        true
    }

    /// Whether a name is already selected
    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// Number of selected names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing was selected
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over names in output order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Names in output order
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Consume the selection, returning names in output order
    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

impl<'a> FromIterator<&'a str> for SelectedNames {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut selected = SelectedNames::new();
        for name in iter {
            selected.push(name);
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_skips_duplicates() {
        let mut selected = SelectedNames::new();

        assert!(selected.push("b"));
        assert!(selected.push("a"));
        assert!(!selected.push("b"));

        assert_eq!(selected.as_slice(), &["b".to_string(), "a".to_string()]);
        assert!(selected.contains("a"));
        assert!(!selected.contains("c"));
    }

    #[test]
    fn test_from_iterator() {
        let selected: SelectedNames = ["x", "y", "x", "z"].into_iter().collect();
        assert_eq!(selected.into_vec(), vec!["x", "y", "z"]);
    }
}
