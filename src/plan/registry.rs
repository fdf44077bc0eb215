//! Bidirectional name↔index registry.

use std::collections::HashMap;

/// Maps intersection display names to indices and back.
///
/// Insertion order defines the index assignment `0..n`. The solver core
/// never sees names; this registry lives entirely at the boundary.
///
/// # Examples
///
/// ```
/// use roundtrip::plan::NameRegistry;
///
/// let mut registry = NameRegistry::new();
/// assert_eq!(registry.insert("Main"), Some(0));
/// assert_eq!(registry.insert("Elm"), Some(1));
/// assert_eq!(registry.insert("Main"), None); // duplicate
/// assert_eq!(registry.index_of("Elm"), Some(1));
/// assert_eq!(registry.name_of(0), Some("Main"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    names: Vec<String>,
    indices: HashMap<String, usize>,
}

impl NameRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a name, assigning it the next index.
    ///
    /// Returns the assigned index, or `None` if the name is already
    /// registered (indices are never reassigned).
    pub fn insert(&mut self, name: &str) -> Option<usize> {
        if self.indices.contains_key(name) {
            return None;
        }
        let index = self.names.len();
        self.names.push(name.to_string());
        self.indices.insert(name.to_string(), index);
        Some(index)
    }

    /// Looks up the index assigned to `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Looks up the name registered at `index`.
    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_defines_indices() {
        let mut registry = NameRegistry::new();
        assert_eq!(registry.insert("C"), Some(0));
        assert_eq!(registry.insert("A"), Some(1));
        assert_eq!(registry.insert("B"), Some(2));
        assert_eq!(registry.index_of("A"), Some(1));
        assert_eq!(registry.name_of(2), Some("B"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut registry = NameRegistry::new();
        assert_eq!(registry.insert("X"), Some(0));
        assert_eq!(registry.insert("X"), None);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.index_of("X"), Some(0));
    }

    #[test]
    fn test_unknown_lookups() {
        let registry = NameRegistry::new();
        assert_eq!(registry.index_of("nowhere"), None);
        assert_eq!(registry.name_of(0), None);
        assert!(registry.is_empty());
    }
}
