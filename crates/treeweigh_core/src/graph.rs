use std::collections::HashMap;

use log::trace;

/// Inverted dependency edges: module id -> ids of the modules importing it,
/// in the order the importers were recorded.
#[derive(Debug, Clone, Default)]
pub struct DependentsIndex {
    dependents: HashMap<String, Vec<String>>,
}

impl DependentsIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `importer` imports every id in `dependencies`.
    pub fn record<I>(&mut self, importer: &str, dependencies: I)
    where
        I: IntoIterator<Item = String>,
    {
        for dep in dependencies {
            trace!("Recording edge: {} -> {}", importer, dep);
            self.dependents.entry(dep).or_default().push(importer.to_string());
        }
    }

    pub fn dependents_of(&self, id: &str) -> &[String] {
        self.dependents.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct modules that have at least one importer
    pub fn len(&self) -> usize {
        self.dependents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_record_inverts_edges() {
        let mut index = DependentsIndex::new();
        index.record("index.js", deps(&["a.js", "b.js"]));
        index.record("a.js", deps(&["b.js"]));

        assert_eq!(index.dependents_of("a.js"), ["index.js"]);
        assert_eq!(index.dependents_of("b.js"), ["index.js", "a.js"]);
        assert!(index.dependents_of("index.js").is_empty());
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_insertion_order_follows_processing_order() {
        let mut index = DependentsIndex::new();
        index.record("z.js", deps(&["shared.js"]));
        index.record("a.js", deps(&["shared.js"]));
        index.record("m.js", deps(&["shared.js"]));

        assert_eq!(index.dependents_of("shared.js"), ["z.js", "a.js", "m.js"]);
    }

    #[test]
    fn test_circular_edges() {
        let mut index = DependentsIndex::new();
        index.record("a.js", deps(&["b.js"]));
        index.record("b.js", deps(&["a.js"]));

        assert_eq!(index.dependents_of("a.js"), ["b.js"]);
        assert_eq!(index.dependents_of("b.js"), ["a.js"]);
    }

    #[test]
    fn test_unknown_id_has_no_dependents() {
        let index = DependentsIndex::new();
        assert!(index.is_empty());
        assert!(index.dependents_of("missing.js").is_empty());
    }
}
