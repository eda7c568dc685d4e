use std::collections::HashMap;

use crate::config::MappingEntry;

/// Immutable extension dispatch table, built once at startup.
///
/// Maps a lowercase, dot-prefixed extension to the handler identifier that
/// serves it. Keys arrive pre-normalized from validated configuration; no
/// normalization happens at lookup time. Declaration order of the entries is
/// preserved and reported verbatim by the supported-extensions listing.
#[derive(Debug, Clone)]
pub struct ExtensionRegistry {
    by_extension: HashMap<String, String>,
    order: Vec<String>,
}

impl ExtensionRegistry {
    pub fn from_mappings(mappings: &[MappingEntry]) -> Self {
        let mut by_extension = HashMap::with_capacity(mappings.len());
        let mut order = Vec::with_capacity(mappings.len());

        for entry in mappings {
            if by_extension
                .insert(entry.extension.clone(), entry.handler.clone())
                .is_none()
            {
                order.push(entry.extension.clone());
            }
        }

        Self {
            by_extension,
            order,
        }
    }

    /// Handler identifier for a normalized extension, `None` when unsupported.
    /// Callers must lowercase the extension before lookup.
    pub fn lookup(&self, extension: &str) -> Option<&str> {
        self.by_extension.get(extension).map(String::as_str)
    }

    /// Supported extensions in configuration declaration order.
    pub fn extensions(&self) -> &[String] {
        &self.order
    }

    /// Distinct handler identifiers referenced by the table.
    pub fn handler_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.by_extension.values().map(String::as_str).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(extension: &str, handler: &str) -> MappingEntry {
        MappingEntry {
            extension: extension.to_string(),
            handler: handler.to_string(),
        }
    }

    #[test]
    fn test_lookup() {
        let registry = ExtensionRegistry::from_mappings(&[
            mapping(".txt", "text"),
            mapping(".csv", "csv"),
        ]);

        assert_eq!(registry.lookup(".txt"), Some("text"));
        assert_eq!(registry.lookup(".csv"), Some("csv"));
        assert_eq!(registry.lookup(".pdf"), None);
    }

    #[test]
    fn test_declaration_order_preserved() {
        let registry = ExtensionRegistry::from_mappings(&[
            mapping(".pdf", "pdf"),
            mapping(".csv", "csv"),
            mapping(".txt", "text"),
        ]);

        assert_eq!(registry.extensions(), &[".pdf", ".csv", ".txt"]);
    }

    #[test]
    fn test_each_extension_listed_once() {
        let registry = ExtensionRegistry::from_mappings(&[
            mapping(".txt", "text"),
            mapping(".md", "text"),
        ]);

        let listed = registry.extensions();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed.iter().filter(|e| *e == ".txt").count(), 1);
    }

    #[test]
    fn test_handler_ids_deduplicated() {
        let registry = ExtensionRegistry::from_mappings(&[
            mapping(".txt", "text"),
            mapping(".md", "text"),
            mapping(".csv", "csv"),
        ]);

        assert_eq!(registry.handler_ids(), vec!["csv", "text"]);
    }
}
