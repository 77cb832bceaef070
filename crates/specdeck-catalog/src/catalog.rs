//! Ordered catalog of documentation sources.

use std::collections::HashSet;

use crate::source::{builtin_sources, DocSource};

/// Errors that can occur when constructing a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog must contain at least one source")]
    Empty,

    #[error("Duplicate source name: {0}")]
    DuplicateName(String),

    #[error("Duplicate source url: {0}")]
    DuplicateUrl(String),

    #[error("Source {index} has an empty name")]
    MissingName { index: usize },

    #[error("Source '{name}' has an empty url")]
    MissingUrl { name: String },
}

/// A fixed, ordered list of documentation sources.
///
/// Construction validates the list, so a selected url always resolves to
/// exactly one entry: names and urls are unique and non-empty, and the
/// catalog is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    sources: Vec<DocSource>,
}

impl Catalog {
    /// Create a catalog from a list of sources, preserving order.
    pub fn new(sources: Vec<DocSource>) -> Result<Self, CatalogError> {
        if sources.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut names = HashSet::new();
        let mut urls = HashSet::new();

        for (index, source) in sources.iter().enumerate() {
            if source.name.trim().is_empty() {
                return Err(CatalogError::MissingName { index });
            }
            if source.url.trim().is_empty() {
                return Err(CatalogError::MissingUrl {
                    name: source.name.clone(),
                });
            }
            if !names.insert(source.name.as_str()) {
                return Err(CatalogError::DuplicateName(source.name.clone()));
            }
            if !urls.insert(source.url.as_str()) {
                return Err(CatalogError::DuplicateUrl(source.url.clone()));
            }
        }

        Ok(Self { sources })
    }

    /// The catalog of built-in sources.
    pub fn builtin() -> Self {
        Self::new(builtin_sources()).expect("built-in sources are valid")
    }

    /// The source shown before the user selects anything.
    pub fn primary(&self) -> &DocSource {
        &self.sources[0]
    }

    /// Look up a source by its display name.
    pub fn find(&self, name: &str) -> Option<&DocSource> {
        self.sources.iter().find(|source| source.name == name)
    }

    /// Resolve a selection request against the catalog.
    ///
    /// Absent or unknown names fall back to the primary source, so the
    /// result always points at exactly one entry.
    pub fn select(&self, name: Option<&str>) -> &DocSource {
        name.and_then(|name| self.find(name))
            .unwrap_or_else(|| self.primary())
    }

    /// The sources in display order.
    pub fn sources(&self) -> &[DocSource] {
        &self.sources
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the catalog has no sources. Always false for a constructed
    /// catalog.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Iterate over the sources in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, DocSource> {
        self.sources.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            DocSource::new("Main Service", "https://example.com/main"),
            DocSource::new("Storage Service", "https://example.com/storage"),
        ])
        .unwrap()
    }

    #[test]
    fn primary_is_first_source() {
        let catalog = sample();

        assert_eq!(catalog.primary().name, "Main Service");
        assert_eq!(catalog.primary().url, "https://example.com/main");
    }

    #[test]
    fn finds_source_by_name() {
        let catalog = sample();

        let found = catalog.find("Storage Service").unwrap();
        assert_eq!(found.url, "https://example.com/storage");

        assert!(catalog.find("Unknown Service").is_none());
    }

    #[test]
    fn select_resolves_to_exactly_one_entry() {
        let catalog = sample();

        assert_eq!(catalog.select(None).url, "https://example.com/main");
        assert_eq!(
            catalog.select(Some("Storage Service")).url,
            "https://example.com/storage"
        );
        assert_eq!(
            catalog.select(Some("Unknown Service")).url,
            "https://example.com/main"
        );
    }

    #[test]
    fn rejects_empty_catalog() {
        let result = Catalog::new(vec![]);

        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = Catalog::new(vec![
            DocSource::new("Main Service", "https://example.com/a"),
            DocSource::new("Main Service", "https://example.com/b"),
        ]);

        assert!(matches!(result, Err(CatalogError::DuplicateName(_))));
    }

    #[test]
    fn rejects_duplicate_urls() {
        let result = Catalog::new(vec![
            DocSource::new("Main Service", "https://example.com/shared"),
            DocSource::new("Storage Service", "https://example.com/shared"),
        ]);

        assert!(matches!(result, Err(CatalogError::DuplicateUrl(_))));
    }

    #[test]
    fn rejects_blank_fields() {
        let no_name = Catalog::new(vec![DocSource::new("  ", "https://example.com/a")]);
        assert!(matches!(
            no_name,
            Err(CatalogError::MissingName { index: 0 })
        ));

        let no_url = Catalog::new(vec![DocSource::new("Main Service", "")]);
        assert!(matches!(no_url, Err(CatalogError::MissingUrl { .. })));
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.primary().name, "Main Service");
    }
}
