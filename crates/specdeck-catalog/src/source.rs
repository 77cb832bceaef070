//! Documentation sources: named pointers to API descriptions.

use serde::{Deserialize, Serialize};

/// A named pointer to a machine-readable API description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocSource {
    /// Display label, unique within a catalog
    pub name: String,

    /// Location of the API description document
    pub url: String,
}

impl DocSource {
    /// Create a new documentation source.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// The sources a fresh deployment starts with.
///
/// These are the documented services of the current platform build, in the
/// order they appear in the selector.
pub fn builtin_sources() -> Vec<DocSource> {
    vec![
        DocSource::new(
            "Main Service",
            "https://dev.retrades.trade/api/main/v1/api-docs",
        ),
        DocSource::new(
            "Feedback Notification",
            "https://dev.retrades.trade/api/feedback-notification/v1/api-docs",
        ),
        DocSource::new(
            "Storage Service",
            "https://dev.retrades.trade/api/storage/v1/api-docs",
        ),
        DocSource::new(
            "Voucher Service",
            "https://dev.retrades.trade/api/voucher/v1/api-docs",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sources_are_ordered() {
        let sources = builtin_sources();

        assert_eq!(sources.len(), 4);
        assert_eq!(sources[0].name, "Main Service");
        assert_eq!(sources[3].name, "Voucher Service");
    }

    #[test]
    fn deserializes_from_toml() {
        let source: DocSource = toml::from_str(
            r#"
name = "Main Service"
url = "https://example.com/api-docs"
"#,
        )
        .unwrap();

        assert_eq!(source.name, "Main Service");
        assert_eq!(source.url, "https://example.com/api-docs");
    }
}
