//! Icon records and the fields derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One icon entry from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    /// Display label.
    pub name: String,
    /// Dotted `provider.category.ClassName` path.
    pub import_path: String,
    /// Free-text provider label.
    pub provider: String,
    /// Source file of the icon class, relative to the icon library.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// First line of the class docstring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docstring: Option<String>,
}

impl IconRecord {
    pub fn new(
        name: impl Into<String>,
        import_path: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            import_path: import_path.into(),
            provider: provider.into(),
            module: None,
            docstring: None,
        }
    }

    /// Final segment of the import path.
    pub fn class_name(&self) -> &str {
        split_import_path(&self.import_path).1
    }

    /// Everything before the final segment, or `""`.
    pub fn module_path(&self) -> &str {
        split_import_path(&self.import_path).0
    }

    /// Python import line for the icon class.
    pub fn import_statement(&self) -> String {
        let (module, class) = split_import_path(&self.import_path);
        if module.is_empty() {
            format!("import {class}")
        } else {
            format!("from {module} import {class}")
        }
    }

    pub fn provider_tag(&self) -> ProviderTag {
        ProviderTag::classify(&self.provider)
    }

    /// Case-insensitive substring test on name and import path.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.import_path.to_lowercase().contains(needle)
    }
}

/// Split an import path into `(module_path, class_name)`.
///
/// A path without a `.` is all class name.
pub fn split_import_path(path: &str) -> (&str, &str) {
    match path.rfind('.') {
        Some(idx) => (&path[..idx], &path[idx + 1..]),
        None => ("", path),
    }
}

/// Coarse provider classification used for colouring and grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderTag {
    Aws,
    Azure,
    Gcp,
    K8s,
    Alibaba,
    Other,
}

impl ProviderTag {
    // Scanned in order; the first hit wins.
    const KEYWORDS: &'static [(&'static str, ProviderTag)] = &[
        ("aws", ProviderTag::Aws),
        ("azure", ProviderTag::Azure),
        ("gcp", ProviderTag::Gcp),
        ("google", ProviderTag::Gcp),
        ("k8s", ProviderTag::K8s),
        ("kubernetes", ProviderTag::K8s),
        ("alibaba", ProviderTag::Alibaba),
    ];

    pub fn classify(provider: &str) -> Self {
        let provider = provider.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| provider.contains(keyword))
            .map(|(_, tag)| *tag)
            .unwrap_or(ProviderTag::Other)
    }

    pub fn label(self) -> &'static str {
        match self {
            ProviderTag::Aws => "aws",
            ProviderTag::Azure => "azure",
            ProviderTag::Gcp => "gcp",
            ProviderTag::K8s => "k8s",
            ProviderTag::Alibaba => "alibaba",
            ProviderTag::Other => "other",
        }
    }
}

impl fmt::Display for ProviderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
