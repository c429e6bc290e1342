//! Loading the icon catalog produced by the extraction script.

use crate::IconRecord;
use icondex_core::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// On-disk shape of a record. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    name: String,
    import_path: String,
    provider: String,
    #[serde(default)]
    module: Option<String>,
    #[serde(default)]
    docstring: Option<String>,
    #[serde(default)]
    aliases: Option<Vec<String>>,
}

impl RawRecord {
    fn has_aliases(&self) -> bool {
        self.aliases.as_ref().is_some_and(|a| !a.is_empty())
    }

    fn into_record(self) -> IconRecord {
        IconRecord {
            name: self.name,
            import_path: self.import_path,
            provider: self.provider,
            module: non_blank(self.module),
            docstring: non_blank(self.docstring),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Read-only list of icon records.
#[derive(Debug, Clone, Default)]
pub struct IconCatalog {
    records: Vec<IconRecord>,
}

impl IconCatalog {
    pub fn from_records(records: Vec<IconRecord>) -> Self {
        Self { records }
    }

    /// Load the catalog a binary was pointed at. A missing file is reported
    /// with the path and how to supply one.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::CatalogNotFound(path.to_path_buf()));
        }
        Self::load(path)
    }

    /// Load a catalog from a JSON array file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)
            .map_err(|e| Error::Catalog(format!("{}: {e}", path.display())))?;

        info!(
            path = %path.display(),
            records = catalog.len(),
            "loaded icon catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: Vec<RawRecord> =
            serde_json::from_str(content).map_err(|e| Error::Catalog(e.to_string()))?;

        let with_aliases = raw.iter().filter(|r| r.has_aliases()).count();
        if with_aliases > 0 {
            debug!(with_aliases, "ignoring alias fields");
        }

        let records = raw
            .into_iter()
            .filter(|r| !r.name.trim().is_empty())
            .map(RawRecord::into_record)
            .collect();

        Ok(Self { records })
    }

    pub fn records(&self) -> &[IconRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact lookup by import path.
    pub fn find(&self, import_path: &str) -> Option<&IconRecord> {
        self.records.iter().find(|r| r.import_path == import_path)
    }

    /// Number of records per provider label, sorted by label.
    pub fn provider_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.provider.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"[
      {"name": "EC2", "import_path": "diagrams.aws.compute.EC2", "docstring": "",
       "provider": "aws", "module": "aws/compute.py", "aliases": []},
      {"name": "AKS", "import_path": "diagrams.azure.compute.AKS",
       "docstring": "Kubernetes service", "provider": "azure",
       "module": "azure/compute.py", "aliases": ["KubernetesServices"]},
      {"name": "Pod", "import_path": "diagrams.k8s.compute.Pod", "provider": "k8s"}
    ]"#;

    #[test]
    fn parses_generator_output() {
        let catalog = IconCatalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 3);

        let ec2 = catalog.find("diagrams.aws.compute.EC2").unwrap();
        assert_eq!(ec2.docstring, None);
        assert_eq!(ec2.module.as_deref(), Some("aws/compute.py"));

        let aks = catalog.find("diagrams.azure.compute.AKS").unwrap();
        assert_eq!(aks.docstring.as_deref(), Some("Kubernetes service"));

        let pod = catalog.find("diagrams.k8s.compute.Pod").unwrap();
        assert_eq!(pod.module, None);
    }

    #[test]
    fn provider_counts_are_sorted() {
        let catalog = IconCatalog::from_json(SAMPLE).unwrap();
        let counts: Vec<(&str, usize)> = catalog.provider_counts().into_iter().collect();
        assert_eq!(counts, vec![("aws", 1), ("azure", 1), ("k8s", 1)]);
    }

    #[test]
    fn malformed_json_is_catalog_error() {
        let err = IconCatalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));
    }

    #[test]
    fn load_reads_file_and_reports_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("icons.json");
        std::fs::write(&path, SAMPLE).unwrap();
        assert_eq!(IconCatalog::load(&path).unwrap().len(), 3);

        let missing = IconCatalog::load(&temp.path().join("absent.json"));
        assert!(matches!(missing, Err(Error::Io(_))));
    }

    #[test]
    fn open_names_missing_catalog() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("icons.json");

        let err = IconCatalog::open(&path).unwrap_err();
        assert!(matches!(err, Error::CatalogNotFound(ref p) if p == &path));
        let message = err.to_string();
        assert!(message.contains("catalog not found"));
        assert!(message.contains("--catalog"));

        std::fs::write(&path, SAMPLE).unwrap();
        assert_eq!(IconCatalog::open(&path).unwrap().len(), 3);
    }

    #[test]
    fn blank_names_are_dropped() {
        let json = r#"[{"name": " ", "import_path": "x.Y", "provider": "x"}]"#;
        let catalog = IconCatalog::from_json(json).unwrap();
        assert!(catalog.is_empty());
    }
}
