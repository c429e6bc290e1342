//! Query engine for filtering the icon catalog.

use crate::IconRecord;

/// A search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Raw search text as typed.
    pub term: String,
    /// Browse the whole catalog when the term is blank.
    pub show_all: bool,
}

impl Query {
    pub fn new(term: impl Into<String>, show_all: bool) -> Self {
        Self {
            term: term.into(),
            show_all,
        }
    }

    /// `true` when the query yields nothing by definition.
    pub fn is_idle(&self) -> bool {
        self.term.trim().is_empty() && !self.show_all
    }
}

/// Query engine over a borrowed list of icon records.
///
/// Matching is an unranked, case-insensitive substring test on `name` and
/// `import_path`. Results keep catalog order.
pub struct QueryEngine<'a> {
    records: &'a [IconRecord],
}

impl<'a> QueryEngine<'a> {
    /// Create a new query engine.
    pub fn new(records: &'a [IconRecord]) -> Self {
        Self { records }
    }

    /// Execute a search query.
    pub fn search(&self, query: &Query) -> Vec<&'a IconRecord> {
        self.search_indices(query)
            .into_iter()
            .map(|idx| &self.records[idx])
            .collect()
    }

    /// Execute a search query, returning positions into the record list.
    pub fn search_indices(&self, query: &Query) -> Vec<usize> {
        if query.is_idle() {
            return Vec::new();
        }

        // Only the idle check trims; the needle is matched as typed.
        let needle = query.term.to_lowercase();

        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.matches(&needle))
            .map(|(idx, _)| idx)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<IconRecord> {
        vec![
            IconRecord::new("EC2", "aws.compute.EC2", "aws"),
            IconRecord::new("AKS", "azure.compute.AKS", "azure"),
        ]
    }

    #[test]
    fn test_query_engine() {
        let records = sample();
        let engine = QueryEngine::new(&records);

        let results = engine.search(&Query::new("ec", false));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "EC2");

        let results = engine.search(&Query::new("", true));
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["EC2", "AKS"]);
    }

    #[test]
    fn test_idle_query_returns_nothing() {
        let records = sample();
        let engine = QueryEngine::new(&records);

        assert!(engine.search(&Query::new("", false)).is_empty());
        assert!(engine.search(&Query::new("   ", false)).is_empty());
    }

    #[test]
    fn test_show_all_with_term_still_filters() {
        let records = sample();
        let engine = QueryEngine::new(&records);

        let results = engine.search(&Query::new("azure", true));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "AKS");
    }

    #[test]
    fn test_matches_import_path_only() {
        let records = sample();
        let engine = QueryEngine::new(&records);

        // "compute" appears in neither name, only in the import paths.
        let hits = engine.search_indices(&Query::new("COMPUTE", false));
        assert_eq!(hits, vec![0, 1]);
    }

    #[test]
    fn test_empty_catalog() {
        let engine = QueryEngine::new(&[]);
        assert!(engine.search(&Query::new("anything", true)).is_empty());
    }
}
