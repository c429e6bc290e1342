//! Shared fixture catalog for icondex-index integration tests.
//!
//! Mirrors the shape of a real `icons.json`: several providers, mixed-case
//! names, and a couple of awkward import paths.

#![allow(dead_code)]

use icondex_index::{IconCatalog, IconRecord};

pub fn record(name: &str, import_path: &str, provider: &str) -> IconRecord {
    IconRecord::new(name, import_path, provider)
}

pub fn corpus() -> Vec<IconRecord> {
    vec![
        record("EC2", "diagrams.aws.compute.EC2", "aws"),
        record("Lambda", "diagrams.aws.compute.Lambda", "aws"),
        record("S3", "diagrams.aws.storage.S3", "aws"),
        record("AKS", "diagrams.azure.compute.AKS", "azure"),
        record("Functions", "diagrams.azure.compute.Functions", "azure"),
        record("GKE", "diagrams.gcp.compute.GKE", "gcp"),
        record("BigQuery", "diagrams.gcp.analytics.BigQuery", "gcp"),
        record("Pod", "diagrams.k8s.compute.Pod", "k8s"),
        record("ECS", "diagrams.alibabacloud.compute.ECS", "alibabacloud"),
        record("Nginx", "diagrams.onprem.network.Nginx", "onprem"),
        record("Custom", "Custom", "custom"),
    ]
}

pub fn corpus_catalog() -> IconCatalog {
    IconCatalog::from_records(corpus())
}

pub fn names<'a>(records: impl IntoIterator<Item = &'a IconRecord>) -> Vec<&'a str> {
    records.into_iter().map(|r| r.name.as_str()).collect()
}
