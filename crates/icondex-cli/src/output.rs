//! Text and JSON rendering for CLI results.

use icondex_index::{IconCatalog, IconRecord, ProviderTag};
use owo_colors::OwoColorize;
use serde::Serialize;

/// A search hit with its derived fields, as emitted by `--format json`.
#[derive(Debug, Serialize)]
struct Hit<'a> {
    name: &'a str,
    import_path: &'a str,
    provider: &'a str,
    provider_tag: ProviderTag,
    class_name: &'a str,
    module_path: &'a str,
    import_statement: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    module: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    docstring: Option<&'a str>,
}

impl<'a> From<&'a IconRecord> for Hit<'a> {
    fn from(record: &'a IconRecord) -> Self {
        Self {
            name: &record.name,
            import_path: &record.import_path,
            provider: &record.provider,
            provider_tag: record.provider_tag(),
            class_name: record.class_name(),
            module_path: record.module_path(),
            import_statement: record.import_statement(),
            module: record.module.as_deref(),
            docstring: record.docstring.as_deref(),
        }
    }
}

pub fn json(results: &[&IconRecord]) -> serde_json::Result<String> {
    let hits: Vec<Hit> = results.iter().map(|r| Hit::from(*r)).collect();
    serde_json::to_string_pretty(&hits)
}

pub fn plain(results: &[&IconRecord]) -> String {
    let mut out = String::new();
    for record in results {
        out.push_str(&format!("{}\n", record.import_statement()));
    }
    out
}

pub fn table(results: &[&IconRecord], color: bool) -> String {
    let header = format!("{:<28} {:<9} IMPORT", "CLASS", "PROVIDER");
    let mut out = heading(&header, color);

    for record in results {
        let class = format!("{:<28}", record.class_name());
        let tag = tag_cell(record.provider_tag(), color);
        out.push_str(&format!("{class} {tag} {}\n", record.import_statement()));
    }

    out.push_str(&format!("\n{} result(s)\n", results.len()));
    out
}

pub fn stats(catalog: &IconCatalog, color: bool) -> String {
    let mut out = heading(&format!("{} icons", catalog.len()), color);

    out.push_str("\nBy provider:\n");
    for (provider, count) in catalog.provider_counts() {
        let tag = tag_cell(ProviderTag::classify(provider), color);
        out.push_str(&format!("  {provider:<16} {count:>6}  {tag}\n"));
    }
    out
}

pub fn show(record: &IconRecord, color: bool) -> String {
    let mut out = heading(record.class_name(), color);

    out.push_str(&format!("  name       {}\n", record.name));
    let tag = tag_cell(record.provider_tag(), color);
    out.push_str(&format!("  provider   {} {tag}\n", record.provider));
    out.push_str(&format!("  path       {}\n", record.import_path));
    out.push_str(&format!("  import     {}\n", record.import_statement()));
    if let Some(module) = &record.module {
        out.push_str(&format!("  module     {module}\n"));
    }
    if let Some(doc) = &record.docstring {
        out.push_str(&format!("  doc        {doc}\n"));
    }
    out
}

/// A bold line when colour is on.
fn heading(text: &str, color: bool) -> String {
    if color {
        format!("{}\n", text.bold())
    } else {
        format!("{text}\n")
    }
}

/// `[aws]` padded to a fixed width, coloured per provider.
fn tag_cell(tag: ProviderTag, color: bool) -> String {
    let cell = format!("{:<9}", format!("[{tag}]"));
    if !color {
        return cell;
    }

    match tag {
        ProviderTag::Aws => cell.yellow().to_string(),
        ProviderTag::Azure => cell.blue().to_string(),
        ProviderTag::Gcp => cell.red().to_string(),
        ProviderTag::K8s => cell.bright_blue().to_string(),
        ProviderTag::Alibaba => cell.bright_red().to_string(),
        ProviderTag::Other => cell.dimmed().to_string(),
    }
}
