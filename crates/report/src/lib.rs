//! Batch report over a catalog source: configuration, loading and rendering.

pub mod config;

use chrono::{DateTime, Utc};
use serde::Serialize;

use biblio_catalog::{Catalog, CatalogReport};

pub use config::ReportConfig;

/// Report as written to stdout.
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    #[serde(flatten)]
    pub report: CatalogReport,
}

/// Load the configured source and build its report.
pub fn build_report(config: &ReportConfig) -> anyhow::Result<ReportDocument> {
    use anyhow::Context as _;

    let catalog = Catalog::from_csv_path(&config.catalog_path, &config.load)
        .with_context(|| format!("failed to load catalog from {}", config.catalog_path.display()))?;

    Ok(ReportDocument {
        generated_at: Utc::now(),
        source: config.catalog_path.display().to_string(),
        report: catalog.report(),
    })
}

/// Render a report as pretty-printed JSON.
pub fn render(document: &ReportDocument) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}
