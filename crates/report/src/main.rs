use biblio_report::{ReportConfig, build_report, render};

fn main() -> anyhow::Result<()> {
    biblio_observability::init();

    let config = ReportConfig::from_env()?;
    tracing::info!(path = %config.catalog_path.display(), "building catalog report");

    let document = build_report(&config)?;
    println!("{}", render(&document)?);
    Ok(())
}
