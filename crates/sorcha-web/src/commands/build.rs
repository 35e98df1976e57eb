//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sorcha_web_static::SiteBuilder;

use crate::config::{config_dir, load_config};

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: bool) -> Result<()> {
    let config =
        load_config(config_path)?.into_build_config(config_dir(config_path), output, minify);

    let report = SiteBuilder::new(config).build().context("Build failed")?;

    tracing::info!(
        "Built {} pages with {} partials and {} assets in {}ms",
        report.pages.len(),
        report.partials.len(),
        report.assets.len(),
        report.duration_ms
    );

    tracing::info!("Output: {}", report.output_dir.display());
    tracing::info!("Run 'sorcha-web serve' to preview the site");

    Ok(())
}
