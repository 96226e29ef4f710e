//! Work page build command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use workpages_static::PageGenerator;

use crate::config::load_config;

/// Run the build command.
pub fn run(config_path: &Path, output: Option<PathBuf>, inline_tokens: bool) -> Result<()> {
    tracing::info!("Generating work pages...");

    let file_config = load_config(config_path)?;
    let names = file_config.project_names();
    let config = file_config.build_config(output, inline_tokens);

    let generator = PageGenerator::new(config)?;
    let result = generator
        .generate(&names)
        .context("Failed to generate work pages")?;

    tracing::info!(
        "Generated {} pages in {}ms",
        result.pages(),
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
