//! Initialize a site for work page generation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::load_config;

/// Run the init command.
///
/// The configured output directory is created under `base`.
pub fn run(config_path: &Path, base: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing workpages...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
    } else {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    }

    let config = load_config(config_path)?;
    let output = base.join(&config.site.output);
    if !output.exists() {
        fs::create_dir_all(&output)
            .with_context(|| format!("Failed to create {}", output.display()))?;
        tracing::info!("Created {}/", output.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'workpages build' to generate the work pages.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r##"# workpages configuration

[site]
# Site title shown after each project name in the page title
title = "Human Creative"

# Directory the pages are written to (must exist)
output = "work"

# Link prefix from the output directory back to the site root
root = "../"

# Logo image, relative to the site root
logo = "images/logo.png"

# Embed design tokens in each page instead of linking design_config.js
inline_tokens = false

[projects]
names = [
    "astonmartin",
    "underarmour",
    "bbcstories",
    "jaguartcs",
    "alainfc",
    "toughmudder",
    "nikewellfest",
    "azimuth",
    "laurynhill",
    "budgetcarrental",
    "myprotein",
    "vivobarefoot",
]

# Token overrides are merged over the built-in palette.
# [tokens.colors]
# primary = "#D2F865"
"##;
