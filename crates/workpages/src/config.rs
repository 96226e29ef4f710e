//! Configuration file structure (workpages.toml).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use workpages_static::{BuildConfig, DesignTokens, DEFAULT_PROJECTS};

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub projects: ProjectsConfig,
    #[serde(default)]
    pub tokens: TokensConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub output: String,
    pub root: String,
    pub logo: String,
    pub inline_tokens: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let build = BuildConfig::default();
        Self {
            title: build.title,
            output: build.output_dir.to_string_lossy().into_owned(),
            root: build.root,
            logo: build.logo,
            inline_tokens: build.inline_tokens,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct ProjectsConfig {
    /// Project identifiers; the built-in list is used when absent
    pub names: Option<Vec<String>>,
}

/// Token overrides, merged entry by entry over the defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct TokensConfig {
    pub dark_mode: Option<String>,
    pub colors: BTreeMap<String, String>,
    pub font_family: BTreeMap<String, Vec<String>>,
    pub spacing: BTreeMap<String, String>,
}

impl ConfigFile {
    /// Project identifiers to generate, as configured.
    pub fn project_names(&self) -> Vec<String> {
        match &self.projects.names {
            Some(names) => names.clone(),
            None => DEFAULT_PROJECTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Default tokens with the configured overrides applied.
    pub fn design_tokens(&self) -> DesignTokens {
        let mut tokens = DesignTokens::default();
        let overrides = &self.tokens;

        if let Some(mode) = &overrides.dark_mode {
            tokens.dark_mode = mode.clone();
        }
        tokens.colors.extend(overrides.colors.clone());
        tokens.font_family.extend(overrides.font_family.clone());
        tokens.spacing.extend(overrides.spacing.clone());

        tokens
    }

    /// Build settings, with command-line overrides taking precedence.
    pub fn build_config(&self, output: Option<PathBuf>, inline_tokens: bool) -> BuildConfig {
        BuildConfig {
            output_dir: output.unwrap_or_else(|| PathBuf::from(&self.site.output)),
            title: self.site.title.clone(),
            root: self.site.root.clone(),
            logo: self.site.logo.clone(),
            inline_tokens: inline_tokens || self.site.inline_tokens,
            tokens: self.design_tokens(),
        }
    }
}

/// Load configuration if the file exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    tracing::debug!("No config at {}, using defaults", path.display());
    Ok(ConfigFile::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("workpages.toml")).unwrap();

        assert_eq!(config.project_names().len(), 12);
        assert_eq!(config.project_names()[0], "astonmartin");
        let build = config.build_config(None, false);
        assert_eq!(build.output_dir, PathBuf::from("work"));
        assert_eq!(build.title, "Human Creative");
        assert_eq!(build.root, "../");
        assert_eq!(build.tokens, DesignTokens::default());
    }

    #[test]
    fn parses_full_config() {
        let config: ConfigFile = toml::from_str(
            r##"
[site]
title = "Studio"
output = "public/work"
logo = "img/mark.svg"
inline_tokens = true

[projects]
names = ["alpha", "beta"]

[tokens]
dark_mode = "media"

[tokens.colors]
primary = "#FF0000"
accent = "#00FF00"
"##,
        )
        .unwrap();

        assert_eq!(config.project_names(), vec!["alpha", "beta"]);

        let build = config.build_config(None, false);
        assert_eq!(build.title, "Studio");
        assert_eq!(build.output_dir, PathBuf::from("public/work"));
        assert_eq!(build.root, "../");
        assert_eq!(build.logo, "img/mark.svg");
        assert!(build.inline_tokens);

        let tokens = build.tokens;
        assert_eq!(tokens.dark_mode, "media");
        assert_eq!(tokens.colors["primary"], "#FF0000");
        assert_eq!(tokens.colors["accent"], "#00FF00");
        assert_eq!(tokens.colors["background-light"], "#F5F5F5");
        assert_eq!(tokens.spacing["128"], "32rem");
    }

    #[test]
    fn cli_output_overrides_config() {
        let config = ConfigFile::default();

        let build = config.build_config(Some(PathBuf::from("dist/work")), true);

        assert_eq!(build.output_dir, PathBuf::from("dist/work"));
        assert!(build.inline_tokens);
    }

    #[test]
    fn empty_project_list_is_respected() {
        let config: ConfigFile = toml::from_str("[projects]\nnames = []\n").unwrap();

        assert!(config.project_names().is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("workpages.toml");
        fs::write(&path, "[site\ntitle = ").unwrap();

        assert!(load_config(&path).is_err());
    }
}
