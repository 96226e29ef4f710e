//! Work page generator.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use crate::identifier::{IdentifierError, ProjectIdentifier};
use crate::templates::{site_nav, NavLink, PageContext, TemplateEngine};
use crate::tokens::DesignTokens;

/// Configuration for generating work pages.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory the pages are written to; must already exist
    pub output_dir: PathBuf,

    /// Site title
    pub title: String,

    /// Prefix from the output directory back to the site root
    pub root: String,

    /// Logo image path relative to the site root
    pub logo: String,

    /// Embed the token script in every page instead of linking it
    pub inline_tokens: bool,

    /// Design tokens handed to the template
    pub tokens: DesignTokens,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("work"),
            title: "Human Creative".to_string(),
            root: "../".to_string(),
            logo: "images/logo.png".to_string(),
            inline_tokens: false,
            tokens: DesignTokens::default(),
        }
    }
}

/// Result of a generate run.
#[derive(Debug)]
pub struct GenerateResult {
    /// Paths written, in input order
    pub written: Vec<PathBuf>,

    /// Total run time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

impl GenerateResult {
    /// Number of pages written.
    pub fn pages(&self) -> usize {
        self.written.len()
    }
}

/// Errors that can occur while generating pages.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Invalid project identifier {identifier:?}: {source}")]
    InvalidIdentifier {
        identifier: String,
        #[source]
        source: IdentifierError,
    },

    #[error("Duplicate project identifier {0:?}")]
    DuplicateIdentifier(String),

    #[error("Failed to render template: {0}")]
    Template(String),

    #[error("Failed to write {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Validate a list of raw identifiers, rejecting unsafe names and duplicates.
///
/// Nothing is written by the generator unless the whole list passes.
pub fn parse_identifiers<S: AsRef<str>>(
    names: &[S],
) -> Result<Vec<ProjectIdentifier>, GenerateError> {
    let mut seen = HashSet::new();
    let mut ids = Vec::with_capacity(names.len());

    for name in names {
        let name = name.as_ref();
        let id = ProjectIdentifier::new(name).map_err(|source| {
            GenerateError::InvalidIdentifier {
                identifier: name.to_string(),
                source,
            }
        })?;

        // Names differing only by case share a file on macOS and Windows.
        if !seen.insert(id.file_key()) {
            return Err(GenerateError::DuplicateIdentifier(name.to_string()));
        }

        ids.push(id);
    }

    Ok(ids)
}

/// Work page generator.
pub struct PageGenerator {
    config: BuildConfig,
    templates: TemplateEngine,
    nav: Vec<NavLink>,
}

impl PageGenerator {
    /// Create a new page generator.
    pub fn new(config: BuildConfig) -> Result<Self, GenerateError> {
        let templates =
            TemplateEngine::new().map_err(|e| GenerateError::Template(e.to_string()))?;

        Ok(Self {
            config,
            templates,
            nav: site_nav(),
        })
    }

    /// Render and write one page per identifier.
    ///
    /// Existing files are overwritten in full; stale pages from earlier runs
    /// are left alone.
    pub fn generate<S: AsRef<str>>(&self, names: &[S]) -> Result<GenerateResult, GenerateError> {
        let start = Instant::now();

        let ids = parse_identifiers(names)?;

        if !self.config.output_dir.is_dir() {
            return Err(GenerateError::Filesystem {
                path: self.config.output_dir.clone(),
                source: io::Error::new(
                    io::ErrorKind::NotFound,
                    "output directory does not exist",
                ),
            });
        }

        let tokens_script = self
            .config
            .inline_tokens
            .then(|| self.config.tokens.to_script());

        let mut written = Vec::with_capacity(ids.len());

        for id in &ids {
            let html = self.render(id, tokens_script.as_deref())?;
            let path = self.config.output_dir.join(id.file_name());

            fs::write(&path, html).map_err(|source| GenerateError::Filesystem {
                path: path.clone(),
                source,
            })?;

            tracing::info!("Created {}", path.display());
            written.push(path);
        }

        let duration = start.elapsed();

        Ok(GenerateResult {
            written,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Render a single page without touching the filesystem.
    pub fn render(
        &self,
        id: &ProjectIdentifier,
        tokens_script: Option<&str>,
    ) -> Result<String, GenerateError> {
        let context = PageContext {
            title: id.as_str().to_string(),
            site_title: self.config.title.clone(),
            root: self.config.root.clone(),
            logo: self.config.logo.clone(),
            nav: self.nav.clone(),
            tokens_script: tokens_script.map(str::to_string),
        };

        self.templates
            .render_page(&context)
            .map_err(|e: minijinja::Error| GenerateError::Template(e.to_string()))
    }
}
