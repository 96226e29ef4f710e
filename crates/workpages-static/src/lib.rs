//! Work detail page generator for the Human Creative site.
//!
//! Stamps out one static HTML page per portfolio project and renders the
//! shared design-token script those pages load.

pub mod builder;
pub mod identifier;
pub mod templates;
pub mod tokens;

pub use builder::{parse_identifiers, BuildConfig, GenerateError, GenerateResult, PageGenerator};
pub use identifier::{IdentifierError, ProjectIdentifier, DEFAULT_PROJECTS};
pub use tokens::{DesignTokens, TOKENS_SCRIPT};
