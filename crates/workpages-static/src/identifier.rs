//! Project identifiers and filename-safety validation.

use std::fmt;
use std::str::FromStr;

/// Characters that are not allowed in a filename on at least one target filesystem.
const ILLEGAL_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*'];

/// Device names Windows reserves regardless of extension.
const RESERVED_STEMS: &[&str] = &[
    "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8",
    "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// The projects shipped with the site when no list is configured.
pub const DEFAULT_PROJECTS: &[&str] = &[
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
];

/// Errors from validating a project identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier contains a path separator")]
    PathSeparator,

    #[error("identifier contains '..'")]
    ParentTraversal,

    #[error("identifier contains illegal character {0:?}")]
    IllegalCharacter(char),

    #[error("identifier has leading or trailing whitespace")]
    SurroundingWhitespace,

    #[error("identifier ends with '.'")]
    TrailingDot,

    #[error("identifier {0:?} is a reserved device name")]
    ReservedName(String),
}

/// A short key naming one portfolio project.
///
/// Used verbatim as display text and as the output filename stem, so it is
/// guaranteed to be a single, non-empty path component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectIdentifier(String);

impl ProjectIdentifier {
    /// Validate and wrap an identifier.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
        let value = value.into();
        validate(&value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The uppercase form used in the document title.
    pub fn to_uppercase(&self) -> String {
        self.0.to_uppercase()
    }

    /// Key under which two identifiers name the same file on a
    /// case-insensitive filesystem.
    pub fn file_key(&self) -> String {
        self.0.to_lowercase()
    }

    /// Output filename for this project's page.
    pub fn file_name(&self) -> String {
        format!("{}.html", self.0)
    }
}

impl FromStr for ProjectIdentifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ProjectIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn validate(value: &str) -> Result<(), IdentifierError> {
    if value.is_empty() {
        return Err(IdentifierError::Empty);
    }

    if value.contains("..") {
        return Err(IdentifierError::ParentTraversal);
    }

    if value.trim() != value {
        return Err(IdentifierError::SurroundingWhitespace);
    }

    for c in value.chars() {
        if c == '/' || c == '\\' {
            return Err(IdentifierError::PathSeparator);
        }
        if c.is_control() || ILLEGAL_CHARS.contains(&c) {
            return Err(IdentifierError::IllegalCharacter(c));
        }
    }

    // Windows silently strips a trailing dot, so "a." and "a" would collide.
    if value.ends_with('.') {
        return Err(IdentifierError::TrailingDot);
    }

    let stem = value.split('.').next().unwrap_or(value).to_lowercase();
    if RESERVED_STEMS.contains(&stem.as_str()) {
        return Err(IdentifierError::ReservedName(value.to_string()));
    }

    Ok(())
}
