//! Design tokens shared by every page through the Tailwind CDN runtime.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::json;

/// File name of the token script, relative to the site root.
pub const TOKENS_SCRIPT: &str = "design_config.js";

/// Color, font and spacing values layered onto Tailwind's default theme.
///
/// Maps are ordered so the rendered script is byte-stable across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignTokens {
    /// Tailwind dark mode strategy
    pub dark_mode: String,

    /// Color name to CSS color
    pub colors: BTreeMap<String, String>,

    /// Font family name to font stack
    pub font_family: BTreeMap<String, Vec<String>>,

    /// Spacing key to CSS length
    pub spacing: BTreeMap<String, String>,
}

impl Default for DesignTokens {
    fn default() -> Self {
        let colors = [
            ("primary", "#D2F865"),
            ("background-light", "#F5F5F5"),
            ("background-dark", "#000000"),
            ("dark-surface", "#000000"),
        ];

        let fonts = [
            ("display", ["'Anton'", "sans-serif"]),
            ("sans", ["'Inter'", "sans-serif"]),
            ("mono", ["'Space Mono'", "monospace"]),
        ];

        Self {
            dark_mode: "class".to_string(),
            colors: colors
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            font_family: fonts
                .into_iter()
                .map(|(k, stack)| (k.to_string(), stack.map(String::from).to_vec()))
                .collect(),
            spacing: BTreeMap::from([("128".to_string(), "32rem".to_string())]),
        }
    }
}

impl DesignTokens {
    /// Render the Tailwind runtime configuration as a script body.
    pub fn to_script(&self) -> String {
        let config = json!({
            "darkMode": self.dark_mode,
            "theme": {
                "extend": {
                    "colors": self.colors,
                    "fontFamily": self.font_family,
                    "spacing": self.spacing,
                }
            }
        });

        let body = serde_json::to_string_pretty(&config)
            .expect("a JSON value with string keys always serializes");

        format!("tailwind.config = {};\n", body)
    }

    /// Write the token script into the site root, replacing any previous copy.
    pub fn write_script(&self, root: &Path) -> io::Result<PathBuf> {
        let path = root.join(TOKENS_SCRIPT);
        fs::write(&path, self.to_script())?;
        tracing::info!("Created {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn renders_tailwind_config() {
        let script = DesignTokens::default().to_script();

        let expected = r##"tailwind.config = {
  "darkMode": "class",
  "theme": {
    "extend": {
      "colors": {
        "background-dark": "#000000",
        "background-light": "#F5F5F5",
        "dark-surface": "#000000",
        "primary": "#D2F865"
      },
      "fontFamily": {
        "display": [
          "'Anton'",
          "sans-serif"
        ],
        "mono": [
          "'Space Mono'",
          "monospace"
        ],
        "sans": [
          "'Inter'",
          "sans-serif"
        ]
      },
      "spacing": {
        "128": "32rem"
      }
    }
  }
};
"##;

        assert_eq!(script, expected);
    }

    #[test]
    fn script_body_is_a_json_object() {
        let mut tokens = DesignTokens::default();
        tokens.colors.clear();
        tokens.spacing.clear();

        let script = tokens.to_script();
        let body = script
            .strip_prefix("tailwind.config = ")
            .and_then(|s| s.strip_suffix(";\n"))
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(value["darkMode"], "class");
        assert_eq!(value["theme"]["extend"]["colors"], json!({}));
        assert_eq!(value["theme"]["extend"]["fontFamily"]["sans"][0], "'Inter'");
    }

    #[test]
    fn script_is_deterministic() {
        let a = DesignTokens::default().to_script();
        let b = DesignTokens::default().to_script();
        assert_eq!(a, b);
    }

    #[test]
    fn overrides_show_up_in_script() {
        let mut tokens = DesignTokens::default();
        tokens
            .colors
            .insert("primary".to_string(), "#FF00FF".to_string());

        let script = tokens.to_script();
        assert!(script.contains(r##""primary": "#FF00FF""##));
        assert!(!script.contains("#D2F865"));
    }

    #[test]
    fn writes_script_to_root() {
        let temp = tempdir().unwrap();

        let path = DesignTokens::default().write_script(temp.path()).unwrap();

        assert_eq!(path, temp.path().join("design_config.js"));
        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("tailwind.config = {"));
    }
}
