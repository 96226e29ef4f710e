//! Write the shared design-token script.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::load_config;

/// Run the tokens command.
pub fn run(config_path: &Path, root: &Path) -> Result<()> {
    let config = load_config(config_path)?;

    config
        .design_tokens()
        .write_script(root)
        .with_context(|| format!("Failed to write token script to {}", root.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn writes_configured_tokens() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("workpages.toml");
        fs::write(&config_path, "[tokens.spacing]\n\"144\" = \"36rem\"\n").unwrap();

        run(&config_path, temp.path()).unwrap();

        let script = fs::read_to_string(temp.path().join("design_config.js")).unwrap();
        assert!(script.contains(r#""144": "36rem""#));
        assert!(script.contains(r#""128": "32rem""#));
    }
}
