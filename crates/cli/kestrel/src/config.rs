//! Loading `kestrel.toml`

use anyhow::{Context, Result};
use ks_lint::LintConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file looked up next to the input
pub const CONFIG_FILE: &str = "kestrel.toml";

/// Reads the lint configuration
///
/// An explicit path must exist. Otherwise `kestrel.toml` is looked up in
/// the input directory (or the directory of an input file) and the
/// defaults are used when there is none.
pub fn load_config(explicit: Option<&Path>, input: &Path) -> Result<LintConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_location(input) {
            Some(path) => path,
            None => return Ok(LintConfig::default()),
        },
    };

    let content =
        fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

fn default_location(input: &Path) -> Option<PathBuf> {
    let dir = if input.is_dir() {
        input
    } else {
        input.parent()?
    };
    Some(dir.join(CONFIG_FILE)).filter(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ks_lint::{LintLevel, RuleConfig};

    #[test]
    fn test_reads_config_next_to_input() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"
fix = true

[rules.unused-variable]
enabled = false

[rules.shadowed-variable]
level = "error"
"#,
        )
        .unwrap();
        let input = dir.path().join("main.json");
        fs::write(&input, "{}").unwrap();

        let config = load_config(None, &input).unwrap();
        assert!(config.fix);
        assert_eq!(
            config.rules["unused-variable"],
            RuleConfig {
                enabled: false,
                level: None,
            }
        );
        assert_eq!(
            config.level_for("shadowed-variable"),
            Some(LintLevel::Error)
        );
        assert!(config.is_enabled("inline-class"));
    }

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(
            load_config(None, dir.path()).unwrap(),
            LintConfig::default()
        );
        assert!(load_config(Some(&dir.path().join(CONFIG_FILE)), dir.path()).is_err());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "autofix = true\n").unwrap();

        assert!(load_config(Some(&path), dir.path()).is_err());
    }
}
