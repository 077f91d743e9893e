use std::fs;
use std::path::{Path, PathBuf};

use super::MigramapConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".migramap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<MigramapConfig> {
    let config = toml::from_str::<MigramapConfig>(contents)?;
    config.validate().map_err(Error::configuration)?;
    Ok(config)
}

/// Load an explicitly requested config file. Any failure is fatal.
pub fn load_config_from_path(path: &Path) -> Result<MigramapConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        Error::configuration(format!("cannot read {}: {}", path.display(), e))
    })?;
    let config = parse_and_validate_config(&contents).map_err(|e| {
        Error::configuration(format!("invalid {}: {}", path.display(), e))
    })?;
    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<MigramapConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // A missing file just means "keep looking"
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "Failed to read config file"
                );
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Some(config)
        }
        Err(e) => {
            tracing::warn!(
                path = %config_path.display(),
                error = %e,
                "Ignoring invalid config file, using defaults"
            );
            None
        }
    }
}

/// Generate `start` and its ancestors, nearest first, up to `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find `.migramap.toml` in `start` or one of its ancestors.
///
/// Falls back to defaults when nothing usable is found.
pub fn load_config(start: &Path) -> MigramapConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            MigramapConfig::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [scoring]
            dependency_weight = 5
        "#})
        .unwrap();

        assert_eq!(config.scoring.dependency_weight, 5);
        assert_eq!(config.thresholds.low_max, 100);
        assert_eq!(config.scan.extensions, vec!["js", "ts"]);
    }

    #[test]
    fn test_parse_rejects_invalid_thresholds() {
        let result = parse_and_validate_config(indoc! {r#"
            [thresholds]
            low_max = 500
            medium_max = 300
        "#});
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        let result = parse_and_validate_config("[scan\nextensions = ");
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_directory_ancestors_limits_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_load_config_finds_file_in_ancestor() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[output]\npath = \"out/report.json\"\n",
        )
        .unwrap();
        let nested = temp.path().join("src").join("app");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config(&nested);
        assert_eq!(config.output.path, PathBuf::from("out/report.json"));
    }

    #[test]
    fn test_load_config_falls_back_on_invalid_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();

        let config = load_config(temp.path());
        assert_eq!(config, MigramapConfig::default());
    }

    #[test]
    fn test_load_config_from_missing_path_is_fatal() {
        let temp = TempDir::new().unwrap();
        let result = load_config_from_path(&temp.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
