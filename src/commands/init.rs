use crate::config::CONFIG_FILE_NAME;
use crate::errors::{Error, Result};
use crate::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# migramap configuration

[scan]
extensions = ["js", "ts"]
ignore = [
    "**/node_modules/**",
    "**/bower_components/**",
    "*.min.js"
]
respect_gitignore = false

[thresholds]
low_max = 100
medium_max = 300

[scoring]
dependency_weight = 10

[output]
path = "component-analysis.json"
"#;

pub fn init_config(force: bool) -> Result<PathBuf> {
    init_config_in(Path::new("."), force)
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(Error::configuration(
            "Configuration file already exists. Use --force to overwrite.",
        ));
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    Ok(config_path)
}
