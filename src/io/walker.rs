use crate::config::ScanConfig;
use crate::errors::{Error, Result};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Enumerates candidate source files under a root directory.
///
/// Hidden files and directories are skipped. Results are sorted by path so
/// that discovery order, and everything derived from it, is reproducible.
/// Only an unreadable root fails the walk; an unreadable entry below it is
/// logged and skipped.
pub struct FileWalker {
    root: PathBuf,
    extensions: Vec<String>,
    ignore_patterns: Vec<glob::Pattern>,
    respect_gitignore: bool,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extensions: vec!["js".to_string(), "ts".to_string()],
            ignore_patterns: vec![],
            respect_gitignore: false,
        }
    }

    pub fn from_config(root: PathBuf, config: &ScanConfig) -> Result<Self> {
        Ok(Self::new(root)
            .with_extensions(config.extensions.clone())
            .with_ignore_patterns(&config.ignore)?
            .respect_gitignore(config.respect_gitignore))
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Result<Self> {
        self.ignore_patterns = patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<std::result::Result<_, _>>()?;
        Ok(self)
    }

    pub fn respect_gitignore(mut self, enabled: bool) -> Self {
        self.respect_gitignore = enabled;
        self
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        self.check_root()?;

        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .hidden(true)
            .git_ignore(self.respect_gitignore)
            .require_git(false)
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "Skipping unreadable path");
                    continue;
                }
            };
            let path = entry.path();

            // Follows symlinks, so a linked source file is scanned like any other.
            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn check_root(&self) -> Result<()> {
        let root_error = |err: std::io::Error| {
            Error::Walk(ignore::Error::WithPath {
                path: self.root.clone(),
                err: Box::new(ignore::Error::Io(err)),
            })
        };

        let metadata = fs::metadata(&self.root).map_err(root_error)?;
        if metadata.is_dir() {
            fs::read_dir(&self.root).map_err(root_error)?;
        }
        Ok(())
    }

    fn should_process(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext = ext.to_string_lossy();
        if !self.extensions.iter().any(|allowed| *allowed == ext) {
            return false;
        }

        let path_str = path.to_string_lossy();
        !self
            .ignore_patterns
            .iter()
            .any(|pattern| pattern.matches(&path_str))
    }
}

/// Path of `path` relative to `root`, `/`-separated for stable output.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
