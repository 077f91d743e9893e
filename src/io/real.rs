use super::traits::FileSystem;
use crate::errors::{Error, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Production file system backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFileSystem {
    fn read_source(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| Error::file_read(path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        replace_file(path, |file| file.write_all(content.as_bytes()))
            .map_err(|e| Error::artifact_write(path, e))
    }
}

/// Fill a temporary sibling of `path`, then rename it over `path`.
///
/// The rename is atomic, so `path` holds either its previous content or the
/// complete new content. On failure the temporary file is removed on drop.
fn replace_file(
    path: &Path,
    fill: impl FnOnce(&mut NamedTempFile) -> io::Result<()>,
) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    super::ensure_dir(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    fill(&mut file)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
