//! I/O seam for the scan pipeline.
//!
//! The pipeline reads source files through [`FileSystem`] so tests can make
//! a single file fail without relying on file permissions.

use crate::errors::Result;
use std::path::Path;

pub trait FileSystem: Send + Sync {
    /// Read a source file as text. Invalid UTF-8 is replaced, not rejected.
    fn read_source(&self, path: &Path) -> Result<String>;

    /// Write `content` to `path`, creating parent directories.
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}
