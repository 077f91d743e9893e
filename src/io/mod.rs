pub mod real;
pub mod traits;
pub mod walker;

pub use real::RealFileSystem;
pub use traits::FileSystem;
pub use walker::{relative_path, FileWalker};

use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(path, content)
}

pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
