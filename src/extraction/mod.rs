//! Textual extractors applied to every scanned file.
//!
//! None of these build a syntax tree. They work on raw file content with
//! regular expressions and substring checks.

pub mod dependencies;
pub mod patterns;
pub mod templates;

pub use dependencies::extract_dependencies;
pub use patterns::{extract_declarations, Declaration};
pub use templates::TemplateMarkers;

/// Line count as the report defines it: the number of `\n`-separated
/// segments, so a trailing newline adds one and an empty file counts as 1.
pub fn count_lines(content: &str) -> usize {
    content.split('\n').count()
}
