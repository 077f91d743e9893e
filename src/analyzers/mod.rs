pub mod file_analyzer;

pub use file_analyzer::{analyze_content, FileAnalysis};
