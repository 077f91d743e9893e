//! Command implementations.
//!
//! - **analyze**: scan a source tree, write the report, print the summary
//! - **init**: write a default `.migramap.toml`

pub mod analyze;
pub mod init;

pub use analyze::{handle_analyze, run_analysis, AnalysisOutcome, AnalyzeConfig};
pub use init::init_config;
