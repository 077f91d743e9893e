//! Static inventory of a legacy front-end code base.
//!
//! migramap walks a source tree, finds construct registrations
//! (`.component('name'`, `.service('name'`, ...) by textual pattern
//! matching, records per-file metrics for each, buckets components by size
//! and proposes a migration order. It never parses the source language.

pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod complexity;
pub mod config;
pub mod core;
pub mod errors;
pub mod extraction;
pub mod io;
pub mod output;
pub mod pipeline;
pub mod priority;
pub mod progress;
pub mod registry;

// Re-export commonly used types
pub use crate::core::{Category, DeclarationRecord, ScanFailure, TemplateStats};

pub use crate::analyzers::{analyze_content, FileAnalysis};
pub use crate::complexity::{
    ComplexityClassifier, ComplexityLevel, ComplexityMetrics, ComplexityThresholds,
};
pub use crate::config::MigramapConfig;
pub use crate::errors::{Error, Result};
pub use crate::output::{AnalysisReport, Summary};
pub use crate::pipeline::{scan, scan_files, ScanOptions};
pub use crate::priority::{MigrationCandidate, MigrationPlanner};
pub use crate::registry::{DependencyMap, Registry};
