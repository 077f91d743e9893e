//! Scan orchestration: walk, analyse each file, accumulate.
//!
//! Per-file analysis is independent and may run on the rayon pool. Results
//! are collected back in walk order and merged by a single writer, so the
//! registry sees exactly the same sequence as a sequential run.

use crate::analyzers::{analyze_content, FileAnalysis};
use crate::config::ScanConfig;
use crate::core::ScanFailure;
use crate::errors::Result;
use crate::io::{relative_path, FileSystem, FileWalker};
use crate::progress::{ProgressManager, TEMPLATE_FILE_SCAN};
use crate::registry::Registry;
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, info_span};

#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    pub parallel: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Walk `root` and analyse every matching file.
///
/// Only a failure to enumerate the root is an error; unreadable files end
/// up in [`Registry::failures`].
pub fn scan<F: FileSystem>(
    root: &Path,
    scan_config: &ScanConfig,
    fs: &F,
    options: ScanOptions,
    progress: &ProgressManager,
) -> Result<Registry> {
    let _span = info_span!("scan", root = %root.display()).entered();

    let files = FileWalker::from_config(root.to_path_buf(), scan_config)?.walk()?;
    info!(count = files.len(), "Discovered source files");

    let bar = progress.create_bar(files.len() as u64, TEMPLATE_FILE_SCAN);
    bar.set_message("Analyzing");
    let registry = scan_files(root, &files, fs, options, &bar);
    bar.finish_and_clear();

    info!(
        analyzed = registry.files_analyzed(),
        failed = registry.failures().len(),
        declarations = registry.total_declarations(),
        "Scan complete"
    );
    Ok(registry)
}

/// Analyse an already enumerated file list, in the given order.
pub fn scan_files<F: FileSystem>(
    root: &Path,
    files: &[PathBuf],
    fs: &F,
    options: ScanOptions,
    bar: &ProgressBar,
) -> Registry {
    let analyze = |path: &PathBuf| {
        let outcome = analyze_path(root, path, fs);
        bar.inc(1);
        outcome
    };

    let outcomes: Vec<_> = if options.parallel {
        files.par_iter().map(analyze).collect()
    } else {
        files.iter().map(analyze).collect()
    };

    outcomes
        .into_iter()
        .fold(Registry::new(), |mut registry, outcome| {
            match outcome {
                Ok(analysis) => registry.record_file(analysis),
                Err(failure) => registry.record_failure(failure),
            }
            registry
        })
}

fn analyze_path<F: FileSystem>(
    root: &Path,
    path: &Path,
    fs: &F,
) -> std::result::Result<FileAnalysis, ScanFailure> {
    let relative = relative_path(root, path);
    match fs.read_source(path) {
        Ok(content) => {
            let analysis = analyze_content(&relative, &content);
            debug!(
                path = %relative,
                loc = analysis.loc,
                declarations = analysis.declaration_count(),
                "Analyzed file"
            );
            Ok(analysis)
        }
        Err(e) => {
            error!(path = %relative, error = %e, "Error analyzing file");
            Err(ScanFailure {
                path: relative,
                message: e.to_string(),
            })
        }
    }
}
