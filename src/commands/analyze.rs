use crate::complexity::ComplexityClassifier;
use crate::config::{load_config, load_config_from_path, MigramapConfig};
use crate::errors::Result;
use crate::io::{FileSystem, RealFileSystem};
use crate::output::{render_console, write_report, AnalysisReport, ConsoleFormat};
use crate::pipeline::{scan, ScanOptions};
use crate::priority::MigrationPlanner;
use crate::progress::{ProgressConfig, ProgressManager};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub output: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub format: ConsoleFormat,
    pub quiet: bool,
    pub color: bool,
    pub parallel: bool,
}

impl AnalyzeConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            output: None,
            config_path: None,
            format: ConsoleFormat::Terminal,
            quiet: false,
            color: false,
            parallel: true,
        }
    }

    fn resolve_settings(&self) -> Result<MigramapConfig> {
        match &self.config_path {
            Some(path) => load_config_from_path(path),
            None => {
                let start = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                Ok(load_config(&start))
            }
        }
    }
}

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub report: AnalysisReport,
    pub migration_order: Vec<String>,
    pub output_path: PathBuf,
}

/// Run a scan with the real file system, printing the console report to stdout.
pub fn handle_analyze(config: AnalyzeConfig) -> Result<AnalysisOutcome> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_analysis(&config, &RealFileSystem, &mut out)
}

/// Scan, plan, write the artifact, then render the console report.
///
/// The artifact is the deliverable: failing to write it is an error, while
/// console output (e.g. to a closed pipe) is best effort and only logged.
pub fn run_analysis<F: FileSystem>(
    config: &AnalyzeConfig,
    fs: &F,
    out: &mut impl Write,
) -> Result<AnalysisOutcome> {
    let settings = config.resolve_settings()?;
    let output_path = config
        .output
        .clone()
        .unwrap_or_else(|| settings.output.path.clone());

    if !config.quiet {
        if let Err(e) = writeln!(out, "Starting component analysis...") {
            warn!(error = %e, "Failed to write console output");
        }
    }

    let progress = ProgressManager::new(ProgressConfig::new(config.quiet));
    let options = ScanOptions {
        parallel: config.parallel,
    };
    let registry = scan(&config.path, &settings.scan, fs, options, &progress)?;

    let classifier = ComplexityClassifier::new(settings.thresholds);
    let report = AnalysisReport::from_registry(&registry, &classifier);
    let migration_order = MigrationPlanner::new(settings.scoring.dependency_weight)
        .migration_order(&report.components, &report.dependencies);

    write_report(&report, &output_path, fs)?;

    if !config.quiet {
        if let Err(e) = print_results(out, config, &report, &migration_order, &output_path) {
            warn!(error = %e, "Failed to write console output");
        }
    }

    Ok(AnalysisOutcome {
        report,
        migration_order,
        output_path,
    })
}

fn print_results(
    out: &mut impl Write,
    config: &AnalyzeConfig,
    report: &AnalysisReport,
    migration_order: &[String],
    output_path: &Path,
) -> Result<()> {
    render_console(out, &report.summary, migration_order, config.format, config.color)?;
    writeln!(
        out,
        "\nAnalysis complete! Results saved to: {}",
        output_path.display()
    )?;
    Ok(())
}
