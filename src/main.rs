use anyhow::{Context, Result};
use clap::Parser;
use migramap::cli::{configure_thread_pool, init_logging, Cli, Commands};
use migramap::commands::{self, AnalyzeConfig};
use std::io::IsTerminal;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.command.verbosity());

    match cli.command {
        Commands::Analyze {
            path,
            output,
            format,
            config,
            quiet,
            verbosity: _,
            plain,
            no_parallel,
            jobs,
        } => {
            if !no_parallel {
                configure_thread_pool(jobs);
            }

            let analyze_config = AnalyzeConfig {
                path: path.clone(),
                output,
                config_path: config,
                format,
                quiet,
                color: !plain && std::io::stdout().is_terminal(),
                parallel: !no_parallel,
            };
            commands::handle_analyze(analyze_config)
                .with_context(|| format!("analysis of {} failed", path.display()))?;
        }
        Commands::Init { force } => {
            let path = commands::init_config(force)?;
            println!("Created {} configuration file", path.display());
        }
    }

    Ok(())
}
