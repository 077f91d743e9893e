use super::Summary;
use crate::errors::Result;
use clap::ValueEnum;
use colored::Colorize;
use std::io::Write;

/// How the summary block is rendered on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ConsoleFormat {
    /// Labelled lines
    #[default]
    Terminal,
    /// The summary object as pretty JSON
    Json,
}

fn header(out: &mut impl Write, title: &str, color: bool) -> std::io::Result<()> {
    let underline = "=".repeat(title.len());
    if color {
        writeln!(out, "\n{}\n{}", title.bold().cyan(), underline.dimmed())
    } else {
        writeln!(out, "\n{title}\n{underline}")
    }
}

/// Summary, complexity buckets and the numbered migration order.
pub fn render_console(
    out: &mut impl Write,
    summary: &Summary,
    migration_order: &[String],
    format: ConsoleFormat,
    color: bool,
) -> Result<()> {
    header(out, "Component Analysis Summary:", color)?;
    match format {
        ConsoleFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(summary)?)?,
        ConsoleFormat::Terminal => {
            writeln!(out, "Components:  {}", summary.total_components)?;
            writeln!(out, "Directives:  {}", summary.total_directives)?;
            writeln!(out, "Controllers: {}", summary.total_controllers)?;
            writeln!(out, "Services:    {}", summary.total_services)?;
            writeln!(out, "Factories:   {}", summary.total_factories)?;
            let stats = &summary.template_stats;
            writeln!(
                out,
                "Templates:   {} (translations: {}, forms: {}, directives: {})",
                stats.total, stats.with_translations, stats.with_forms, stats.with_directives
            )?;
            writeln!(out, "Files:       {} analyzed", summary.files_analyzed)?;
            if summary.files_failed > 0 {
                let failed = format!("{} could not be read", summary.files_failed);
                if color {
                    writeln!(out, "             {}", failed.red())?;
                } else {
                    writeln!(out, "             {failed}")?;
                }
            }
        }
    }

    header(out, "Migration Complexity Analysis:", color)?;
    let metrics = &summary.complexity_metrics;
    writeln!(out, "High Complexity Components: {}", metrics.high_complexity)?;
    writeln!(out, "Medium Complexity Components: {}", metrics.medium_complexity)?;
    writeln!(out, "Low Complexity Components: {}", metrics.low_complexity)?;

    header(out, "Suggested Migration Order:", color)?;
    for (index, name) in migration_order.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, name)?;
    }
    Ok(())
}
