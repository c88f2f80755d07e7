//! Handler for the `convert` command.

use anyhow::{Context, Result};

use super::ConsoleReporter;
use crate::cli::ConvertArgs;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat};
use crate::writer::{ConvertSummary, SiteWriter};

/// Handle the `convert` command.
///
/// Notebooks are converted in order; the first failure aborts the run and
/// leaves files from earlier notebooks in place.
pub fn handle_convert(args: &ConvertArgs, config: &Config, verbose: bool) -> Result<()> {
    let site_dir = config.site_dir(args.site.site_dir.as_ref());
    let section = config.section(args.site.section.as_deref())?;
    let layout = config.layout(args.site.page_bundle_flag());

    let writer = SiteWriter::new(layout.is_page_bundle(), Some(config.exporter()))
        .context("failed to set up exporter")?;

    let mut reporter = ConsoleReporter::new(args.format == OutputFormat::Human);
    let mut summaries = Vec::with_capacity(args.notebooks.len());

    for notebook in &args.notebooks {
        if verbose {
            eprintln!(
                "Converting {} into {} (section {section}, {layout})",
                notebook.display(),
                site_dir.display()
            );
        }
        let summary = writer
            .convert_with_reporter(notebook, &site_dir, &section, &mut reporter)
            .with_context(|| format!("failed to convert {}", notebook.display()))?;
        summaries.push(summary);
    }

    print_summaries(args.format, &summaries)
}

/// Print the conversion results in the requested format.
fn print_summaries(format: OutputFormat, summaries: &[ConvertSummary]) -> Result<()> {
    match format {
        // Already reported file by file.
        OutputFormat::Human => {}
        OutputFormat::Json => {
            let output = Output::new(summaries);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Paths => {
            for summary in summaries {
                for image in &summary.images {
                    println!("{}", image.display());
                }
                println!("{}", summary.markdown_file.display());
            }
        }
    }
    Ok(())
}
