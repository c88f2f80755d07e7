//! Handler for the `paths` command.

use anyhow::Result;

use crate::cli::PathsArgs;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat};
use crate::domain::DocumentName;

/// Handle the `paths` command. Nothing is written.
pub fn handle_paths(args: &PathsArgs, config: &Config) -> Result<()> {
    let site_dir = config.site_dir(args.site.site_dir.as_ref());
    let section = config.section(args.site.section.as_deref())?;
    let layout = config.layout(args.site.page_bundle_flag());
    let name = DocumentName::new(&args.name)?;

    let paths = layout.paths(&site_dir, &section, &name);

    match args.format {
        OutputFormat::Human => {
            println!("Layout:   {}", paths.layout);
            println!("Markdown: {}", paths.markdown_file.display());
            println!("Images:   {}", paths.image_dir.display());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(&paths))?);
        }
        OutputFormat::Paths => {
            println!("{}", paths.markdown_file.display());
            println!("{}", paths.image_dir.display());
        }
    }

    Ok(())
}
