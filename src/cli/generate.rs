//! Generation pipeline driver.
//!
//! Stages run strictly in sequence: scan, build, emit, write. The first
//! failure aborts the rest, so a broken input set never replaces an
//! existing header.

use anyhow::{Context, Result};

use crate::asset::scan_assets;
use crate::cli::Cli;
use crate::header::{GeneratedDocument, emit, write_header};
use crate::{debug, log};

/// Run the full pipeline for one invocation.
pub fn run(cli: &Cli) -> Result<()> {
    log!("scan"; "{}", cli.input.display());
    let files = scan_assets(&cli.input).context("scanning the input directory")?;
    debug!("scan"; "{} file(s) found", files.len());

    let document = GeneratedDocument::build(&files, cli.minify)
        .context("building the generated document")?;
    for asset in &document.assets {
        debug!(
            "build"; "{} ({}, {} bytes)",
            asset.identifier,
            if asset.source_extension.is_empty() {
                "no extension"
            } else {
                asset.source_extension.as_str()
            },
            asset.content.len()
        );
    }

    let text = emit(&document);
    log!("emit"; "{} asset(s), {} bytes", document.assets.len(), text.len());

    write_header(&cli.output, &text).context("writing the output header")?;
    log!("write"; "{}", cli.output.display());
    Ok(())
}
