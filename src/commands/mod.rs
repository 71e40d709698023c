pub mod containers;
pub mod pods;
pub mod report;

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Write rendered text to a file, or to stdout when no path is given.
pub(crate) fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("Failed to write output file '{}'", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .context("Failed to write to stdout")
        }
    }
}
