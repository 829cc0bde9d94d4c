//! The verification command: load manifest, walk bundle, write sentinel.

use anyhow::{Context, Result};
use bundlecheck_core::{verify_bundle, write_status};
use tracing::debug;

use crate::cli::args::Cli;
use crate::exit_codes;

pub fn run(cli: &Cli) -> Result<i32> {
    // Precondition and manifest failures leave the output file untouched.
    let report = match verify_bundle(&cli.bundle_dir, &cli.manifest_path) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            return Ok(exit_codes::FAILURE);
        }
    };

    for path in &report.unexpected {
        eprintln!("error: {}: unexpected file", path.display());
    }

    debug!(
        unexpected = report.unexpected.len(),
        clean = report.is_clean(),
        "bundle scan finished"
    );

    write_status(&cli.output_path, report.is_clean())
        .with_context(|| format!("{}: writing status", cli.output_path.display()))?;

    Ok(if report.is_clean() {
        exit_codes::OK
    } else {
        exit_codes::FAILURE
    })
}
