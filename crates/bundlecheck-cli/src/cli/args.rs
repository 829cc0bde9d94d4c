//! Argument surface for the `bundlecheck` binary.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

/// Usage line printed on any argument error, matching the build-system
/// contract (stderr, exit 1).
pub const USAGE: &str = "usage: bundlecheck <bundle-dir> <manifest-path> <output-path>";

#[derive(Parser, Debug)]
#[command(
    name = "bundlecheck",
    version,
    about = "Verify that a built bundle contains exactly the files its manifest declares"
)]
pub struct Cli {
    /// Bundle root directory to verify
    pub bundle_dir: PathBuf,

    /// Manifest file, one bundle-relative path per line
    pub manifest_path: PathBuf,

    /// Status sentinel file (ok/ko) consumed by the build system
    pub output_path: PathBuf,
}

/// Map clap parse failures onto the diagnostic contract: help and version
/// print normally and exit clean, everything else is a usage error.
pub fn handle_parse_error(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            crate::exit_codes::OK
        }
        _ => {
            eprintln!("{USAGE}");
            crate::exit_codes::FAILURE
        }
    }
}
