//! Bundle traversal: classify every file under the root as declared or not.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::errors::CheckResult;
use crate::manifest::Manifest;

/// Bundle-relative path of `path` under `root`, in forward-slash form.
fn relative_key(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let mut key = String::new();
    for comp in rel.components() {
        if !key.is_empty() {
            key.push('/');
        }
        key.push_str(&comp.as_os_str().to_string_lossy());
    }
    key
}

/// Walk `root` and collect every file not covered by `manifest`.
///
/// A directory whose relative path is declared covers its whole subtree and
/// is not descended into. Traversal is sorted so diagnostics are stable
/// across runs. Returned paths are the on-disk paths under `root`.
pub fn find_unexpected(root: &Path, manifest: &Manifest) -> CheckResult<Vec<PathBuf>> {
    let mut unexpected = Vec::new();
    let mut it = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = it.next() {
        let entry = entry?;
        if entry.depth() == 0 {
            continue;
        }
        let key = relative_key(root, entry.path());
        let ft = entry.file_type();
        if ft.is_dir() {
            if manifest.contains(&key) {
                debug!(path = %entry.path().display(), "declared directory, skipping subtree");
                it.skip_current_dir();
            }
            continue;
        }
        // A symlink to a directory is a directory entry that is never
        // descended into; everything else counts as a file.
        if ft.is_symlink() && entry.path().is_dir() {
            continue;
        }
        if !manifest.contains(&key) {
            debug!(path = %entry.path().display(), "undeclared file");
            unexpected.push(entry.path().to_path_buf());
        }
    }

    Ok(unexpected)
}
