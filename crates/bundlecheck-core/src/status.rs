//! Status sentinel: the one-line ok/ko file consumed by the build system.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

/// Sentinel content for a bundle that matches its manifest.
pub const STATUS_OK: &str = "ok\n";
/// Sentinel content for a bundle with unexpected files.
pub const STATUS_KO: &str = "ko\n";

/// Write the status token for `clean` to `path`.
///
/// The write is skipped when the file already holds the exact bytes, so the
/// mtime the surrounding build system tracks stays untouched. Existing
/// content is compared as raw bytes; anything that differs (including
/// non-UTF-8 garbage) is overwritten.
pub fn write_status(path: &Path, clean: bool) -> io::Result<()> {
    let content = if clean { STATUS_OK } else { STATUS_KO };
    write_if_changed(path, content.as_bytes())
}

fn write_if_changed(path: &Path, content: &[u8]) -> io::Result<()> {
    if let Ok(existing) = fs::read(path) {
        if existing.as_slice() == content {
            debug!(path = %path.display(), "status unchanged, skipping write");
            return Ok(());
        }
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_ok_and_ko_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("status");

        write_status(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "ok\n");

        write_status(&path, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "ko\n");
    }

    #[test]
    #[cfg(unix)]
    fn equal_content_skips_the_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("status");
        fs::write(&path, "ok\n").unwrap();

        // A read-only file would make any actual write fail.
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&path, perms.clone()).unwrap();

        write_status(&path, true).unwrap();

        perms.set_readonly(false);
        fs::set_permissions(&path, perms).unwrap();
    }

    #[test]
    fn differing_content_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("status");
        fs::write(&path, b"\xff\xfenot text").unwrap();

        write_status(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "ok\n");
    }
}
