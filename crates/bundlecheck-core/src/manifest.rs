//! Manifest loading: the declared file set for a bundle.
//!
//! Contract: UTF-8 text, one bundle-relative path per line, every line
//! newline-terminated. A directory entry declares its entire subtree.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::errors::{CheckError, CheckResult};

/// The set of bundle-relative paths a bundle is expected to contain.
///
/// Entries are stored in forward-slash form with trailing newlines stripped.
/// Duplicates collapse; order carries no meaning.
#[derive(Debug, Default, Clone)]
pub struct Manifest {
    entries: HashSet<String>,
}

impl Manifest {
    /// Load a manifest from a text file.
    ///
    /// # Panics
    ///
    /// Panics if any line lacks its trailing newline. That is a malformed
    /// manifest produced by a broken upstream step, not a recoverable input.
    pub fn load(path: &Path) -> CheckResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| CheckError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    fn parse(content: &str) -> Self {
        let mut entries = HashSet::new();
        for line in content.split_inclusive('\n') {
            assert!(
                line.ends_with('\n'),
                "malformed manifest: line without trailing newline: {line:?}"
            );
            entries.insert(line[..line.len() - 1].to_string());
        }
        Self { entries }
    }

    /// Whether `rel` (forward-slash relative form) is declared.
    pub fn contains(&self, rel: &str) -> bool {
        self.entries.contains(rel)
    }

    /// Number of distinct declared paths.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_collects_entries_and_collapses_duplicates() {
        let m = Manifest::parse("a.txt\nsub\na.txt\n");
        assert_eq!(m.len(), 2);
        assert!(m.contains("a.txt"));
        assert!(m.contains("sub"));
        assert!(!m.contains("b.txt"));
    }

    #[test]
    fn parse_empty_content_is_empty_set() {
        let m = Manifest::parse("");
        assert!(m.is_empty());
    }

    #[test]
    fn blank_line_is_the_empty_entry() {
        let m = Manifest::parse("\n");
        assert_eq!(m.len(), 1);
        assert!(m.contains(""));
    }

    #[test]
    #[should_panic(expected = "malformed manifest")]
    fn missing_trailing_newline_panics() {
        Manifest::parse("a.txt\nb.txt");
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"x/y.bin\nz.txt\n").unwrap();
        drop(f);

        let m = Manifest::load(&path).unwrap();
        assert!(m.contains("x/y.bin"));
        assert!(m.contains("z.txt"));
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Manifest::load(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, CheckError::ManifestRead { .. }));
    }
}
