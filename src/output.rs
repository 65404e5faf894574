use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const OUTPUT_FILE: &str = "AUTHORS.md";

/// Substrings that mark automated contributors.
pub const BOT_MARKERS: [&str; 1] = ["dependabot"];

/// The contributor list as it will be written: a header line and one entry
/// per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    pub header: String,
    pub entries: Vec<String>,
}

impl OutputDocument {
    pub fn new(header: impl Into<String>, entries: Vec<String>) -> Self {
        Self { header: header.into(), entries }
    }

    /// Create or truncate `path` and write the document, leaving out every
    /// entry that contains one of `bot_markers` (case-sensitive).
    ///
    /// Returns how many entries were written.
    pub fn write_to<S: AsRef<str>>(&self, path: &Path, bot_markers: &[S]) -> Result<usize> {
        let mut out = BufWriter::new(File::create(path)?);
        writeln!(out, "{}", self.header)?;

        let mut written = 0;
        for entry in self.entries.iter().filter(|e| !is_bot(e, bot_markers)) {
            writeln!(out, "{entry}")?;
            written += 1;
        }
        out.flush()?;
        Ok(written)
    }
}

fn is_bot<S: AsRef<str>>(entry: &str, markers: &[S]) -> bool {
    markers.iter().any(|m| entry.contains(m.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn doc(entries: &[&str]) -> OutputDocument {
        OutputDocument::new(
            "# Authors List (in alphabetical order)",
            entries.iter().map(|e| e.to_string()).collect(),
        )
    }

    #[test]
    fn writes_header_then_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);
        let n = doc(&["A<a@x>", "B<b@x>"]).write_to(&path, &BOT_MARKERS).unwrap();
        assert_eq!(n, 2);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# Authors List (in alphabetical order)\nA<a@x>\nB<b@x>\n"
        );
    }

    #[test]
    fn filters_bots_anywhere_in_the_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);
        let entries = [
            "dependabot[bot]<49699333+dependabot[bot]@users.noreply.github.com>",
            "A<a@x>",
            "x<dependabot@x>",
            "B<b@x>",
            "dependabot-preview<d@x>",
        ];
        let n = doc(&entries).write_to(&path, &BOT_MARKERS).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(n, 2);
        assert!(!written.contains("dependabot"));
        assert_eq!(written.lines().skip(1).collect::<Vec<_>>(), vec!["A<a@x>", "B<b@x>"]);
    }

    #[test]
    fn marker_match_is_case_sensitive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);
        doc(&["Dependabot Fan<f@x>"]).write_to(&path, &BOT_MARKERS).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("Dependabot Fan<f@x>"));
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);
        fs::write(&path, "stale content that is longer than the new file\n".repeat(10)).unwrap();
        doc(&["A<a@x>"]).write_to(&path, &BOT_MARKERS).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# Authors List (in alphabetical order)\nA<a@x>\n"
        );
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join(OUTPUT_FILE);
        let err = doc(&["A<a@x>"]).write_to(&path, &BOT_MARKERS).unwrap_err();
        assert!(matches!(err, crate::error::GalError::Io(_)));
    }
}
