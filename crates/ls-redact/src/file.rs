//! File-level redaction with the marker guard.
//!
//! Output is first written to a marker-prefixed sibling, then swapped over
//! the original, so the final file keeps its original name and only a run
//! interrupted mid-swap can leave a marker-prefixed stray behind. Such
//! strays are skipped on the next run.

use crate::line::Redactor;
use crate::{RedactError, Result};
use std::borrow::Cow;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of processing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file name carries the marker prefix; nothing was touched.
    Skipped,
    /// The file was rewritten in place.
    Redacted {
        /// Number of lines that changed.
        lines_changed: usize,
    },
}

/// Redact a plain-text log file in place.
///
/// Lines are read and written as raw bytes, terminators preserved, so
/// content that is not valid UTF-8 round-trips untouched unless it matches
/// the path pattern.
pub fn redact_file(path: &Path, redactor: &Redactor) -> Result<FileOutcome> {
    let file_name = path
        .file_name()
        .ok_or_else(|| RedactError::NoFileName(path.to_path_buf()))?;

    let marker = redactor.marker_prefix();
    if file_name.as_encoded_bytes().starts_with(marker.as_bytes()) {
        debug!(path = %path.display(), "marker prefix present, skipping");
        return Ok(FileOutcome::Skipped);
    }

    let out_path = marker_sibling(path, file_name, marker);
    let lines_changed = rewrite(path, &out_path, redactor)?;

    fs::remove_file(path)?;
    fs::rename(&out_path, path)?;

    info!(path = %path.display(), lines_changed, "redacted");
    Ok(FileOutcome::Redacted { lines_changed })
}

/// `dir/name` -> `dir/<marker>name`.
fn marker_sibling(path: &Path, file_name: &std::ffi::OsStr, marker: &str) -> PathBuf {
    let mut out_name = OsString::from(marker);
    out_name.push(file_name);
    path.with_file_name(out_name)
}

fn rewrite(src: &Path, dst: &Path, redactor: &Redactor) -> Result<usize> {
    let mut reader = BufReader::new(File::open(src)?);
    let mut writer = BufWriter::new(File::create(dst)?);

    let mut lines_changed = 0;
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        match redactor.redact_line(&line) {
            Cow::Borrowed(unchanged) => writer.write_all(unchanged)?,
            Cow::Owned(redacted) => {
                lines_changed += 1;
                writer.write_all(&redacted)?;
            }
        }
    }
    writer.flush()?;
    Ok(lines_changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RedactionPolicy;

    fn redactor() -> Redactor {
        Redactor::new(RedactionPolicy::default())
    }

    #[test]
    fn marker_prefixed_file_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("xxx-app.log");
        fs::write(&path, b"data=/home/user\n").unwrap();

        let outcome = redact_file(&path, &redactor()).unwrap();
        assert_eq!(outcome, FileOutcome::Skipped);
        assert_eq!(fs::read(&path).unwrap(), b"data=/home/user\n");
    }

    #[test]
    fn file_is_rewritten_under_its_original_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, b"data=/home/user accessed\nno slash here\n").unwrap();

        let outcome = redact_file(&path, &redactor()).unwrap();
        assert_eq!(outcome, FileOutcome::Redacted { lines_changed: 1 });
        assert_eq!(
            fs::read(&path).unwrap(),
            b"data=/xxx accessed\nno slash here\n"
        );
        // No marker-prefixed stray left behind.
        assert!(!dir.path().join("xxx-app.log").exists());
    }

    #[test]
    fn unmatched_lines_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.log");
        let content: &[u8] = b"\xff\xfe binary-ish line\nplain line\n";
        fs::write(&path, content).unwrap();

        redact_file(&path, &redactor()).unwrap();
        assert_eq!(fs::read(&path).unwrap(), content);
    }

    #[test]
    fn final_line_without_terminator_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tail.log");
        fs::write(&path, b"path=/secret/config").unwrap();

        redact_file(&path, &redactor()).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"path=/xxx");
    }

    #[test]
    fn rerun_after_success_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, b"data=/home/user\n").unwrap();

        redact_file(&path, &redactor()).unwrap();
        let first = fs::read(&path).unwrap();
        redact_file(&path, &redactor()).unwrap();
        assert_eq!(fs::read(&path).unwrap(), first);
    }
}
