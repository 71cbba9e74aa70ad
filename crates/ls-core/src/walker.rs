//! Recursive tree walker.
//!
//! Visits every entry under the root in ascending filename order, expands
//! gzip/tar containers in place, redacts plain logs, and collapses each
//! container back to its original path before moving on. Any I/O failure
//! propagates and aborts the run; re-running a partially processed tree is
//! safe because of the marker guard in `ls-redact`.

use crate::kind::FileKind;
use crate::{Result, ScrubConfig, ScrubError};
use ls_archive::{gzip, tarball, Compression};
use ls_redact::Redactor;
use std::fs::{self, DirEntry};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Redact every log file under `config.root`, in place.
///
/// Fails with [`ScrubError::NotFound`] before touching anything if the root
/// is missing or not a directory.
pub fn redact_tree(config: &ScrubConfig, redactor: &Redactor) -> Result<()> {
    if !config.root.is_dir() {
        return Err(ScrubError::NotFound {
            path: config.root.clone(),
        });
    }
    info!(root = %config.root.display(), "starting scrub");
    walk(&config.root, redactor)
}

fn walk(dir: &Path, redactor: &Redactor) -> Result<()> {
    for entry in sorted_entries(dir)? {
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            walk(&path, redactor)?;
        } else if file_type.is_file() {
            process_file(&path, redactor)?;
        } else {
            debug!(path = %path.display(), "skipping non-regular file");
        }
    }
    Ok(())
}

/// Directory entries in ascending filename order, for deterministic
/// processing. The snapshot also keeps the walk from descending into
/// directories created mid-iteration by tar extraction.
fn sorted_entries(dir: &Path) -> Result<Vec<DirEntry>> {
    let mut entries = fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}

fn process_file(path: &Path, redactor: &Redactor) -> Result<()> {
    match FileKind::classify(path) {
        FileKind::GzipFile => process_gzip(path, redactor),
        // A bare tar is repacked uncompressed at its own path.
        FileKind::TarArchive => process_tar(path, path, Compression::None, redactor),
        FileKind::PlainLog => {
            ls_redact::redact_file(path, redactor)?;
            Ok(())
        }
    }
}

/// Strip the gzip layer, process the inner file, and re-compress to the
/// original `.gz` path. A gzipped tar delegates to the archive flow with
/// the `.gz` path as the repack destination.
fn process_gzip(gz_path: &Path, redactor: &Redactor) -> Result<()> {
    let inner = strip_extension(gz_path);
    gzip::decompress(gz_path, &inner)?;
    fs::remove_file(gz_path)?;

    match FileKind::classify(&inner) {
        FileKind::TarArchive => process_tar(&inner, gz_path, Compression::Gzip, redactor),
        FileKind::GzipFile | FileKind::PlainLog => {
            ls_redact::redact_file(&inner, redactor)?;
            gzip::compress(&inner, gz_path)?;
            fs::remove_file(&inner)?;
            Ok(())
        }
    }
}

/// Extract the tar into a sibling directory named after it, walk that
/// directory, then re-pack it to `dest` so the final artifact sits exactly
/// where the input did. The extracted directory and the intermediate tar
/// are removed.
fn process_tar(
    tar_path: &Path,
    dest: &Path,
    compression: Compression,
    redactor: &Redactor,
) -> Result<()> {
    let extract_dir = strip_extension(tar_path);
    tarball::extract(tar_path, &extract_dir)?;
    fs::remove_file(tar_path)?;

    walk(&extract_dir, redactor)?;

    tarball::pack(&extract_dir, dest, compression)?;
    fs::remove_dir_all(&extract_dir)?;
    info!(archive = %dest.display(), "repacked archive");
    Ok(())
}

/// `logs.tar.gz` -> `logs.tar`, `logs.tar` -> `logs`.
fn strip_extension(path: &Path) -> PathBuf {
    path.with_extension("")
}
