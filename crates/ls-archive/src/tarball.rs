//! Tar extraction and directory packing.
//!
//! Packing adds every regular file under its path relative to the packed
//! directory, so internal nesting survives a round trip. Entries are added
//! in sorted order for deterministic archives.

use crate::{ArchiveError, Result};
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Compression applied around the tar stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// Plain tar.
    None,
    /// Gzip-wrapped tar (`.tar.gz`).
    Gzip,
}

/// Extract the tar file `src` into the directory `dir`, preserving relative
/// paths. The directory is created if missing.
pub fn extract(src: &Path, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    let mut archive = tar::Archive::new(BufReader::new(File::open(src)?));
    archive.unpack(dir)?;
    debug!(src = %src.display(), dir = %dir.display(), "extracted tar");
    Ok(())
}

/// Pack the directory `dir` into a tar stream at `dst`, optionally gzip
/// compressed. Each file's archive name is its path minus the `dir` prefix.
pub fn pack(dir: &Path, dst: &Path, compression: Compression) -> Result<()> {
    let output = File::create(dst)?;
    match compression {
        Compression::Gzip => {
            let encoder = GzEncoder::new(BufWriter::new(output), flate2::Compression::default());
            let mut builder = tar::Builder::new(encoder);
            append_dir(&mut builder, dir, dir)?;
            builder.into_inner()?.finish()?.flush()?;
        }
        Compression::None => {
            let mut builder = tar::Builder::new(BufWriter::new(output));
            append_dir(&mut builder, dir, dir)?;
            builder.into_inner()?.flush()?;
        }
    }
    debug!(dir = %dir.display(), dst = %dst.display(), "packed tar");
    Ok(())
}

fn append_dir<W: Write>(builder: &mut tar::Builder<W>, root: &Path, dir: &Path) -> Result<()> {
    let mut entries = fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.file_name());
    for entry in entries {
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            append_dir(builder, root, &path)?;
        } else {
            let name = path
                .strip_prefix(root)
                .map_err(|_| ArchiveError::OutsideRoot(path.clone()))?;
            builder.append_path_with_name(&path, name)?;
        }
    }
    Ok(())
}
