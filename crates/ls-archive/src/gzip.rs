//! Gzip decompress/compress as byte-stream copies.

use crate::Result;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Decompress `src` (a gzip file) into `dst`. Returns the decompressed size.
pub fn decompress(src: &Path, dst: &Path) -> Result<u64> {
    let mut decoder = GzDecoder::new(BufReader::new(File::open(src)?));
    let mut output = BufWriter::new(File::create(dst)?);
    let bytes = io::copy(&mut decoder, &mut output)?;
    output.flush()?;
    debug!(src = %src.display(), dst = %dst.display(), bytes, "gunzipped");
    Ok(bytes)
}

/// Compress `src` into the gzip file `dst`. Returns the uncompressed size.
pub fn compress(src: &Path, dst: &Path) -> Result<u64> {
    let mut input = BufReader::new(File::open(src)?);
    let mut encoder = GzEncoder::new(
        BufWriter::new(File::create(dst)?),
        flate2::Compression::default(),
    );
    let bytes = io::copy(&mut input, &mut encoder)?;
    encoder.finish()?.flush()?;
    debug!(src = %src.display(), dst = %dst.display(), bytes, "gzipped");
    Ok(bytes)
}
