//! Report payload extraction.
//!
//! Report endpoints answer with a zip archive holding a single CSV file.

use crate::Result;
use std::io::{Cursor, Read};
use tracing::debug;
use zip::ZipArchive;

/// Return the bytes of the first file in a zipped report.
pub fn extract_report(archive_bytes: &[u8]) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(Cursor::new(archive_bytes))?;
    let mut entry = archive.by_index(0)?;

    // The declared size comes from the archive and is not trusted for allocation
    let mut data = Vec::new();
    entry.read_to_end(&mut data)?;

    debug!(
        file = entry.name(),
        bytes = data.len(),
        "Extracted report from archive"
    );
    Ok(data)
}
