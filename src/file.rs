// src/file.rs

use std::{
    fs,
    io,
    path::Path,
};

use log::{debug, info};

use crate::error::Result;
use crate::records::ExtractedRecordSet;

/// Write the record set as TSV: header row, one row per variant in processing
/// order, no index column. Overwrites `dest`; creates missing parent dirs.
pub fn write_records(records: &ExtractedRecordSet, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut out = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_path(dest)?; // truncate/overwrite

    if records.is_empty() {
        // serde headers come from the first row; emit them by hand when there is none
        out.write_record(crate::config::consts::OUTPUT_HEADERS)?;
    }
    for row in records.rows() {
        out.serialize(row)?;
    }
    out.flush()?;

    info!("wrote {} row(s) to {}", records.len(), dest.display());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Best effort: drop a driver log left behind by an earlier run.
pub fn remove_stale_log(path: &Path) {
    if path.is_file() {
        match fs::remove_file(path) {
            Ok(()) => debug!("removed stale {}", path.display()),
            Err(e) => debug!("could not remove {}: {e}", path.display()),
        }
    }
}
