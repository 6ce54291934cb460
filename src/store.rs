// src/store.rs

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ScrapeError;
use crate::records::EventRecord;

/// Serialize the collected events as a pretty JSON array.
/// Returns the path written to.
pub fn write_events(path: &Path, events: &[EventRecord]) -> Result<PathBuf, ScrapeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, events)?;
    out.flush()?;
    Ok(path.to_path_buf())
}
