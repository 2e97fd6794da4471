use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use thiserror::Error;

/// Written after every fragment: blank line, horizontal rule, blank line.
pub const FRAGMENT_SEPARATOR: &str = "\n\n---\n\n";

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Write `fragments` to `output` in order, each followed by
/// [`FRAGMENT_SEPARATOR`]. Zero fragments produce an empty file.
///
/// The write is atomic: content goes to a temp file next to `output` which
/// is then renamed over any existing file. A failed write leaves no partial
/// output behind and is reported to the caller, who decides whether it is
/// fatal.
pub fn merge(fragments: &[String], output: &Path) -> Result<(), MergeError> {
    let dir = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)?;
    for fragment in fragments {
        tmp.write_all(fragment.as_bytes())?;
        tmp.write_all(FRAGMENT_SEPARATOR.as_bytes())?;
    }
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    // Replace existing file if present to keep determinism.
    if output.exists() {
        fs::remove_file(output)?;
    }
    tmp.persist(output).map_err(|e| MergeError::Io(e.error))?;
    Ok(())
}
