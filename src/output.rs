//! Output persistence via temp file + rename.

use crate::{AsciiError, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `text` to `path`, replacing any existing file only once the
/// full contents are on disk.
pub fn write_atomic(path: &Path, text: &str) -> Result<()> {
    let write_err = |source: std::io::Error| AsciiError::Write { path: path.to_path_buf(), source };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(text.as_bytes()).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    log::info!("wrote {}", path.display());
    Ok(())
}
