use crate::error::ExternalError;
use sopa_core::{WordSearch, render};
use std::path::Path;

/// Write the rendered puzzle to `path` as UTF-8, replacing any existing file.
pub fn save_text<P: AsRef<Path>>(path: P, search: &WordSearch) -> Result<(), ExternalError> {
    write_text(path, &render::to_text(search))
}

/// Write already-rendered puzzle text in a single write.
pub fn write_text<P: AsRef<Path>>(path: P, content: &str) -> Result<(), ExternalError> {
    std::fs::write(&path, content)?;
    log::debug!("Wrote {} bytes to {}", content.len(), path.as_ref().display());
    Ok(())
}
