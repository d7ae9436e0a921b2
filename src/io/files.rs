//! Text file helpers mapping I/O failures to `AppError` (exit code 2).

use std::fs;
use std::path::Path;

use crate::error::AppError;

/// Read a whole text file.
pub fn read_text(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path)
        .map_err(|e| AppError::new(2, format!("Failed to read '{}': {e}", path.display())))
}

/// Create or truncate `path` and write `text` to it.
pub fn write_text(path: &Path, text: &str) -> Result<(), AppError> {
    fs::write(path, text).map_err(|e| AppError::new(2, format!("Failed to write '{}': {e}", path.display())))?;
    tracing::info!(path = %path.display(), bytes = text.len(), "wrote file");
    Ok(())
}

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<(), AppError> {
    fs::create_dir_all(dir)
        .map_err(|e| AppError::new(2, format!("Failed to create directory '{}': {e}", dir.display())))
}
