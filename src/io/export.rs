//! Export curve samples to CSV.
//!
//! The export is a plain `x,y` table, easy to load in spreadsheets or to paste
//! into transmitter curve editors.

use std::path::Path;

use crate::domain::CurvePoint;
use crate::error::AppError;

/// Write a curve sample to a CSV file with an `x,y` header.
pub fn write_sample_csv(path: &Path, sample: &[CurvePoint]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    for point in sample {
        writer
            .serialize(point)
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV '{}': {e}", path.display())))?;

    tracing::info!(path = %path.display(), rows = sample.len(), "wrote curve CSV");
    Ok(())
}
