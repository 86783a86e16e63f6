//! Exporter seam between field maps and rendered documents.

use std::path::Path;

use crate::error::ExportError;
use crate::fields::FieldMap;

/// Renders a field map into a downloadable document payload.
pub trait DocumentExporter {
    /// Suggested file name for the payload.
    fn file_name(&self) -> &str;

    /// Renders `fields` into document bytes.
    fn export(&self, fields: &FieldMap) -> Result<Vec<u8>, ExportError>;
}

/// Writes the field map itself as pretty-printed JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonExporter;

impl DocumentExporter for JsonExporter {
    fn file_name(&self) -> &str {
        "generated.json"
    }

    fn export(&self, fields: &FieldMap) -> Result<Vec<u8>, ExportError> {
        serde_json::to_vec_pretty(fields).map_err(|e| ExportError::Serialization {
            reason: e.to_string(),
        })
    }
}

/// Writes `bytes` to `path`.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be written.
pub fn write_document(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    std::fs::write(path, bytes).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
