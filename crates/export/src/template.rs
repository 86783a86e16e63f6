//! Template lookup by course length.

use std::path::{Path, PathBuf};

use crate::error::ExportError;

/// Returns `dir/template_{hours}.docx`.
pub fn template_path(dir: &Path, hours: u32) -> PathBuf {
    dir.join(format!("template_{hours}.docx"))
}

/// Returns the template for `hours` if it exists.
///
/// # Errors
///
/// Returns [`ExportError::TemplateNotFound`] if the file is missing.
pub fn resolve_template(dir: &Path, hours: u32) -> Result<PathBuf, ExportError> {
    let path = template_path(dir, hours);
    if path.is_file() {
        Ok(path)
    } else {
        Err(ExportError::TemplateNotFound { path })
    }
}
