//! Error types for the lessonplan-export crate.

use std::path::PathBuf;

/// Errors that can occur while exporting a schedule document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    /// No template exists for the requested course length.
    #[error("template not found: {}", path.display())]
    TemplateNotFound {
        /// Path that was checked.
        path: PathBuf,
    },

    /// The field map could not be serialized.
    #[error("serialization failed: {reason}")]
    Serialization {
        /// Underlying error message.
        reason: String,
    },

    /// Writing the document failed.
    #[error("failed to write {}: {reason}", path.display())]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying error message.
        reason: String,
    },
}
