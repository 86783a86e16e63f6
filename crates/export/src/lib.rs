//! # lessonplan-export
//!
//! Flattens a generated schedule into the named fields a document template
//! consumes, and hands them to a [`DocumentExporter`].
//!
//! | Field | Value |
//! |-------|-------|
//! | `name`, `kvant_name`, `year`, `group`, `module`, `doc_name` | [`DocumentMeta`] |
//! | `date_N` | N-th lesson date, `DD.MM.YYYY` |
//! | `head_N` | label of the N-th lesson (empty if none) |
//!
//! Templates are looked up per course length as `template_{hours}.docx`.

mod error;
mod exporter;
mod fields;
mod template;

pub use error::ExportError;
pub use exporter::{DocumentExporter, JsonExporter, write_document};
pub use fields::{DocumentMeta, FieldMap};
pub use template::{resolve_template, template_path};
