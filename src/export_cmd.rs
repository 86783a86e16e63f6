//! Export command: write the document field map for generated dates.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use lessonplan_export::{
    DocumentExporter, FieldMap, JsonExporter, resolve_template, write_document,
};

use crate::cli::ExportArgs;
use crate::convert;
use crate::plan::Plan;

/// Run the export pipeline.
pub fn run(args: ExportArgs) -> Result<()> {
    let _cmd = info_span!("export").entered();
    let plan = Plan::load(&args.schedule)?;
    let document = &plan.config.document;

    // 1. Template must exist before any work is done
    if let Some(ref dir) = document.template_dir {
        let template = resolve_template(dir, plan.hours)
            .with_context(|| format!("no template for {} hours", plan.hours))?;
        info!(path = %template.display(), "template found");
    }

    // 2. Generate dates
    let schedule = plan.generate()?;
    if document.labels.len() > schedule.len() {
        warn!(
            n_labels = document.labels.len(),
            n_entries = schedule.len(),
            "more labels than lesson dates; extra labels ignored"
        );
    }

    // 3. Flatten into template fields
    let meta = convert::build_document_meta(document);
    let fields = FieldMap::from_schedule(&meta, schedule.entries(), &document.labels);

    // 4. Render and write
    let exporter = JsonExporter;
    let bytes = exporter
        .export(&fields)
        .context("failed to render document")?;
    let output = args
        .output
        .unwrap_or_else(|| exporter.file_name().into());
    write_document(&output, &bytes)
        .with_context(|| format!("failed to write document: {}", output.display()))?;
    info!(path = %output.display(), n_fields = fields.len(), "document written");

    Ok(())
}
