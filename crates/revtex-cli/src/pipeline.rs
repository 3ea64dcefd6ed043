//! Export pipeline: fragment assembly and output writing.
//!
//! The pipeline stages in order:
//! 1. **Assemble**: classify sheets and build every fragment in memory
//! 2. **Write**: sections under `sections/`, then the reviews list and the
//!    codes lookup table
//! 3. **Templates**: copy master template files, redacting recognized text
//!    formats
//!
//! Assembly is pure; nothing is written until every fragment for a sheet has
//! been fully built and redacted.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use revtex_model::Sheet;
use revtex_render::{RedactionEngine, assemble};

use crate::types::{ExportOutcome, SectionSummary};

/// Extensions recognized as redactable text when copying templates.
const TEXT_TEMPLATE_EXTENSIONS: &[&str] = &["tex", "txt", "md"];

/// Filesystem layout and options for one export run.
#[derive(Debug, Clone)]
pub struct ExportConfig<'a> {
    pub output_dir: &'a Path,
    /// Master template files to copy into the output directory. Missing
    /// entries are skipped with a note.
    pub templates: &'a [PathBuf],
    /// Assemble and report without writing any files.
    pub dry_run: bool,
}

/// Runs the full export over already-loaded sheets.
pub fn export(
    sheets: &[Sheet],
    codes_text: Option<&str>,
    engine: &RedactionEngine,
    config: &ExportConfig<'_>,
) -> Result<ExportOutcome> {
    let assembly = assemble(sheets, codes_text, engine);
    let sections_dir = config.output_dir.join("sections");
    if !config.dry_run {
        fs::create_dir_all(&sections_dir)
            .with_context(|| format!("create output directory {}", sections_dir.display()))?;
    }

    let mut outcome = ExportOutcome {
        redaction_active: engine.is_configured(),
        skipped: assembly.skipped.clone(),
        ..Default::default()
    };

    for section in &assembly.sections {
        let path = sections_dir.join(format!("{}.tex", section.stem));
        if !config.dry_run {
            fs::write(&path, &section.text)
                .with_context(|| format!("write section {}", path.display()))?;
        }
        info!(sheet = %section.sheet_name, path = %path.display(), "exported section");
        outcome.sections.push(SectionSummary {
            sheet_name: section.sheet_name.clone(),
            path,
            reviewer_count: section.reviewer_count,
            row_count: section.row_count,
        });
    }

    if let Some(index) = &assembly.index {
        let path = config.output_dir.join("reviews_list.tex");
        if !config.dry_run {
            fs::write(&path, index)
                .with_context(|| format!("write reviews list {}", path.display()))?;
        }
        info!(path = %path.display(), "wrote reviews list");
        outcome.index_path = Some(path);
    }

    if let Some(codes) = &assembly.codes_table {
        let path = config.output_dir.join("codes_table.tex");
        if !config.dry_run {
            fs::write(&path, codes)
                .with_context(|| format!("write codes table {}", path.display()))?;
        }
        info!(path = %path.display(), "wrote codes lookup table");
        outcome.codes_table_path = Some(path);
    }

    copy_templates(engine, config, &mut outcome)?;
    Ok(outcome)
}

/// Copies template files into the output directory. Recognized text formats
/// are redacted on the way through; anything else is copied verbatim. A text
/// template that fails to read as UTF-8 is copied raw with a warning.
fn copy_templates(
    engine: &RedactionEngine,
    config: &ExportConfig<'_>,
    outcome: &mut ExportOutcome,
) -> Result<()> {
    for template in config.templates {
        if !template.exists() {
            info!(template = %template.display(), "template not found, skipping copy");
            continue;
        }
        let Some(file_name) = template.file_name() else {
            continue;
        };
        let dest = config.output_dir.join(file_name);
        if config.dry_run {
            outcome.templates_copied.push(dest);
            continue;
        }
        if is_text_template(template) {
            match fs::read_to_string(template) {
                Ok(content) => {
                    fs::write(&dest, engine.apply(&content))
                        .with_context(|| format!("write template {}", dest.display()))?;
                }
                Err(error) => {
                    warn!(template = %template.display(), %error, "failed to read template as text, copying raw");
                    fs::copy(template, &dest)
                        .with_context(|| format!("copy template {}", dest.display()))?;
                }
            }
        } else {
            fs::copy(template, &dest)
                .with_context(|| format!("copy template {}", dest.display()))?;
        }
        info!(template = %template.display(), dest = %dest.display(), "copied template");
        outcome.templates_copied.push(dest);
    }
    Ok(())
}

fn is_text_template(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            TEXT_TEMPLATE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
