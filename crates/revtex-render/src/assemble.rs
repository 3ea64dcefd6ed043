//! Fragment assembly: classification, rendering, and redaction per sheet.

use tracing::{debug, warn};

use revtex_model::{Sheet, fragment_stem};

use crate::classify::{SheetClass, classify};
use crate::codes::{parse_codes, render_codes_table};
use crate::index::render_index;
use crate::redact::RedactionEngine;
use crate::section::render_section;

/// One generated, already-redacted per-sheet fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionFragment {
    pub sheet_name: String,
    /// Filesystem-safe file stem derived from the sheet name.
    pub stem: String,
    pub text: String,
    pub reviewer_count: usize,
    pub row_count: usize,
}

/// The complete set of redacted output fragments for one run.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    /// Per-sheet fragments, in workbook order.
    pub sections: Vec<SectionFragment>,
    /// The reviews-list fragment; `None` when no section was generated.
    pub index: Option<String>,
    /// The check-code lookup fragment; `None` when no mapping was supplied.
    pub codes_table: Option<String>,
    /// Names of report sheets skipped for lack of a boundary row.
    pub skipped: Vec<String>,
}

/// Builds every output fragment for a run.
///
/// Non-report sheets are skipped silently; report sheets without a boundary
/// row are skipped with a warning. Every fragment passes through the
/// redaction engine before it leaves the core, so a sheet either fully
/// succeeds or contributes nothing.
pub fn assemble(sheets: &[Sheet], codes_text: Option<&str>, engine: &RedactionEngine) -> Assembly {
    let mut assembly = Assembly::default();
    let mut stems = Vec::new();

    for sheet in sheets {
        match classify(sheet) {
            SheetClass::NotReport => {
                debug!(sheet = %sheet.name, "not a report sheet, skipping");
            }
            SheetClass::NoBoundary => {
                warn!(sheet = %sheet.name, "skipping sheet: no 'Check code' header found");
                assembly.skipped.push(sheet.name.clone());
            }
            SheetClass::Report { boundary } => {
                let rendered = render_section(sheet, boundary);
                let stem = fragment_stem(&sheet.name);
                assembly.sections.push(SectionFragment {
                    sheet_name: sheet.name.clone(),
                    stem: stem.clone(),
                    text: engine.apply(&rendered.text),
                    reviewer_count: rendered.reviewer_count,
                    row_count: rendered.row_count,
                });
                stems.push(stem);
            }
        }
    }

    if !stems.is_empty() {
        assembly.index = Some(engine.apply(&render_index(&stems)));
    }
    if let Some(text) = codes_text {
        let table = parse_codes(text);
        assembly.codes_table = Some(engine.apply(&render_codes_table(&table)));
    }
    assembly
}
