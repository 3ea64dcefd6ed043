//! Result types shared by the pipeline, the stats command, and the summary
//! printers.

use std::path::PathBuf;

use serde::Serialize;

/// Summary of one exported per-sheet fragment.
#[derive(Debug, Clone, Serialize)]
pub struct SectionSummary {
    pub sheet_name: String,
    pub path: PathBuf,
    pub reviewer_count: usize,
    pub row_count: usize,
}

/// Everything one export run produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportOutcome {
    pub sections: Vec<SectionSummary>,
    /// Report sheets skipped for lack of a "Check code" row.
    pub skipped: Vec<String>,
    pub index_path: Option<PathBuf>,
    pub codes_table_path: Option<PathBuf>,
    pub templates_copied: Vec<PathBuf>,
    pub redaction_active: bool,
}

/// Unique check codes seen on one report sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetCodeCount {
    pub sheet_name: String,
    pub unique_codes: usize,
}

/// How many report sheets a check code appeared on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeFrequency {
    pub code: i64,
    /// Resolved from the codes mapping; `None` when the code is unmapped.
    pub description: Option<String>,
    pub sheets_affected: usize,
}

/// Cross-sheet activity for one reviewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewerActivity {
    pub reviewer: String,
    pub sheets_reviewed: usize,
    /// Unique (check code, sheet) findings reported by this reviewer.
    pub unique_findings: usize,
}

/// Cross-sheet review statistics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewStats {
    pub sheets: Vec<SheetCodeCount>,
    pub top_codes: Vec<CodeFrequency>,
    pub reviewers: Vec<ReviewerActivity>,
}
