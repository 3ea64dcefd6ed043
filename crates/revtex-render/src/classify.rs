//! Report-sheet recognition and header/body boundary location.

use revtex_model::{CellValue, Sheet};

/// Marker text that identifies a report sheet in its top-left cell.
pub const REPORT_MARKER: &str = "Code Review Report";

/// Label of the row separating the metadata header from the review body.
pub const BOUNDARY_LABEL: &str = "Check code";

/// Classification outcome for one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetClass {
    /// Not a report sheet: no rows, or the top-left cell is not a string
    /// containing the marker. Silently skipped.
    NotReport,
    /// Recognized as a report but missing the boundary row. Skipped with a
    /// warning.
    NoBoundary,
    /// A report sheet whose boundary row sits at this index.
    Report { boundary: usize },
}

/// Classifies a sheet and locates its header/body boundary.
pub fn classify(sheet: &Sheet) -> SheetClass {
    let is_report = matches!(
        sheet.first_cell(),
        Some(CellValue::Text(text)) if text.contains(REPORT_MARKER)
    );
    if !is_report {
        return SheetClass::NotReport;
    }
    match find_boundary(sheet) {
        Some(boundary) => SheetClass::Report { boundary },
        None => SheetClass::NoBoundary,
    }
}

/// First row whose column-0 cell trims to exactly the boundary label.
fn find_boundary(sheet: &Sheet) -> Option<usize> {
    sheet.rows.iter().position(|row| {
        matches!(row.first(), Some(CellValue::Text(text)) if text.trim() == BOUNDARY_LABEL)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    #[test]
    fn test_empty_sheet_is_not_a_report() {
        let sheet = Sheet::new("Empty", vec![]);
        assert_eq!(classify(&sheet), SheetClass::NotReport);
    }

    #[test]
    fn test_marker_must_be_a_string_cell() {
        let sheet = Sheet::new("Numbers", vec![vec![CellValue::Number(1.0)]]);
        assert_eq!(classify(&sheet), SheetClass::NotReport);
    }

    #[test]
    fn test_marker_is_matched_as_substring() {
        let sheet = Sheet::new(
            "R",
            vec![
                vec![text("Code Review Report v2")],
                vec![text("Check code")],
            ],
        );
        assert_eq!(classify(&sheet), SheetClass::Report { boundary: 1 });
    }

    #[test]
    fn test_report_without_boundary_is_distinct() {
        let sheet = Sheet::new("R", vec![vec![text("Code Review Report")]]);
        assert_eq!(classify(&sheet), SheetClass::NoBoundary);
    }

    #[test]
    fn test_boundary_label_is_trimmed_exact_match() {
        let sheet = Sheet::new(
            "R",
            vec![
                vec![text("Code Review Report")],
                vec![text("Check codes")],
                vec![text("  Check code  ")],
            ],
        );
        assert_eq!(classify(&sheet), SheetClass::Report { boundary: 2 });
    }
}
