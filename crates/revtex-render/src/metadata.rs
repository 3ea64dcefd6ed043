//! Metadata extraction from the rows above the boundary.

use revtex_model::{CellValue, MetadataField};

/// Placeholder value for a metadata row with no non-empty value cells.
pub const EMPTY_VALUE: &str = "---";

/// Separator joining multiple filled cells on one physical row.
const CELL_JOIN: &str = " - ";

/// Parses the header rows into ordered metadata fields.
///
/// A non-empty first cell opens a field (the key gains a trailing `:` if
/// missing); the remaining non-empty cells on the row, joined with `" - "`,
/// become one value. A row whose first cell is empty continues the open
/// field with another value; with no open field it is dropped. Rows with all
/// cells empty are skipped. Duplicate keys merge their values into the first
/// occurrence. Values are stored raw; the renderer sanitizes them.
pub fn extract_metadata(rows: &[Vec<CellValue>]) -> Vec<MetadataField> {
    let mut fields: Vec<MetadataField> = Vec::new();
    let mut open: Option<usize> = None;

    for row in rows {
        let cells: Vec<String> = row.iter().map(CellValue::display_text).collect();
        if cells.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        let key = cells.first().map(String::as_str).unwrap_or("");
        let value = join_value_cells(&cells[1..]);

        if !key.is_empty() {
            let mut key = key.to_string();
            if !key.ends_with(':') {
                key.push(':');
            }
            if let Some(index) = fields.iter().position(|field| field.key == key) {
                fields[index].values.push(value);
                open = Some(index);
            } else {
                fields.push(MetadataField {
                    key,
                    values: vec![value],
                });
                open = Some(fields.len() - 1);
            }
        } else if let Some(index) = open {
            fields[index].values.push(value);
        }
    }
    fields
}

fn join_value_cells(cells: &[String]) -> String {
    let filled: Vec<&str> = cells
        .iter()
        .map(String::as_str)
        .filter(|cell| !cell.is_empty())
        .collect();
    if filled.is_empty() {
        EMPTY_VALUE.to_string()
    } else {
        filled.join(CELL_JOIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    fn row(cells: &[&str]) -> Vec<CellValue> {
        cells.iter().map(|cell| text(cell)).collect()
    }

    #[test]
    fn test_key_order_and_continuation() {
        let rows = vec![
            row(&["Project Code:", "ABC-123"]),
            row(&["", "continued"]),
            row(&["Reviewer(s):", "Bob"]),
        ];
        let fields = extract_metadata(&rows);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].key, "Project Code:");
        assert_eq!(fields[0].values, vec!["ABC-123", "continued"]);
        assert_eq!(fields[1].key, "Reviewer(s):");
        assert_eq!(fields[1].values, vec!["Bob"]);
    }

    #[test]
    fn test_missing_colon_is_appended() {
        let fields = extract_metadata(&[row(&["Date", "2024-05-01"])]);
        assert_eq!(fields[0].key, "Date:");
    }

    #[test]
    fn test_multiple_cells_join_with_dash() {
        let fields = extract_metadata(&[row(&["Authors:", "Ann", "", "Ben"])]);
        assert_eq!(fields[0].values, vec!["Ann - Ben"]);
    }

    #[test]
    fn test_key_only_row_gets_placeholder() {
        let fields = extract_metadata(&[row(&["Status:"])]);
        assert_eq!(fields[0].values, vec![EMPTY_VALUE]);
    }

    #[test]
    fn test_all_empty_rows_are_skipped() {
        let rows = vec![
            vec![CellValue::Empty, CellValue::Empty],
            row(&["", "  "]),
            row(&["Key:", "value"]),
        ];
        let fields = extract_metadata(&rows);
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_continuation_without_open_field_is_dropped() {
        let rows = vec![row(&["", "orphan"]), row(&["Key:", "value"])];
        let fields = extract_metadata(&rows);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].key, "Key:");
        assert_eq!(fields[0].values, vec!["value"]);
    }

    #[test]
    fn test_duplicate_keys_merge_into_first_occurrence() {
        let rows = vec![
            row(&["Reviewer(s):", "Ann"]),
            row(&["Scope:", "parser"]),
            row(&["Reviewer(s):", "Ben"]),
        ];
        let fields = extract_metadata(&rows);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].key, "Reviewer(s):");
        assert_eq!(fields[0].values, vec!["Ann", "Ben"]);
        assert_eq!(fields[1].key, "Scope:");
    }

    #[test]
    fn test_number_cells_render_without_decimal_point() {
        let rows = vec![vec![text("Revision:"), CellValue::Number(3.0)]];
        let fields = extract_metadata(&rows);
        assert_eq!(fields[0].values, vec!["3"]);
    }
}
