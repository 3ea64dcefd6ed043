//! Grouping of review body rows by reviewer.

use revtex_model::{CellValue, ReviewRow, ReviewerGroups, UNKNOWN_REVIEWER};

use crate::latex::sanitize_cell;

/// Groups the rows below the boundary by reviewer.
///
/// Rows with every cell blank are dropped. Each remaining cell is sanitized
/// before interpretation, then the row is padded or truncated to the fixed
/// 6-column layout. A blank reviewer cell falls back to `"Unknown"`. Group
/// order is first appearance of each reviewer; rows keep source order within
/// their group.
pub fn group_by_reviewer(rows: &[Vec<CellValue>]) -> ReviewerGroups {
    let mut groups = ReviewerGroups::default();
    for row in rows {
        if row.iter().all(CellValue::is_blank) {
            continue;
        }
        let cells: Vec<String> = row.iter().map(sanitize_cell).collect();
        let review = ReviewRow::from_cells(cells);
        let reviewer = if review.reviewer.trim().is_empty() {
            UNKNOWN_REVIEWER.to_string()
        } else {
            review.reviewer.clone()
        };
        groups.push(&reviewer, review);
    }
    groups
}
