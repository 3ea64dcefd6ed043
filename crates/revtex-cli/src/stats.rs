//! Cross-sheet review statistics.
//!
//! Counting rules: a check code counts once per sheet it appears on, a
//! reviewer counts once per sheet they reviewed, and a reviewer's findings
//! count unique (check code, sheet) pairs. Body rows missing either a
//! numeric check code or a reviewer name are ignored.

use revtex_model::{CellValue, CodeTable, Sheet};
use revtex_render::{SheetClass, classify};

use crate::types::{CodeFrequency, ReviewStats, ReviewerActivity, SheetCodeCount};

/// Computes statistics over every report sheet in the workbook.
///
/// Ranked tables sort by descending count; ties keep first-seen order.
pub fn compute_stats(sheets: &[Sheet], codes: Option<&CodeTable>) -> ReviewStats {
    let mut stats = ReviewStats::default();
    let mut code_sheets: Vec<(i64, usize)> = Vec::new();
    let mut reviewers: Vec<ReviewerActivity> = Vec::new();

    for sheet in sheets {
        let SheetClass::Report { boundary } = classify(sheet) else {
            continue;
        };
        let pairs = findings(&sheet.rows[boundary + 1..]);
        if pairs.is_empty() {
            continue;
        }

        let mut unique_codes: Vec<i64> = Vec::new();
        for (_, code) in &pairs {
            if !unique_codes.contains(code) {
                unique_codes.push(*code);
            }
        }
        stats.sheets.push(SheetCodeCount {
            sheet_name: sheet.name.clone(),
            unique_codes: unique_codes.len(),
        });
        for code in &unique_codes {
            match code_sheets.iter().position(|(seen, _)| seen == code) {
                Some(index) => code_sheets[index].1 += 1,
                None => code_sheets.push((*code, 1)),
            }
        }

        let mut sheet_reviewers: Vec<&str> = Vec::new();
        let mut unique_pairs: Vec<(&str, i64)> = Vec::new();
        for (reviewer, code) in &pairs {
            if !sheet_reviewers.contains(&reviewer.as_str()) {
                sheet_reviewers.push(reviewer);
            }
            if !unique_pairs.contains(&(reviewer.as_str(), *code)) {
                unique_pairs.push((reviewer, *code));
            }
        }
        for (reviewer, _) in &unique_pairs {
            activity(&mut reviewers, reviewer).unique_findings += 1;
        }
        for reviewer in &sheet_reviewers {
            activity(&mut reviewers, reviewer).sheets_reviewed += 1;
        }
    }

    stats.top_codes = code_sheets
        .into_iter()
        .map(|(code, sheets_affected)| CodeFrequency {
            code,
            description: codes
                .and_then(|table| table.description_for(&code.to_string()))
                .map(str::to_string),
            sheets_affected,
        })
        .collect();
    stats
        .top_codes
        .sort_by(|a, b| b.sheets_affected.cmp(&a.sheets_affected));

    reviewers.sort_by(|a, b| b.unique_findings.cmp(&a.unique_findings));
    stats.reviewers = reviewers;
    stats
}

/// Extracts (reviewer, check code) pairs from the body rows. Both fields
/// must be present: the code numeric, the reviewer non-blank after trimming.
fn findings(rows: &[Vec<CellValue>]) -> Vec<(String, i64)> {
    let mut pairs = Vec::new();
    for row in rows {
        let code = row
            .first()
            .map(CellValue::display_text)
            .and_then(|text| parse_code(&text));
        let reviewer = row
            .get(5)
            .map(CellValue::display_text)
            .filter(|name| !name.is_empty());
        if let (Some(code), Some(reviewer)) = (code, reviewer) {
            pairs.push((reviewer, code));
        }
    }
    pairs
}

fn parse_code(text: &str) -> Option<i64> {
    if text.is_empty() {
        return None;
    }
    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => Some(value as i64),
        _ => None,
    }
}

fn activity<'a>(reviewers: &'a mut Vec<ReviewerActivity>, name: &str) -> &'a mut ReviewerActivity {
    let index = match reviewers.iter().position(|entry| entry.reviewer == name) {
        Some(index) => index,
        None => {
            reviewers.push(ReviewerActivity {
                reviewer: name.to_string(),
                sheets_reviewed: 0,
                unique_findings: 0,
            });
            reviewers.len() - 1
        }
    };
    &mut reviewers[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_code_accepts_integral_forms() {
        assert_eq!(parse_code("12"), Some(12));
        assert_eq!(parse_code("12.0"), Some(12));
        assert_eq!(parse_code("12.5"), None);
        assert_eq!(parse_code("code"), None);
        assert_eq!(parse_code(""), None);
    }

    #[test]
    fn test_findings_require_both_fields() {
        let rows = vec![
            vec![
                CellValue::Number(1.0),
                CellValue::Empty,
                CellValue::Empty,
                CellValue::Empty,
                CellValue::Empty,
                CellValue::Text("Ann".to_string()),
            ],
            // reviewer missing
            vec![CellValue::Number(2.0)],
            // code not numeric
            vec![
                CellValue::Text("x".to_string()),
                CellValue::Empty,
                CellValue::Empty,
                CellValue::Empty,
                CellValue::Empty,
                CellValue::Text("Ben".to_string()),
            ],
        ];
        let pairs = findings(&rows);
        assert_eq!(pairs, vec![("Ann".to_string(), 1)]);
    }
}
