//! Per-sheet fragment rendering: metadata block plus per-reviewer tables.

use revtex_model::{MetadataField, ReviewerGroups, Sheet};

use crate::latex::sanitize;
use crate::metadata::extract_metadata;
use crate::reviewers::group_by_reviewer;

const METADATA_COLSPEC: &str = "@{}>{\\raggedright\\arraybackslash}p{0.34\\textwidth} \
                                >{\\raggedright\\arraybackslash}p{0.62\\textwidth}@{}";

// Column widths as fractions of \textwidth: code 6%, line 10%, comment 40%,
// suggestion 44%.
const REVIEW_COLSPEC: &str = ">{\\raggedright\\arraybackslash}p{0.06\\textwidth} \
                              >{\\raggedright\\arraybackslash}p{0.10\\textwidth} \
                              >{\\raggedright\\arraybackslash}p{0.40\\textwidth} \
                              >{\\raggedright\\arraybackslash}p{0.44\\textwidth}";

const REVIEW_HEADER: &str =
    "\\textbf{Code} & \\textbf{Line} & \\textbf{Comment} & \\textbf{Suggestion / Fix} \\\\";

/// A rendered per-sheet fragment with the counts the summary reports.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRender {
    pub text: String,
    pub reviewer_count: usize,
    pub row_count: usize,
}

/// Renders the fragment for a report sheet whose boundary row is known.
///
/// The rows above the boundary become the metadata block; the rows below it
/// (the boundary's own header row excluded) become one table per reviewer in
/// first-seen order. The description and reviewer columns are omitted from
/// the tables: descriptions live in the check-code lookup and the reviewer
/// is the table's own heading.
pub fn render_section(sheet: &Sheet, boundary: usize) -> SectionRender {
    let header_rows = &sheet.rows[..boundary];
    let body_rows = &sheet.rows[boundary + 1..];
    let metadata = extract_metadata(header_rows);
    let grouped = group_by_reviewer(body_rows);

    let title = sanitize(&sheet.name);
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("% --- Begin section for sheet: {title} ---"));
    lines.push("\\clearpage".to_string());
    lines.push(format!("\\subsection{{{title}}}"));
    lines.push("\\noindent\\rule{\\textwidth}{0.4pt}\n".to_string());

    render_metadata(&mut lines, &metadata);

    lines.push("\n\\vspace{1em}".to_string());
    lines.push("% Reviewer-specific tables (no reviewer column)".to_string());
    if grouped.is_empty() {
        lines.push("% (no review rows found)".to_string());
    } else {
        render_reviewer_tables(&mut lines, &grouped);
    }
    lines.push(format!("% --- End section for sheet: {title} ---\n"));

    SectionRender {
        text: lines.join("\n"),
        reviewer_count: grouped.len(),
        row_count: grouped.row_count(),
    }
}

fn render_metadata(lines: &mut Vec<String>, metadata: &[MetadataField]) {
    lines.push("\\begin{flushleft}".to_string());
    lines.push(format!("\\begin{{tabular}}{{{METADATA_COLSPEC}}}"));
    for field in metadata {
        let key = format!("\\textbf{{{}}}", sanitize(&field.key));
        for (index, value) in field.values.iter().enumerate() {
            let value = sanitize(value);
            if index == 0 {
                lines.push(format!("{key} & {value} \\\\"));
            } else {
                lines.push(format!(" & {value} \\\\"));
            }
        }
    }
    lines.push("\\end{tabular}".to_string());
    lines.push("\\end{flushleft}".to_string());
    lines.push("\\vspace{1em}".to_string());
}

fn render_reviewer_tables(lines: &mut Vec<String>, grouped: &ReviewerGroups) {
    for (reviewer, rows) in grouped.iter() {
        // the group key is already sanitized, so it is used as-is here
        lines.push(format!("\\subsubsection{{Reviewer: {reviewer}}}"));
        lines.push("\\vspace{0.3em}".to_string());
        lines.push(format!("\\begin{{longtable}}{{{REVIEW_COLSPEC}}}"));
        lines.push("\\toprule".to_string());
        lines.push(REVIEW_HEADER.to_string());
        lines.push("\\midrule".to_string());
        lines.push("\\endfirsthead".to_string());
        lines.push("\\toprule".to_string());
        lines.push(REVIEW_HEADER.to_string());
        lines.push("\\midrule".to_string());
        lines.push("\\endhead".to_string());
        lines.push("\\midrule".to_string());
        lines.push("\\multicolumn{4}{r}{\\textit{Continued on next page}} \\\\".to_string());
        lines.push("\\endfoot".to_string());
        lines.push("\\bottomrule".to_string());
        lines.push("\\endlastfoot".to_string());

        for row in rows {
            lines.push(format!(
                "{} & {} & {} & {} \\\\",
                row.code, row.line, row.comment, row.suggestion
            ));
        }
        lines.push("\\end{longtable}".to_string());
        lines.push(String::new()); // blank line between reviewers
    }
}
