//! Console summaries for export runs and review statistics.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{ExportOutcome, ReviewStats};

/// Prints the export summary: one row per generated section, then the
/// auxiliary outputs and any skipped sheets.
pub fn print_export_summary(outcome: &ExportOutcome) {
    if outcome.sections.is_empty() {
        println!("No report sheets found.");
    } else {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Sheet"),
            header_cell("Reviewers"),
            header_cell("Rows"),
            header_cell("Output"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        align_column(&mut table, 2, CellAlignment::Right);
        for section in &outcome.sections {
            table.add_row(vec![
                Cell::new(&section.sheet_name)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                Cell::new(section.reviewer_count),
                Cell::new(section.row_count),
                Cell::new(section.path.display()),
            ]);
        }
        println!("{table}");
    }
    if let Some(path) = &outcome.index_path {
        println!("Reviews list: {}", path.display());
    }
    if let Some(path) = &outcome.codes_table_path {
        println!("Codes table: {}", path.display());
    }
    for template in &outcome.templates_copied {
        println!("Template: {}", template.display());
    }
    println!(
        "Redaction: {}",
        if outcome.redaction_active {
            "active"
        } else {
            "not configured"
        }
    );
    if !outcome.skipped.is_empty() {
        eprintln!("Skipped (no 'Check code' header):");
        for name in &outcome.skipped {
            eprintln!("- {name}");
        }
    }
}

/// Prints the three statistics tables: findings per sheet, codes ranked by
/// sheets affected, and reviewer activity.
pub fn print_stats(stats: &ReviewStats) {
    if stats.sheets.is_empty() {
        println!("No report sheets with countable findings.");
        return;
    }

    let mut sheets = Table::new();
    sheets.set_header(vec![header_cell("Sheet"), header_cell("Unique codes")]);
    apply_table_style(&mut sheets);
    align_column(&mut sheets, 1, CellAlignment::Right);
    for entry in &stats.sheets {
        sheets.add_row(vec![
            Cell::new(&entry.sheet_name),
            Cell::new(entry.unique_codes),
        ]);
    }
    println!("Findings per sheet:");
    println!("{sheets}");

    let mut codes = Table::new();
    codes.set_header(vec![
        header_cell("Code"),
        header_cell("Description"),
        header_cell("Sheets affected"),
    ]);
    apply_table_style(&mut codes);
    align_column(&mut codes, 0, CellAlignment::Right);
    align_column(&mut codes, 2, CellAlignment::Right);
    for entry in &stats.top_codes {
        codes.add_row(vec![
            Cell::new(entry.code),
            match &entry.description {
                Some(description) => Cell::new(description),
                None => dim_cell("---"),
            },
            Cell::new(entry.sheets_affected),
        ]);
    }
    println!();
    println!("Check codes by sheets affected:");
    println!("{codes}");

    let mut reviewers = Table::new();
    reviewers.set_header(vec![
        header_cell("Reviewer"),
        header_cell("Sheets reviewed"),
        header_cell("Unique findings"),
    ]);
    apply_table_style(&mut reviewers);
    align_column(&mut reviewers, 1, CellAlignment::Right);
    align_column(&mut reviewers, 2, CellAlignment::Right);
    for entry in &stats.reviewers {
        reviewers.add_row(vec![
            Cell::new(&entry.reviewer)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(entry.sheets_reviewed),
            Cell::new(entry.unique_findings),
        ]);
    }
    println!();
    println!("Reviewer activity:");
    println!("{reviewers}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
