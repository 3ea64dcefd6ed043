//! Workbook reading: calamine ranges into plain cell grids.

use std::path::Path;

use calamine::{Data, ExcelDateTime, Range, Reader, open_workbook_auto};
use tracing::debug;

use revtex_model::{CellValue, Sheet};

use crate::error::{IngestError, Result};

/// Opens a workbook and reads every worksheet's used range into a [`Sheet`],
/// preserving workbook order.
pub fn load_workbook(path: &Path) -> Result<Vec<Sheet>> {
    if !path.exists() {
        return Err(IngestError::WorkbookNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut workbook = open_workbook_auto(path).map_err(|error| IngestError::WorkbookOpen {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    let names = workbook.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|error| IngestError::SheetRead {
                path: path.to_path_buf(),
                sheet: name.clone(),
                message: error.to_string(),
            })?;
        let rows = convert_range(&range);
        debug!(sheet = %name, rows = rows.len(), "loaded sheet");
        sheets.push(Sheet::new(name, rows));
    }
    Ok(sheets)
}

fn convert_range(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    range
        .rows()
        .map(|row| row.iter().map(convert_cell).collect())
        .collect()
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(text) => CellValue::Text(text.clone()),
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Float(value) => CellValue::Number(*value),
        Data::Bool(value) => CellValue::Text(if *value { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(value) => CellValue::Text(format_datetime(value)),
        Data::DateTimeIso(text) | Data::DurationIso(text) => CellValue::Text(text.clone()),
        // error cells carry no reviewable content
        Data::Error(_) => CellValue::Empty,
    }
}

fn format_datetime(value: &ExcelDateTime) -> String {
    match value.as_datetime() {
        Some(datetime) if datetime.time() == chrono::NaiveTime::MIN => {
            datetime.format("%Y-%m-%d").to_string()
        }
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => value.as_f64().to_string(),
    }
}
