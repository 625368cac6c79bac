//! XLSX serialization of result rows.

use std::path::Path;

use rust_xlsxwriter::{Workbook, XlsxError};

use crate::constants::SHEET_NAME;
use crate::report::ReportRow;

const SENTENCE_COLUMN_WIDTH: f64 = 60.0;
const SCORE_COLUMN_WIDTH: f64 = 20.0;

/// Build a single-sheet workbook: header in row 0, one row per sentence below it.
///
/// Cells hold the same formatted strings the table shows, `N/A` included.
pub fn build_workbook(rows: &[ReportRow]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in ReportRow::header().iter().enumerate() {
        worksheet.write_string(0, col as u16, *title)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let row_num = (index + 1) as u32;
        for (col, value) in row.cells().iter().enumerate() {
            worksheet.write_string(row_num, col as u16, *value)?;
        }
    }

    worksheet.set_column_width(0, SENTENCE_COLUMN_WIDTH)?;
    for col in 1..4u16 {
        worksheet.set_column_width(col, SCORE_COLUMN_WIDTH)?;
    }

    Ok(workbook)
}

pub fn write_workbook(rows: &[ReportRow], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = build_workbook(rows)?;
    workbook.save(path)
}
