//! CSV serialization of result rows.

use std::io;
use std::path::Path;

use super::ExportError;
use crate::report::ReportRow;

/// Serialize `rows` with a header line, comma separated, `\n` terminated.
pub fn to_csv_string(rows: &[ReportRow]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(ReportRow::header())?;
    for row in rows {
        writer.write_record(row.cells())?;
    }

    let bytes = writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

pub fn write_csv(rows: &[ReportRow], path: &Path) -> Result<(), ExportError> {
    let content = to_csv_string(rows)?;
    std::fs::write(path, content)?;
    Ok(())
}
