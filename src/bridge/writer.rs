//! CSV serialization
//!
//! Writes the column headers followed by one record per row in column
//! order. Quoting and escaping (delimiters, quotes, line breaks inside
//! fields) are delegated to the csv crate's writer. Absent values become
//! empty fields.

use crate::model::Table;

use super::parser::Delimiter;

/// Default file name for exported tables
pub const DEFAULT_EXPORT_NAME: &str = "edited_data.csv";

/// Error type for CSV serialization
#[derive(Debug, Clone)]
pub struct WriteError {
    pub message: String,
}

impl std::fmt::Display for WriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CSV write error: {}", self.message)
    }
}

impl std::error::Error for WriteError {}

impl WriteError {
    fn new(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Serialize a table back to CSV text
pub fn serialize(table: &Table, delimiter: Delimiter) -> Result<String, WriteError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter.char() as u8)
        .from_writer(Vec::new());

    writer.write_record(table.columns()).map_err(WriteError::new)?;

    for row in table.rows() {
        let record = row
            .cells()
            .map(|cell| cell.map(|v| v.to_string()).unwrap_or_default());
        writer.write_record(record).map_err(WriteError::new)?;
    }

    let bytes = writer.into_inner().map_err(WriteError::new)?;
    String::from_utf8(bytes).map_err(WriteError::new)
}
