//! CSV parsing using the csv crate
//!
//! RFC 4180 compliant parsing with support for quoted fields, escaped
//! quotes, and custom delimiters. The first record is the header and
//! defines the column names; data fields are type-inferred into [`Value`]s.

use std::io::Cursor;

use crate::model::Value;

/// Supported field delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    /// Get the character for this delimiter
    pub fn char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
        }
    }

    /// Delimiter implied by a file extension, where the extension is
    /// unambiguous
    ///
    /// `.csv` files are not always comma-delimited (semicolon exports are
    /// common), so they go through content detection instead.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "tsv" => Some(Delimiter::Tab),
            "psv" => Some(Delimiter::Pipe),
            _ => None,
        }
    }
}

/// Detect delimiter by analyzing the first few lines
pub fn detect_delimiter(content: &str) -> Delimiter {
    let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let pipe_count = first_lines.matches('|').count();
    let semi_count = first_lines.matches(';').count();

    let max = comma_count.max(tab_count).max(pipe_count).max(semi_count);

    if max == 0 {
        return Delimiter::Comma;
    }

    if tab_count == max {
        Delimiter::Tab
    } else if pipe_count == max {
        Delimiter::Pipe
    } else if semi_count == max {
        Delimiter::Semicolon
    } else {
        Delimiter::Comma
    }
}

/// Error type for CSV parsing
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
}

impl ParseError {
    fn new(message: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "CSV parse error at line {}: {}", line, self.message),
            None => write!(f, "CSV parse error: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Result of a successful parse: the derived column sequence plus typed rows
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCsv {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<Value>>>,
}

/// Derive the editable column sequence from the header record
///
/// Columns come from the header, in header order, so the shape of the first
/// data row does not matter. Precondition: the header has at least one field
/// (the parse entry point guards this).
pub fn derive_columns(headers: &csv::StringRecord) -> Vec<String> {
    headers.iter().map(str::to_string).collect()
}

/// Parse CSV content into columns and typed rows
///
/// The header record names the columns. Data rows with fewer fields than
/// the header are padded with absent values; fields beyond the header are
/// dropped. Empty fields are absent values. Zero data rows is an error so
/// callers never build a table without representative data.
pub fn parse_csv(content: &str, delimiter: Delimiter) -> Result<ParsedCsv, ParseError> {
    let cursor = Cursor::new(content.as_bytes());

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.char() as u8)
        .has_headers(true)
        .flexible(true)
        .from_reader(cursor);

    let headers = reader
        .headers()
        .map_err(|e| ParseError::new(e.to_string(), Some(1)))?
        .clone();
    let columns = derive_columns(&headers);
    if columns.is_empty() || (columns.len() == 1 && columns[0].is_empty()) {
        return Err(ParseError::new("no header fields", Some(1)));
    }

    let mut rows: Vec<Vec<Option<Value>>> = Vec::new();
    for (record_num, result) in reader.records().enumerate() {
        // Header occupies line 1, so data record N sits on line N + 2
        let record =
            result.map_err(|e| ParseError::new(e.to_string(), Some(record_num + 2)))?;

        let row = (0..columns.len())
            .map(|i| match record.get(i) {
                None | Some("") => None,
                Some(field) => Some(Value::infer(field)),
            })
            .collect();
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ParseError::new("no data rows", None));
    }

    Ok(ParsedCsv { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_csv() {
        let content = "name,age\nAlice,30\nBob,25\n";
        let parsed = parse_csv(content, Delimiter::Comma).unwrap();

        assert_eq!(parsed.columns, ["name", "age"]);
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(
            parsed.rows[0],
            vec![
                Some(Value::Text("Alice".to_string())),
                Some(Value::Number(30.0))
            ]
        );
    }

    #[test]
    fn test_parse_type_inference() {
        let content = "id,active,note\n1,true,hello\n2.5,false,\n";
        let parsed = parse_csv(content, Delimiter::Comma).unwrap();

        assert_eq!(parsed.rows[0][0], Some(Value::Number(1.0)));
        assert_eq!(parsed.rows[0][1], Some(Value::Bool(true)));
        assert_eq!(parsed.rows[0][2], Some(Value::Text("hello".to_string())));
        assert_eq!(parsed.rows[1][0], Some(Value::Number(2.5)));
        assert_eq!(parsed.rows[1][2], None);
    }

    #[test]
    fn test_parse_quoted_fields() {
        let content = "a,b\n\"hello, world\",\"with \"\"quotes\"\"\"\n";
        let parsed = parse_csv(content, Delimiter::Comma).unwrap();

        assert_eq!(
            parsed.rows[0][0],
            Some(Value::Text("hello, world".to_string()))
        );
        assert_eq!(
            parsed.rows[0][1],
            Some(Value::Text("with \"quotes\"".to_string()))
        );
    }

    #[test]
    fn test_parse_ragged_rows() {
        let content = "a,b,c\n1,2\n1,2,3,4\n";
        let parsed = parse_csv(content, Delimiter::Comma).unwrap();

        // Short row padded, long row truncated to the header width
        assert_eq!(parsed.rows[0].len(), 3);
        assert_eq!(parsed.rows[0][2], None);
        assert_eq!(parsed.rows[1].len(), 3);
        assert_eq!(parsed.rows[1][2], Some(Value::Number(3.0)));
    }

    #[test]
    fn test_parse_no_data_rows() {
        let err = parse_csv("name,age\n", Delimiter::Comma).unwrap_err();
        assert!(err.message.contains("no data rows"));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_csv("", Delimiter::Comma).is_err());
    }

    #[test]
    fn test_parse_tsv() {
        let content = "a\tb\n1\t2\n";
        let parsed = parse_csv(content, Delimiter::Tab).unwrap();
        assert_eq!(parsed.columns, ["a", "b"]);
        assert_eq!(parsed.rows[0][1], Some(Value::Number(2.0)));
    }

    #[test]
    fn test_delimiter_from_extension() {
        assert_eq!(Delimiter::from_extension("tsv"), Some(Delimiter::Tab));
        assert_eq!(Delimiter::from_extension("TSV"), Some(Delimiter::Tab));
        assert_eq!(Delimiter::from_extension("psv"), Some(Delimiter::Pipe));
        // csv goes through content detection
        assert_eq!(Delimiter::from_extension("csv"), None);
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("a,b,c\n1,2,3\n"), Delimiter::Comma);
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3\n"), Delimiter::Tab);
        assert_eq!(detect_delimiter("a|b|c\n1|2|3\n"), Delimiter::Pipe);
        assert_eq!(detect_delimiter("a;b;c\n1;2;3\n"), Delimiter::Semicolon);
        assert_eq!(detect_delimiter("plain text"), Delimiter::Comma);
    }
}
