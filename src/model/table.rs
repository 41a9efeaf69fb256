//! The tabular edit model
//!
//! `Table` is the single source of truth for row and column state. The
//! column sequence is derived once from the header record at load time and
//! stays fixed across every edit; only a fresh load replaces it. Rows store
//! one optional value per column, so a missing field reads as an empty cell
//! and serializes as an empty field.
//!
//! Out-of-range row indices and unknown column names are contract
//! violations, not user-facing errors: callers validate user input before
//! constructing mutations, and `Table` asserts its preconditions.

use super::value::Value;

/// One record: a value slot per column, in column order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    cells: Vec<Option<Value>>,
}

impl Row {
    /// Create a row with `width` absent values
    pub fn with_width(width: usize) -> Self {
        Self {
            cells: vec![None; width],
        }
    }

    /// Create a row from parsed cells, padded or truncated to `width`
    pub fn from_cells(mut cells: Vec<Option<Value>>, width: usize) -> Self {
        cells.resize(width, None);
        Self { cells }
    }

    /// Get the value at a column index, or None if the cell is absent
    pub fn get(&self, col: usize) -> Option<&Value> {
        self.cells.get(col).and_then(|c| c.as_ref())
    }

    pub fn set(&mut self, col: usize, value: Option<Value>) {
        self.cells[col] = value;
    }

    /// Iterate cells in column order
    pub fn cells(&self) -> impl Iterator<Item = Option<&Value>> + '_ {
        self.cells.iter().map(|c| c.as_ref())
    }

    /// True if every cell is absent
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }
}

/// In-memory table: ordered rows plus the fixed, derived column sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from a derived column sequence and parsed rows
    ///
    /// Replaces any prior content wholesale (the load path discards unsaved
    /// edits). Ragged rows are padded to the column count; fields beyond the
    /// header are dropped. Precondition: `columns` is non-empty.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<Value>>>) -> Self {
        assert!(!columns.is_empty(), "table requires at least one column");
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|cells| Row::from_cells(cells, width))
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Resolve a column name to its index in the column sequence
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Get the value at (row, col), or None if the cell is absent
    ///
    /// Panics if `row` is out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Value> {
        assert!(
            row < self.rows.len(),
            "row index {} out of range ({} rows)",
            row,
            self.rows.len()
        );
        self.rows[row].get(col)
    }

    /// Replace the value at (row, column) with the inferred form of `raw`
    ///
    /// An empty `raw` clears the cell. Exactly one cell changes; all other
    /// rows and the column sequence are untouched. Panics if `row` is out of
    /// range or `column` is not in the column sequence.
    pub fn update_cell(&mut self, row: usize, column: &str, raw: &str) {
        assert!(
            row < self.rows.len(),
            "row index {} out of range ({} rows)",
            row,
            self.rows.len()
        );
        let col = self
            .column_index(column)
            .unwrap_or_else(|| panic!("unknown column {:?}", column));

        let value = if raw.is_empty() {
            None
        } else {
            Some(Value::infer(raw))
        };
        self.rows[row].set(col, value);
    }

    /// Remove the row at `row`, shifting subsequent rows down by one
    ///
    /// The column sequence is unaffected even if the removed row was part of
    /// the data the columns were derived from. Panics if out of range.
    pub fn remove_row(&mut self, row: usize) {
        assert!(
            row < self.rows.len(),
            "row index {} out of range ({} rows)",
            row,
            self.rows.len()
        );
        self.rows.remove(row);
    }

    /// Append a blank row: every value absent until edited
    pub fn add_row(&mut self) {
        self.rows.push(Row::with_width(self.columns.len()));
    }
}
