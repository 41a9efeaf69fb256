//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

/// Top-level message, dispatched to per-domain update functions
#[derive(Debug, Clone)]
pub enum Msg {
    Session(SessionMsg),
    Table(TableMsg),
    Page(PageMsg),
    App(AppMsg),
}

/// Load/export lifecycle messages
#[derive(Debug, Clone)]
pub enum SessionMsg {
    /// Request loading a CSV file into the table
    BeginLoad(PathBuf),
    /// File content arrived; parse it and install the result
    LoadCompleted { path: PathBuf, content: String },
    /// Reading the file failed before parsing
    LoadFailed { path: PathBuf, error: String },
    /// Serialize the table and write it out (None = default export path)
    Export { path: Option<PathBuf> },
}

/// Table mutation messages
#[derive(Debug, Clone)]
pub enum TableMsg {
    /// Replace the value at (row, column) with the raw edited text
    EditCell {
        row: usize,
        column: String,
        value: String,
    },
    /// Append a blank row
    AddRow,
    /// Remove the row at this index, shifting later rows down
    RemoveRow { row: usize },
}

/// Page navigation messages
#[derive(Debug, Clone, Copy)]
pub enum PageMsg {
    /// Jump to the first page
    First,
    /// Previous page
    Prev,
    /// Next page
    Next,
    /// Jump to a page (0-indexed)
    Goto(usize),
    /// Change rows-per-page (must be a recognized size)
    SetPageSize(usize),
}

/// Application-level messages
#[derive(Debug, Clone, Copy)]
pub enum AppMsg {
    /// Exit the program
    Quit,
}
