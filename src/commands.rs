//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The runtime loop in `main.rs` executes them and feeds any follow-up
//! messages back into `update`.

use std::path::PathBuf;

/// Side effects requested by the update layer
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Read a file; completion is delivered back as a SessionMsg
    LoadFile { path: PathBuf },
    /// Write serialized CSV to disk
    SaveFile { path: PathBuf, content: String },
    /// Exit the program
    Quit,
}
