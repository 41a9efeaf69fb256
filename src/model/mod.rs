//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture
//! pattern: the load-state machine that owns the table, the table itself,
//! and the page window over it.

mod pager;
mod session;
mod table;
mod value;

pub use pager::{Pager, PAGE_SIZES};
pub use session::{LoadInFlight, Session};
pub use table::{Row, Table};
pub use value::Value;

use std::path::PathBuf;

use crate::bridge::Delimiter;
use crate::config::GridConfig;

/// Top-level application state
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Load-state machine owning the table
    pub session: Session,
    /// Current page window over the rows
    pub pager: Pager,
    /// Persisted preferences
    pub config: GridConfig,
    /// Delimiter of the loaded file, reused on export
    pub delimiter: Delimiter,
    /// Export path override from the CLI (`--output`)
    pub output_path: Option<PathBuf>,
    /// One-shot status/error line shown under the grid
    pub status: Option<String>,
}

impl AppModel {
    pub fn new(config: GridConfig) -> Self {
        Self {
            session: Session::new(),
            pager: Pager::new(config.page_size),
            config,
            delimiter: Delimiter::default(),
            output_path: None,
            status: None,
        }
    }

    /// Row count of the current table, or zero when nothing is loaded
    pub fn row_count(&self) -> usize {
        self.session.table().map_or(0, |t| t.row_count())
    }
}
