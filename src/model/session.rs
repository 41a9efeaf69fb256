//! Load-state machine owning the table
//!
//! Three states: `Empty` (nothing loaded yet), `Loading` (a load is in
//! flight; the prior table, if any, stays visible), and `Loaded`. A second
//! load request while one is in flight is rejected instead of racing the
//! first, and a failed load restores whatever was there before. There is no
//! path from `Loaded` back to `Empty` short of process exit.

use std::fmt;
use std::path::{Path, PathBuf};

use super::table::Table;

/// Rejection of a load request because another load is in flight
#[derive(Debug, Clone, PartialEq)]
pub struct LoadInFlight {
    /// Path of the load already in progress
    pub path: PathBuf,
}

impl fmt::Display for LoadInFlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "already loading {}", self.path.display())
    }
}

impl std::error::Error for LoadInFlight {}

#[derive(Debug, Clone, Default)]
enum LoadState {
    #[default]
    Empty,
    Loading {
        path: PathBuf,
        prev: Option<Table>,
    },
    Loaded(Table),
}

/// Single owner of table state across loads
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: LoadState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current table, if any
    ///
    /// While a load is in flight this is still the prior table; the new
    /// content only becomes visible once the load completes.
    pub fn table(&self) -> Option<&Table> {
        match &self.state {
            LoadState::Empty => None,
            LoadState::Loading { prev, .. } => prev.as_ref(),
            LoadState::Loaded(table) => Some(table),
        }
    }

    /// Mutable access to the table; None while Empty or Loading
    ///
    /// Edits are blocked during a load since the result would be discarded
    /// when the load completes.
    pub fn table_mut(&mut self) -> Option<&mut Table> {
        match &mut self.state {
            LoadState::Loaded(table) => Some(table),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading { .. })
    }

    /// Begin a load; rejected if one is already in flight
    pub fn begin_load(&mut self, path: PathBuf) -> Result<(), LoadInFlight> {
        match std::mem::take(&mut self.state) {
            LoadState::Loading { path: current, prev } => {
                self.state = LoadState::Loading {
                    path: current.clone(),
                    prev,
                };
                Err(LoadInFlight { path: current })
            }
            LoadState::Empty => {
                self.state = LoadState::Loading { path, prev: None };
                Ok(())
            }
            LoadState::Loaded(table) => {
                self.state = LoadState::Loading {
                    path,
                    prev: Some(table),
                };
                Ok(())
            }
        }
    }

    /// Install freshly parsed content, discarding any prior table and edits
    ///
    /// Panics if no load is in flight.
    pub fn complete_load(&mut self, table: Table) {
        assert!(self.is_loading(), "complete_load without a load in flight");
        self.state = LoadState::Loaded(table);
    }

    /// Abandon the in-flight load and restore the prior state
    ///
    /// Panics if no load is in flight.
    pub fn fail_load(&mut self) {
        assert!(self.is_loading(), "fail_load without a load in flight");
        self.state = match std::mem::take(&mut self.state) {
            LoadState::Loading { prev: Some(t), .. } => LoadState::Loaded(t),
            _ => LoadState::Empty,
        };
    }

    /// Path of the in-flight load, if any
    pub fn loading_path(&self) -> Option<&Path> {
        match &self.state {
            LoadState::Loading { path, .. } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    fn table() -> Table {
        Table::new(
            vec!["a".to_string()],
            vec![vec![Some(Value::Number(1.0))]],
        )
    }

    #[test]
    fn test_starts_empty() {
        let session = Session::new();
        assert!(session.table().is_none());
        assert!(!session.is_loading());
    }

    #[test]
    fn test_load_lifecycle() {
        let mut session = Session::new();
        session.begin_load(PathBuf::from("a.csv")).unwrap();
        assert!(session.is_loading());
        assert!(session.table().is_none());

        session.complete_load(table());
        assert!(!session.is_loading());
        assert_eq!(session.table().unwrap().row_count(), 1);
    }

    #[test]
    fn test_second_load_rejected_while_loading() {
        let mut session = Session::new();
        session.begin_load(PathBuf::from("a.csv")).unwrap();

        let err = session.begin_load(PathBuf::from("b.csv")).unwrap_err();
        assert_eq!(err.path, PathBuf::from("a.csv"));
        // The first load is still the one in flight
        assert_eq!(session.loading_path(), Some(Path::new("a.csv")));
    }

    #[test]
    fn test_failed_first_load_restores_empty() {
        let mut session = Session::new();
        session.begin_load(PathBuf::from("a.csv")).unwrap();
        session.fail_load();

        assert!(session.table().is_none());
        assert!(!session.is_loading());
    }

    #[test]
    fn test_failed_reload_keeps_prior_table() {
        let mut session = Session::new();
        session.begin_load(PathBuf::from("a.csv")).unwrap();
        session.complete_load(table());

        session.begin_load(PathBuf::from("b.csv")).unwrap();
        // Prior content stays visible during the load
        assert_eq!(session.table().unwrap().row_count(), 1);
        assert!(session.table_mut().is_none());

        session.fail_load();
        assert_eq!(session.table().unwrap().row_count(), 1);
        assert!(session.table_mut().is_some());
    }

    #[test]
    fn test_reload_replaces_content() {
        let mut session = Session::new();
        session.begin_load(PathBuf::from("a.csv")).unwrap();
        session.complete_load(table());
        session.table_mut().unwrap().add_row();
        assert_eq!(session.table().unwrap().row_count(), 2);

        session.begin_load(PathBuf::from("a.csv")).unwrap();
        session.complete_load(table());
        // Edits made before the reload are discarded
        assert_eq!(session.table().unwrap().row_count(), 1);
    }

    #[test]
    #[should_panic(expected = "without a load in flight")]
    fn test_complete_without_begin() {
        let mut session = Session::new();
        session.complete_load(table());
    }
}
