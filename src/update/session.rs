//! Load and export update functions
//!
//! Handles the full load lifecycle: a `BeginLoad` request puts the session
//! into Loading and asks the runtime to read the file; the completion (or
//! failure) message is the continuation that installs or abandons the
//! result. Parse failures never crash: the session keeps its prior state
//! and the error lands in the status line.

use std::path::PathBuf;

use crate::bridge::{self, detect_delimiter, parse_csv, Delimiter, DEFAULT_EXPORT_NAME};
use crate::commands::Cmd;
use crate::messages::SessionMsg;
use crate::model::{AppModel, Table};

/// Handle load/export messages
pub fn update_session(model: &mut AppModel, msg: SessionMsg) -> Option<Cmd> {
    match msg {
        SessionMsg::BeginLoad(path) => begin_load(model, path),
        SessionMsg::LoadCompleted { path, content } => load_completed(model, path, content),
        SessionMsg::LoadFailed { path, error } => load_failed(model, path, error),
        SessionMsg::Export { path } => export(model, path),
    }
}

/// Start a load, unless one is already in flight
fn begin_load(model: &mut AppModel, path: PathBuf) -> Option<Cmd> {
    match model.session.begin_load(path.clone()) {
        Ok(()) => {
            tracing::debug!("Loading {}", path.display());
            Some(Cmd::LoadFile { path })
        }
        Err(e) => {
            tracing::warn!("Load of {} rejected: {}", path.display(), e);
            model.status = Some(format!("Load rejected: {}", e));
            None
        }
    }
}

/// Parse arrived content and install the new table
fn load_completed(model: &mut AppModel, path: PathBuf, content: String) -> Option<Cmd> {
    let delimiter = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(Delimiter::from_extension)
        .unwrap_or_else(|| detect_delimiter(&content));

    match parse_csv(&content, delimiter) {
        Ok(parsed) => {
            let table = Table::new(parsed.columns, parsed.rows);
            let rows = table.row_count();
            model.session.complete_load(table);
            model.delimiter = delimiter;
            model.pager.first();
            model.status = Some(format!("Loaded {} ({} rows)", path.display(), rows));
            tracing::info!("Loaded {} with {} rows", path.display(), rows);
        }
        Err(e) => {
            model.session.fail_load();
            model.status = Some(format!("Cannot load {}: {}", path.display(), e));
            tracing::warn!("Parse of {} failed: {}", path.display(), e);
        }
    }
    None
}

/// Abandon a load whose file read failed
fn load_failed(model: &mut AppModel, path: PathBuf, error: String) -> Option<Cmd> {
    model.session.fail_load();
    model.status = Some(format!("Cannot read {}: {}", path.display(), error));
    tracing::warn!("Read of {} failed: {}", path.display(), error);
    None
}

/// Serialize the table and request the file write
fn export(model: &mut AppModel, path: Option<PathBuf>) -> Option<Cmd> {
    let Some(table) = model.session.table() else {
        model.status = Some("Nothing to save: no data loaded".to_string());
        return None;
    };

    match bridge::serialize(table, model.delimiter) {
        Ok(content) => {
            let path = path
                .or_else(|| model.output_path.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_NAME));
            Some(Cmd::SaveFile { path, content })
        }
        Err(e) => {
            model.status = Some(format!("Export failed: {}", e));
            tracing::error!("Serialization failed: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    fn model() -> AppModel {
        AppModel::new(GridConfig::default())
    }

    fn load(model: &mut AppModel, content: &str) {
        let path = PathBuf::from("test.csv");
        let cmd = update_session(model, SessionMsg::BeginLoad(path.clone()));
        assert_eq!(cmd, Some(Cmd::LoadFile { path: path.clone() }));
        update_session(
            model,
            SessionMsg::LoadCompleted {
                path,
                content: content.to_string(),
            },
        );
    }

    #[test]
    fn test_load_installs_table() {
        let mut model = model();
        load(&mut model, "name,age\nAlice,30\nBob,25\n");

        let table = model.session.table().unwrap();
        assert_eq!(table.columns(), ["name", "age"]);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_empty_parse_leaves_empty_state() {
        let mut model = model();
        load(&mut model, "name,age\n");

        assert!(model.session.table().is_none());
        assert!(model.status.as_deref().unwrap().contains("no data rows"));
    }

    #[test]
    fn test_second_load_rejected_while_in_flight() {
        let mut model = model();
        update_session(&mut model, SessionMsg::BeginLoad(PathBuf::from("a.csv")));

        let cmd = update_session(&mut model, SessionMsg::BeginLoad(PathBuf::from("b.csv")));
        assert!(cmd.is_none());
        assert!(model.status.as_deref().unwrap().contains("Load rejected"));
    }

    #[test]
    fn test_read_failure_restores_prior_table() {
        let mut model = model();
        load(&mut model, "name,age\nAlice,30\n");

        let path = PathBuf::from("missing.csv");
        update_session(&mut model, SessionMsg::BeginLoad(path.clone()));
        update_session(
            &mut model,
            SessionMsg::LoadFailed {
                path,
                error: "not found".to_string(),
            },
        );

        assert_eq!(model.session.table().unwrap().row_count(), 1);
    }

    #[test]
    fn test_export_defaults_to_edited_data_csv() {
        let mut model = model();
        load(&mut model, "name,age\nBob,26\n");

        let cmd = update_session(&mut model, SessionMsg::Export { path: None }).unwrap();
        match cmd {
            Cmd::SaveFile { path, content } => {
                assert_eq!(path, PathBuf::from("edited_data.csv"));
                assert_eq!(content, "name,age\nBob,26\n");
            }
            other => panic!("expected SaveFile, got {:?}", other),
        }
    }

    #[test]
    fn test_export_without_data() {
        let mut model = model();
        let cmd = update_session(&mut model, SessionMsg::Export { path: None });
        assert!(cmd.is_none());
        assert!(model.status.as_deref().unwrap().contains("no data"));
    }

    #[test]
    fn test_tsv_delimiter_reused_on_export() {
        let mut model = model();
        let path = PathBuf::from("data.tsv");
        update_session(&mut model, SessionMsg::BeginLoad(path.clone()));
        update_session(
            &mut model,
            SessionMsg::LoadCompleted {
                path,
                content: "a\tb\n1\t2\n".to_string(),
            },
        );

        let cmd = update_session(&mut model, SessionMsg::Export { path: None }).unwrap();
        match cmd {
            Cmd::SaveFile { content, .. } => assert_eq!(content, "a\tb\n1\t2\n"),
            other => panic!("expected SaveFile, got {:?}", other),
        }
    }
}
