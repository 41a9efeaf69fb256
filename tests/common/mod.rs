//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::PathBuf;

use csved::messages::{Msg, SessionMsg};
use csved::model::AppModel;
use csved::update::update;
use csved::GridConfig;

/// Canonical two-row sample used across the integration tests
pub const PEOPLE_CSV: &str = "name,age\nAlice,30\nBob,25\n";

/// Drive a full load (begin + completion) through the update layer
pub fn load(model: &mut AppModel, content: &str) {
    let path = PathBuf::from("test.csv");
    update(model, Msg::Session(SessionMsg::BeginLoad(path.clone())));
    update(
        model,
        Msg::Session(SessionMsg::LoadCompleted {
            path,
            content: content.to_string(),
        }),
    );
}

/// Create a model with `content` already loaded
pub fn loaded_model(content: &str) -> AppModel {
    let mut model = AppModel::new(GridConfig::default());
    load(&mut model, content);
    assert!(model.session.table().is_some(), "fixture failed to load");
    model
}

/// A single-column CSV with `rows` numbered data rows
pub fn numbered_csv(rows: usize) -> String {
    let mut content = String::from("n\n");
    for i in 0..rows {
        content.push_str(&format!("{}\n", i));
    }
    content
}
