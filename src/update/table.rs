//! Table mutation update functions
//!
//! User input is validated here, before any message reaches the table:
//! `Table` treats out-of-range indices as contract violations, so the
//! command surface must never forward one.

use crate::commands::Cmd;
use crate::messages::TableMsg;
use crate::model::AppModel;

/// Handle table mutation messages
pub fn update_table(model: &mut AppModel, msg: TableMsg) -> Option<Cmd> {
    if model.session.table_mut().is_none() {
        model.status = Some(if model.session.is_loading() {
            "Busy loading; try again once the load finishes".to_string()
        } else {
            "No data loaded. Use `open <file.csv>` first".to_string()
        });
        return None;
    }

    match msg {
        TableMsg::EditCell { row, column, value } => edit_cell(model, row, &column, &value),
        TableMsg::AddRow => add_row(model),
        TableMsg::RemoveRow { row } => remove_row(model, row),
    }
    None
}

fn edit_cell(model: &mut AppModel, row: usize, column: &str, value: &str) {
    let table = model.session.table_mut().expect("checked above");

    if row >= table.row_count() {
        model.status = Some(format!(
            "Row {} does not exist ({} rows)",
            row + 1,
            table.row_count()
        ));
        return;
    }
    if table.column_index(column).is_none() {
        let columns = table.columns().join(", ");
        model.status = Some(format!("No column {:?} (columns: {})", column, columns));
        return;
    }

    table.update_cell(row, column, value);
    tracing::debug!("Edited cell ({}, {})", row, column);
    model.status = Some(format!("Set row {} {} = {}", row + 1, column, value));
}

fn add_row(model: &mut AppModel) {
    let table = model.session.table_mut().expect("checked above");
    table.add_row();
    let rows = table.row_count();

    // Jump to the last page so the new row is visible
    model.pager.goto(usize::MAX, rows);
    model.status = Some(format!("Added row {}", rows));
}

fn remove_row(model: &mut AppModel, row: usize) {
    let table = model.session.table_mut().expect("checked above");

    if row >= table.row_count() {
        model.status = Some(format!(
            "Row {} does not exist ({} rows)",
            row + 1,
            table.row_count()
        ));
        return;
    }

    table.remove_row(row);
    let rows = table.row_count();
    model.pager.clamp(rows);
    model.status = Some(format!("Removed row {} ({} rows left)", row + 1, rows));
}
