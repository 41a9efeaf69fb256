//! Page navigation update functions

use crate::commands::Cmd;
use crate::messages::PageMsg;
use crate::model::AppModel;

/// Handle page navigation messages
pub fn update_page(model: &mut AppModel, msg: PageMsg) -> Option<Cmd> {
    let rows = model.row_count();
    match msg {
        PageMsg::First => model.pager.first(),
        PageMsg::Prev => model.pager.prev(),
        PageMsg::Next => model.pager.next(rows),
        PageMsg::Goto(page) => model.pager.goto(page, rows),
        PageMsg::SetPageSize(size) => return set_page_size(model, size),
    }
    None
}

fn set_page_size(model: &mut AppModel, size: usize) -> Option<Cmd> {
    let rows = model.row_count();
    if !model.pager.set_page_size(size, rows) {
        model.status = Some(format!(
            "Unsupported page size {} (choose 10, 20, 30, 40 or 50)",
            size
        ));
        return None;
    }

    // Persist the preference; a failed save is logged but not fatal
    if let Err(e) = model.config.set_page_size(size) {
        tracing::warn!("Could not persist page size: {}", e);
    }
    None
}
