//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod page;
mod session;
mod table;

use crate::commands::Cmd;
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;

pub use page::update_page;
pub use session::update_session;
pub use table::update_table;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Session(m) => session::update_session(model, m),
        Msg::Table(m) => table::update_table(model, m),
        Msg::Page(m) => page::update_page(model, m),
        Msg::App(AppMsg::Quit) => Some(Cmd::Quit),
    }
}
