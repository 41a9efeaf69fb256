//! csved - a terminal CSV editor
//!
//! Load a CSV file into an in-memory table, edit it in a paginated grid,
//! and write the result back out. State management follows the Elm
//! Architecture pattern: messages describe every change, update functions
//! apply them, and commands describe the side effects.

pub mod bridge;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use messages::Msg;
pub use model::AppModel;
