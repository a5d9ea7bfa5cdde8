//! ward-tui library
//!
//! Terminal shell for the ward dashboard. Exports the reducer, the
//! controller adapter and the renderer for testing.

pub mod app;
pub mod data;
pub mod error;
pub mod shell;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::{map_key, reduce, Action, AppState};
pub use error::{Result, TuiError};
pub use shell::{Shell, Snapshot};
