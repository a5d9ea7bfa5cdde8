//! Application module
//!
//! - Actions: what can happen
//! - State: what is true right now in the UI
//! - Reducer: pure function (State, Action) -> State, plus the keymap
//!
//! The active view is not part of this state. It lives in the controller's
//! router and is read through the shell when rendering.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

pub use actions::Action;
pub use reducer::{map_key, reduce};
pub use state::{AppState, StatusBarState, UiConfig};
