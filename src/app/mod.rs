//! Application-level modules for the tool shell host.
//!
//! This module contains the shell coordinator and centralized state management.

mod app_state;
mod shell_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use shell_coordinator::ShellCoordinator;
pub use theme_coordinator::ThemeCoordinator;
