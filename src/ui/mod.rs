//! UI panel rendering subsystem
//!
//! This module contains the shell frame's rendering:
//! - Header panel (navigation toggle, history buttons, theme selector)
//! - Side panel (tab list, collapse and close controls)
//! - Content slot (active tool page)
//! - Status bar (route, viewport, memory)
//! - Panel manager (frame orchestration and layout)

pub mod header;
pub mod side_panel;
pub mod content_slot;
pub mod status_bar;
pub mod panel_manager;
