//! Centralized application state for the tool shell host.
//!
//! The host owns the collaborators the shell core talks to (viewport
//! signal, route history) alongside the controller itself, so the borrow
//! checker can hand each panel exactly the piece it needs.
//!
//! The shell is mounted only once the host has measured the real window
//! width; the configured width is just the initial window request.

use crate::pages::PageDirectory;
use crate::state::ThemeState;
use crate::utils::MemoryMonitor;
use toolshell::{MemoryHistory, ShellConfig, ShellController, TabRegistry, ViewportSignal};

/// Main application state.
pub struct AppState {
    /// Side-panel state machine and active-tab derivation
    pub controller: ShellController,

    /// Live viewport width and class-change notification
    pub viewport: ViewportSignal,

    /// Route history (the routing collaborator)
    pub history: MemoryHistory,

    /// Tool pages rendered in the content slot
    pub pages: PageDirectory,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Process memory shown in the status bar
    pub memory: MemoryMonitor,
}

impl AppState {
    /// Builds the host state with the shell not yet mounted.
    ///
    /// # Arguments
    /// * `config` - Shell configuration (breakpoints, window size)
    /// * `registry` - Validated tab registry
    /// * `initial_route` - Path the history starts at
    /// * `theme_name` - Theme to start with
    pub fn new(config: &ShellConfig, registry: TabRegistry, initial_route: &str, theme_name: &str) -> Self {
        let viewport = ViewportSignal::new(config.breakpoints, config.window.width);
        let history = MemoryHistory::new(initial_route);
        let pages = PageDirectory::for_registry(&registry);

        Self {
            controller: ShellController::new(registry),
            viewport,
            history,
            pages,
            theme: ThemeState::with_theme(theme_name),
            memory: MemoryMonitor::new(),
        }
    }

    /// Mounts the shell at the width the host actually measured.
    pub fn mount_at(&mut self, width: f32) {
        self.viewport = ViewportSignal::new(self.viewport.breakpoints(), width);
        self.controller.mount(&self.viewport, &self.history);
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        self.controller.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolshell::{PanelMode, ViewportClass};

    #[test]
    fn test_new_leaves_shell_unmounted() {
        let state = AppState::new(&ShellConfig::default(), TabRegistry::builtin(), "/editor", "Slate");
        assert!(!state.controller.is_mounted());
        assert_eq!(state.controller.viewport_class(), None);
    }

    #[test]
    fn test_mount_uses_measured_width() {
        let config = ShellConfig::default();
        let mut state = AppState::new(&config, TabRegistry::builtin(), "/editor", "Slate");
        state.mount_at(1280.0);

        assert!(state.controller.is_mounted());
        assert_eq!(state.controller.active_tab_id(), "editor");
        assert_eq!(state.controller.viewport_class(), Some(ViewportClass::Desktop));
        assert_eq!(state.controller.state().panel_mode(), PanelMode::Expanded);
    }

    #[test]
    fn test_narrow_window_starts_hidden() {
        let mut state = AppState::new(&ShellConfig::default(), TabRegistry::builtin(), "/", "Slate");
        state.mount_at(480.0);

        assert_eq!(state.viewport.width(), 480);
        assert_eq!(state.controller.state().panel_mode(), PanelMode::Hidden);
        assert_eq!(state.controller.active_tab_id(), "dashboard");
    }

    #[test]
    fn test_mount_keeps_configured_breakpoints() {
        let config = ShellConfig::from_json_str(r#"{ "breakpoints": { "mobile_max": 499, "desktop_min": 900 } }"#)
            .unwrap();
        let mut state = AppState::new(&config, TabRegistry::builtin(), "/", "Slate");
        state.mount_at(950.0);

        assert_eq!(state.controller.viewport_class(), Some(ViewportClass::Desktop));
    }
}
