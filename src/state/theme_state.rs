//! Theme and styling state management.
//!
//! This module encapsulates all state related to visual theming,
//! including theme manager and currently selected theme.

use toolshell::{ThemeColors, ThemeManager};

/// State related to visual theme and styling.
///
/// Responsibilities:
/// - Managing theme instances
/// - Tracking current theme selection
/// - Providing theme-related queries
pub struct ThemeState {
    /// Theme manager instance
    theme_manager: ThemeManager,
    /// Name of currently selected theme
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl ThemeState {
    /// Creates a new theme state with a specific theme.
    ///
    /// Unknown names fall back to the default theme.
    pub fn with_theme(theme_name: &str) -> Self {
        let theme_manager = ThemeManager::new();
        let current_theme_name = theme_manager.theme_or_default(theme_name).name.clone();
        Self {
            theme_manager,
            current_theme_name,
        }
    }

    // ===== Theme Queries =====

    /// Returns a reference to the theme manager.
    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    /// Returns the name of the current theme.
    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Returns the color palette of the current theme.
    pub fn colors(&self) -> &ThemeColors {
        &self.theme_manager.theme_or_default(&self.current_theme_name).colors
    }

    // ===== Theme Mutations =====

    /// Sets the current theme by name. Unknown names are ignored.
    pub fn set_theme(&mut self, theme_name: &str) {
        if self.theme_manager.get_theme(theme_name).is_some() {
            self.current_theme_name = theme_name.to_string();
        } else {
            tracing::warn!(theme = theme_name, "ignoring unknown theme");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let state = ThemeState::with_theme("Neon");
        assert_eq!(state.current_theme_name(), toolshell::theme::DEFAULT_THEME);
    }

    #[test]
    fn test_set_theme() {
        let mut state = ThemeState::with_theme("Slate");
        state.set_theme("Light");
        assert_eq!(state.current_theme_name(), "Light");
        state.set_theme("Neon");
        assert_eq!(state.current_theme_name(), "Light");
    }
}
