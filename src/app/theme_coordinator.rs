//! Theme management and persistence coordination.
//!
//! Handles theme selection, application, and persistent storage across sessions.
//! The theme choice is the only thing the host persists.

use crate::state::ThemeState;

const THEME_KEY: &str = "theme_preference";

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads theme preference from persistent storage during application startup.
    ///
    /// Returns the stored theme name if found, otherwise `fallback`.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>, fallback: &str) -> String {
        storage
            .and_then(|storage| storage.get_string(THEME_KEY))
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Saves current theme preference to persistent storage.
    ///
    /// Should be called during application shutdown or when theme changes.
    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme_name: &str) {
        storage.set_string(THEME_KEY, theme_name.to_string());
        storage.flush();
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, theme: &ThemeState) {
        let manager = theme.theme_manager();
        let current = manager.theme_or_default(theme.current_theme_name());
        ctx.set_visuals(manager.visuals_for(current));
    }
}
