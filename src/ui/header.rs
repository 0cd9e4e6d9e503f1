//! Header panel UI rendering
//!
//! Handles the top bar with the navigation toggle, history buttons, the
//! active tool's name and the theme selector.

use eframe::egui;
use egui::RichText;
use crate::state::ThemeState;
use toolshell::{FrameInteraction, FrameLayout, MemoryHistory};

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `layout` - This frame's shell layout
/// * `history` - Route history (for back/forward availability)
/// * `theme` - Theme state, updated in place when the user picks a theme
///
/// # Returns
/// * Interactions for the shell core
pub fn render_header(
    ui: &mut egui::Ui,
    layout: &FrameLayout<'_>,
    history: &MemoryHistory,
    theme: &mut ThemeState,
) -> Vec<FrameInteraction> {
    let mut interactions = Vec::new();

    ui.horizontal(|ui| {
        let toggle_hint = if layout.panel_visible() { "Collapse navigation" } else { "Show navigation" };
        if ui.button("☰").on_hover_text(toggle_hint).clicked() {
            interactions.push(FrameInteraction::ToggleRequested);
        }

        ui.label(RichText::new("Tool Shell").strong());
        ui.separator();

        if ui.add_enabled(history.can_go_back(), egui::Button::new("◀"))
            .on_hover_text("Back (Alt+←)")
            .clicked()
        {
            interactions.push(FrameInteraction::BackRequested);
        }
        if ui.add_enabled(history.can_go_forward(), egui::Button::new("▶"))
            .on_hover_text("Forward (Alt+→)")
            .clicked()
        {
            interactions.push(FrameInteraction::ForwardRequested);
        }

        ui.separator();
        ui.label(format!("{} {}", layout.active_tab.icon, layout.active_tab.label));

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut current_theme = theme.current_theme_name().to_string();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    let manager = theme.theme_manager();
                    for theme_name in manager.list_themes() {
                        let response = ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                        if let Some(entry) = manager.get_theme(theme_name) {
                            response.on_hover_text(&entry.description);
                        }
                    }
                });

            if current_theme != theme.current_theme_name() {
                theme.set_theme(&current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    interactions
}
