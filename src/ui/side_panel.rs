//! Side panel UI rendering
//!
//! Draws the tab list in expanded (icon + label) or collapsed (icon only)
//! form. The panel never changes shell state itself; clicks come back as
//! frame interactions.

use eframe::egui;
use egui::RichText;
use toolshell::{FrameInteraction, FrameLayout, PanelMode, TabRegistry, ThemeColors};

const ROW_PADDING: f32 = 8.0;

/// Renders the side panel contents
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `layout` - This frame's shell layout
/// * `registry` - Tabs to list
/// * `colors` - Current theme palette
pub fn render_side_panel(
    ui: &mut egui::Ui,
    layout: &FrameLayout<'_>,
    registry: &TabRegistry,
    colors: &ThemeColors,
) -> Vec<FrameInteraction> {
    let mut interactions = Vec::new();
    let collapsed = layout.panel == PanelMode::Collapsed;

    if layout.floating_panel {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Tools").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("✕").on_hover_text("Close navigation").clicked() {
                    interactions.push(FrameInteraction::CloseRequested);
                }
            });
        });
        ui.separator();
    }

    ui.with_layout(egui::Layout::top_down_justified(egui::Align::LEFT), |ui| {
        ui.spacing_mut().button_padding.y = ROW_PADDING;
        for tab in registry.list() {
            let active = layout.is_active(tab);
            let text = if collapsed {
                RichText::new(&tab.icon).size(18.0)
            } else {
                RichText::new(format!("{}  {}", tab.icon, tab.label))
            };
            let text = if active { text.color(colors.accent) } else { text };

            let hover = if collapsed {
                format!("{}\n{}", tab.label, tab.description)
            } else {
                tab.description.clone()
            };

            if ui.selectable_label(active, text).on_hover_text(hover).clicked() {
                interactions.push(FrameInteraction::TabSelected(tab.id.clone()));
            }
        }
    });

    if !layout.floating_panel {
        ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
            let (glyph, hint) = if collapsed { ("»", "Expand navigation") } else { ("«", "Collapse navigation") };
            if ui.button(glyph).on_hover_text(hint).clicked() {
                interactions.push(FrameInteraction::ToggleRequested);
            }
        });
    }

    interactions
}
