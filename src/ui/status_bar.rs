//! Status bar UI rendering
//!
//! Handles the bottom status bar showing route, viewport and memory.

use eframe::egui;
use egui::RichText;
use crate::utils::{format_memory_mb, format_width};
use toolshell::{ShellController, ViewportSignal};

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `controller` - Shell controller (route and viewport class)
/// * `viewport` - Live viewport signal (width)
/// * `memory_mb` - Latest process memory sample
pub fn render_status_bar(ui: &mut egui::Ui, controller: &ShellController, viewport: &ViewportSignal, memory_mb: f64) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(memory_mb);
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());

        ui.label(RichText::new(format!("Route: {}", controller.current_path())).strong());
        ui.label(RichText::new("|").strong());

        let class = controller
            .viewport_class()
            .map(|class| class.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        ui.label(RichText::new(format!("Viewport: {} ({})", class, format_width(viewport.width()))).strong());
    });
}
