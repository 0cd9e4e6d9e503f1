//! Content slot rendering
//!
//! Hosts whichever tool page belongs to the active tab. Pages get a `Ui`
//! and nothing else.

use eframe::egui;
use crate::pages::PageDirectory;
use toolshell::{TabDescriptor, ThemeColors};

/// Renders the active tool page inside a scroll area
pub fn render_content_slot(
    ui: &mut egui::Ui,
    pages: &mut PageDirectory,
    active_tab: &TabDescriptor,
    colors: &ThemeColors,
) {
    egui::ScrollArea::vertical()
        .id_salt(("content_slot", active_tab.path.as_str()))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            pages.show(active_tab, ui, colors);
        });
}
