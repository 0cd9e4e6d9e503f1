//! Stand-in page for tools whose content is provided elsewhere.

use super::ToolPage;
use egui::RichText;
use toolshell::{TabDescriptor, ThemeColors};

#[derive(Debug, Clone)]
pub struct PlaceholderPage {
    icon: String,
    title: String,
    description: String,
}

impl PlaceholderPage {
    pub fn new(tab: &TabDescriptor) -> Self {
        Self {
            icon: tab.icon.clone(),
            title: tab.label.clone(),
            description: tab.description.clone(),
        }
    }
}

impl ToolPage for PlaceholderPage {
    fn show(&mut self, ui: &mut egui::Ui, colors: &ThemeColors) {
        ui.heading(&self.title);
        ui.label(RichText::new(&self.description).color(colors.text_dim));
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&self.icon).size(48.0));
            ui.label(RichText::new(format!("{} is ready", self.title)).strong().color(colors.text_strong));
        });
    }
}
