//! Tool pages hosted in the content slot.
//!
//! Pages are opaque to the shell: each one is looked up by its tab's path
//! and handed a `Ui` plus the current palette.

mod dashboard;
mod placeholder;

pub use dashboard::DashboardPage;
pub use placeholder::PlaceholderPage;

use std::collections::HashMap;
use toolshell::{TabDescriptor, TabRegistry, ThemeColors};

/// A tool rendered inside the shell's content slot.
pub trait ToolPage {
    fn show(&mut self, ui: &mut egui::Ui, colors: &ThemeColors);
}

/// Pages keyed by the path of the tab that owns them.
pub struct PageDirectory {
    pages: HashMap<String, Box<dyn ToolPage>>,
}

impl PageDirectory {
    /// Creates one page per registry entry.
    pub fn for_registry(registry: &TabRegistry) -> Self {
        let pages = registry
            .list()
            .iter()
            .map(|tab| (tab.path.clone(), page_for(tab)))
            .collect();
        Self { pages }
    }

    /// Renders the page for `tab`, creating a placeholder if none exists.
    pub fn show(&mut self, tab: &TabDescriptor, ui: &mut egui::Ui, colors: &ThemeColors) {
        self.pages
            .entry(tab.path.clone())
            .or_insert_with(|| page_for(tab))
            .show(ui, colors);
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.pages.contains_key(path)
    }
}

fn page_for(tab: &TabDescriptor) -> Box<dyn ToolPage> {
    match tab.id.as_str() {
        "dashboard" => Box::new(DashboardPage::default()),
        _ => Box::new(PlaceholderPage::new(tab)),
    }
}
