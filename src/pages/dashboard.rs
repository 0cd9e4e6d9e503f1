//! Dashboard page: project metrics and recent activity.

use super::ToolPage;
use egui::RichText;
use toolshell::ThemeColors;

/// Project counters shown on the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct ProjectStats {
    pub prds: u32,
    pub conversations: u32,
    pub documents: u32,
    pub analyses: u32,
}

impl Default for ProjectStats {
    fn default() -> Self {
        Self {
            prds: 12,
            conversations: 45,
            documents: 28,
            analyses: 8,
        }
    }
}

#[derive(Debug, Default)]
pub struct DashboardPage {
    stats: ProjectStats,
}

impl DashboardPage {
    fn metrics(&self) -> [(&'static str, &'static str, u32); 4] {
        [
            ("📝", "Total PRDs", self.stats.prds),
            ("🤖", "Conversations", self.stats.conversations),
            ("📄", "Documents", self.stats.documents),
            ("⚡", "Code Analyses", self.stats.analyses),
        ]
    }

    fn recent_activity(&self) -> [(&'static str, String, &'static str); 4] {
        [
            ("📝", format!("{} PRDs created", self.stats.prds), "This month"),
            ("💬", format!("{} AI conversations", self.stats.conversations), "Total"),
            ("📄", format!("{} documents processed", self.stats.documents), "Total"),
            ("☁️", format!("{} code analyses", self.stats.analyses), "Total"),
        ]
    }
}

impl ToolPage for DashboardPage {
    fn show(&mut self, ui: &mut egui::Ui, colors: &ThemeColors) {
        let dim = colors.text_dim;

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading("Dashboard");
                ui.label(RichText::new("AI-powered development assistant overview").color(dim));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new("All systems operational").color(dim));
                ui.colored_label(colors.success, "●");
            });
        });
        ui.add_space(12.0);

        ui.horizontal_wrapped(|ui| {
            for (icon, label, value) in self.metrics() {
                egui::Frame::group(ui.style()).inner_margin(12.0).show(ui, |ui| {
                    ui.set_min_width(140.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(icon).size(22.0));
                        ui.label(RichText::new(value.to_string()).size(22.0).strong().color(colors.text_strong));
                        ui.label(RichText::new(label).color(dim));
                    });
                });
            }
        });
        ui.add_space(12.0);

        egui::Frame::group(ui.style()).inner_margin(12.0).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Recent Activity");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new("Latest updates").color(dim));
                });
            });
            ui.separator();
            for (icon, action, when) in self.recent_activity() {
                ui.horizontal(|ui| {
                    ui.label(icon);
                    ui.label(action);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(when).color(dim));
                    });
                });
            }
        });
    }
}
