//! Panel orchestration and layout management.
//!
//! Composes the shell frame (header, side panel, dismiss overlay, content
//! slot, status bar) from this frame's [`FrameLayout`] and collects the
//! interactions the widgets emit.

use crate::app::AppState;
use crate::ui::{content_slot, header, side_panel, status_bar};
use toolshell::{FrameInteraction, FrameLayout};

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Vec<FrameInteraction> {
        let mut interactions = Vec::new();

        let AppState {
            controller,
            viewport,
            history,
            pages,
            theme,
            memory,
        } = state;

        let layout = FrameLayout::from_controller(controller);
        let colors = theme.colors().clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            interactions.extend(header::render_header(ui, &layout, history, theme));
        });

        // Status panel at the very bottom
        let memory_mb = memory.sample();
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, controller, viewport, memory_mb);
        });

        // Docked side panel (tablet and desktop)
        if layout.panel_visible() && !layout.floating_panel {
            let panel_frame = egui::Frame::default()
                .inner_margin(egui::Margin::same(6))
                .fill(colors.panel_background);

            egui::SidePanel::left("side_panel")
                .resizable(false)
                .exact_width(layout.panel_width)
                .frame(panel_frame)
                .show(ctx, |ui| {
                    interactions.extend(side_panel::render_side_panel(ui, &layout, controller.registry(), &colors));
                });
        }

        let body_rect = ctx.available_rect();

        // Content slot
        let content_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(16))
            .fill(colors.background);

        egui::CentralPanel::default()
            .frame(content_frame)
            .show(ctx, |ui| {
                content_slot::render_content_slot(ui, pages, layout.active_tab, &colors);
            });

        // Dismiss overlay (mobile only, while the panel is revealed)
        if layout.overlay {
            egui::Area::new(egui::Id::new("dismiss_overlay"))
                .order(egui::Order::Middle)
                .fixed_pos(body_rect.min)
                .show(ctx, |ui| {
                    let (rect, response) = ui.allocate_exact_size(body_rect.size(), egui::Sense::click());
                    ui.painter().rect_filled(rect, 0.0, colors.overlay);
                    if response.clicked() {
                        interactions.push(FrameInteraction::CloseRequested);
                    }
                });
        }

        // Floating side panel above the overlay (mobile)
        if layout.floating_panel {
            egui::Area::new(egui::Id::new("floating_side_panel"))
                .order(egui::Order::Foreground)
                .fixed_pos(body_rect.min)
                .show(ctx, |ui| {
                    egui::Frame::default()
                        .inner_margin(egui::Margin::same(6))
                        .fill(colors.panel_background)
                        .show(ui, |ui| {
                            ui.set_width(layout.panel_width);
                            ui.set_min_height(body_rect.height());
                            interactions.extend(side_panel::render_side_panel(ui, &layout, controller.registry(), &colors));
                        });
                });
        }

        interactions
    }
}
