//! Shell event coordination.
//!
//! Feeds host input (window width, keyboard shortcuts, panel interactions)
//! into the shell core and drains the controller's event queue once per
//! frame.

use crate::app::AppState;
use toolshell::{route_interaction, FrameInteraction};

/// Coordinates the shell core with the egui host.
pub struct ShellCoordinator;

impl ShellCoordinator {
    /// Reports the current content width to the shell.
    pub fn sync_viewport(ctx: &egui::Context, state: &mut AppState) {
        Self::report_width(state, ctx.content_rect().width());
    }

    /// Mounts the shell on the first report; afterwards class changes are
    /// queued on the controller by its subscription.
    pub fn report_width(state: &mut AppState, width: f32) {
        if state.controller.is_mounted() {
            state.viewport.set_width(width);
        } else {
            state.mount_at(width);
        }
    }

    /// Maps history shortcuts (Alt+Left / Alt+Right) to frame interactions.
    pub fn keyboard_interactions(ctx: &egui::Context) -> Vec<FrameInteraction> {
        ctx.input(|input| {
            let mut interactions = Vec::new();
            if input.modifiers.alt && input.key_pressed(egui::Key::ArrowLeft) {
                interactions.push(FrameInteraction::BackRequested);
            }
            if input.modifiers.alt && input.key_pressed(egui::Key::ArrowRight) {
                interactions.push(FrameInteraction::ForwardRequested);
            }
            interactions
        })
    }

    /// Forwards interactions to the controller queue or the history.
    pub fn handle_interactions(state: &mut AppState, interactions: Vec<FrameInteraction>) {
        for interaction in interactions {
            tracing::trace!(?interaction, "frame interaction");
            route_interaction(interaction, &state.controller, &mut state.history);
        }
    }

    /// Applies all queued shell events. Returns how many were handled.
    pub fn pump(state: &mut AppState) -> usize {
        state.controller.pump(&mut state.history)
    }
}
