//! Shell frame composition.
//!
//! The frame has no state of its own. [`FrameLayout`] is a per-frame
//! projection of the controller that tells the renderer where things go,
//! and [`route_interaction`] turns widget interactions back into controller
//! events or history moves.

use crate::route::MemoryHistory;
use crate::shell::{PanelMode, ShellController, ShellEvent};
use crate::tabs::TabDescriptor;
use crate::viewport::ViewportClass;

/// Side panel width when expanded, in points.
pub const EXPANDED_PANEL_WIDTH: f32 = 256.0;
/// Side panel width when collapsed to icons, in points.
pub const COLLAPSED_PANEL_WIDTH: f32 = 64.0;

/// Interactions emitted by the header, side panel and overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameInteraction {
    /// Header or panel toggle button
    ToggleRequested,
    /// A tab entry in the side panel was clicked
    TabSelected(String),
    /// Overlay click or panel close button
    CloseRequested,
    /// History back (button or keyboard)
    BackRequested,
    /// History forward (button or keyboard)
    ForwardRequested,
}

/// Where each part of the frame goes this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout<'a> {
    pub panel: PanelMode,
    /// Whether the dismiss overlay covers the content
    pub overlay: bool,
    /// Whether the panel floats above the content instead of pushing it aside
    pub floating_panel: bool,
    /// Panel width, 0 when hidden
    pub panel_width: f32,
    pub active_tab: &'a TabDescriptor,
}

impl<'a> FrameLayout<'a> {
    pub fn from_controller(controller: &'a ShellController) -> Self {
        let panel = controller.state().panel_mode();
        let viewport = controller.viewport_class();
        let panel_width = match panel {
            PanelMode::Hidden => 0.0,
            PanelMode::Collapsed => COLLAPSED_PANEL_WIDTH,
            PanelMode::Expanded => EXPANDED_PANEL_WIDTH,
        };

        Self {
            panel,
            overlay: controller.overlay_visible(),
            floating_panel: panel != PanelMode::Hidden && viewport == Some(ViewportClass::Mobile),
            panel_width,
            active_tab: controller.active_tab(),
        }
    }

    pub fn panel_visible(&self) -> bool {
        self.panel != PanelMode::Hidden
    }

    pub fn is_active(&self, tab: &TabDescriptor) -> bool {
        self.active_tab.id == tab.id
    }
}

/// Forwards a frame interaction to the controller queue or the history.
///
/// Picking a tab also requests a close so a floating mobile panel dismisses
/// itself; on wider viewports the close is ignored by the controller.
pub fn route_interaction(
    interaction: FrameInteraction,
    controller: &ShellController,
    history: &mut MemoryHistory,
) {
    match interaction {
        FrameInteraction::ToggleRequested => controller.enqueue(ShellEvent::ToggleRequested),
        FrameInteraction::TabSelected(id) => {
            controller.enqueue(ShellEvent::TabSelected(id));
            controller.enqueue(ShellEvent::CloseRequested);
        }
        FrameInteraction::CloseRequested => controller.enqueue(ShellEvent::CloseRequested),
        FrameInteraction::BackRequested => {
            history.back();
        }
        FrameInteraction::ForwardRequested => {
            history.forward();
        }
    }
}
