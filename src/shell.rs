//! The shell controller: side-panel state machine and route synchronization.
//!
//! [`ShellController`] exclusively owns [`ShellState`]. Everything else talks
//! to it through [`ShellEvent`]s, which are applied one at a time in delivery
//! order. The active tab is never stored: it is recomputed from the current
//! path on every query, so it cannot drift from the URL.

use crate::route::{self, MemoryHistory, Navigator};
use crate::signal::Subscription;
use crate::tabs::{TabDescriptor, TabRegistry};
use crate::viewport::{ViewportClass, ViewportSignal};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

/// How the side panel is currently presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelMode {
    /// Not rendered at all (off-canvas)
    Hidden,
    /// Rendered narrow, icons only
    Collapsed,
    /// Rendered at full width with labels
    Expanded,
}

/// Side-panel visibility flags.
///
/// Invariant: `panel_collapsed` is false whenever `panel_hidden` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellState {
    panel_collapsed: bool,
    panel_hidden: bool,
}

impl ShellState {
    pub fn panel_collapsed(&self) -> bool {
        self.panel_collapsed
    }

    pub fn panel_hidden(&self) -> bool {
        self.panel_hidden
    }

    pub fn panel_visible(&self) -> bool {
        !self.panel_hidden
    }

    pub fn panel_mode(&self) -> PanelMode {
        if self.panel_hidden {
            PanelMode::Hidden
        } else if self.panel_collapsed {
            PanelMode::Collapsed
        } else {
            PanelMode::Expanded
        }
    }

    fn apply_viewport(&mut self, class: ViewportClass) {
        match class {
            ViewportClass::Mobile => {
                self.panel_hidden = true;
                self.panel_collapsed = false;
            }
            ViewportClass::Tablet => {
                self.panel_hidden = false;
                self.panel_collapsed = true;
            }
            ViewportClass::Desktop => {
                // Collapse preference carries over on desktop.
                self.panel_hidden = false;
            }
        }
    }

    fn toggle(&mut self) {
        if self.panel_hidden {
            self.panel_hidden = false;
            self.panel_collapsed = false;
        } else {
            self.panel_collapsed = !self.panel_collapsed;
        }
    }

    fn hide(&mut self) {
        self.panel_hidden = true;
        self.panel_collapsed = false;
    }
}

/// Inputs the controller reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// The viewport moved into a different size class
    ViewportChanged(ViewportClass),
    /// The user pressed the panel toggle
    ToggleRequested,
    /// The user dismissed the panel (overlay click, close button, tab pick)
    CloseRequested,
    /// The user picked a tab by id
    TabSelected(String),
    /// The routing collaborator reports a new current path
    PathChanged(String),
}

type EventQueue = Rc<RefCell<VecDeque<ShellEvent>>>;

fn enqueue_weak(queue: &Weak<RefCell<VecDeque<ShellEvent>>>, event: ShellEvent) {
    if let Some(queue) = queue.upgrade() {
        queue.borrow_mut().push_back(event);
    }
}

/// Owner of [`ShellState`] and the single entry point for shell events.
#[derive(Debug)]
pub struct ShellController {
    registry: TabRegistry,
    state: ShellState,
    viewport: Option<ViewportClass>,
    current_path: String,
    queue: EventQueue,
    subscriptions: Vec<Subscription>,
}

impl ShellController {
    /// Creates an unmounted controller positioned at `/`.
    pub fn new(registry: TabRegistry) -> Self {
        Self {
            registry,
            state: ShellState::default(),
            viewport: None,
            current_path: "/".to_string(),
            queue: Rc::new(RefCell::new(VecDeque::new())),
            subscriptions: Vec::new(),
        }
    }

    // ===== Lifecycle =====

    /// Attaches the controller to its host.
    ///
    /// Applies the viewport policy for the current class, adopts the
    /// history's current path, and subscribes to both so later changes
    /// are queued as events. Mounting again replaces the old subscriptions.
    pub fn mount(&mut self, viewport: &ViewportSignal, history: &MemoryHistory) {
        self.unmount();

        self.transition_viewport(viewport.class());
        self.on_path_changed(history.current_path());

        let queue = Rc::downgrade(&self.queue);
        self.subscriptions.push(viewport.subscribe(move |class| {
            enqueue_weak(&queue, ShellEvent::ViewportChanged(*class));
        }));

        let queue = Rc::downgrade(&self.queue);
        self.subscriptions.push(history.subscribe(move |path| {
            enqueue_weak(&queue, ShellEvent::PathChanged(path.clone()));
        }));

        tracing::debug!(
            viewport = %viewport.class(),
            path = %self.current_path,
            "shell mounted"
        );
    }

    /// Detaches from the host. Pending events are discarded and no later
    /// notification reaches this controller.
    pub fn unmount(&mut self) {
        if self.subscriptions.is_empty() {
            return;
        }
        self.subscriptions.clear();
        self.queue.borrow_mut().clear();
        tracing::debug!("shell unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    // ===== Event Delivery =====

    /// Queues an event for the next [`ShellController::pump`].
    pub fn enqueue(&self, event: ShellEvent) {
        self.queue.borrow_mut().push_back(event);
    }

    /// Number of queued events.
    pub fn pending_events(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Applies queued events in order until the queue is empty.
    ///
    /// Events produced while handling (e.g. the path change caused by a tab
    /// selection) are applied by the same call. Returns how many events were
    /// handled.
    pub fn pump(&mut self, navigator: &mut dyn Navigator) -> usize {
        let mut handled = 0;
        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(event) = next else {
                break;
            };
            self.dispatch(event, navigator);
            handled += 1;
        }
        handled
    }

    /// Applies a single event immediately.
    pub fn dispatch(&mut self, event: ShellEvent, navigator: &mut dyn Navigator) {
        match event {
            ShellEvent::ViewportChanged(class) => self.on_viewport_changed(class),
            ShellEvent::ToggleRequested => self.toggle(),
            ShellEvent::CloseRequested => self.close(),
            ShellEvent::TabSelected(id) => {
                self.select_tab(&id, navigator);
            }
            ShellEvent::PathChanged(path) => self.on_path_changed(&path),
        }
    }

    // ===== Transitions =====

    /// Applies the panel policy for `class` unless it is already the live class.
    pub fn on_viewport_changed(&mut self, class: ViewportClass) {
        if self.viewport == Some(class) {
            return;
        }
        self.transition_viewport(class);
    }

    fn transition_viewport(&mut self, class: ViewportClass) {
        let before = self.state;
        let previous = self.viewport.replace(class);
        self.state.apply_viewport(class);
        tracing::info!(
            from = previous.map(|c| c.as_str()).unwrap_or("none"),
            to = %class,
            "viewport class transition"
        );
        self.log_panel_change(before);
    }

    /// Reveals a hidden panel fully, otherwise flips collapsed.
    pub fn toggle(&mut self) {
        let before = self.state;
        self.state.toggle();
        self.log_panel_change(before);
    }

    /// Hides the panel, but only while the live viewport class is mobile.
    pub fn close(&mut self) {
        if self.viewport != Some(ViewportClass::Mobile) {
            return;
        }
        let before = self.state;
        self.state.hide();
        self.log_panel_change(before);
    }

    /// Requests navigation to the tab's path.
    ///
    /// Unknown ids are ignored. The active tab changes only once the
    /// navigator reports the new path. Returns whether navigation was
    /// requested.
    pub fn select_tab(&mut self, id: &str, navigator: &mut dyn Navigator) -> bool {
        let Some(tab) = self.registry.get(id) else {
            tracing::debug!(tab_id = id, "ignoring selection of unknown tab");
            return false;
        };
        navigator.navigate_to(&tab.path);
        true
    }

    /// Adopts `path` as the current URL.
    pub fn on_path_changed(&mut self, path: &str) {
        self.current_path = route::normalize_path(path);
        if route::is_fallback(&self.current_path, &self.registry) {
            tracing::debug!(
                path = %self.current_path,
                default = self.registry.default_id(),
                "no tab matches route, using default"
            );
        }
    }

    fn log_panel_change(&self, before: ShellState) {
        if before != self.state {
            tracing::debug!(
                hidden = self.state.panel_hidden,
                collapsed = self.state.panel_collapsed,
                "side panel state changed"
            );
        }
    }

    // ===== Queries =====

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    /// The live viewport class, once mounted.
    pub fn viewport_class(&self) -> Option<ViewportClass> {
        self.viewport
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Id of the active tab, derived from the current path.
    pub fn active_tab_id(&self) -> &str {
        route::resolve(&self.current_path, &self.registry)
    }

    /// Descriptor of the active tab.
    pub fn active_tab(&self) -> &TabDescriptor {
        route::first_match(&self.current_path, self.registry.list())
            .unwrap_or_else(|| self.registry.default_tab())
    }

    /// True while the dismiss overlay should cover the content.
    pub fn overlay_visible(&self) -> bool {
        self.state.panel_visible() && self.viewport == Some(ViewportClass::Mobile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingNavigator {
        requested: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate_to(&mut self, path: &str) {
            self.requested.push(path.to_string());
        }
    }

    fn controller_at(class: ViewportClass) -> ShellController {
        let mut controller = ShellController::new(TabRegistry::builtin());
        controller.on_viewport_changed(class);
        controller
    }

    #[test]
    fn test_viewport_policy() {
        let mobile = controller_at(ViewportClass::Mobile);
        assert_eq!(mobile.state().panel_mode(), PanelMode::Hidden);

        let tablet = controller_at(ViewportClass::Tablet);
        assert_eq!(tablet.state().panel_mode(), PanelMode::Collapsed);

        let desktop = controller_at(ViewportClass::Desktop);
        assert_eq!(desktop.state().panel_mode(), PanelMode::Expanded);
    }

    #[test]
    fn test_desktop_keeps_collapse_preference() {
        let mut controller = controller_at(ViewportClass::Desktop);
        controller.toggle();
        assert!(controller.state().panel_collapsed());

        controller.on_viewport_changed(ViewportClass::Tablet);
        controller.on_viewport_changed(ViewportClass::Desktop);
        assert!(controller.state().panel_collapsed());
        assert!(!controller.state().panel_hidden());
    }

    #[test]
    fn test_toggle_from_hidden_reveals_fully() {
        let mut controller = controller_at(ViewportClass::Mobile);
        controller.toggle();
        assert_eq!(controller.state().panel_mode(), PanelMode::Expanded);
        controller.toggle();
        assert_eq!(controller.state().panel_mode(), PanelMode::Collapsed);
    }

    #[test]
    fn test_close_only_on_mobile() {
        let mut controller = controller_at(ViewportClass::Mobile);
        controller.toggle();
        controller.close();
        assert!(controller.state().panel_hidden());

        let mut controller = controller_at(ViewportClass::Tablet);
        let before = controller.state();
        controller.close();
        assert_eq!(controller.state(), before);
    }

    #[test]
    fn test_close_before_mount_is_noop() {
        let mut controller = ShellController::new(TabRegistry::builtin());
        controller.close();
        assert_eq!(controller.state(), ShellState::default());
    }

    #[test]
    fn test_same_class_twice_is_idempotent() {
        let mut controller = controller_at(ViewportClass::Mobile);
        controller.toggle();
        let revealed = controller.state();
        controller.on_viewport_changed(ViewportClass::Mobile);
        assert_eq!(controller.state(), revealed);
    }

    #[test]
    fn test_select_known_tab_navigates_without_changing_active_tab() {
        let mut controller = controller_at(ViewportClass::Desktop);
        controller.on_path_changed("/dashboard");
        let mut navigator = RecordingNavigator::default();

        assert!(controller.select_tab("editor", &mut navigator));
        assert_eq!(navigator.requested, vec!["/editor"]);
        assert_eq!(controller.active_tab_id(), "dashboard");

        controller.on_path_changed("/editor");
        assert_eq!(controller.active_tab_id(), "editor");
        assert_eq!(controller.active_tab().label, "Editor");
    }

    #[test]
    fn test_select_unknown_tab_is_ignored() {
        let mut controller = controller_at(ViewportClass::Desktop);
        let before = controller.state();
        let mut navigator = RecordingNavigator::default();

        assert!(!controller.select_tab("nonexistent", &mut navigator));
        assert!(navigator.requested.is_empty());
        assert_eq!(controller.state(), before);
    }

    #[test]
    fn test_overlay_only_on_mobile_with_visible_panel() {
        let mut controller = controller_at(ViewportClass::Mobile);
        assert!(!controller.overlay_visible());
        controller.toggle();
        assert!(controller.overlay_visible());

        let controller = controller_at(ViewportClass::Desktop);
        assert!(!controller.overlay_visible());
    }

    #[test]
    fn test_queued_events_apply_in_order() {
        let mut controller = controller_at(ViewportClass::Mobile);
        let mut navigator = RecordingNavigator::default();

        controller.enqueue(ShellEvent::ToggleRequested);
        controller.enqueue(ShellEvent::CloseRequested);
        controller.enqueue(ShellEvent::ToggleRequested);
        assert_eq!(controller.pending_events(), 3);

        assert_eq!(controller.pump(&mut navigator), 3);
        assert_eq!(controller.state().panel_mode(), PanelMode::Expanded);
        assert_eq!(controller.pending_events(), 0);
    }

    #[test]
    fn test_unmounted_route_defaults() {
        let controller = ShellController::new(TabRegistry::builtin());
        assert_eq!(controller.current_path(), "/");
        assert_eq!(controller.active_tab_id(), "dashboard");
        assert!(!controller.is_mounted());
    }
}
