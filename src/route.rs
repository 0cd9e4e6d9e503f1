//! Route resolution and in-memory navigation history.
//!
//! The URL path is the single source of truth for which tool is active.
//! [`resolve`] projects a path onto a tab id; [`MemoryHistory`] is the
//! routing collaborator that owns the path and reports every change.

use crate::signal::{Signal, Subscription};
use crate::tabs::{TabDescriptor, TabRegistry};

/// Returns the first descriptor, in registry order, whose path prefixes `current_path`.
pub fn first_match<'a>(current_path: &str, tabs: &'a [TabDescriptor]) -> Option<&'a TabDescriptor> {
    tabs.iter().find(|tab| current_path.starts_with(tab.path.as_str()))
}

/// Maps a URL path to the active tab id, falling back to the registry default.
pub fn resolve<'a>(current_path: &str, registry: &'a TabRegistry) -> &'a str {
    first_match(current_path, registry.list())
        .map(|tab| tab.id.as_str())
        .unwrap_or_else(|| registry.default_id())
}

/// Returns true if `current_path` matches no tab and resolves to the default.
pub fn is_fallback(current_path: &str, registry: &TabRegistry) -> bool {
    first_match(current_path, registry.list()).is_none()
}

/// Normalizes a path so it always starts with `/`.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Something that can change the current URL.
pub trait Navigator {
    /// Requests that the current URL become `path`.
    fn navigate_to(&mut self, path: &str);
}

/// Browser-style history kept in memory.
///
/// Every change to the current path (push, back, forward) is broadcast to
/// subscribers with the new path.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
    changes: Signal<String>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryHistory {
    pub fn new(initial_path: &str) -> Self {
        Self {
            entries: vec![normalize_path(initial_path)],
            index: 0,
            changes: Signal::new(),
        }
    }

    pub fn current_path(&self) -> &str {
        &self.entries[self.index]
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Moves one entry back. Returns false if already at the oldest entry.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.index -= 1;
        self.notify();
        true
    }

    /// Moves one entry forward. Returns false if already at the newest entry.
    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.index += 1;
        self.notify();
        true
    }

    /// Number of entries, including the current one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Subscribes to path changes.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&String) + 'static,
    {
        self.changes.subscribe(listener)
    }

    fn notify(&self) {
        let path = self.current_path().to_string();
        tracing::debug!(path = %path, "route changed");
        self.changes.emit(&path);
    }
}

impl Navigator for MemoryHistory {
    /// Pushes `path`, dropping any forward entries. Navigating to the
    /// current path is a no-op.
    fn navigate_to(&mut self, path: &str) {
        let path = normalize_path(path);
        if path == self.current_path() {
            return;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(path);
        self.index += 1;
        self.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::TabDescriptor;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_resolve_exact_and_nested_paths() {
        let registry = TabRegistry::builtin();
        assert_eq!(resolve("/editor", &registry), "editor");
        assert_eq!(resolve("/editor/notes.md", &registry), "editor");
        assert_eq!(resolve("/mcp-servers?tab=1", &registry), "mcp-servers");
        assert_eq!(resolve("/code-analysis", &registry), "code-analysis");
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let registry = TabRegistry::builtin();
        assert_eq!(resolve("/", &registry), "dashboard");
        assert_eq!(resolve("", &registry), "dashboard");
        assert_eq!(resolve("/unknown", &registry), "dashboard");
        assert!(is_fallback("/unknown", &registry));
        assert!(!is_fallback("/documents", &registry));
    }

    #[test]
    fn test_resolve_is_plain_prefix_match() {
        let registry = TabRegistry::builtin();
        assert_eq!(resolve("/editorial", &registry), "editor");
    }

    #[test]
    fn test_first_match_wins_in_registry_order() {
        let tabs = vec![
            TabDescriptor::new("docs-archive", "Archive", "a", "/docs/archive", ""),
            TabDescriptor::new("docs", "Docs", "d", "/docs", ""),
        ];
        let registry = TabRegistry::new(tabs.clone(), "docs").unwrap();
        assert_eq!(resolve("/docs/archive/2024", &registry), "docs-archive");
        assert_eq!(resolve("/docs/guide", &registry), "docs");

        let reversed = TabRegistry::new(tabs.into_iter().rev().collect(), "docs").unwrap();
        assert_eq!(resolve("/docs/archive/2024", &reversed), "docs");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("  "), "/");
        assert_eq!(normalize_path("editor"), "/editor");
        assert_eq!(normalize_path(" /editor "), "/editor");
    }

    #[test]
    fn test_history_push_back_forward() {
        let mut history = MemoryHistory::new("/dashboard");
        history.navigate_to("/editor");
        history.navigate_to("/documents");
        assert_eq!(history.current_path(), "/documents");

        assert!(history.back());
        assert_eq!(history.current_path(), "/editor");
        assert!(history.back());
        assert_eq!(history.current_path(), "/dashboard");
        assert!(!history.back());

        assert!(history.forward());
        assert_eq!(history.current_path(), "/editor");

        history.navigate_to("/mcp-servers");
        assert!(!history.can_go_forward());
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_history_notifies_every_change() {
        let mut history = MemoryHistory::new("/dashboard");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _subscription = {
            let seen = Rc::clone(&seen);
            history.subscribe(move |path| seen.borrow_mut().push(path.clone()))
        };

        history.navigate_to("/editor");
        history.navigate_to("/editor");
        history.back();
        history.forward();

        assert_eq!(*seen.borrow(), vec!["/editor", "/dashboard", "/editor"]);
    }
}
