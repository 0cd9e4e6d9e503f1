//! Tab registry: the ordered catalog of tools the shell can navigate to.
//!
//! The registry is built once at startup and never mutated. Its order is
//! load-bearing: route resolution picks the first descriptor whose path
//! prefixes the current URL, so overlapping paths must be listed from most
//! specific to least specific.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Id of the tab the shell falls back to when no route matches.
pub const DEFAULT_TAB_ID: &str = "dashboard";

/// A single navigable tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescriptor {
    /// Unique identifier (e.g. `"editor"`)
    pub id: String,
    /// Human-readable label shown in the side panel
    pub label: String,
    /// Short glyph shown in collapsed mode
    pub icon: String,
    /// URL prefix owned by this tool (e.g. `"/editor"`)
    pub path: String,
    /// One-line description shown as hover text
    pub description: String,
}

impl TabDescriptor {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
        path: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            path: path.into(),
            description: description.into(),
        }
    }
}

/// The built-in tool catalog, in navigation order.
pub fn builtin_tabs() -> Vec<TabDescriptor> {
    vec![
        TabDescriptor::new("dashboard", "Dashboard", "📊", "/dashboard", "Overview and analytics"),
        TabDescriptor::new("prd-builder", "PRD Builder", "📝", "/prd-builder", "Product requirement documents"),
        TabDescriptor::new("agent-console", "Agent Console", "🤖", "/agent-console", "Multi-modal AI dashboard"),
        TabDescriptor::new("editor", "Editor", "✏️", "/editor", "Markdown editing with live preview"),
        TabDescriptor::new("documents", "Documents", "📁", "/documents", "File management and exports"),
        TabDescriptor::new("mcp-servers", "MCP Servers", "🔌", "/mcp-servers", "Model Context Protocol integration"),
        TabDescriptor::new("code-analysis", "Code Analysis", "🔍", "/code-analysis", "AI-assisted code annotation"),
    ]
}

/// Immutable, ordered set of [`TabDescriptor`]s plus the designated default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRegistry {
    tabs: Vec<TabDescriptor>,
    default_id: String,
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TabRegistry {
    /// Returns the built-in registry with `dashboard` as the default tab.
    pub fn builtin() -> Self {
        Self {
            tabs: builtin_tabs(),
            default_id: DEFAULT_TAB_ID.to_string(),
        }
    }

    /// Creates a registry from a custom tab list.
    ///
    /// Fails if the list is empty, ids or paths repeat, a path does not start
    /// with `/`, or `default_id` names no tab.
    pub fn new(tabs: Vec<TabDescriptor>, default_id: &str) -> Result<Self> {
        if tabs.is_empty() {
            bail!("tab registry must contain at least one tab");
        }

        let mut ids = HashSet::new();
        let mut paths = HashSet::new();
        for tab in &tabs {
            if tab.id.is_empty() {
                bail!("tab with path '{}' has an empty id", tab.path);
            }
            if !tab.path.starts_with('/') {
                bail!("tab '{}' has path '{}' which does not start with '/'", tab.id, tab.path);
            }
            if !ids.insert(tab.id.as_str()) {
                bail!("duplicate tab id '{}'", tab.id);
            }
            if !paths.insert(tab.path.as_str()) {
                bail!("duplicate tab path '{}'", tab.path);
            }
        }

        if !ids.contains(default_id) {
            bail!("default tab '{}' is not in the registry", default_id);
        }

        Ok(Self {
            tabs,
            default_id: default_id.to_string(),
        })
    }

    /// Returns all descriptors in registry order.
    pub fn list(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    /// Looks up a descriptor by id.
    pub fn get(&self, id: &str) -> Option<&TabDescriptor> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Returns the id used when no route matches.
    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    /// Returns the default descriptor.
    pub fn default_tab(&self) -> &TabDescriptor {
        // Construction guarantees the default id is present.
        self.get(&self.default_id).unwrap_or(&self.tabs[0])
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}
