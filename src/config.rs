//! Shell configuration.
//!
//! Every field is optional in the JSON file; missing fields take the
//! built-in defaults.

use crate::tabs::{builtin_tabs, TabDescriptor, TabRegistry, DEFAULT_TAB_ID};
use crate::theme::DEFAULT_THEME;
use crate::viewport::Breakpoints;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Initial window size for the desktop host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// Top-level shell configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub breakpoints: Breakpoints,
    /// Tab shown when no route matches
    pub default_tab: String,
    /// Replaces the built-in tab catalog when present
    pub tabs: Option<Vec<TabDescriptor>>,
    /// Route the shell opens at
    pub initial_route: String,
    /// Theme used until the user picks one
    pub theme: String,
    pub window: WindowConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            default_tab: DEFAULT_TAB_ID.to_string(),
            tabs: None,
            initial_route: "/".to_string(),
            theme: DEFAULT_THEME.to_string(),
            window: WindowConfig::default(),
        }
    }
}

impl ShellConfig {
    /// Reads and validates a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parses and validates a JSON config document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("malformed JSON")?;
        config.breakpoints.validate()?;
        config.registry()?;
        Ok(config)
    }

    /// Builds the tab registry this config describes.
    pub fn registry(&self) -> Result<TabRegistry> {
        let tabs = self.tabs.clone().unwrap_or_else(builtin_tabs);
        TabRegistry::new(tabs, &self.default_tab).context("invalid tab registry")
    }
}
