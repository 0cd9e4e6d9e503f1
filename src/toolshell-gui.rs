//! Tool Shell GUI Application
//!
//! Desktop host for the responsive navigation shell, built on eframe/egui.
//! The window hosts one tool page at a time inside a persistent frame:
//! - Header with navigation toggle, history buttons and theme selector
//! - Side panel that is expanded, collapsed or off-canvas depending on width
//! - Content slot showing the tool selected by the current route
//! - Status bar with route, viewport class and memory usage
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and coordination with the shell core
//! - `state/` - Host-side presentation state (theme)
//! - `ui/` - Frame composition and panel rendering
//! - `pages/` - Tool pages rendered in the content slot
//! - `utils/` - Formatting helpers

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::{Path, PathBuf};
use toolshell::{ShellConfig, TabRegistry};
use tracing_subscriber::EnvFilter;

mod app;
mod pages;
mod state;
mod ui;
mod utils;

use app::{AppState, ShellCoordinator, ThemeCoordinator};
use ui::panel_manager::PanelManager;

/// Command-line options: `toolshell-gui [ROUTE] [--config FILE]`.
#[derive(Debug, Default, PartialEq)]
struct LaunchOptions {
    initial_route: Option<String>,
    config_path: Option<PathBuf>,
}

impl LaunchOptions {
    fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == "--config" || arg == "-c" {
                match args.next() {
                    Some(path) => options.config_path = Some(PathBuf::from(path)),
                    None => tracing::warn!("--config requires a file path"),
                }
            } else if options.initial_route.is_none() {
                options.initial_route = Some(arg);
            } else {
                tracing::warn!(argument = %arg, "ignoring extra argument");
            }
        }
        options
    }
}

/// Loads the config file if one was given, falling back to defaults on error.
fn load_config(path: Option<&Path>) -> ShellConfig {
    let Some(path) = path else {
        return ShellConfig::default();
    };
    match ShellConfig::load(path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded config");
            config
        }
        Err(err) => {
            tracing::warn!("{:#}; using default configuration", err);
            ShellConfig::default()
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Main application entry point that initializes and launches the shell GUI.
fn main() -> eframe::Result {
    init_tracing();

    let options = LaunchOptions::from_args(std::env::args().skip(1));
    let config = load_config(options.config_path.as_deref());
    let registry = config.registry().unwrap_or_else(|err| {
        tracing::warn!("{:#}; using built-in tabs", err);
        TabRegistry::builtin()
    });
    let initial_route = options
        .initial_route
        .unwrap_or_else(|| config.initial_route.clone());

    tracing::info!(route = %initial_route, tabs = registry.len(), "starting Tool Shell");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([320.0, 480.0])
            .with_title("Tool Shell"),
        ..Default::default()
    };

    eframe::run_native(
        "Tool Shell",
        native_options,
        Box::new(move |cc| Ok(Box::new(ToolShellApp::new(cc, &config, registry, &initial_route)))),
    )
}

/// The main Tool Shell application.
///
/// Delegates to coordinators:
/// - `ShellCoordinator` feeds width, shortcuts and clicks into the shell core
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles frame layout and rendering
struct ToolShellApp {
    /// Centralized application state
    state: AppState,
}

impl ToolShellApp {
    /// Creates the app, restoring the theme preference from persistent storage.
    fn new(cc: &eframe::CreationContext, config: &ShellConfig, registry: TabRegistry, initial_route: &str) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage, &config.theme);

        Self {
            state: AppState::new(config, registry, initial_route, &theme_name),
        }
    }
}

impl eframe::App for ToolShellApp {
    /// Called when the app is being shut down - saves the theme preference.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
    }

    /// Main update loop:
    /// 1. Apply theme
    /// 2. Report viewport width and apply resulting shell events
    /// 3. Render all panels via PanelManager
    /// 4. Route interactions and apply resulting shell events
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state.theme);

        ShellCoordinator::sync_viewport(ctx, &mut self.state);
        ShellCoordinator::pump(&mut self.state);

        let mut interactions = ShellCoordinator::keyboard_interactions(ctx);
        interactions.extend(PanelManager::render_all_panels(ctx, &mut self.state));

        if interactions.is_empty() {
            return;
        }
        ShellCoordinator::handle_interactions(&mut self.state, interactions);
        if ShellCoordinator::pump(&mut self.state) > 0 {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(LaunchOptions::from_args(args(&[])), LaunchOptions::default());
    }

    #[test]
    fn test_route_and_config() {
        let options = LaunchOptions::from_args(args(&["/editor", "--config", "shell.json"]));
        assert_eq!(options.initial_route.as_deref(), Some("/editor"));
        assert_eq!(options.config_path, Some(PathBuf::from("shell.json")));
    }

    #[test]
    fn test_config_before_route() {
        let options = LaunchOptions::from_args(args(&["-c", "shell.json", "/documents", "extra"]));
        assert_eq!(options.initial_route.as_deref(), Some("/documents"));
        assert_eq!(options.config_path, Some(PathBuf::from("shell.json")));
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let path = std::env::temp_dir().join("toolshell-gui-missing-config.json");
        assert_eq!(load_config(Some(path.as_path())), ShellConfig::default());
        assert_eq!(load_config(None), ShellConfig::default());
    }
}
