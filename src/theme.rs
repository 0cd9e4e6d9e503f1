//! Theme support for the tool shell
//!
//! Provides named color palettes and applies them to egui visuals. The
//! default "Slate" palette follows the shell's dark slate look; "Light" is a
//! plain light alternative.
//!
//! # Examples
//!
//! ```
//! use toolshell::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let slate = manager.get_theme("Slate").unwrap();
//! println!("Slate background: {:?}", slate.colors.background);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Name of the theme used when nothing else is configured.
pub const DEFAULT_THEME: &str = "Slate";

/// Color palette for the shell chrome
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Accents
    pub accent: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,

    /// Scrim drawn behind a floating side panel
    pub overlay: Color32,
}

/// A complete theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub dark: bool,
    pub colors: ThemeColors,
}

/// Lookup of all available themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    /// Creates a ThemeManager with the built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        for theme in [slate_theme(), light_theme()] {
            themes.insert(theme.name.clone(), theme);
        }
        Self { themes }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Retrieves a theme by name, falling back to the default theme
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        match self.themes.get(name) {
            Some(theme) => theme,
            None => &self.themes[DEFAULT_THEME],
        }
    }

    /// Returns a sorted list of all available theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Builds egui visuals for a theme
    pub fn visuals_for(&self, theme: &Theme) -> egui::Visuals {
        let mut visuals = if theme.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        self.apply_theme(theme, &mut visuals);
        visuals
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.accent;

        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Dark slate palette (slate-950 canvas, slate-900 panels, cyan accent)
fn slate_theme() -> Theme {
    Theme {
        name: DEFAULT_THEME.to_string(),
        description: "Dark slate palette".to_string(),
        dark: true,
        colors: ThemeColors {
            background: hex_to_color32("#020617"),
            panel_background: hex_to_color32("#0f172a"),
            extreme_background: hex_to_color32("#020617"),

            text: hex_to_color32("#f8fafc"),
            text_dim: hex_to_color32("#94a3b8"),
            text_strong: hex_to_color32("#ffffff"),

            selection: hex_to_color32("#1e293b"),
            hover: hex_to_color32("#1e293b"),
            border: hex_to_color32("#334155"),

            accent: hex_to_color32("#22d3ee"),
            success: hex_to_color32("#22c55e"),
            warning: hex_to_color32("#facc15"),
            error: hex_to_color32("#f87171"),

            overlay: with_alpha(Color32::BLACK, 128),
        },
    }
}

/// Light palette built on egui's light defaults
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light palette".to_string(),
        dark: false,
        colors: ThemeColors {
            background: Color32::from_rgb(248, 250, 252),
            panel_background: Color32::from_rgb(241, 245, 249),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(15, 23, 42),
            text_dim: Color32::from_rgb(100, 116, 139),
            text_strong: Color32::from_rgb(0, 0, 0),

            selection: Color32::from_rgb(186, 230, 253),
            hover: Color32::from_rgb(226, 232, 240),
            border: Color32::from_rgb(203, 213, 225),

            accent: Color32::from_rgb(8, 145, 178),
            success: Color32::from_rgb(22, 163, 74),
            warning: Color32::from_rgb(202, 138, 4),
            error: Color32::from_rgb(220, 38, 38),

            overlay: with_alpha(Color32::BLACK, 96),
        },
    }
}

/// Converts a hex color string (like "#0f172a") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
