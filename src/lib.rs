pub mod tabs;
pub mod signal;
pub mod viewport;
pub mod route;
pub mod shell;
pub mod frame;
pub mod config;
pub mod theme;

// Export the tab catalog
pub use tabs::{TabDescriptor, TabRegistry, builtin_tabs, DEFAULT_TAB_ID};

// Export viewport classification
pub use viewport::{
    Breakpoints, ViewportClass, ViewportClassifier, ViewportSignal,
    classify, sanitize_width
};

// Export routing
pub use route::{MemoryHistory, Navigator, resolve, normalize_path};

// Export the shell state machine
pub use shell::{PanelMode, ShellController, ShellEvent, ShellState};

// Export frame composition helpers
pub use frame::{FrameInteraction, FrameLayout, route_interaction};

// Export notification primitives
pub use signal::{Signal, Subscription};

// Export configuration
pub use config::{ShellConfig, WindowConfig};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, with_alpha};
