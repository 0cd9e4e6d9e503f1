//! State management modules for the tool shell host.
//!
//! Shell state proper lives in the library's `ShellController`; this module
//! only holds host-side presentation state:
//! - Theme state (theme manager, current theme)

mod theme_state;

pub use theme_state::ThemeState;
