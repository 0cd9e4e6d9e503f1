//! Utility modules for the tool shell host.

pub mod formatting;
pub mod memory;

// Re-export commonly used items
pub use formatting::{format_width, format_memory_mb};
pub use memory::MemoryMonitor;
