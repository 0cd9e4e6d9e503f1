//! Process memory sampling for the status bar.

use std::time::{Duration, Instant};
use sysinfo::{Pid, ProcessRefreshKind, System};

/// Minimum time between two process refreshes.
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Tracks this process's resident memory, refreshing at most once per
/// [`SAMPLE_INTERVAL`].
pub struct MemoryMonitor {
    system: System,
    pid: Pid,
    last_refresh: Option<Instant>,
    memory_mb: f64,
}

impl Default for MemoryMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryMonitor {
    pub fn new() -> Self {
        Self {
            system: System::new(),
            pid: Pid::from_u32(std::process::id()),
            last_refresh: None,
            memory_mb: 0.0,
        }
    }

    /// Returns the memory usage in MB, refreshing it first if the last
    /// sample is stale.
    pub fn sample(&mut self) -> f64 {
        self.sample_at(Instant::now())
    }

    fn sample_at(&mut self, now: Instant) -> f64 {
        if self.is_due(now) {
            self.refresh(now);
        }
        self.memory_mb
    }

    fn is_due(&self, now: Instant) -> bool {
        match self.last_refresh {
            Some(last) => now.saturating_duration_since(last) >= SAMPLE_INTERVAL,
            None => true,
        }
    }

    fn refresh(&mut self, now: Instant) {
        self.last_refresh = Some(now);
        let kind = ProcessRefreshKind::new().with_memory();
        if !self.system.refresh_process_specifics(self.pid, kind) {
            tracing::debug!(pid = %self.pid, "process memory unavailable");
            self.memory_mb = 0.0;
            return;
        }
        self.memory_mb = self
            .system
            .process(self.pid)
            .map(|process| process.memory() as f64 / (1024.0 * 1024.0))
            .unwrap_or(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_refreshes() {
        let mut monitor = MemoryMonitor::new();
        let now = Instant::now();
        assert!(monitor.is_due(now));

        let memory = monitor.sample_at(now);
        assert!(memory.is_finite() && memory >= 0.0);
        assert_eq!(monitor.last_refresh, Some(now));
    }

    #[test]
    fn test_samples_are_throttled() {
        let mut monitor = MemoryMonitor::new();
        let start = Instant::now();
        monitor.sample_at(start);

        let soon = start + Duration::from_millis(400);
        monitor.sample_at(soon);
        assert_eq!(monitor.last_refresh, Some(start));

        let later = start + SAMPLE_INTERVAL;
        assert!(monitor.is_due(later));
        monitor.sample_at(later);
        assert_eq!(monitor.last_refresh, Some(later));
    }

    #[test]
    fn test_cached_value_is_returned_between_refreshes() {
        let mut monitor = MemoryMonitor::new();
        let start = Instant::now();
        let first = monitor.sample_at(start);
        monitor.memory_mb = first + 1.0;

        assert_eq!(monitor.sample_at(start + Duration::from_millis(10)), first + 1.0);
    }
}
