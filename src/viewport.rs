//! Viewport size classification.
//!
//! Widths are bucketed into three [`ViewportClass`]es that drive the side
//! panel policy. Classification is a pure function of the width; the
//! [`ViewportSignal`] layers change notification on top of it so the shell
//! only hears about class changes, not every pixel of a resize.

use crate::signal::{Signal, Subscription};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete size class of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Mobile,
    Tablet,
    Desktop,
}

impl ViewportClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewportClass::Mobile => "mobile",
            ViewportClass::Tablet => "tablet",
            ViewportClass::Desktop => "desktop",
        }
    }
}

impl fmt::Display for ViewportClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Width thresholds separating the viewport classes, in pixels.
///
/// `width <= mobile_max` is mobile, `width >= desktop_min` is desktop,
/// anything in between is tablet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub mobile_max: u32,
    pub desktop_min: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max: 767,
            desktop_min: 1200,
        }
    }
}

impl Breakpoints {
    /// Creates validated breakpoints.
    pub fn new(mobile_max: u32, desktop_min: u32) -> Result<Self> {
        let breakpoints = Self { mobile_max, desktop_min };
        breakpoints.validate()?;
        Ok(breakpoints)
    }

    pub fn validate(&self) -> Result<()> {
        if self.mobile_max >= self.desktop_min {
            bail!(
                "mobile_max ({}) must be below desktop_min ({})",
                self.mobile_max,
                self.desktop_min
            );
        }
        Ok(())
    }

    /// Classifies a sanitized width.
    pub fn classify(&self, width_px: u32) -> ViewportClass {
        if width_px <= self.mobile_max {
            ViewportClass::Mobile
        } else if width_px < self.desktop_min {
            ViewportClass::Tablet
        } else {
            ViewportClass::Desktop
        }
    }
}

/// Classifies a width against the default breakpoints.
pub fn classify(width_px: u32) -> ViewportClass {
    Breakpoints::default().classify(width_px)
}

/// Normalizes a host-reported width to whole pixels.
///
/// Negative, NaN and infinite widths become 0; fractional widths are
/// truncated.
pub fn sanitize_width(width: f32) -> u32 {
    if !width.is_finite() || width <= 0.0 {
        return 0;
    }
    if width >= u32::MAX as f32 {
        return u32::MAX;
    }
    width as u32
}

/// Remembers the last computed class so repeated widths in the same class
/// are reported only once.
#[derive(Debug, Clone)]
pub struct ViewportClassifier {
    breakpoints: Breakpoints,
    last: Option<ViewportClass>,
}

impl Default for ViewportClassifier {
    fn default() -> Self {
        Self::new(Breakpoints::default())
    }
}

impl ViewportClassifier {
    pub fn new(breakpoints: Breakpoints) -> Self {
        Self {
            breakpoints,
            last: None,
        }
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    /// Classifies a raw host width without touching the remembered class.
    pub fn classify(&self, width: f32) -> ViewportClass {
        self.breakpoints.classify(sanitize_width(width))
    }

    /// Classifies `width` and returns the class only if it differs from the
    /// previous observation.
    pub fn observe(&mut self, width: f32) -> Option<ViewportClass> {
        let class = self.classify(width);
        if self.last == Some(class) {
            return None;
        }
        self.last = Some(class);
        Some(class)
    }

    /// The most recently observed class, if any width has been observed.
    pub fn current(&self) -> Option<ViewportClass> {
        self.last
    }
}

/// Live viewport width plus class-change notification.
///
/// The host calls [`ViewportSignal::set_width`] whenever its window may
/// have resized; subscribers are notified only when the class changes.
#[derive(Debug)]
pub struct ViewportSignal {
    classifier: ViewportClassifier,
    width: u32,
    changes: Signal<ViewportClass>,
}

impl ViewportSignal {
    /// Creates a signal primed with the initial width. The initial class is
    /// not broadcast; consumers read it with [`ViewportSignal::class`] when
    /// they mount.
    pub fn new(breakpoints: Breakpoints, initial_width: f32) -> Self {
        let mut classifier = ViewportClassifier::new(breakpoints);
        classifier.observe(initial_width);
        Self {
            classifier,
            width: sanitize_width(initial_width),
            changes: Signal::new(),
        }
    }

    /// Current width in whole pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current viewport class.
    pub fn class(&self) -> ViewportClass {
        self.classifier
            .current()
            .unwrap_or_else(|| self.classifier.breakpoints().classify(self.width))
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.classifier.breakpoints()
    }

    /// Records a new width, notifying subscribers if the class changed.
    pub fn set_width(&mut self, width: f32) {
        self.width = sanitize_width(width);
        if let Some(class) = self.classifier.observe(width) {
            tracing::debug!(width = self.width, class = %class, "viewport class changed");
            self.changes.emit(&class);
        }
    }

    /// Subscribes to class changes.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&ViewportClass) + 'static,
    {
        self.changes.subscribe(listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(0), ViewportClass::Mobile);
        assert_eq!(classify(767), ViewportClass::Mobile);
        assert_eq!(classify(768), ViewportClass::Tablet);
        assert_eq!(classify(1199), ViewportClass::Tablet);
        assert_eq!(classify(1200), ViewportClass::Desktop);
        assert_eq!(classify(u32::MAX), ViewportClass::Desktop);
    }

    #[test]
    fn test_sanitize_malformed_widths() {
        assert_eq!(sanitize_width(-5.0), 0);
        assert_eq!(sanitize_width(f32::NAN), 0);
        assert_eq!(sanitize_width(f32::INFINITY), 0);
        assert_eq!(sanitize_width(f32::NEG_INFINITY), 0);
        assert_eq!(sanitize_width(767.9), 767);
        assert_eq!(sanitize_width(1e12), u32::MAX);
    }

    #[test]
    fn test_malformed_width_classifies_as_mobile() {
        let classifier = ViewportClassifier::default();
        assert_eq!(classifier.classify(f32::NAN), ViewportClass::Mobile);
        assert_eq!(classifier.classify(-100.0), ViewportClass::Mobile);
    }

    #[test]
    fn test_custom_breakpoints() {
        let breakpoints = Breakpoints::new(599, 1000).unwrap();
        assert_eq!(breakpoints.classify(599), ViewportClass::Mobile);
        assert_eq!(breakpoints.classify(600), ViewportClass::Tablet);
        assert_eq!(breakpoints.classify(1000), ViewportClass::Desktop);
    }

    #[test]
    fn test_invalid_breakpoints() {
        assert!(Breakpoints::new(1200, 1200).is_err());
        assert!(Breakpoints::new(1300, 1200).is_err());
    }

    #[test]
    fn test_observe_deduplicates() {
        let mut classifier = ViewportClassifier::default();
        assert_eq!(classifier.observe(1400.0), Some(ViewportClass::Desktop));
        assert_eq!(classifier.observe(1300.0), None);
        assert_eq!(classifier.observe(1000.0), Some(ViewportClass::Tablet));
        assert_eq!(classifier.observe(900.0), None);
        assert_eq!(classifier.current(), Some(ViewportClass::Tablet));
    }

    #[test]
    fn test_signal_notifies_only_on_class_change() {
        let mut signal = ViewportSignal::new(Breakpoints::default(), 1400.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _subscription = {
            let seen = Rc::clone(&seen);
            signal.subscribe(move |class| seen.borrow_mut().push(*class))
        };

        signal.set_width(1350.0);
        signal.set_width(1000.0);
        signal.set_width(1100.0);
        signal.set_width(500.0);
        signal.set_width(400.0);

        assert_eq!(*seen.borrow(), vec![ViewportClass::Tablet, ViewportClass::Mobile]);
        assert_eq!(signal.width(), 400);
        assert_eq!(signal.class(), ViewportClass::Mobile);
    }

    #[test]
    fn test_signal_initial_class_not_broadcast() {
        let mut signal = ViewportSignal::new(Breakpoints::default(), 500.0);
        let calls = Rc::new(RefCell::new(0));
        let _subscription = {
            let calls = Rc::clone(&calls);
            signal.subscribe(move |_| *calls.borrow_mut() += 1)
        };
        signal.set_width(600.0);
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(signal.class(), ViewportClass::Mobile);
    }

    #[test]
    fn test_class_serializes_lowercase() {
        let json = serde_json::to_string(&ViewportClass::Tablet).unwrap();
        assert_eq!(json, "\"tablet\"");
    }
}
