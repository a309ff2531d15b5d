//! Progress Meter
//!
//! Whole-document scroll completion, independent of the outline.

use crate::types::ScrollMetrics;

/// Scroll completion in percent, always within `0.0..=100.0`.
///
/// A document that fits in the viewport (no scroll range) reports 0, as do
/// non-finite inputs.
pub fn scroll_percent(metrics: ScrollMetrics) -> f64 {
    let ScrollMetrics {
        scroll_top,
        scroll_height,
        viewport_height,
    } = metrics;

    let range = scroll_height - viewport_height;
    if !range.is_finite() || !scroll_top.is_finite() || range <= 0.0 {
        return 0.0;
    }

    let range = range.max(1.0);
    if scroll_top >= range {
        return 100.0;
    }
    (100.0 * scroll_top / range).clamp(0.0, 100.0)
}

/// Last computed percent, refreshed on every tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProgressMeter {
    percent: f64,
}

impl ProgressMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute from a fresh layout reading
    pub fn update(&mut self, metrics: ScrollMetrics) -> f64 {
        self.percent = scroll_percent(metrics);
        self.percent
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn reset(&mut self) {
        self.percent = 0.0;
    }
}
