//! Visibility Tracker
//!
//! Keeps `active_id` pointing at the section the reader is most plausibly
//! reading. The host reports intersection batches (one per observer
//! callback); each batch is applied immediately and fully supersedes the
//! previous conclusion.
//!
//! ## Selection rule
//!
//! Among the batch entries that intersect the observation window, the one with
//! the highest ratio wins; equal ratios go to the heading earlier in document
//! order. A batch with no intersecting heading leaves the active section
//! unchanged, so the highlight does not flicker while the reader is between
//! headings or inside trailing content.
//!
//! ## Lifecycle
//!
//! [`VisibilityTracker::observe`] starts a new observation and hands back an
//! [`ObservationToken`]. Starting another observation or calling
//! [`VisibilityTracker::release`] invalidates the previous token; batches
//! delivered under a stale token are dropped without error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Outline;

/// One heading's visibility, as reported by the host's observer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    pub id: String,
    pub is_intersecting: bool,
    /// Fraction of the heading's box inside the observation window, 0..=1
    pub ratio: f64,
    /// Heading lies entirely below the observation window
    #[serde(default)]
    pub is_below_window: bool,
}

impl Intersection {
    pub fn visible(id: impl Into<String>, ratio: f64) -> Self {
        Self {
            id: id.into(),
            is_intersecting: true,
            ratio,
            is_below_window: false,
        }
    }

    pub fn hidden(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_intersecting: false,
            ratio: 0.0,
            is_below_window: false,
        }
    }

    pub fn below(id: impl Into<String>) -> Self {
        Self {
            is_below_window: true,
            ..Self::hidden(id)
        }
    }
}

/// Handle for one live observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObservationToken(u64);

/// Heading rectangle relative to the viewport top (like a bounding client rect)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadingRect {
    pub top: f64,
    pub height: f64,
}

/// The viewport shrunk from the bottom, for hosts without a native
/// intersection observer.
///
/// Headings span the content column, so only the vertical overlap is
/// measured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationWindow {
    top: f64,
    bottom: f64,
}

impl ObservationWindow {
    /// `root_margin_bottom` is the fraction of the viewport height cut from
    /// the bottom edge (0.6 pulls the bottom edge up to 40% of the screen).
    pub fn new(viewport_height: f64, root_margin_bottom: f64) -> Self {
        let height = viewport_height.max(0.0);
        let margin = root_margin_bottom.clamp(0.0, 1.0);
        Self {
            top: 0.0,
            bottom: height * (1.0 - margin),
        }
    }

    /// Measure one heading against the window
    pub fn measure(&self, id: impl Into<String>, rect: HeadingRect) -> Intersection {
        let id = id.into();
        let is_below_window = rect.top >= self.bottom;

        if rect.height <= 0.0 {
            // A zero-height box intersects when it sits on or inside the edges
            let inside = rect.top >= self.top && rect.top <= self.bottom;
            return Intersection {
                id,
                is_intersecting: inside,
                ratio: if inside { 1.0 } else { 0.0 },
                is_below_window: is_below_window && !inside,
            };
        }

        let overlap = (rect.top + rect.height).min(self.bottom) - rect.top.max(self.top);
        if overlap > 0.0 {
            Intersection {
                id,
                is_intersecting: true,
                ratio: (overlap / rect.height).clamp(0.0, 1.0),
                is_below_window: false,
            }
        } else {
            Intersection {
                id,
                is_intersecting: false,
                ratio: 0.0,
                is_below_window,
            }
        }
    }
}

/// Tracks the active section for one mounted outline at a time
#[derive(Debug, Default)]
pub struct VisibilityTracker {
    /// id -> document position, for the live observation only
    positions: HashMap<String, usize>,
    first_id: Option<String>,
    active_id: Option<String>,
    live: Option<u64>,
    next_generation: u64,
    clear_above_first: bool,
}

impl VisibilityTracker {
    pub fn new(clear_above_first: bool) -> Self {
        Self {
            clear_above_first,
            ..Self::default()
        }
    }

    /// Start observing `outline`, releasing any previous observation.
    ///
    /// The outline must be final: ids are looked up by value for the lifetime
    /// of the observation.
    pub fn observe(&mut self, outline: &Outline) -> ObservationToken {
        self.release();

        self.positions = outline
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
        self.first_id = outline.first_id().map(str::to_string);
        self.active_id = self.first_id.clone();

        self.next_generation += 1;
        self.live = Some(self.next_generation);

        tracing::debug!(
            generation = self.next_generation,
            headings = outline.len(),
            "observation started"
        );
        ObservationToken(self.next_generation)
    }

    /// Stop observing. Safe to call when nothing is observed.
    pub fn release(&mut self) {
        if let Some(generation) = self.live.take() {
            tracing::debug!(generation, "observation released");
        }
        self.positions.clear();
        self.first_id = None;
        self.active_id = None;
    }

    /// Apply one intersection batch.
    ///
    /// Returns `true` when the active section changed. Batches under a stale
    /// token are ignored.
    pub fn apply(&mut self, token: ObservationToken, batch: &[Intersection]) -> bool {
        if self.live != Some(token.0) {
            tracing::trace!(generation = token.0, "batch for released observation ignored");
            return false;
        }

        let best = batch
            .iter()
            .filter(|i| i.is_intersecting && i.ratio.is_finite())
            .filter_map(|i| self.positions.get(&i.id).map(|&pos| (pos, i)))
            .fold(None::<(usize, &Intersection)>, |best, (pos, candidate)| match best {
                Some((best_pos, current))
                    if current.ratio > candidate.ratio
                        || (current.ratio == candidate.ratio && best_pos < pos) =>
                {
                    Some((best_pos, current))
                }
                _ => Some((pos, candidate)),
            });

        let next = match best {
            Some((_, winner)) => Some(winner.id.clone()),
            None if self.clear_above_first && self.above_first_heading(batch) => None,
            None => return false,
        };

        if next == self.active_id {
            return false;
        }
        tracing::trace!(from = ?self.active_id, to = ?next, "active section changed");
        self.active_id = next;
        true
    }

    /// The batch reports the first heading as still below the window
    fn above_first_heading(&self, batch: &[Intersection]) -> bool {
        match &self.first_id {
            Some(first) => batch
                .iter()
                .any(|i| &i.id == first && !i.is_intersecting && i.is_below_window),
            None => false,
        }
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Number of live observations; never more than one
    pub fn live_observations(&self) -> usize {
        usize::from(self.live.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OutlineEntry;

    fn outline(ids: &[&str]) -> Outline {
        Outline::new(
            ids.iter()
                .map(|id| OutlineEntry {
                    id: id.to_string(),
                    label: id.to_string(),
                    level: 2,
                })
                .collect(),
        )
    }

    #[test]
    fn test_observe_initializes_to_first_entry() {
        let mut tracker = VisibilityTracker::new(false);
        tracker.observe(&outline(&["overview", "visa"]));
        assert_eq!(tracker.active_id(), Some("overview"));
    }

    #[test]
    fn test_empty_outline_stays_none() {
        let mut tracker = VisibilityTracker::new(false);
        let token = tracker.observe(&Outline::default());
        assert_eq!(tracker.active_id(), None);
        assert!(!tracker.apply(token, &[Intersection::visible("ghost", 1.0)]));
        assert!(!tracker.apply(token, &[]));
        assert_eq!(tracker.active_id(), None);
    }

    #[test]
    fn test_highest_ratio_wins() {
        let mut tracker = VisibilityTracker::new(false);
        let token = tracker.observe(&outline(&["a", "b", "c"]));
        assert!(tracker.apply(
            token,
            &[
                Intersection::visible("a", 0.2),
                Intersection::visible("b", 0.9),
                Intersection::visible("c", 0.4),
            ]
        ));
        assert_eq!(tracker.active_id(), Some("b"));
    }

    #[test]
    fn test_tie_goes_to_document_order() {
        let mut tracker = VisibilityTracker::new(false);
        let token = tracker.observe(&outline(&["a", "b", "c"]));
        tracker.apply(
            token,
            &[
                Intersection::visible("c", 0.5),
                Intersection::visible("b", 0.5),
            ],
        );
        assert_eq!(tracker.active_id(), Some("b"));
    }

    #[test]
    fn test_no_intersection_keeps_last_value() {
        let mut tracker = VisibilityTracker::new(false);
        let token = tracker.observe(&outline(&["a", "b"]));
        tracker.apply(token, &[Intersection::visible("b", 1.0)]);
        assert!(!tracker.apply(
            token,
            &[Intersection::hidden("a"), Intersection::hidden("b")]
        ));
        assert_eq!(tracker.active_id(), Some("b"));
    }

    #[test]
    fn test_above_first_heading_clears_when_configured() {
        let mut tracker = VisibilityTracker::new(true);
        let token = tracker.observe(&outline(&["a", "b"]));
        assert!(tracker.apply(token, &[Intersection::below("a")]));
        assert_eq!(tracker.active_id(), None);

        let mut sticky = VisibilityTracker::new(false);
        let token = sticky.observe(&outline(&["a", "b"]));
        assert!(!sticky.apply(token, &[Intersection::below("a")]));
        assert_eq!(sticky.active_id(), Some("a"));
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut tracker = VisibilityTracker::new(false);
        let token = tracker.observe(&outline(&["a", "b"]));
        assert!(!tracker.apply(token, &[Intersection::visible("stale", 1.0)]));
        assert_eq!(tracker.active_id(), Some("a"));
    }

    #[test]
    fn test_nan_ratio_is_ignored() {
        let mut tracker = VisibilityTracker::new(false);
        let token = tracker.observe(&outline(&["a", "b"]));
        tracker.apply(
            token,
            &[
                Intersection::visible("a", f64::NAN),
                Intersection::visible("b", 0.1),
            ],
        );
        assert_eq!(tracker.active_id(), Some("b"));
    }

    #[test]
    fn test_stale_token_is_noop() {
        let mut tracker = VisibilityTracker::new(false);
        let old = tracker.observe(&outline(&["a", "b"]));
        let new = tracker.observe(&outline(&["x", "y"]));
        assert_ne!(old, new);
        assert!(!tracker.apply(old, &[Intersection::visible("y", 1.0)]));
        assert_eq!(tracker.active_id(), Some("x"));
        assert_eq!(tracker.live_observations(), 1);
    }

    #[test]
    fn test_release_drops_late_batches() {
        let mut tracker = VisibilityTracker::new(false);
        let token = tracker.observe(&outline(&["a", "b"]));
        tracker.release();
        assert_eq!(tracker.live_observations(), 0);
        assert!(!tracker.apply(token, &[Intersection::visible("b", 1.0)]));
        assert_eq!(tracker.active_id(), None);
        tracker.release();
        assert_eq!(tracker.live_observations(), 0);
    }

    #[test]
    fn test_window_measures_partial_overlap() {
        // 1000px viewport, bottom 60% cut: window is 0..400
        let window = ObservationWindow::new(1000.0, 0.6);
        assert!(window.measure("edge", HeadingRect { top: 400.0, height: 40.0 }).is_below_window);

        let full = window.measure("a", HeadingRect { top: 100.0, height: 40.0 });
        assert!(full.is_intersecting);
        assert_eq!(full.ratio, 1.0);

        let half = window.measure("b", HeadingRect { top: 380.0, height: 40.0 });
        assert!(half.is_intersecting);
        assert_eq!(half.ratio, 0.5);

        let below = window.measure("c", HeadingRect { top: 600.0, height: 40.0 });
        assert!(!below.is_intersecting);
        assert!(below.is_below_window);

        let above = window.measure("d", HeadingRect { top: -80.0, height: 40.0 });
        assert!(!above.is_intersecting);
        assert!(!above.is_below_window);
    }

    #[test]
    fn test_window_zero_height_heading() {
        let window = ObservationWindow::new(1000.0, 0.6);
        let inside = window.measure("a", HeadingRect { top: 10.0, height: 0.0 });
        assert!(inside.is_intersecting);
        let outside = window.measure("b", HeadingRect { top: 900.0, height: 0.0 });
        assert!(!outside.is_intersecting);
        assert!(outside.is_below_window);
    }
}
