//! Guide Engine - wires the four components for one guide page.
//!
//! ```text
//! mount(headings) ──► indexer ──► outline ──► tracker.observe ──► token
//!                                    │
//!                                    └──► assignments (caller writes ids)
//! on_intersections(token, batch) ──► tracker ──► active_id
//! on_scroll(metrics) ──► progress ──► percent
//! toggle_saved / rate ──► preference store
//! ```
//!
//! The engine is a single-threaded state machine driven by host events. The
//! outline is fully built before observation starts, and every mount
//! releases the previous observation.

use std::sync::Arc;

use crate::config::GuideConfig;
use crate::indexer::index_headings;
use crate::preferences::PreferenceStore;
use crate::progress::ProgressMeter;
use crate::tracker::{Intersection, ObservationToken, VisibilityTracker};
use crate::types::{
    ArticleId, GuideSnapshot, HeadingNode, IdAssignment, Outline, PreferenceRecord, Rating,
    ScrollMetrics,
};

/// What the host needs after a mount
#[derive(Debug, Clone)]
pub struct MountOutcome {
    /// Token to tag intersection batches with
    pub token: ObservationToken,
    /// Ids and scroll margins to write onto the headings
    pub assignments: Vec<IdAssignment>,
}

/// Navigation state for the guide currently on screen
#[derive(Debug)]
pub struct GuideEngine {
    config: GuideConfig,
    article: ArticleId,
    preferences: Arc<PreferenceStore>,
    outline: Outline,
    tracker: VisibilityTracker,
    progress: ProgressMeter,
    record: PreferenceRecord,
    mounted: bool,
}

impl GuideEngine {
    pub fn new(
        article: impl Into<ArticleId>,
        config: GuideConfig,
        preferences: Arc<PreferenceStore>,
    ) -> Self {
        let tracker = VisibilityTracker::new(config.clear_above_first);
        Self {
            config,
            article: article.into(),
            preferences,
            outline: Outline::default(),
            tracker,
            progress: ProgressMeter::new(),
            record: PreferenceRecord::default(),
            mounted: false,
        }
    }

    /// Index the content root and start observing it.
    ///
    /// Mounting again (route change) tears down the previous observation
    /// first, so at most one observation is ever live.
    pub fn mount(&mut self, headings: &[HeadingNode]) -> MountOutcome {
        if self.mounted {
            self.unmount();
        }

        let index = index_headings(headings, &self.config);
        self.outline = index.outline;
        let token = self.tracker.observe(&self.outline);
        self.record = self.preferences.record(&self.article);
        self.mounted = true;

        tracing::debug!(
            article = %self.article,
            sections = self.outline.len(),
            "guide mounted"
        );

        MountOutcome {
            token,
            assignments: index.assignments,
        }
    }

    /// Switch to another article and mount its content root
    pub fn remount(&mut self, article: impl Into<ArticleId>, headings: &[HeadingNode]) -> MountOutcome {
        self.unmount();
        self.article = article.into();
        self.mount(headings)
    }

    /// Stop observing and drop per-page state. Idempotent.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.tracker.release();
        self.progress.reset();
        self.outline = Outline::default();
        self.mounted = false;
        tracing::debug!(article = %self.article, "guide unmounted");
    }

    /// Apply an intersection batch. Late batches after unmount are ignored.
    pub fn on_intersections(&mut self, token: ObservationToken, batch: &[Intersection]) -> bool {
        self.tracker.apply(token, batch)
    }

    /// Recompute scroll progress from a fresh layout reading
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> f64 {
        self.progress.update(metrics)
    }

    pub fn set_saved(&mut self, saved: bool) {
        self.preferences.set_saved(&self.article, saved);
        self.record.saved = saved;
    }

    pub fn toggle_saved(&mut self) -> bool {
        let saved = !self.record.saved;
        self.set_saved(saved);
        saved
    }

    pub fn rate(&mut self, rating: Rating) {
        self.preferences.set_rating(&self.article, rating);
        self.record.rating = Some(rating);
    }

    pub fn article(&self) -> &ArticleId {
        &self.article
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn active_id(&self) -> Option<&str> {
        self.tracker.active_id()
    }

    pub fn percent(&self) -> f64 {
        self.progress.percent()
    }

    pub fn preferences(&self) -> PreferenceRecord {
        self.record
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn live_observations(&self) -> usize {
        self.tracker.live_observations()
    }

    pub fn snapshot(&self) -> GuideSnapshot {
        GuideSnapshot {
            article: self.article.clone(),
            outline: self.outline.clone(),
            active_id: self.tracker.active_id().map(str::to_string),
            percent: self.progress.percent(),
            preferences: self.record,
        }
    }
}

impl Drop for GuideEngine {
    fn drop(&mut self) {
        self.unmount();
    }
}
