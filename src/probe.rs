//! Scroll probe for the guide page.
//!
//! The webview has no direct line into the engine, so a small script reports
//! the scroll position and heading boxes once per animation frame while the
//! reader scrolls. Samples are turned into intersection batches here, using
//! the same shrunken-viewport window an intersection observer would.

use guidenav_core::{HeadingRect, Intersection, ObservationWindow, ScrollMetrics};
use serde::{Deserialize, Serialize};

/// Installed once per guide page.
///
/// Samples are tagged with the epoch of the last `rescan` command, which the
/// page sends after new guide HTML has been rendered. A `stop` command
/// removes the listeners.
pub const SCROLL_PROBE: &str = r#"
let epoch = 0;
const sample = () => {
  const headings = Array.from(
    document.querySelectorAll('.guide-article h2[id], .guide-article h3[id]')
  ).map((h) => {
    const r = h.getBoundingClientRect();
    return { id: h.id, top: r.top, height: r.height };
  });
  dioxus.send({
    epoch,
    scroll_top: window.scrollY,
    scroll_height: document.documentElement.scrollHeight,
    viewport_height: window.innerHeight,
    headings,
  });
};
let queued = false;
const onScroll = () => {
  if (queued) return;
  queued = true;
  requestAnimationFrame(() => {
    queued = false;
    sample();
  });
};
window.addEventListener('scroll', onScroll, { passive: true });
window.addEventListener('resize', onScroll);
while (true) {
  const command = await dioxus.recv();
  if (command === 'stop') break;
  if (command && command.rescan !== undefined) {
    epoch = command.rescan;
    onScroll();
  }
}
window.removeEventListener('scroll', onScroll);
window.removeEventListener('resize', onScroll);
"#;

/// Messages from the page to the running probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeCommand {
    /// New content is in the DOM; measure it and tag samples with this epoch
    Rescan(u64),
    Stop,
}

/// Asks the page to jump to the top after a route change
pub const SCROLL_TO_TOP: &str = "window.scrollTo(0, 0);";

/// One heading's box relative to the viewport
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeadingProbe {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// One report from the probe
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScrollSample {
    /// Rescan epoch the probe was on when it measured
    #[serde(default)]
    pub epoch: u64,
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
    #[serde(default)]
    pub headings: Vec<HeadingProbe>,
}

impl ScrollSample {
    /// Whether the sample measured the content of rescan `epoch`.
    /// Epoch 0 means no content has been announced yet.
    pub fn is_current(&self, epoch: u64) -> bool {
        epoch != 0 && self.epoch == epoch
    }

    pub fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(self.scroll_top, self.scroll_height, self.viewport_height)
    }

    /// Measure every reported heading against the observation window
    pub fn intersections(&self, root_margin_bottom: f64) -> Vec<Intersection> {
        let window = ObservationWindow::new(self.viewport_height, root_margin_bottom);
        self.headings
            .iter()
            .map(|h| {
                window.measure(
                    h.id.clone(),
                    HeadingRect {
                        top: h.top,
                        height: h.height,
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(headings: Vec<(&str, f64)>) -> ScrollSample {
        ScrollSample {
            epoch: 1,
            scroll_top: 1200.0,
            scroll_height: 5000.0,
            viewport_height: 1000.0,
            headings: headings
                .into_iter()
                .map(|(id, top)| HeadingProbe {
                    id: id.to_string(),
                    top,
                    height: 40.0,
                })
                .collect(),
        }
    }

    #[test]
    fn parses_probe_payload() {
        let json = r#"{
            "scroll_top": 10.5,
            "scroll_height": 3000,
            "viewport_height": 800,
            "headings": [{"id": "overview", "top": -20, "height": 36}]
        }"#;
        let parsed: ScrollSample = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.epoch, 0);
        assert_eq!(parsed.headings.len(), 1);
        assert_eq!(parsed.headings[0].id, "overview");
        assert_eq!(parsed.metrics().scroll_top, 10.5);
    }

    #[test]
    fn headings_below_the_shrunken_window_are_not_intersecting() {
        // Window bottom sits at 400px with a 0.6 margin
        let batch = sample(vec![("overview", 100.0), ("visa", 600.0)]).intersections(0.6);
        assert!(batch[0].is_intersecting);
        assert!(!batch[1].is_intersecting);
        assert!(batch[1].is_below_window);
    }

    #[test]
    fn headings_scrolled_past_are_not_below() {
        let batch = sample(vec![("overview", -300.0)]).intersections(0.6);
        assert!(!batch[0].is_intersecting);
        assert!(!batch[0].is_below_window);
    }

    #[test]
    fn missing_headings_field_defaults_to_empty() {
        let json = r#"{"scroll_top": 0, "scroll_height": 0, "viewport_height": 0}"#;
        let parsed: ScrollSample = serde_json::from_str(json).unwrap();
        assert!(parsed.intersections(0.6).is_empty());
    }

    #[test]
    fn commands_match_what_the_script_expects() {
        assert_eq!(
            serde_json::to_string(&ProbeCommand::Rescan(3)).unwrap(),
            r#"{"rescan":3}"#
        );
        assert_eq!(serde_json::to_string(&ProbeCommand::Stop).unwrap(), r#""stop""#);
    }

    #[test]
    fn samples_carry_their_epoch() {
        let json = r#"{"epoch": 2, "scroll_top": 0, "scroll_height": 900, "viewport_height": 900}"#;
        let parsed: ScrollSample = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.epoch, 2);
    }

    #[test]
    fn samples_from_the_previous_guide_are_not_current() {
        // The old guide also had an "overview" heading in view
        let stale = sample(vec![("overview", 100.0)]);
        assert!(stale.is_current(1));
        assert!(!stale.is_current(2));

        let before_first_rescan = ScrollSample { epoch: 0, ..stale };
        assert!(!before_first_rescan.is_current(0));
    }
}
