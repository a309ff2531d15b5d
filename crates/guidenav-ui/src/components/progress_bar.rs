//! Progress Bar Component
//!
//! Thin fill bar pinned to the top of the page.

use dioxus::prelude::*;

/// Inline width style for a percent, clamped to 0-100
pub fn progress_width_style(percent: f64) -> String {
    let percent = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    format!("width: {:.1}%", percent)
}

/// Properties for the ProgressBar component
#[derive(Clone, PartialEq, Props)]
pub struct ProgressBarProps {
    /// Reading progress, 0-100
    pub percent: f64,
}

#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let style = progress_width_style(props.percent);
    let rounded = props.percent.clamp(0.0, 100.0).round() as u8;

    rsx! {
        div {
            class: "reading-progress",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{rounded}",
            div { class: "reading-progress__fill", style: "{style}" }
        }
    }
}
