//! Save Toggle Component

use dioxus::prelude::*;

/// Button text for the saved state
pub fn save_label(saved: bool) -> &'static str {
    if saved {
        "Saved"
    } else {
        "Save guide"
    }
}

/// Properties for the SaveToggle component
#[derive(Clone, PartialEq, Props)]
pub struct SaveToggleProps {
    /// Whether the article is currently saved
    pub saved: bool,
    /// Called when the reader flips the toggle
    pub on_toggle: EventHandler<()>,
}

/// Bookmark-style toggle for the article's saved flag
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SaveToggle {
///         saved: snapshot.preferences.saved,
///         on_toggle: move |_| { engine.write().toggle_saved(); }
///     }
/// }
/// ```
#[component]
pub fn SaveToggle(props: SaveToggleProps) -> Element {
    let class = if props.saved {
        "save-toggle save-toggle--on"
    } else {
        "save-toggle"
    };

    rsx! {
        button {
            class: "{class}",
            "aria-pressed": if props.saved { "true" } else { "false" },
            onclick: move |_| props.on_toggle.call(()),
            "{save_label(props.saved)}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(save_label(true), "Saved");
        assert_eq!(save_label(false), "Save guide");
    }
}
