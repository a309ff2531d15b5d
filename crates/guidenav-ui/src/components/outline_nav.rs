//! Outline Navigation Component
//!
//! The guide's table of contents. Rendered as a sticky sidebar on desktop
//! and as a collapsible drawer on narrow screens; both bind to the same
//! outline and active id.

use dioxus::prelude::*;
use guidenav_core::{Outline, OutlineEntry};

/// Layout variants for the outline
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OutlineVariant {
    /// Sticky sidebar next to the article
    #[default]
    Sidebar,
    /// Collapsible drawer for mobile layouts
    Drawer,
}

impl OutlineVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            OutlineVariant::Sidebar => "outline-nav outline-nav--sidebar",
            OutlineVariant::Drawer => "outline-nav outline-nav--drawer",
        }
    }
}

/// CSS class for one outline item
pub fn outline_item_class(entry: &OutlineEntry, is_active: bool) -> String {
    let depth = if entry.level > 2 {
        "outline-item--minor"
    } else {
        "outline-item--major"
    };
    if is_active {
        format!("outline-item {} outline-item--active", depth)
    } else {
        format!("outline-item {}", depth)
    }
}

/// Label for the drawer toggle: the active section, or a generic title
pub fn drawer_label(outline: &Outline, active_id: Option<&str>) -> String {
    active_id
        .and_then(|id| outline.iter().find(|e| e.id == id))
        .map(|e| e.label.clone())
        .unwrap_or_else(|| "Contents".to_string())
}

/// Properties for the OutlineNav component
#[derive(Clone, PartialEq, Props)]
pub struct OutlineNavProps {
    /// Outline built at mount
    pub outline: Outline,
    /// Currently active section
    #[props(default)]
    pub active_id: Option<String>,
    /// Sidebar or drawer layout
    #[props(default)]
    pub variant: OutlineVariant,
    /// Called with the id of a clicked entry
    #[props(default)]
    pub on_select: Option<EventHandler<String>>,
}

/// Table of contents for a guide
///
/// Entries link to `#id`, so navigation works even without a handler. An
/// empty outline renders nothing.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     OutlineNav {
///         outline: snapshot.outline.clone(),
///         active_id: snapshot.active_id.clone(),
///         variant: OutlineVariant::Drawer,
///     }
/// }
/// ```
#[component]
pub fn OutlineNav(props: OutlineNavProps) -> Element {
    let mut drawer_open = use_signal(|| false);

    if props.outline.is_empty() {
        return rsx! {};
    }

    let active = props.active_id.clone();
    let is_drawer = props.variant == OutlineVariant::Drawer;
    let show_items = !is_drawer || drawer_open();
    let toggle_label = drawer_label(&props.outline, active.as_deref());

    rsx! {
        nav {
            class: "{props.variant.class()}",
            "aria-label": "Guide contents",

            if is_drawer {
                button {
                    class: "outline-drawer-toggle",
                    "aria-expanded": if drawer_open() { "true" } else { "false" },
                    onclick: move |_| drawer_open.toggle(),
                    "{toggle_label}"
                }
            }

            if show_items {
                ul { class: "outline-list",
                    for entry in props.outline.iter() {
                        {
                            let is_active = active.as_deref() == Some(entry.id.as_str());
                            let item_class = outline_item_class(entry, is_active);
                            let id = entry.id.clone();
                            let on_select = props.on_select;
                            rsx! {
                                li { key: "{entry.id}", class: "{item_class}",
                                    a {
                                        href: "#{entry.id}",
                                        "aria-current": if is_active { "location" } else { "false" },
                                        onclick: move |_| {
                                            if let Some(handler) = &on_select {
                                                handler.call(id.clone());
                                            }
                                            if is_drawer {
                                                drawer_open.set(false);
                                            }
                                        },
                                        "{entry.label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, level: u8) -> OutlineEntry {
        OutlineEntry {
            id: id.to_string(),
            label: id.to_uppercase(),
            level,
        }
    }

    #[test]
    fn item_class_reflects_level_and_active() {
        assert_eq!(
            outline_item_class(&entry("overview", 2), false),
            "outline-item outline-item--major"
        );
        assert_eq!(
            outline_item_class(&entry("parking", 3), true),
            "outline-item outline-item--minor outline-item--active"
        );
    }

    #[test]
    fn drawer_label_uses_active_section() {
        let outline = Outline::new(vec![entry("overview", 2), entry("visa", 2)]);
        assert_eq!(drawer_label(&outline, Some("visa")), "VISA");
        assert_eq!(drawer_label(&outline, None), "Contents");
        assert_eq!(drawer_label(&outline, Some("gone")), "Contents");
    }

    #[test]
    fn variant_classes() {
        assert!(OutlineVariant::Sidebar.class().contains("sidebar"));
        assert!(OutlineVariant::Drawer.class().contains("drawer"));
        assert_eq!(OutlineVariant::default(), OutlineVariant::Sidebar);
    }
}
