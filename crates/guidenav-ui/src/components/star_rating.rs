//! Star Rating Component
//!
//! Five stars, filled up to the current rating. A rating can be changed but
//! not cleared.

use dioxus::prelude::*;
use guidenav_core::Rating;

/// Filled state of each of the five stars
pub fn star_states(rating: Option<Rating>) -> [bool; 5] {
    let filled = rating.map(Rating::stars).unwrap_or(0);
    let mut states = [false; 5];
    for (i, state) in states.iter_mut().enumerate() {
        *state = (i as u8) < filled;
    }
    states
}

/// Properties for the StarRating component
#[derive(Clone, PartialEq, Props)]
pub struct StarRatingProps {
    /// Current rating, if any
    #[props(default)]
    pub rating: Option<Rating>,
    /// Called with the clicked star's rating
    pub on_rate: EventHandler<Rating>,
}

#[component]
pub fn StarRating(props: StarRatingProps) -> Element {
    let states = star_states(props.rating);

    rsx! {
        div {
            class: "star-rating",
            role: "radiogroup",
            "aria-label": "Rate this guide",
            for (i, filled) in states.into_iter().enumerate() {
                {
                    let stars = i as i64 + 1;
                    let on_rate = props.on_rate;
                    rsx! {
                        button {
                            key: "{stars}",
                            class: if filled { "star star--filled" } else { "star" },
                            role: "radio",
                            "aria-checked": if props.rating.map(Rating::stars) == Some(stars as u8) { "true" } else { "false" },
                            "aria-label": "{stars} stars",
                            onclick: move |_| {
                                match Rating::new(stars) {
                                    Ok(rating) => on_rate.call(rating),
                                    Err(e) => tracing::warn!("star out of range: {}", e),
                                }
                            },
                            if filled { "★" } else { "☆" }
                        }
                    }
                }
            }
        }
    }
}
