//! Library page - every guide in the guides directory.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_reader;

#[component]
pub fn Library() -> Element {
    let reader = use_reader();

    if reader.guides.is_empty() {
        return rsx! {
            main { class: "library",
                h1 { class: "page-title", "Guides" }
                p { class: "empty-state", "No guides found. Point --guides-dir at a folder of markdown files." }
            }
        };
    }

    let saved = reader.preferences.saved_articles();

    rsx! {
        main { class: "library",
            h1 { class: "page-title", "Guides" }
            ul { class: "guide-list",
                for guide in reader.guides.iter() {
                    {
                        let slug = guide.article.to_string();
                        let is_saved = saved.contains(&guide.article);
                        let rating = reader.preferences.get_rating(&guide.article);
                        rsx! {
                            li { key: "{slug}", class: "guide-list-item",
                                Link { to: Route::GuideView { slug: slug.clone() }, "{guide.title()}" }
                                if is_saved {
                                    span { class: "guide-badge", "saved" }
                                }
                                if let Some(rating) = rating {
                                    span { class: "guide-badge", "{rating}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
