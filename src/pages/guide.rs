//! Guide page - one article with live outline, progress and preferences.
//!
//! The page owns a `GuideEngine` for as long as it is on screen. Moving to a
//! different guide remounts the same engine; leaving the page drops it, which
//! releases the observation.

use dioxus::prelude::*;
use guidenav_core::{GuideEngine, ObservationToken};
use guidenav_ui::{OutlineNav, OutlineVariant, ProgressBar, SaveToggle, StarRating};

use crate::app::Route;
use crate::context::use_reader;
use crate::probe::{ProbeCommand, ScrollSample, SCROLL_PROBE, SCROLL_TO_TOP};

#[component]
pub fn GuideView(slug: String) -> Element {
    let reader = use_reader();
    let root_margin_bottom = reader.config.root_margin_bottom;

    let mut engine = use_signal({
        let reader = reader.clone();
        let slug = slug.clone();
        move || GuideEngine::new(slug, reader.config.clone(), reader.preferences.clone())
    });
    let mut html = use_signal(String::new);
    let mut token = use_signal(|| None::<ObservationToken>);
    // Bumped on every mount; samples count only once the probe has rescanned
    // the matching content
    let mut epoch = use_signal(|| 0u64);

    // Mount on first render and again whenever the route slug changes
    use_effect(use_reactive((&slug,), {
        let reader = reader.clone();
        move |(slug,)| match reader.guide(&slug) {
            Ok(doc) => {
                let outcome = engine.write().remount(slug.clone(), &doc.headings());
                let next = *epoch.peek() + 1;
                epoch.set(next);
                token.set(Some(outcome.token));
                html.set(doc.render(&outcome.assignments));
                document::eval(SCROLL_TO_TOP);
            }
            Err(e) => {
                tracing::warn!("{}", e);
                engine.write().unmount();
                token.set(None);
                html.set(String::new());
            }
        }
    }));

    let probe = use_hook(move || {
        let probe = document::eval(SCROLL_PROBE);
        spawn(async move {
            let mut samples = probe;
            while let Ok(sample) = samples.recv::<ScrollSample>().await {
                if !sample.is_current(*epoch.peek()) {
                    continue;
                }
                let Some(current) = *token.peek() else {
                    continue;
                };
                let batch = sample.intersections(root_margin_bottom);
                let mut eng = engine.write();
                eng.on_intersections(current, &batch);
                eng.on_scroll(sample.metrics());
            }
            tracing::debug!("Scroll probe closed");
        });
        probe
    });

    // Runs after each render of new guide HTML
    use_effect(move || {
        let _rendered = html.read();
        let current = *epoch.peek();
        if current > 0 {
            if let Err(e) = probe.send(ProbeCommand::Rescan(current)) {
                tracing::debug!("Scroll probe unreachable: {:?}", e);
            }
        }
    });

    use_drop(move || {
        let _ = probe.send(ProbeCommand::Stop);
    });

    if let Err(e) = reader.guide(&slug) {
        return rsx! {
            main { class: "guide-missing",
                p { "{e}" }
                Link { to: Route::Library {}, "Back to all guides" }
            }
        };
    }

    let snapshot = engine.read().snapshot();
    let scroll_to = move |id: String| {
        let target = serde_json::to_string(&id).unwrap_or_default();
        document::eval(&format!(
            "document.getElementById({})?.scrollIntoView({{ behavior: 'smooth' }});",
            target
        ));
    };

    rsx! {
        ProgressBar { percent: snapshot.percent }

        div { class: "guide-layout",
            OutlineNav {
                outline: snapshot.outline.clone(),
                active_id: snapshot.active_id.clone(),
                variant: OutlineVariant::Sidebar,
                on_select: scroll_to,
            }

            main { class: "guide-main",
                OutlineNav {
                    outline: snapshot.outline.clone(),
                    active_id: snapshot.active_id.clone(),
                    variant: OutlineVariant::Drawer,
                    on_select: scroll_to,
                }

                header { class: "guide-header",
                    Link { class: "back-link", to: Route::Library {}, "All guides" }
                    div { class: "guide-actions",
                        SaveToggle {
                            saved: snapshot.preferences.saved,
                            on_toggle: move |_| {
                                engine.write().toggle_saved();
                            },
                        }
                        StarRating {
                            rating: snapshot.preferences.rating,
                            on_rate: move |rating| engine.write().rate(rating),
                        }
                    }
                }

                article { class: "guide-article", dangerous_inner_html: "{html}" }
            }
        }
    }
}
