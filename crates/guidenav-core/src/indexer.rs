//! Heading Indexer
//!
//! Turns the headings of a content root into an [`Outline`] and the list of
//! [`IdAssignment`]s the caller applies to the document. Indexing is a pure
//! function of its input: running it over a document whose assignments were
//! already applied returns the same ids.
//!
//! ## Id derivation
//!
//! 1. An id already present on the heading is kept.
//! 2. Otherwise the text is slugified: lower-cased, stripped of everything
//!    outside `[a-z0-9\s-]`, trimmed, whitespace runs collapsed to `-`,
//!    truncated to [`GuideConfig::max_slug_len`].
//! 3. An empty slug falls back to `section-{n}` (1-based position).
//! 4. Collisions get a per-candidate counter suffix starting at 2.

use std::collections::{HashMap, HashSet};

use crate::config::GuideConfig;
use crate::types::{HeadingNode, IdAssignment, Outline, OutlineEntry};

/// Outline plus the ids to write back onto the headings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexResult {
    pub outline: Outline,
    /// One entry per heading, in document order
    pub assignments: Vec<IdAssignment>,
}

/// Slugify heading text into an id candidate.
///
/// May return an empty string (emoji-only or punctuation-only headings);
/// [`index_headings`] substitutes the positional fallback in that case.
pub fn slugify(text: &str, max_len: usize) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    kept.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .take(max_len)
        .collect()
}

/// Index the headings of a content root.
///
/// Never fails: duplicate and empty candidates are repaired locally, and an
/// empty content root yields an empty outline.
pub fn index_headings(headings: &[HeadingNode], config: &GuideConfig) -> IndexResult {
    let mut taken: HashSet<String> = HashSet::with_capacity(headings.len());

    // Hand-authored anchors are reserved up front so a generated id can never
    // take one of them. First occurrence wins.
    let keeps: Vec<bool> = headings
        .iter()
        .map(|h| match existing_id(h) {
            Some(id) => taken.insert(id.to_string()),
            None => false,
        })
        .collect();

    let mut counters: HashMap<String, usize> = HashMap::new();
    let mut entries = Vec::with_capacity(headings.len());
    let mut assignments = Vec::with_capacity(headings.len());

    for (position, (heading, keep)) in headings.iter().zip(keeps).enumerate() {
        let id = if keep {
            existing_id(heading).unwrap_or_default().to_string()
        } else {
            let candidate = match existing_id(heading) {
                // Duplicate hand-authored id: disambiguate from the id itself
                Some(id) => id.to_string(),
                None => {
                    let slug = slugify(&heading.text, config.max_slug_len);
                    if slug.is_empty() {
                        format!("section-{}", position + 1)
                    } else {
                        slug
                    }
                }
            };
            claim(candidate, &mut taken, &mut counters)
        };

        tracing::trace!(position, id = %id, kept = keep, "heading indexed");

        entries.push(OutlineEntry {
            id: id.clone(),
            label: heading.text.clone(),
            level: heading.kind.level(),
        });
        assignments.push(IdAssignment {
            position,
            id,
            scroll_margin_px: config.scroll_margin_px,
        });
    }

    tracing::debug!(headings = entries.len(), "outline built");

    IndexResult {
        outline: Outline::new(entries),
        assignments,
    }
}

fn existing_id(heading: &HeadingNode) -> Option<&str> {
    heading
        .existing_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
}

/// Take `candidate`, or the first free `{candidate}-{k}` for k = 2, 3, ...
fn claim(
    candidate: String,
    taken: &mut HashSet<String>,
    counters: &mut HashMap<String, usize>,
) -> String {
    if taken.insert(candidate.clone()) {
        return candidate;
    }
    let counter = counters.entry(candidate.clone()).or_insert(1);
    loop {
        *counter += 1;
        let next = format!("{}-{}", candidate, counter);
        if taken.insert(next.clone()) {
            return next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(result: &IndexResult) -> Vec<&str> {
        result.outline.ids().collect()
    }

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Getting There by Metro", 60), "getting-there-by-metro");
        assert_eq!(slugify("  Visa & Entry  ", 60), "visa-entry");
        assert_eq!(slugify("Café Culture", 60), "caf-culture");
        assert_eq!(slugify("Gate 7 - North", 60), "gate-7---north");
        assert_eq!(slugify("🏆🏆🏆", 60), "");
    }

    #[test]
    fn test_slugify_truncates() {
        let long = "a ".repeat(80);
        let slug = slugify(&long, 60);
        assert_eq!(slug.chars().count(), 60);
    }

    #[test]
    fn test_duplicate_headings_get_suffix() {
        let headings = vec![
            HeadingNode::major("Overview"),
            HeadingNode::major("Visa"),
            HeadingNode::major("Visa"),
        ];
        let result = index_headings(&headings, &GuideConfig::default());
        assert_eq!(ids(&result), vec!["overview", "visa", "visa-2"]);
    }

    #[test]
    fn test_emoji_heading_falls_back_to_position() {
        let headings = vec![
            HeadingNode::major("Overview"),
            HeadingNode::major("Tickets"),
            HeadingNode::major("🏆🏆🏆"),
        ];
        let result = index_headings(&headings, &GuideConfig::default());
        assert_eq!(result.outline.entries()[2].id, "section-3");
        assert_eq!(result.outline.entries()[2].label, "🏆🏆🏆");
    }

    #[test]
    fn test_existing_ids_are_kept() {
        let headings = vec![
            HeadingNode::major("Overview").with_id("intro"),
            HeadingNode::minor("Parking"),
        ];
        let result = index_headings(&headings, &GuideConfig::default());
        assert_eq!(ids(&result), vec!["intro", "parking"]);
        assert_eq!(result.outline.entries()[1].level, 3);
    }

    #[test]
    fn test_generated_id_never_takes_authored_anchor() {
        let headings = vec![
            HeadingNode::major("Parking"),
            HeadingNode::major("Car parks").with_id("parking"),
        ];
        let result = index_headings(&headings, &GuideConfig::default());
        assert_eq!(ids(&result), vec!["parking-2", "parking"]);
    }

    #[test]
    fn test_literal_fallback_text_does_not_collide() {
        let headings = vec![
            HeadingNode::major("section-3"),
            HeadingNode::major("Food"),
            HeadingNode::major("⚽"),
        ];
        let result = index_headings(&headings, &GuideConfig::default());
        assert_eq!(ids(&result), vec!["section-3", "food", "section-3-2"]);
    }

    #[test]
    fn test_counter_skips_taken_suffixes() {
        let headings = vec![
            HeadingNode::major("Visa"),
            HeadingNode::major("Visa 2"),
            HeadingNode::major("Visa"),
        ];
        let result = index_headings(&headings, &GuideConfig::default());
        assert_eq!(ids(&result), vec!["visa", "visa-2", "visa-3"]);
    }

    #[test]
    fn test_duplicate_authored_ids_disambiguated() {
        let headings = vec![
            HeadingNode::major("One").with_id("intro"),
            HeadingNode::major("Two").with_id("intro"),
        ];
        let result = index_headings(&headings, &GuideConfig::default());
        assert_eq!(ids(&result), vec!["intro", "intro-2"]);
    }

    #[test]
    fn test_blank_existing_id_is_ignored() {
        let headings = vec![HeadingNode::major("Transport").with_id("   ")];
        let result = index_headings(&headings, &GuideConfig::default());
        assert_eq!(ids(&result), vec!["transport"]);
    }

    #[test]
    fn test_empty_content_root() {
        let result = index_headings(&[], &GuideConfig::default());
        assert!(result.outline.is_empty());
        assert!(result.assignments.is_empty());
    }

    #[test]
    fn test_assignments_carry_scroll_margin() {
        let config = GuideConfig {
            scroll_margin_px: 120,
            ..GuideConfig::default()
        };
        let headings = vec![HeadingNode::major("Overview"), HeadingNode::minor("Seats")];
        let result = index_headings(&headings, &config);
        assert_eq!(result.assignments.len(), 2);
        assert!(result.assignments.iter().all(|a| a.scroll_margin_px == 120));
        assert_eq!(result.assignments[1].position, 1);
        assert_eq!(result.assignments[1].id, "seats");
    }

    #[test]
    fn test_reindex_after_applying_assignments_is_stable() {
        let mut headings = vec![
            HeadingNode::major("Visa"),
            HeadingNode::major("Visa"),
            HeadingNode::minor("🏟️"),
        ];
        let first = index_headings(&headings, &GuideConfig::default());
        for a in &first.assignments {
            headings[a.position].existing_id = Some(a.id.clone());
        }
        let second = index_headings(&headings, &GuideConfig::default());
        assert_eq!(first.outline, second.outline);
    }
}
