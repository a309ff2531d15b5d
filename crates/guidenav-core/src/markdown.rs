//! Markdown content root
//!
//! Guides are authored in markdown. This module reads the navigable headings
//! out of a guide (h2 = major, h3 = minor) and renders the guide to HTML with
//! the indexer's id assignments applied.

use std::path::{Path, PathBuf};

use pulldown_cmark::{html, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::error::GuideResult;
use crate::types::{ArticleId, HeadingKind, HeadingNode, IdAssignment};

fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    options
}

fn navigable_kind(level: HeadingLevel) -> Option<HeadingKind> {
    HeadingKind::from_level(level as u8)
}

/// Navigable headings of a markdown guide, in document order.
///
/// `## Title {#anchor}` headings report `anchor` as their existing id.
pub fn headings_from_markdown(source: &str) -> Vec<HeadingNode> {
    let mut headings = Vec::new();
    let mut current: Option<HeadingNode> = None;

    for event in Parser::new_ext(source, parser_options()) {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                current = navigable_kind(level).map(|kind| HeadingNode {
                    kind,
                    text: String::new(),
                    existing_id: id.map(|id| id.to_string()),
                });
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(heading) = current.take() {
                    headings.push(heading);
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(heading) = current.as_mut() {
                    heading.text.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(heading) = current.as_mut() {
                    heading.text.push(' ');
                }
            }
            _ => {}
        }
    }

    headings
}

/// First h1 of the guide, used as its display title
pub fn title_from_markdown(source: &str) -> Option<String> {
    let mut in_title = false;
    let mut title = String::new();

    for event in Parser::new_ext(source, parser_options()) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_title = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) if in_title => {
                return Some(title.trim().to_string()).filter(|t| !t.is_empty());
            }
            Event::Text(text) | Event::Code(text) if in_title => title.push_str(&text),
            _ => {}
        }
    }
    None
}

/// Render the guide to HTML, writing each assignment's id and scroll margin
/// onto the matching h2/h3.
///
/// Assignments are matched by position among the navigable headings, so they
/// must come from indexing [`headings_from_markdown`] of the same source.
pub fn render_with_anchors(source: &str, assignments: &[IdAssignment]) -> String {
    let mut position = 0usize;

    let events = Parser::new_ext(source, parser_options()).map(|event| match event {
        Event::Start(Tag::Heading {
            level,
            id,
            classes,
            mut attrs,
        }) if navigable_kind(level).is_some() => {
            let assignment = assignments.iter().find(|a| a.position == position);
            position += 1;

            let id = match assignment {
                Some(a) => {
                    attrs.push((CowStr::from("style"), Some(CowStr::from(a.style()))));
                    Some(CowStr::from(a.id.clone()))
                }
                None => id,
            };

            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            })
        }
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, events);
    html_output
}

/// A markdown guide loaded from disk
#[derive(Debug, Clone)]
pub struct GuideDocument {
    pub article: ArticleId,
    pub path: PathBuf,
    pub source: String,
}

impl GuideDocument {
    /// Read a guide; its article id is the file stem
    pub fn load(path: impl AsRef<Path>) -> GuideResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let article = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(ArticleId::new)
            .unwrap_or_else(|| ArticleId::new("guide"));

        Ok(Self {
            article,
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn headings(&self) -> Vec<HeadingNode> {
        headings_from_markdown(&self.source)
    }

    /// Display title: first h1, else the article id
    pub fn title(&self) -> String {
        title_from_markdown(&self.source).unwrap_or_else(|| self.article.to_string())
    }

    pub fn render(&self, assignments: &[IdAssignment]) -> String {
        render_with_anchors(&self.source, assignments)
    }
}

/// All `.md` guides in a directory, sorted by article id
pub fn load_guides(dir: impl AsRef<Path>) -> GuideResult<Vec<GuideDocument>> {
    let mut guides = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("md") {
            guides.push(GuideDocument::load(&path)?);
        }
    }
    guides.sort_by(|a, b| a.article.cmp(&b.article));
    Ok(guides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GuideConfig;
    use crate::indexer::index_headings;

    const GUIDE: &str = "# Lusail Stadium Guide\n\n\
        Intro text.\n\n\
        ## Overview\n\nSome text.\n\n\
        ### Getting `there`\n\nMetro.\n\n\
        ## Visa {#entry-rules}\n\nText.\n\n\
        #### Fine print\n\nIgnored.\n";

    #[test]
    fn test_extracts_h2_and_h3_only() {
        let headings = headings_from_markdown(GUIDE);
        assert_eq!(headings.len(), 3);
        assert_eq!(headings[0], HeadingNode::major("Overview"));
        assert_eq!(headings[1], HeadingNode::minor("Getting there"));
        assert_eq!(headings[2], HeadingNode::major("Visa").with_id("entry-rules"));
    }

    #[test]
    fn test_title() {
        assert_eq!(
            title_from_markdown(GUIDE).as_deref(),
            Some("Lusail Stadium Guide")
        );
        assert_eq!(title_from_markdown("## No title"), None);
    }

    #[test]
    fn test_render_applies_assignments() {
        let headings = headings_from_markdown(GUIDE);
        let result = index_headings(&headings, &GuideConfig::default());
        let html = render_with_anchors(GUIDE, &result.assignments);

        assert!(html.contains(r#"<h2 id="overview" style="scroll-margin-top: 96px">"#));
        assert!(html.contains(r#"<h3 id="getting-there" style="scroll-margin-top: 96px">"#));
        assert!(html.contains(r#"<h2 id="entry-rules" style="scroll-margin-top: 96px">"#));
        assert!(html.contains("<h4>Fine print</h4>"));
    }

    #[test]
    fn test_render_without_assignments_keeps_markup() {
        let html = render_with_anchors("## Plain", &[]);
        assert!(html.contains("<h2>Plain</h2>"));
    }

    #[test]
    fn test_load_uses_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("al-bayt-stadium.md");
        std::fs::write(&path, "# Al Bayt\n\n## Seats\n").unwrap();

        let doc = GuideDocument::load(&path).unwrap();
        assert_eq!(doc.article.as_str(), "al-bayt-stadium");
        assert_eq!(doc.title(), "Al Bayt");
        assert_eq!(doc.headings().len(), 1);
    }

    #[test]
    fn test_load_guides_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("doha.md"), "# Doha").unwrap();
        std::fs::write(dir.path().join("al-wakrah.md"), "# Al Wakrah").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "skip").unwrap();

        let guides = load_guides(dir.path()).unwrap();
        let ids: Vec<_> = guides.iter().map(|g| g.article.as_str()).collect();
        assert_eq!(ids, vec!["al-wakrah", "doha"]);
    }
}
