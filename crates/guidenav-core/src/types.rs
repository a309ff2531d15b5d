//! Core types for the guide navigation engine

use serde::{Deserialize, Serialize};

use crate::error::GuideError;

/// Stable per-article identifier (the guide's slug)
///
/// Namespaces everything the engine persists, so two guides never share a
/// saved flag or a rating.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArticleId(String);

impl ArticleId {
    /// Create an ArticleId from a slug
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Get the slug as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArticleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ArticleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The two kinds of heading a guide is navigated by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingKind {
    /// Section heading (h2)
    Major,
    /// Sub-section heading (h3)
    Minor,
}

impl HeadingKind {
    /// HTML heading level, used for indentation in the outline UI
    pub fn level(self) -> u8 {
        match self {
            HeadingKind::Major => 2,
            HeadingKind::Minor => 3,
        }
    }

    /// Map an HTML heading level back to a kind. Only h2/h3 are navigable.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            2 => Some(HeadingKind::Major),
            3 => Some(HeadingKind::Minor),
            _ => None,
        }
    }
}

/// A rendered heading, as seen by the indexer
///
/// This is a read-only view over the content root: the indexer never writes
/// back into it, it returns [`IdAssignment`]s instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingNode {
    pub kind: HeadingKind,
    /// Text content of the heading, verbatim
    pub text: String,
    /// Id already present on the element, if any
    pub existing_id: Option<String>,
}

impl HeadingNode {
    pub fn major(text: impl Into<String>) -> Self {
        Self {
            kind: HeadingKind::Major,
            text: text.into(),
            existing_id: None,
        }
    }

    pub fn minor(text: impl Into<String>) -> Self {
        Self {
            kind: HeadingKind::Minor,
            text: text.into(),
            existing_id: None,
        }
    }

    /// Attach an id that the element already carries
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.existing_id = Some(id.into());
        self
    }
}

/// One navigable section derived from a heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Unique within the document
    pub id: String,
    /// Display text, the heading's text content verbatim
    pub label: String,
    /// 2 or 3
    pub level: u8,
}

/// Ordered sequence of outline entries, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outline(Vec<OutlineEntry>);

impl Outline {
    pub fn new(entries: Vec<OutlineEntry>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[OutlineEntry] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutlineEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Id of the first entry, the initial active section
    pub fn first_id(&self) -> Option<&str> {
        self.0.first().map(|e| e.id.as_str())
    }

    /// Document position of the entry with the given id
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.0.iter().position(|e| e.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.id.as_str())
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a OutlineEntry;
    type IntoIter = std::slice::Iter<'a, OutlineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Id (and scroll margin) the caller must write onto a heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAssignment {
    /// 0-based index of the heading in the content root
    pub position: usize,
    pub id: String,
    /// Scroll margin so anchored navigation clears the fixed header
    pub scroll_margin_px: u32,
}

impl IdAssignment {
    /// Inline style carrying the scroll margin
    pub fn style(&self) -> String {
        format!("scroll-margin-top: {}px", self.scroll_margin_px)
    }
}

/// Star rating, always within 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Create a rating, rejecting values outside 1..=5
    pub fn new(stars: i64) -> Result<Self, GuideError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&stars) {
            Ok(Self(stars as u8))
        } else {
            Err(GuideError::InvalidRating(stars))
        }
    }

    pub fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = GuideError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(r: Rating) -> Self {
        i64::from(r.0)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

/// Persisted reader state for one article
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    pub saved: bool,
    /// Absent until the reader rates the article
    pub rating: Option<Rating>,
}

/// Fresh layout reading delivered on every scroll/resize tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            viewport_height,
        }
    }
}

/// Read-only view of the engine state that the UI binds to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuideSnapshot {
    pub article: ArticleId,
    pub outline: Outline,
    pub active_id: Option<String>,
    pub percent: f64,
    pub preferences: PreferenceRecord,
}
