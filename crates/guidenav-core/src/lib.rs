//! Guide navigation engine
//!
//! Scroll-synchronized navigation for long-form guide pages.
//!
//! ## Overview
//!
//! A guide page hands the engine its headings once per mount and then feeds
//! it host events. The engine answers with a small read-only snapshot the UI
//! binds to:
//!
//! - **Heading Indexer** ([`indexer`]): unique, readable anchor ids and the
//!   ordered outline
//! - **Visibility Tracker** ([`tracker`]): the section currently in view
//! - **Progress Meter** ([`progress`]): 0-100 scroll completion
//! - **Preference Store** ([`preferences`]): per-article saved flag and rating
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use guidenav_core::{GuideConfig, GuideEngine, HeadingNode, MemoryStore, PreferenceStore};
//!
//! let prefs = Arc::new(PreferenceStore::new(Arc::new(MemoryStore::new()), "guidenav:prefs"));
//! let mut engine = GuideEngine::new("lusail-stadium", GuideConfig::default(), prefs);
//!
//! let mounted = engine.mount(&[HeadingNode::major("Overview"), HeadingNode::major("Visa")]);
//! // write mounted.assignments onto the headings, then forward events:
//! engine.on_intersections(mounted.token, &batch);
//! engine.on_scroll(metrics);
//!
//! let snapshot = engine.snapshot();
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod indexer;
pub mod logging;
pub mod markdown;
pub mod preferences;
pub mod progress;
pub mod storage;
pub mod tracker;
pub mod types;

// Re-exports
pub use config::GuideConfig;
pub use engine::{GuideEngine, MountOutcome};
pub use error::{GuideError, GuideResult, StorageError};
pub use indexer::{index_headings, slugify, IndexResult};
pub use markdown::{load_guides, GuideDocument};
pub use preferences::PreferenceStore;
pub use progress::{scroll_percent, ProgressMeter};
pub use storage::{DisabledStore, KeyValueStore, MemoryStore, RedbStore, SharedStore};
pub use tracker::{HeadingRect, Intersection, ObservationToken, ObservationWindow, VisibilityTracker};
pub use types::*;
