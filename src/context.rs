//! Reader context shared by the pages.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| ReaderContext::load(&get_settings()));
//!
//! // In child components
//! let reader = use_reader();
//! ```

use std::path::Path;
use std::sync::Arc;

use dioxus::prelude::*;
use guidenav_core::{
    load_guides, DisabledStore, GuideConfig, GuideDocument, GuideError, GuideResult,
    PreferenceStore, RedbStore, SharedStore,
};

use crate::ReaderSettings;

/// Everything the pages need, loaded once at startup
#[derive(Clone)]
pub struct ReaderContext {
    pub config: GuideConfig,
    pub guides: Arc<Vec<GuideDocument>>,
    pub preferences: Arc<PreferenceStore>,
}

impl ReaderContext {
    /// Load config, guides and the preference store.
    ///
    /// Nothing here is fatal: a bad config falls back to defaults, a missing
    /// guides directory yields an empty library, and an unopenable store
    /// degrades to session-only preferences.
    pub fn load(settings: &ReaderSettings) -> Self {
        let config = match &settings.config {
            Some(path) => GuideConfig::load(path).unwrap_or_else(|e| {
                tracing::error!("Failed to load config {:?}: {}", path, e);
                GuideConfig::default()
            }),
            None => GuideConfig::default(),
        };

        let guides = load_guides(&settings.guides_dir).unwrap_or_else(|e| {
            tracing::error!("Failed to load guides from {:?}: {}", settings.guides_dir, e);
            Vec::new()
        });
        tracing::info!("Loaded {} guides", guides.len());

        let backend = open_backend(&settings.data_dir);
        let preferences = Arc::new(PreferenceStore::new(
            backend,
            config.storage_namespace.clone(),
        ));

        Self {
            config,
            guides: Arc::new(guides),
            preferences,
        }
    }

    /// Guide whose article id matches the route slug
    pub fn guide(&self, slug: &str) -> GuideResult<&GuideDocument> {
        self.guides
            .iter()
            .find(|g| g.article.as_str() == slug)
            .ok_or_else(|| GuideError::ArticleNotFound(slug.to_string()))
    }
}

fn open_backend(data_dir: &Path) -> SharedStore {
    match RedbStore::open(data_dir.join("preferences.redb")) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!("Preferences will not persist: {}", e);
            Arc::new(DisabledStore)
        }
    }
}

/// Hook to access the reader context
pub fn use_reader() -> ReaderContext {
    use_context::<ReaderContext>()
}
