//! Engine configuration
//!
//! Every field has a default, so a config file only needs to name what it
//! overrides:
//!
//! ```json
//! { "scroll_margin_px": 120, "clear_above_first": true }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GuideError, GuideResult};

/// Tunables shared by the indexer, tracker and preference store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    /// Maximum length of a generated heading id
    pub max_slug_len: usize,
    /// Scroll margin written onto every heading (fixed header height)
    pub scroll_margin_px: u32,
    /// Fraction of the viewport height cut from the bottom of the
    /// observation window
    pub root_margin_bottom: f64,
    /// Clear the active section when the reader scrolls back above the
    /// first heading
    pub clear_above_first: bool,
    /// Prefix for preference keys
    pub storage_namespace: String,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            max_slug_len: 60,
            scroll_margin_px: 96,
            root_margin_bottom: 0.6,
            clear_above_first: false,
            storage_namespace: "guidenav:prefs".to_string(),
        }
    }
}

impl GuideConfig {
    /// Parse a config from JSON and validate it
    pub fn from_json(json: &str) -> GuideResult<Self> {
        let config: GuideConfig =
            serde_json::from_str(json).map_err(|e| GuideError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> GuideResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> GuideResult<()> {
        if self.max_slug_len == 0 {
            return Err(GuideError::InvalidConfig(
                "max_slug_len must be at least 1".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.root_margin_bottom) {
            return Err(GuideError::InvalidConfig(format!(
                "root_margin_bottom must be in [0, 1), got {}",
                self.root_margin_bottom
            )));
        }
        if self.storage_namespace.trim().is_empty() {
            return Err(GuideError::InvalidConfig(
                "storage_namespace must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
