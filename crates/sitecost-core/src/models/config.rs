//! Configuration for consumers of the extraction engine.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SitecostError};
use crate::models::extraction::{CanonicalField, ExtractionResult};

/// Review policy applied by the expense-creation workflow.
///
/// The extraction engine itself never filters by confidence; it reports every
/// score verbatim. This threshold only drives which fields a caller flags for
/// manual correction before the expense record is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Confidence (0 - 100) below which a field should be reviewed by hand.
    pub review_threshold: f32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            review_threshold: 80.0,
        }
    }
}

impl ExtractionConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the threshold is a valid percentage.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.review_threshold) {
            return Err(SitecostError::Config(format!(
                "review_threshold must be within 0-100, got {}",
                self.review_threshold
            )));
        }
        Ok(())
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Summary fields in `result` that fall below the review threshold.
    pub fn flag_for_review(&self, result: &ExtractionResult) -> Vec<CanonicalField> {
        result.fields_below(self.review_threshold)
    }
}
