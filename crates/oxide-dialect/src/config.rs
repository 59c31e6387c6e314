//! Settings shared by the library entry points and the CLI.

use serde::{Deserialize, Serialize};

use crate::dialect::{DialectKind, DialectProfile};
use crate::error::{DialectError, Result};
use crate::inference::InferenceOptions;
use crate::statement::DEFAULT_PREVIEW_LIMIT;
use crate::types::IdentityKind;

/// Dialect layer settings.
///
/// Every field has a default, so `{}` is a valid configuration.
///
/// ```rust
/// use oxide_dialect::config::DialectConfig;
/// use oxide_dialect::dialect::DialectKind;
///
/// let config = DialectConfig::from_json_str(r#"{"dialect": "pg", "preview_limit": 25}"#).unwrap();
/// assert_eq!(config.dialect, DialectKind::Postgres);
/// assert_eq!(config.preview_limit, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialectConfig {
    /// Dialect used when none is given explicitly.
    pub dialect: DialectKind,
    /// Identity kind for new tables.
    pub identity: IdentityKind,
    /// Row limit for preview queries.
    pub preview_limit: u64,
    /// Schema inference settings.
    pub inference: InferenceOptions,
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self {
            dialect: DialectKind::default(),
            identity: IdentityKind::default(),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            inference: InferenceOptions::default(),
        }
    }
}

impl DialectConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::Config`] for malformed JSON and
    /// [`DialectError::InvalidConfig`] when validation fails.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::InvalidConfig`] naming the first bad value.
    pub fn validate(&self) -> Result<()> {
        if self.preview_limit == 0 {
            return Err(DialectError::InvalidConfig(
                "preview_limit must be greater than zero".to_string(),
            ));
        }
        let inference = &self.inference;
        if inference.short_text_length as usize > inference.short_text_max {
            return Err(DialectError::InvalidConfig(format!(
                "inference.short_text_length ({}) exceeds inference.short_text_max ({})",
                inference.short_text_length, inference.short_text_max
            )));
        }
        if inference.float_scale > inference.float_precision {
            return Err(DialectError::InvalidConfig(format!(
                "inference.float_scale ({}) exceeds inference.float_precision ({})",
                inference.float_scale, inference.float_precision
            )));
        }
        Ok(())
    }

    /// Returns the profile of the configured dialect.
    #[must_use]
    pub fn profile(&self) -> &'static dyn DialectProfile {
        self.dialect.profile()
    }
}
