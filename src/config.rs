//! Manager configuration.
//!
//! Every field has a default, so a partial JSON document (or `{}`) is a
//! valid configuration.

use crate::constants::DEFAULT_SLOW_HIT_TEST_MS;
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Coalesce pointer moves to one reduction per frame
    pub coalesce_pointer_moves: bool,
    /// Coalesce scroll events to one reduction per frame
    pub coalesce_scroll: bool,
    /// Hit tests slower than this are logged at warn level
    pub slow_hit_test_ms: f64,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            coalesce_pointer_moves: true,
            coalesce_scroll: true,
            slow_hit_test_ms: DEFAULT_SLOW_HIT_TEST_MS,
        }
    }
}

impl ManagerConfig {
    /// Configuration that reduces every event as soon as it arrives.
    pub fn immediate() -> Self {
        Self {
            coalesce_pointer_moves: false,
            coalesce_scroll: false,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: ManagerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded manager config");
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.slow_hit_test_ms.is_finite() || self.slow_hit_test_ms < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "slow_hit_test_ms must be a non-negative number, got {}",
                self.slow_hit_test_ms
            )));
        }
        Ok(())
    }
}
