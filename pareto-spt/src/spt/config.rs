//! Dominance tolerances for the Pareto frontier.

use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Error loading or validating a [`DominanceConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read dominance config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration document is not valid JSON for this type
    #[error("failed to parse dominance config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A tunable is negative, not finite or out of range
    #[error("invalid dominance config: {0}")]
    Invalid(String),
}

/// Tolerances used when neither state's route history contains the other's.
///
/// Two variants of these constants exist in the history of this router:
/// ratio thresholds written as `1 + epsilon`, and hard-coded factors of
/// 1.05 (walk) and 1.02 (cost and time) with a 30 unit margin. They resolve
/// to the same thresholds; nobody has recorded why the forms diverged, so
/// all five values stay tunable here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DominanceConfig {
    /// Relative slack on walk distance.
    pub walk_epsilon: f64,

    /// Relative slack on generalized cost.
    pub cost_epsilon: f64,

    /// Absolute slack on generalized cost (exclusive).
    pub cost_margin: f64,

    /// Relative slack on elapsed time.
    pub time_epsilon: f64,

    /// Absolute slack on elapsed time in seconds (inclusive).
    pub time_margin_secs: i64,
}

impl DominanceConfig {
    /// Create a new configuration with the given tolerances.
    pub fn new(
        walk_epsilon: f64,
        cost_epsilon: f64,
        cost_margin: f64,
        time_epsilon: f64,
        time_margin_secs: i64,
    ) -> Self {
        Self {
            walk_epsilon,
            cost_epsilon,
            cost_margin,
            time_epsilon,
            time_margin_secs,
        }
    }

    /// Returns the absolute time slack as a Duration.
    ///
    /// Saturates at [`Duration::MAX`] for margins a Duration cannot hold,
    /// which [`validate`](Self::validate) rejects.
    pub fn time_margin(&self) -> Duration {
        Duration::try_seconds(self.time_margin_secs).unwrap_or(Duration::MAX)
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check that every tunable is finite and non-negative, and that the
    /// time margin fits in a Duration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ratios = [
            ("walk_epsilon", self.walk_epsilon),
            ("cost_epsilon", self.cost_epsilon),
            ("cost_margin", self.cost_margin),
            ("time_epsilon", self.time_epsilon),
        ];
        for (name, value) in ratios {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        if self.time_margin_secs < 0 {
            return Err(ConfigError::Invalid(format!(
                "time_margin_secs must be non-negative, got {}",
                self.time_margin_secs
            )));
        }

        if Duration::try_seconds(self.time_margin_secs).is_none() {
            return Err(ConfigError::Invalid(format!(
                "time_margin_secs is too large, got {}",
                self.time_margin_secs
            )));
        }

        Ok(())
    }
}

impl Default for DominanceConfig {
    fn default() -> Self {
        Self {
            walk_epsilon: 0.05,
            cost_epsilon: 0.02,
            cost_margin: 30.0,
            time_epsilon: 0.02,
            time_margin_secs: 30,
        }
    }
}
