//! Cost model configuration

use serde::Deserialize;

use crate::domain::estimate::ForestConfig;
use crate::domain::hospital::DEFAULT_FALLBACK_LIMIT;

use super::error::ValidationError;

/// Random forest and search settings
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Number of trees in the forest
    #[serde(default = "default_n_estimators")]
    pub n_estimators: usize,

    /// Seed for bootstrap sampling
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Hospitals returned when none are within the radius
    #[serde(default = "default_fallback_limit")]
    pub nearby_fallback_limit: usize,
}

impl ModelConfig {
    /// Forest hyperparameters for training
    pub fn forest(&self) -> ForestConfig {
        ForestConfig {
            n_estimators: self.n_estimators,
            seed: self.seed,
            ..Default::default()
        }
    }

    /// Validate model configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.n_estimators == 0 {
            return Err(ValidationError::NoTrees);
        }
        if self.nearby_fallback_limit == 0 {
            return Err(ValidationError::InvalidFallbackLimit);
        }
        Ok(())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            n_estimators: default_n_estimators(),
            seed: default_seed(),
            nearby_fallback_limit: default_fallback_limit(),
        }
    }
}

fn default_n_estimators() -> usize {
    250
}

fn default_seed() -> u64 {
    42
}

fn default_fallback_limit() -> usize {
    DEFAULT_FALLBACK_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_config_defaults() {
        let config = ModelConfig::default();
        assert_eq!(config.n_estimators, 250);
        assert_eq!(config.seed, 42);
        assert_eq!(config.nearby_fallback_limit, 30);
    }

    #[test]
    fn test_forest_config() {
        let config = ModelConfig {
            n_estimators: 10,
            seed: 7,
            ..Default::default()
        };
        let forest = config.forest();
        assert_eq!(forest.n_estimators, 10);
        assert_eq!(forest.seed, 7);
        assert_eq!(forest.min_samples_split, ForestConfig::default().min_samples_split);
    }

    #[test]
    fn test_validation() {
        let config = ModelConfig {
            n_estimators: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::NoTrees));

        let config = ModelConfig {
            nearby_fallback_limit: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidFallbackLimit));
    }
}
