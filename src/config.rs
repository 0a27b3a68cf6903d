//! Network configuration.
//!
//! Hyperparameters plus the input/output counts used when generating a
//! default genome. Supports YAML configuration files with sensible defaults.

use crate::error::NetworkError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a [`Network`](crate::Network).
///
/// `input`/`output` are only consulted when a network is built without an
/// explicit genome; when a genome is supplied, the node groups come from the
/// genome itself. Serialized with camelCase field names to match the export
/// wire format (`learningRate`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkConfig {
    /// Number of input nodes for a generated default genome.
    pub input: usize,
    /// Number of output nodes for a generated default genome.
    pub output: usize,
    /// Gradient-descent step size.
    pub learning_rate: f64,
    /// Momentum coefficient applied to the previous adjustment.
    pub momentum: f64,
    /// Seed for default-genome generation. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            input: 2,
            output: 1,
            learning_rate: 0.001,
            momentum: 0.5,
            seed: None,
        }
    }
}

impl NetworkConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: NetworkConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate all configuration values, including the input/output counts
    /// used for default-genome generation.
    pub fn validate(&self) -> Result<(), NetworkError> {
        if self.input == 0 || self.output == 0 {
            return Err(NetworkError::InvalidConfig(
                "input/output counts must be > 0".to_string(),
            ));
        }
        self.validate_rates()
    }

    /// Validate only the hyperparameters.
    ///
    /// Used when a genome is supplied: the node groups come from the genome,
    /// so the input/output counts are not consulted.
    pub fn validate_rates(&self) -> Result<(), NetworkError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(NetworkError::InvalidConfig(
                "learningRate must be finite and > 0".to_string(),
            ));
        }
        if !self.momentum.is_finite() || self.momentum < 0.0 {
            return Err(NetworkError::InvalidConfig(
                "momentum must be finite and >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = NetworkConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.learning_rate, 0.001);
        assert_eq!(config.momentum, 0.5);
    }

    #[test]
    fn test_zero_inputs_rejected() {
        let config = NetworkConfig { input: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rates_ignores_counts() {
        // counts only matter for default-genome generation
        let config = NetworkConfig { input: 0, output: 0, ..Default::default() };
        assert!(config.validate_rates().is_ok());
        assert!(config.validate().is_err());

        let config = NetworkConfig { learning_rate: -1.0, ..Default::default() };
        assert!(config.validate_rates().is_err());
    }

    #[test]
    fn test_config_yaml_roundtrip() {
        let config = NetworkConfig { input: 4, output: 2, seed: Some(7), ..Default::default() };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded: NetworkConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_wire_field_names() {
        let config = NetworkConfig::default();
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("learningRate").is_some());
        assert!(json.get("momentum").is_some());
        assert!(json.get("input").is_some());
    }
}
