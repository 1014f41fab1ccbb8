//! Engine configuration

use serde::{Deserialize, Serialize};

/// Default number of centroid samples over the output domain
///
/// High enough that the sampled centroid stays within 1e-3 of the
/// analytical one for the bundled film-quality rule base.
pub const DEFAULT_RESOLUTION: usize = 5001;

/// Smallest usable resolution (both domain endpoints)
pub const MIN_RESOLUTION: usize = 2;

/// Configuration for the inference engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of evenly spaced samples used for centroid defuzzification,
    /// including both ends of the output domain
    pub resolution: usize,

    /// Keep per-rule firing strengths in each result for explanation
    pub retain_firing_strengths: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            retain_firing_strengths: true,
        }
    }
}

impl EngineConfig {
    /// Coarse sampling for bulk scoring where 1e-2 accuracy is enough
    pub fn fast() -> Self {
        Self {
            resolution: 1001,
            retain_firing_strengths: false,
        }
    }

    /// Fine sampling for reference values and convergence checks
    pub fn precise() -> Self {
        Self {
            resolution: 20_001,
            retain_firing_strengths: true,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.resolution < MIN_RESOLUTION {
            return Err(format!(
                "resolution must be at least {} (got {})",
                MIN_RESOLUTION, self.resolution
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.resolution, DEFAULT_RESOLUTION);
        assert!(config.retain_firing_strengths);
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(EngineConfig::fast().validate().is_ok());
        assert!(EngineConfig::precise().validate().is_ok());
        assert!(EngineConfig::fast().resolution < EngineConfig::precise().resolution);
    }

    #[test]
    fn test_invalid_resolution() {
        let config = EngineConfig {
            resolution: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig::precise();
        let toml_str = config.to_toml().unwrap();
        let parsed = EngineConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = EngineConfig::from_toml("resolution = 2001").unwrap();
        assert_eq!(parsed.resolution, 2001);
        assert!(parsed.retain_firing_strengths);
    }
}
