use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::TrimError;

/// Host-persisted trim settings for one gimbal group.
///
/// The host hands these over per actuator group; different groups on the
/// same vehicle may carry different limits.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoTrimConfig {
    /// Whether auto-trim may steer this group
    pub enabled: bool,

    /// Maximum deflection angle [deg], recognized range [0, 90]
    pub limit_degrees: f64,
}

impl AutoTrimConfig {
    pub const LIMIT_MIN: f64 = 0.0;
    pub const LIMIT_MAX: f64 = 90.0;

    pub fn new(enabled: bool, limit_degrees: f64) -> Self {
        Self {
            enabled,
            limit_degrees,
        }
    }

    /// Reject limits outside the recognized range.
    pub fn validate(&self) -> Result<(), TrimError> {
        if !self.limit_degrees.is_finite()
            || self.limit_degrees < Self::LIMIT_MIN
            || self.limit_degrees > Self::LIMIT_MAX
        {
            return Err(TrimError::InvalidConfig(format!(
                "trim limit {} outside [{}, {}] degrees",
                self.limit_degrees,
                Self::LIMIT_MIN,
                Self::LIMIT_MAX
            )));
        }
        Ok(())
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, TrimError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, TrimError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn to_yaml(&self) -> Result<String, TrimError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl Default for AutoTrimConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            limit_degrees: 45.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit_is_valid() {
        assert!(AutoTrimConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_limit() {
        let config = AutoTrimConfig::new(true, 91.0);
        assert!(matches!(
            config.validate(),
            Err(TrimError::InvalidConfig(_))
        ));

        let config = AutoTrimConfig::new(true, -1.0);
        assert!(config.validate().is_err());

        let config = AutoTrimConfig::new(true, f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn yaml_round_trip() {
        let config = AutoTrimConfig::new(true, 30.0);
        let yaml = config.to_yaml().unwrap();
        let parsed = AutoTrimConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn yaml_rejects_invalid_limit() {
        let yaml = "enabled: true\nlimit_degrees: 120.0\n";
        assert!(AutoTrimConfig::from_yaml(yaml).is_err());
    }
}
