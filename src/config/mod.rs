#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use serde::{Deserialize, Serialize};

use crate::domain::model::DeviceType;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_id_part, Validate};

/// Final resolved settings for one run. Built once at startup, read-only
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub prefix: String,
    pub suffix: String,
    pub device_type: DeviceType,
    pub legacy: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prefix: "SomePrefix".to_string(),
            suffix: "SomeSuffix".to_string(),
            device_type: DeviceType::Laptop,
            legacy: false,
        }
    }
}

impl ConfigProvider for Settings {
    fn prefix(&self) -> &str {
        &self.prefix
    }

    fn suffix(&self) -> &str {
        &self.suffix
    }

    fn device_type(&self) -> DeviceType {
        self.device_type
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_id_part("prefix", &self.prefix)?;
        validate_id_part("suffix", &self.suffix)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();

        assert!(settings.validate().is_ok());
        assert_eq!(settings.prefix, "SomePrefix");
        assert_eq!(settings.suffix, "SomeSuffix");
        assert_eq!(settings.device_type, DeviceType::Laptop);
        assert!(!settings.legacy);
    }

    #[test]
    fn test_validation_rejects_dashed_prefix() {
        let settings = Settings {
            prefix: "Some-Prefix".to_string(),
            ..Settings::default()
        };

        assert!(settings.validate().is_err());
    }
}
