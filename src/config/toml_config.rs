use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::domain::model::DeviceType;
use crate::utils::error::Result;

/// On-disk configuration:
///
/// ```toml
/// [id]
/// prefix = "SomePrefix"
/// suffix = "SomeSuffix"
///
/// [generator]
/// device_type = "laptop"
/// legacy = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub id: IdConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdConfig {
    pub prefix: String,
    pub suffix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_device_type")]
    pub device_type: DeviceType,
    #[serde(default)]
    pub legacy: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            device_type: default_device_type(),
            legacy: false,
        }
    }
}

fn default_device_type() -> DeviceType {
    DeviceType::Laptop
}

impl TomlConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&raw)?;
        Ok(config)
    }

    pub fn into_settings(self) -> Settings {
        Settings {
            prefix: self.id.prefix,
            suffix: self.id.suffix,
            device_type: self.generator.device_type,
            legacy: self.generator.legacy,
        }
    }
}
