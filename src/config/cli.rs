use clap::Parser;

use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::domain::model::DeviceType;
use crate::utils::error::Result;

#[derive(Debug, Clone, Parser)]
#[command(name = "devicegen")]
#[command(about = "A small device generation pipeline with explicit dependency wiring")]
pub struct CliConfig {
    /// Identifier prefix
    #[arg(long, default_value = "SomePrefix")]
    pub prefix: String,

    /// Identifier suffix
    #[arg(long, default_value = "SomeSuffix")]
    pub suffix: String,

    /// Device kind to generate (laptop, desktop, phone)
    #[arg(long, default_value = "laptop")]
    pub device_type: DeviceType,

    /// Use the legacy hard-wired processor instead of injected wiring
    #[arg(long)]
    pub legacy: bool,

    /// Path to a TOML configuration file; when given, the file provides
    /// prefix/suffix/device-type instead of the flags above
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<Settings> {
        match &self.config {
            Some(path) => Ok(TomlConfig::load(path)?.into_settings()),
            None => Ok(Settings {
                prefix: self.prefix.clone(),
                suffix: self.suffix.clone(),
                device_type: self.device_type,
                legacy: self.legacy,
            }),
        }
    }
}
