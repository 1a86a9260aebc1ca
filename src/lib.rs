pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::Settings;
pub use crate::core::{
    factory::StandardDeviceFactory, id::IdGenerator, job::JobRunner,
    legacy::LegacyDeviceProcessor, processor::DeviceProcessor,
};
pub use crate::domain::model::{Device, DeviceType};
pub use crate::utils::error::{DeviceError, Result};
