pub mod factory;
pub mod id;
pub mod job;
pub mod legacy;
pub mod processor;

pub use crate::domain::model::{Device, DeviceType};
pub use crate::domain::ports::{
    ConfigProvider, DeviceFactory, DeviceTypeSource, PriceSource, Processor, TokenSource,
};
pub use crate::utils::error::Result;
