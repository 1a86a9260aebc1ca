use crate::domain::model::{Device, DeviceType};
use crate::utils::error::Result;

/// Source of unique tokens for identifier generation. Production draws
/// UUIDs; tests substitute deterministic sequences.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> String;
}

/// Decides which kind of device the next cycle should produce.
pub trait DeviceTypeSource: Send + Sync {
    fn device_type(&self) -> DeviceType;
}

/// Draws a price for the next device.
pub trait PriceSource: Send + Sync {
    fn price(&self) -> f64;
}

/// Builds tagged device records from a kind and a price. The production
/// implementation is total over `DeviceType`; the `Result` return is the
/// contract-violation signal for substitute implementations.
pub trait DeviceFactory: Send + Sync {
    fn create_device(&self, device_type: DeviceType, price: f64) -> Result<Device>;
}

/// One processing cycle: decide a kind, draw a price, produce a device.
pub trait Processor: Send + Sync {
    fn process(&self) -> Result<Device>;
}

/// Read-only view over resolved settings.
pub trait ConfigProvider: Send + Sync {
    fn prefix(&self) -> &str;
    fn suffix(&self) -> &str;
    fn device_type(&self) -> DeviceType;
}
