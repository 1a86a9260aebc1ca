use crate::adapters::generators::{StaticTypeSource, UniformPriceSource, UuidTokenSource};
use crate::core::id::IdGenerator;
use crate::domain::model::{Device, DeviceType};
use crate::domain::ports::{ConfigProvider, DeviceTypeSource, PriceSource, Processor};
use crate::utils::error::Result;

/// Legacy-style processor: collaborators are built internally from the
/// configuration instead of being supplied, so nothing here can be
/// substituted in tests. Kept as the counterpart to [`DeviceProcessor`]
/// to contrast the two wiring styles.
///
/// [`DeviceProcessor`]: crate::core::processor::DeviceProcessor
pub struct LegacyDeviceProcessor {
    types: StaticTypeSource,
    ids: IdGenerator<UuidTokenSource>,
}

impl LegacyDeviceProcessor {
    // Concrete collaborators are hard-wired here; only the config comes in.
    pub fn new(config: &impl ConfigProvider) -> Self {
        Self {
            types: StaticTypeSource::new(config.device_type()),
            ids: IdGenerator::new(
                config.prefix().to_string(),
                config.suffix().to_string(),
                UuidTokenSource,
            ),
        }
    }
}

impl Processor for LegacyDeviceProcessor {
    fn process(&self) -> Result<Device> {
        tracing::info!("processing started (legacy wiring)");

        let device_type = self.types.device_type();
        let price = UniformPriceSource::new().price();

        let id = self.ids.generate();

        // Built inline instead of going through the factory.
        let device = match device_type {
            DeviceType::Laptop => Device::Laptop { id, price },
            DeviceType::Desktop => Device::Desktop { id, price },
            DeviceType::Phone => Device::Phone { id, price },
        };

        tracing::info!(
            "device created: kind={}, id={}, price={}$",
            device.kind(),
            device.id(),
            device.price()
        );

        Ok(device)
    }
}
