use crate::domain::model::Device;
use crate::domain::ports::{DeviceFactory, DeviceTypeSource, PriceSource, Processor};
use crate::utils::error::Result;

/// Injected-style processor: every collaborator is supplied at construction,
/// so tests can substitute fakes for any of them.
pub struct DeviceProcessor<T: DeviceTypeSource, P: PriceSource, F: DeviceFactory> {
    types: T,
    prices: P,
    factory: F,
}

impl<T: DeviceTypeSource, P: PriceSource, F: DeviceFactory> DeviceProcessor<T, P, F> {
    pub fn new(types: T, prices: P, factory: F) -> Self {
        Self {
            types,
            prices,
            factory,
        }
    }
}

impl<T: DeviceTypeSource, P: PriceSource, F: DeviceFactory> Processor
    for DeviceProcessor<T, P, F>
{
    fn process(&self) -> Result<Device> {
        tracing::info!("processing started");

        let device_type = self.types.device_type();
        let price = self.prices.price();

        let device = self.factory.create_device(device_type, price)?;

        tracing::info!(
            "device created: kind={}, id={}, price={}$",
            device.kind(),
            device.id(),
            device.price()
        );

        Ok(device)
    }
}
