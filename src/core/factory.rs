use crate::core::id::IdGenerator;
use crate::domain::model::{Device, DeviceType};
use crate::domain::ports::{DeviceFactory, TokenSource};
use crate::utils::error::Result;

/// Production factory: one generated identifier per device, kind mapped to
/// its variant by exhaustive match. Adding a kind without extending the
/// mapping is a compile error.
pub struct StandardDeviceFactory<T: TokenSource> {
    ids: IdGenerator<T>,
}

impl<T: TokenSource> StandardDeviceFactory<T> {
    pub fn new(ids: IdGenerator<T>) -> Self {
        Self { ids }
    }
}

impl<T: TokenSource> DeviceFactory for StandardDeviceFactory<T> {
    fn create_device(&self, device_type: DeviceType, price: f64) -> Result<Device> {
        let id = self.ids.generate();

        let device = match device_type {
            DeviceType::Laptop => Device::Laptop { id, price },
            DeviceType::Desktop => Device::Desktop { id, price },
            DeviceType::Phone => Device::Phone { id, price },
        };

        Ok(device)
    }
}
