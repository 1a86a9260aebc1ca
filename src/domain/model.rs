use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::DeviceError;

/// Closed set of device kinds this pipeline can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Laptop,
    Desktop,
    Phone,
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeviceType::Laptop => "laptop",
            DeviceType::Desktop => "desktop",
            DeviceType::Phone => "phone",
        };
        f.write_str(name)
    }
}

impl FromStr for DeviceType {
    type Err = DeviceError;

    // The open-world boundary: CLI flags and config files select kinds by
    // name, so unrecognized names surface here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "laptop" => Ok(DeviceType::Laptop),
            "desktop" => Ok(DeviceType::Desktop),
            "phone" => Ok(DeviceType::Phone),
            _ => Err(DeviceError::UnknownDeviceTypeError {
                value: s.to_string(),
            }),
        }
    }
}

/// Immutable record for one produced device. One variant per kind; every
/// variant carries the generated identifier and the drawn price.
#[derive(Debug, Clone, PartialEq)]
pub enum Device {
    Laptop { id: String, price: f64 },
    Desktop { id: String, price: f64 },
    Phone { id: String, price: f64 },
}

impl Device {
    pub fn id(&self) -> &str {
        match self {
            Device::Laptop { id, .. } | Device::Desktop { id, .. } | Device::Phone { id, .. } => id,
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            Device::Laptop { price, .. }
            | Device::Desktop { price, .. }
            | Device::Phone { price, .. } => *price,
        }
    }

    pub fn kind(&self) -> DeviceType {
        match self {
            Device::Laptop { .. } => DeviceType::Laptop,
            Device::Desktop { .. } => DeviceType::Desktop,
            Device::Phone { .. } => DeviceType::Phone,
        }
    }
}
