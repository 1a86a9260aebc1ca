use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("Unknown device type '{value}', expected one of: laptop, desktop, phone")]
    UnknownDeviceTypeError { value: String },

    #[error("Invalid config value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DeviceError>;
