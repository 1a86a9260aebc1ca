use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::domain::model::DeviceType;
use crate::domain::ports::{DeviceTypeSource, PriceSource, TokenSource};

/// UUID v4 token source. Collision probability within a single process run
/// is negligible.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidTokenSource;

impl TokenSource for UuidTokenSource {
    fn token(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Always returns the kind it was configured with. Stands in for real
/// decision logic.
#[derive(Debug, Clone, Copy)]
pub struct StaticTypeSource {
    kind: DeviceType,
}

impl StaticTypeSource {
    pub fn new(kind: DeviceType) -> Self {
        Self { kind }
    }
}

impl DeviceTypeSource for StaticTypeSource {
    fn device_type(&self) -> DeviceType {
        tracing::info!("deciding which device type to use => {}", self.kind);
        self.kind
    }
}

/// Uniform price draw: an integer in `0..1000` scaled to tenths, so every
/// price is a multiple of 0.1 in `[0, 100)`.
pub struct UniformPriceSource {
    rng: Mutex<StdRng>,
}

impl UniformPriceSource {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Fixed seed, for deterministic draws in tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for UniformPriceSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceSource for UniformPriceSource {
    fn price(&self) -> f64 {
        let tenths = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(0..1000);
        let price = tenths as f64 / 10.0;

        tracing::info!("determining a price => {}$", price);

        price
    }
}
