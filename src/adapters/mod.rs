// Adapters layer: concrete implementations over the external sources of
// randomness and uniqueness.

pub mod generators;

pub use generators::{StaticTypeSource, UniformPriceSource, UuidTokenSource};
