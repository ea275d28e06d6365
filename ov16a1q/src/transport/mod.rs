// ov16a1q-rs/ov16a1q/src/transport/mod.rs
//! Bus transports: the `SensorBus` trait plus a mock implementation for
//! tests and an optional Linux I2C character-device implementation.

pub mod mock;
pub mod traits;

#[cfg(feature = "linux-i2c")]
pub mod linux;

pub use mock::MockBus;
pub use traits::SensorBus;
