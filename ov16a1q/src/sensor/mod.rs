// ov16a1q-rs/ov16a1q/src/sensor/mod.rs

//! The sensor device: bind-time resource acquisition and identification,
//! the streaming state machine, control writes and format negotiation.

pub mod builder;
pub mod handle;

pub use builder::{EndpointConfig, SensorBuilder};
pub use handle::Ov16a1q;
