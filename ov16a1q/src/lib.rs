// ov16a1q-rs/ov16a1q/src/lib.rs

//! ov16a1q
//!
//! Pure Rust driver model for the OmniVision OV16A1Q MIPI CSI-2 image sensor.
#![warn(missing_docs)]

pub mod constants;
pub mod controls;
pub mod error;
pub mod modes;
pub mod power;
pub mod prelude;
pub mod regmap;
pub mod sensor;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the small types in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
