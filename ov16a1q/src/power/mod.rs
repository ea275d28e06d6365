// ov16a1q-rs/ov16a1q/src/power/mod.rs

//! Power plumbing: HAL traits for the clock, reset line and regulator
//! group, the power on/off sequencer, and the runtime-power reference
//! counting layer.

pub mod mock;
pub mod runtime;
pub mod sequencer;

use std::time::Duration;

use crate::Result;

pub use runtime::{PowerState, RuntimePm};
pub use sequencer::PowerSequencer;

/// External clock feeding the sensor (xvclk).
pub trait Clock {
    /// Prepare and enable the clock.
    fn enable(&mut self) -> Result<()>;
    /// Disable the clock. Never fails.
    fn disable(&mut self);
}

/// Active-low reset line. Setting the line may sleep.
pub trait ResetLine {
    /// Drive the line low (sensor held in reset).
    fn assert_reset(&mut self);
    /// Drive the line high (sensor released).
    fn deassert_reset(&mut self);
}

/// The sensor's named supplies treated as one bulk unit: all three rails
/// enable together or the operation fails.
pub trait RegulatorBulk {
    fn enable(&mut self) -> Result<()>;
    /// Best-effort disable; failures are reported but power-off paths
    /// ignore them.
    fn disable(&mut self) -> Result<()>;
}

/// Blocking settle delays between power sequence steps.
pub trait Delay {
    /// Sleep for at least `min`, at most `max`.
    fn sleep_range(&mut self, min: Duration, max: Duration);
}

/// `Delay` backed by `std::thread::sleep`. Sleeps the lower bound of the
/// window.
#[derive(Debug, Default)]
pub struct SystemDelay;

impl Delay for SystemDelay {
    fn sleep_range(&mut self, min: Duration, _max: Duration) {
        std::thread::sleep(min);
    }
}
