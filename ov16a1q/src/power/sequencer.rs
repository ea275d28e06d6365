// ov16a1q-rs/ov16a1q/src/power/sequencer.rs

use log::{error, warn};

use crate::Result;
use crate::constants::{
    CLOCK_SETTLE_MAX, CLOCK_SETTLE_MIN, POWER_OFF_SETTLE_MAX, POWER_OFF_SETTLE_MIN,
    RESET_SETTLE_MAX, RESET_SETTLE_MIN,
};
use crate::power::{Clock, Delay, RegulatorBulk, ResetLine};

/// Drives the clock, regulators and reset line through the sensor's
/// power on/off sequences with the mandated settle windows.
///
/// `power_on` either fully succeeds or fully unwinds; `power_off` is
/// always safe to call and never fails.
pub struct PowerSequencer {
    clock: Box<dyn Clock>,
    reset: Box<dyn ResetLine>,
    supplies: Box<dyn RegulatorBulk>,
    delay: Box<dyn Delay>,
}

impl PowerSequencer {
    pub fn new(
        clock: Box<dyn Clock>,
        reset: Box<dyn ResetLine>,
        supplies: Box<dyn RegulatorBulk>,
        delay: Box<dyn Delay>,
    ) -> Self {
        Self {
            clock,
            reset,
            supplies,
            delay,
        }
    }

    /// Bring the sensor up: reset held low, clock on, settle, rails on,
    /// reset released, settle.
    pub fn power_on(&mut self) -> Result<()> {
        self.reset.assert_reset();

        if let Err(err) = self.clock.enable() {
            error!("failed to enable xvclk");
            return Err(err);
        }
        self.delay.sleep_range(CLOCK_SETTLE_MIN, CLOCK_SETTLE_MAX);

        if let Err(err) = self.supplies.enable() {
            error!("failed to enable regulators");
            // The clock must not stay running behind a failed bring-up.
            self.clock.disable();
            return Err(err);
        }

        self.reset.deassert_reset();
        self.delay.sleep_range(RESET_SETTLE_MIN, RESET_SETTLE_MAX);

        Ok(())
    }

    /// Take the sensor down: reset asserted, clock off, rails off, with
    /// settle windows in between. Regulator failures are logged only.
    pub fn power_off(&mut self) {
        self.reset.assert_reset();
        self.delay
            .sleep_range(POWER_OFF_SETTLE_MIN, POWER_OFF_SETTLE_MAX);

        self.clock.disable();
        self.delay
            .sleep_range(POWER_OFF_SETTLE_MIN, POWER_OFF_SETTLE_MAX);

        if let Err(err) = self.supplies.disable() {
            warn!("failed to disable regulators: {err}");
        }
    }
}
