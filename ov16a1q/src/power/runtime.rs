// ov16a1q-rs/ov16a1q/src/power/runtime.rs

//! Runtime-power reference counting over the [`PowerSequencer`].
//!
//! The host framework's get/put pairs drive the Off/Active/Suspended
//! transitions; physical power-down after the last put is deferred by a
//! configurable autosuspend delay. Autosuspend expiry is evaluated on an
//! explicit [`RuntimePm::maybe_autosuspend`] tick rather than a timer
//! thread, which keeps the layer deterministic under test.

use std::time::{Duration, Instant};

use crate::Result;
use crate::power::PowerSequencer;

/// Runtime power states of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerState {
    /// Never powered, runtime PM not yet active.
    #[default]
    Off,
    /// Physically powered.
    Active,
    /// Physically powered down after use.
    Suspended,
    /// Power-on sequence in flight.
    Resuming,
}

/// Reference-counted power management for one sensor instance.
pub struct RuntimePm {
    seq: PowerSequencer,
    state: PowerState,
    usage: u32,
    enabled: bool,
    autosuspend: Duration,
    last_busy: Option<Instant>,
}

impl RuntimePm {
    pub fn new(seq: PowerSequencer) -> Self {
        Self {
            seq,
            state: PowerState::Off,
            usage: 0,
            enabled: false,
            autosuspend: Duration::ZERO,
            last_busy: None,
        }
    }

    pub fn state(&self) -> PowerState {
        self.state
    }

    pub fn usage(&self) -> u32 {
        self.usage
    }

    /// Run the power-on sequence outside of reference counting, for the
    /// synchronous bring-up at bind time.
    pub fn power_on_sync(&mut self) -> Result<()> {
        self.seq.power_on()
    }

    /// Declare the device physically powered (bind-time bring-up done).
    pub fn set_active(&mut self) {
        self.state = PowerState::Active;
    }

    /// Take a reference without touching hardware.
    pub fn get_noresume(&mut self) {
        self.usage += 1;
    }

    /// Drop a reference without evaluating suspend.
    pub fn put_noidle(&mut self) {
        self.usage = self.usage.saturating_sub(1);
    }

    /// Start honoring get/put transitions.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Stop honoring get/put transitions (unbind path).
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn set_autosuspend_delay(&mut self, delay: Duration) {
        self.autosuspend = delay;
    }

    pub fn mark_last_busy(&mut self) {
        self.last_busy = Some(Instant::now());
    }

    /// Take a reference, powering the device on first if it is not
    /// active. On power-on failure the reference is not kept.
    pub fn resume_and_get(&mut self) -> Result<()> {
        self.usage += 1;
        if self.state == PowerState::Active {
            return Ok(());
        }

        let prev = self.state;
        self.state = PowerState::Resuming;
        match self.seq.power_on() {
            Ok(()) => {
                self.state = PowerState::Active;
                Ok(())
            }
            Err(err) => {
                self.usage = self.usage.saturating_sub(1);
                self.state = prev;
                Err(err)
            }
        }
    }

    /// Take a reference only if the device is already active and in use.
    /// Returns whether a reference was taken; callers skip hardware I/O
    /// when it was not.
    pub fn get_if_in_use(&mut self) -> bool {
        if self.state == PowerState::Active && self.usage > 0 {
            self.usage += 1;
            true
        } else {
            false
        }
    }

    /// Drop a reference; physical power-down is left to the autosuspend
    /// machinery.
    pub fn put(&mut self) {
        self.usage = self.usage.saturating_sub(1);
        if self.usage == 0 {
            self.mark_last_busy();
        }
    }

    /// Drop a reference and power down immediately if it was the last
    /// one (error-unwind paths).
    pub fn put_sync(&mut self) {
        self.usage = self.usage.saturating_sub(1);
        if self.usage == 0 && self.state == PowerState::Active {
            self.seq.power_off();
            self.state = PowerState::Suspended;
        }
    }

    /// Drop a reference, deferring power-down by the autosuspend delay.
    pub fn put_autosuspend(&mut self) {
        self.mark_last_busy();
        self.usage = self.usage.saturating_sub(1);
    }

    /// Power down if the device has been idle for at least the
    /// autosuspend delay. Returns whether a suspend happened.
    pub fn maybe_autosuspend_at(&mut self, now: Instant) -> bool {
        if !self.enabled || self.usage > 0 || self.state != PowerState::Active {
            return false;
        }
        let Some(last_busy) = self.last_busy else {
            return false;
        };
        if now.saturating_duration_since(last_busy) < self.autosuspend {
            return false;
        }
        self.seq.power_off();
        self.state = PowerState::Suspended;
        true
    }

    /// [`Self::maybe_autosuspend_at`] against the current time.
    pub fn maybe_autosuspend(&mut self) -> bool {
        self.maybe_autosuspend_at(Instant::now())
    }

    /// Unconditional power-down unless already suspended (unbind path).
    pub fn force_suspend(&mut self) {
        if matches!(self.state, PowerState::Active | PowerState::Resuming) {
            self.seq.power_off();
        }
        if self.state != PowerState::Off {
            self.state = PowerState::Suspended;
        }
    }
}
