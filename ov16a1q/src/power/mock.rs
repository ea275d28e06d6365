// ov16a1q-rs/ov16a1q/src/power/mock.rs

//! Mock HAL pieces for unit tests. Like the mock bus, each handle is a
//! cheap shared clone so tests can keep one for assertions after handing
//! another to the sensor.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::power::{Clock, Delay, RegulatorBulk, ResetLine};
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockClockState {
    enables: usize,
    disables: usize,
    fail_enable: bool,
}

/// Mock clock counting enable/disable calls.
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    state: Rc<RefCell<MockClockState>>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_enable(&self) {
        self.state.borrow_mut().fail_enable = true;
    }

    pub fn enable_calls(&self) -> usize {
        self.state.borrow().enables
    }

    pub fn disable_calls(&self) -> usize {
        self.state.borrow().disables
    }
}

impl Clock for MockClock {
    fn enable(&mut self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_enable {
            return Err(Error::Clock("simulated enable failure".into()));
        }
        state.enables += 1;
        Ok(())
    }

    fn disable(&mut self) {
        self.state.borrow_mut().disables += 1;
    }
}

#[derive(Debug, Default)]
struct MockResetLineState {
    /// Level history, true = deasserted (line high).
    transitions: Vec<bool>,
}

/// Mock reset line recording every level transition.
#[derive(Debug, Clone, Default)]
pub struct MockResetLine {
    state: Rc<RefCell<MockResetLineState>>,
}

impl MockResetLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Level history, oldest first; true means the line was driven high.
    pub fn transitions(&self) -> Vec<bool> {
        self.state.borrow().transitions.clone()
    }

    pub fn level(&self) -> Option<bool> {
        self.state.borrow().transitions.last().copied()
    }
}

impl ResetLine for MockResetLine {
    fn assert_reset(&mut self) {
        self.state.borrow_mut().transitions.push(false);
    }

    fn deassert_reset(&mut self) {
        self.state.borrow_mut().transitions.push(true);
    }
}

#[derive(Debug, Default)]
struct MockRegulatorsState {
    enables: usize,
    disables: usize,
    fail_enable: bool,
}

/// Mock regulator bulk group counting enable/disable calls.
#[derive(Debug, Clone, Default)]
pub struct MockRegulators {
    state: Rc<RefCell<MockRegulatorsState>>,
}

impl MockRegulators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_enable(&self) {
        self.state.borrow_mut().fail_enable = true;
    }

    pub fn enable_calls(&self) -> usize {
        self.state.borrow().enables
    }

    pub fn disable_calls(&self) -> usize {
        self.state.borrow().disables
    }
}

impl RegulatorBulk for MockRegulators {
    fn enable(&mut self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_enable {
            return Err(Error::Regulator("simulated enable failure".into()));
        }
        state.enables += 1;
        Ok(())
    }

    fn disable(&mut self) -> Result<()> {
        self.state.borrow_mut().disables += 1;
        Ok(())
    }
}

/// Delay that records requested windows instead of sleeping.
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    slept: Rc<RefCell<Vec<(Duration, Duration)>>>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slept(&self) -> Vec<(Duration, Duration)> {
        self.slept.borrow().clone()
    }
}

impl Delay for MockDelay {
    fn sleep_range(&mut self, min: Duration, max: Duration) {
        self.slept.borrow_mut().push((min, max));
    }
}
