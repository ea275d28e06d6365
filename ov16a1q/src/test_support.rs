// ov16a1q-rs/ov16a1q/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the mock rig setup so tests across the crate
//! and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::constants::REG_CHIP_ID;
use crate::power::mock::{MockClock, MockDelay, MockRegulators, MockResetLine};
use crate::sensor::{EndpointConfig, Ov16a1q, SensorBuilder};
use crate::transport::{MockBus, SensorBus};
use crate::Result;

#[derive(Debug, Default)]
struct SimBusState {
    regs: BTreeMap<u16, u8>,
    writes: usize,
}

/// Simulated sensor bus backed by a byte-register model: write frames
/// land in a register file and reads return what was written. The chip
/// ID registers come preloaded so identification succeeds.
#[derive(Debug, Clone)]
pub struct SimBus {
    state: Rc<RefCell<SimBusState>>,
}

impl SimBus {
    pub fn new() -> Self {
        let mut regs = BTreeMap::new();
        regs.insert(REG_CHIP_ID, 0x16);
        regs.insert(REG_CHIP_ID + 1, 0x41);
        Self {
            state: Rc::new(RefCell::new(SimBusState { regs, writes: 0 })),
        }
    }

    /// Current value of one register byte (0 if never written).
    pub fn register(&self, address: u16) -> u8 {
        self.state.borrow().regs.get(&address).copied().unwrap_or(0)
    }

    /// Overwrite one register byte, e.g. to fake a wrong chip ID.
    pub fn set_register(&self, address: u16, value: u8) {
        self.state.borrow_mut().regs.insert(address, value);
    }

    /// Number of write frames issued so far.
    pub fn write_count(&self) -> usize {
        self.state.borrow().writes
    }
}

impl Default for SimBus {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorBus for SimBus {
    fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        let mut state = self.state.borrow_mut();
        state.writes += 1;
        if bytes.len() >= 2 {
            let base = u16::from_be_bytes([bytes[0], bytes[1]]);
            for (offset, byte) in bytes[2..].iter().enumerate() {
                state.regs.insert(base.wrapping_add(offset as u16), *byte);
            }
        }
        Ok(bytes.len())
    }

    fn write_read(&mut self, bytes: &[u8], into: &mut [u8]) -> Result<usize> {
        let state = self.state.borrow();
        if bytes.len() < 2 {
            return Ok(0);
        }
        let base = u16::from_be_bytes([bytes[0], bytes[1]]);
        for (offset, slot) in into.iter_mut().enumerate() {
            *slot = state
                .regs
                .get(&base.wrapping_add(offset as u16))
                .copied()
                .unwrap_or(0);
        }
        Ok(into.len())
    }
}

/// A full set of shared-handle mocks for one sensor instance. Keep the
/// rig around for assertions after `builder()` hands clones to the
/// sensor.
pub struct MockRig {
    pub bus: MockBus,
    pub clock: MockClock,
    pub reset: MockResetLine,
    pub supplies: MockRegulators,
    pub delay: MockDelay,
}

impl MockRig {
    pub fn new() -> Self {
        Self {
            bus: MockBus::new(),
            clock: MockClock::new(),
            reset: MockResetLine::new(),
            supplies: MockRegulators::new(),
            delay: MockDelay::new(),
        }
    }

    /// A builder wired to this rig's mocks and a 4-lane endpoint.
    pub fn builder(&self) -> SensorBuilder {
        SensorBuilder::new()
            .with_bus(Box::new(self.bus.clone()))
            .with_clock(Box::new(self.clock.clone()))
            .with_reset_line(Box::new(self.reset.clone()))
            .with_regulators(Box::new(self.supplies.clone()))
            .with_delay(Box::new(self.delay.clone()))
            .with_endpoint(EndpointConfig { num_data_lanes: 4 })
    }
}

impl Default for MockRig {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience: a bound sensor over a fresh mock rig. The chip-id
/// readback is pre-seeded so identification succeeds.
#[doc(hidden)]
pub fn bound_sensor() -> (MockRig, Ov16a1q) {
    let rig = MockRig::new();
    rig.bus.push_read(vec![0x16, 0x41]);
    let sensor = rig
        .builder()
        .probe()
        .unwrap_or_else(|err| panic!("mock probe failed: {err}"));
    (rig, sensor)
}
