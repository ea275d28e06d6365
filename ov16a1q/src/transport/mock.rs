// ov16a1q-rs/ov16a1q/src/transport/mock.rs

use std::cell::RefCell;
use std::rc::Rc;

use crate::Result;
use crate::transport::traits::SensorBus;

#[derive(Debug, Default)]
struct MockBusState {
    writes: Vec<Vec<u8>>,
    reads: Vec<Vec<u8>>,
    /// Number of upcoming writes that complete short by one byte.
    short_writes: usize,
    /// Number of upcoming reads that complete short (zero bytes).
    short_reads: usize,
}

/// Mock bus for unit tests. It records every write frame and returns
/// queued read payloads.
///
/// Handles are cheap shared clones, so a test can keep one handle for
/// assertions after the sensor has taken ownership of another.
#[derive(Debug, Clone, Default)]
pub struct MockBus {
    state: Rc<RefCell<MockBusState>>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a payload to be returned by the next `write_read`.
    pub fn push_read(&self, payload: Vec<u8>) {
        self.state.borrow_mut().reads.push(payload);
    }

    /// Make the next `n` writes complete one byte short, which the
    /// register layer reports as an I/O error.
    pub fn fail_next_writes(&self, n: usize) {
        self.state.borrow_mut().short_writes = n;
    }

    /// Make the next `n` reads return zero bytes.
    pub fn fail_next_reads(&self, n: usize) {
        self.state.borrow_mut().short_reads = n;
    }

    /// All write frames issued so far, oldest first.
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.state.borrow().writes.clone()
    }

    /// Number of write frames issued so far.
    pub fn write_count(&self) -> usize {
        self.state.borrow().writes.len()
    }

    /// Drop all recorded writes, keeping queued reads.
    pub fn clear_writes(&self) {
        self.state.borrow_mut().writes.clear();
    }
}

impl SensorBus for MockBus {
    fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        let mut state = self.state.borrow_mut();
        state.writes.push(bytes.to_vec());
        if state.short_writes > 0 {
            state.short_writes -= 1;
            return Ok(bytes.len().saturating_sub(1));
        }
        Ok(bytes.len())
    }

    fn write_read(&mut self, bytes: &[u8], into: &mut [u8]) -> Result<usize> {
        let mut state = self.state.borrow_mut();
        state.writes.push(bytes.to_vec());
        if state.short_reads > 0 {
            state.short_reads -= 1;
            return Ok(0);
        }
        if state.reads.is_empty() {
            return Ok(0);
        }
        let payload = state.reads.remove(0);
        let n = payload.len().min(into.len());
        into[..n].copy_from_slice(&payload[..n]);
        Ok(n)
    }
}
