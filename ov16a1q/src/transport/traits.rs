// ov16a1q-rs/ov16a1q/src/transport/traits.rs

use crate::Result;

/// SensorBus abstracts the raw I2C master away from register/driver logic.
///
/// Both operations are synchronous and may block the calling thread. The
/// byte counts returned let callers detect partially completed transfers,
/// mirroring what an I2C master reports.
pub trait SensorBus {
    /// Issue a single bus write of `bytes` and return how many bytes the
    /// master accepted.
    fn write(&mut self, bytes: &[u8]) -> Result<usize>;

    /// Issue an address write followed by a data read filling `into`.
    /// Returns how many bytes were read back.
    fn write_read(&mut self, bytes: &[u8], into: &mut [u8]) -> Result<usize>;
}
