// ov16a1q-rs/ov16a1q/src/transport/linux.rs

//! Real bus implementation on top of a Linux I2C character device.
//!
//! Enabled with the `linux-i2c` feature. The combined write-then-read is
//! issued as two transactions; the OV16A1Q tolerates a stop condition
//! between the address write and the data read.

use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;

use crate::Result;
use crate::transport::traits::SensorBus;

/// `SensorBus` backed by `/dev/i2c-N`.
pub struct LinuxI2cBus {
    dev: LinuxI2CDevice,
}

impl LinuxI2cBus {
    /// Open the given adapter device node and address the sensor slave.
    pub fn open(path: &str, slave_addr: u16) -> Result<Self> {
        let dev = LinuxI2CDevice::new(path, slave_addr)?;
        Ok(Self { dev })
    }
}

impl SensorBus for LinuxI2cBus {
    fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        self.dev.write(bytes)?;
        Ok(bytes.len())
    }

    fn write_read(&mut self, bytes: &[u8], into: &mut [u8]) -> Result<usize> {
        self.dev.write(bytes)?;
        self.dev.read(into)?;
        Ok(into.len())
    }
}
