// ov16a1q-rs/ov16a1q/src/constants.rs
//! Register addresses, identity constants and timing windows shared
//! across the crate.

use std::time::Duration;

/// Chip ID register (2 bytes, big-endian).
pub const REG_CHIP_ID: u16 = 0x300b;

/// Expected chip ID readback for the OV16A1Q.
pub const CHIP_ID: u32 = 0x1641;

/// Stream on/off register: 1 starts streaming, 0 stops it.
pub const REG_STREAM: u16 = 0x0100;

/// Exposure register, written as a 3-byte value.
pub const REG_EXPOSURE: u16 = 0x3500;

/// Analogue gain register, written as a 2-byte value.
pub const REG_ANALOG_GAIN: u16 = 0x3508;

/// Frame length (VTS) register, written as a 2-byte value of
/// `height + vblank`.
pub const REG_VTS: u16 = 0x380e;

/// Analogue gain limits and default.
pub const ANALOG_GAIN_MIN: i64 = 128;
pub const ANALOG_GAIN_MAX: i64 = 1984;
pub const ANALOG_GAIN_DEFAULT: i64 = 128;

/// Named voltage rails the sensor requires, in bulk-enable order.
pub const SUPPLY_NAMES: [&str; 3] = ["vana", "vdig", "vio"];

/// Settle window after enabling the external clock.
pub const CLOCK_SETTLE_MIN: Duration = Duration::from_micros(2000);
pub const CLOCK_SETTLE_MAX: Duration = Duration::from_micros(3000);

/// Settle window after deasserting the reset line.
pub const RESET_SETTLE_MIN: Duration = Duration::from_micros(1000);
pub const RESET_SETTLE_MAX: Duration = Duration::from_micros(2000);

/// Settle windows used while powering the sensor down.
pub const POWER_OFF_SETTLE_MIN: Duration = Duration::from_micros(2000);
pub const POWER_OFF_SETTLE_MAX: Duration = Duration::from_micros(3000);

/// Idle time before the runtime-power layer physically powers the sensor
/// down, so rapid stream start/stop cycles do not thrash the rails.
pub const AUTOSUSPEND_DELAY: Duration = Duration::from_millis(1000);
