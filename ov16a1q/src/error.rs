// ov16a1q-rs/ov16a1q/src/error.rs

use thiserror::Error;

use crate::types::ControlId;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("missing resource: {resource}")]
    MissingResource { resource: &'static str },

    // 実機バスを後から有効化できるように optional dependency にしている
    #[cfg(feature = "linux-i2c")]
    #[error("i2c bus error: {0}")]
    Bus(#[from] i2cdev::linux::LinuxI2CError),

    #[error("i2c transfer failed for register {address:#06x}")]
    Io { address: u16 },

    #[error("invalid register access width: {actual} (must be 1..=4)")]
    InvalidAccessWidth { actual: u16 },

    #[error("failed to enable clock: {0}")]
    Clock(String),

    #[error("failed to enable regulators: {0}")]
    Regulator(String),

    #[error("unsupported number of data lanes: {0}")]
    UnsupportedLaneCount(u32),

    #[error("chip ID mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChipIdMismatch { expected: u32, actual: u32 },

    #[error("invalid mode {width}x{height}: {reason}")]
    InvalidMode {
        width: u32,
        height: u32,
        reason: &'static str,
    },

    #[error("control {0} is read-only")]
    ReadOnlyControl(ControlId),

    #[error("unknown control: {0}")]
    UnknownControl(ControlId),

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
