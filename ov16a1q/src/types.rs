// ov16a1q-rs/ov16a1q/src/types.rs

use derive_more::Display;

/// One register programming step: a 16-bit address and the value written
/// to it. Register tables are ordered; later entries may override earlier
/// entries at the same address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterEntry {
    pub address: u16,
    pub value: u32,
}

impl RegisterEntry {
    pub const fn new(address: u16, value: u32) -> Self {
        Self { address, value }
    }
}

/// Media bus pixel format produced by the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MbusCode {
    /// 10-bit Bayer, BGGR order, one sample per clock (SBGGR10_1X10).
    Sbggr10,
}

impl MbusCode {
    /// Numeric media-bus code as used on the wire by the host pipeline.
    pub fn code(&self) -> u32 {
        match self {
            MbusCode::Sbggr10 => 0x3007,
        }
    }
}

/// Field order of the produced frames. The sensor is progressive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    #[default]
    None,
}

/// Crop/selection rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// Active frame format negotiated with the host pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameFormat {
    pub width: u32,
    pub height: u32,
    pub code: MbusCode,
    pub field: Field,
}

/// Result of a frame-size enumeration query. The sensor exposes discrete
/// sizes, so min and max are equal per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSizeRange {
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
}

/// Which selection rectangle a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTarget {
    Crop,
    NativeSize,
    CropDefault,
    CropBounds,
}

/// Whether a format negotiation is a trial (no device mutation) or sets
/// the active configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatWhich {
    Try,
    Active,
}

/// Streaming state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamState {
    #[default]
    Stopped,
    Starting,
    Streaming,
    Stopping,
}

/// Identifiers for the tunable and reported sensor parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ControlId {
    LinkFreq,
    PixelRate,
    HBlank,
    VBlank,
    Exposure,
    AnalogGain,
}
