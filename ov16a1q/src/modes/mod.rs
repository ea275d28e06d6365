// ov16a1q-rs/ov16a1q/src/modes/mod.rs

//! Static catalog of supported sensor modes and the timing parameters
//! derived from them.

pub mod tables;

use crate::types::{MbusCode, RegisterEntry};
use crate::{Error, Result};

/// Lane counts the sensor's MIPI interface can drive.
pub const SUPPORTED_LANE_COUNTS: [u32; 3] = [1, 2, 4];

/// A supported resolution/timing/format configuration. Modes are
/// compile-time constants; exactly one becomes the active mode of a bound
/// sensor, selected by the physical lane count of the board.
#[derive(Debug)]
pub struct Mode {
    pub width: u32,
    pub height: u32,
    /// Horizontal total (line length) in pixels, >= width.
    pub hts: u32,
    /// Vertical total (frame length) in lines, >= height.
    pub vts: u32,
    /// Per-lane link frequency in Hz.
    pub link_freq: u64,
    pub lane_count: u32,
    /// Bits per pixel sample.
    pub depth: u32,
    /// Mode-specific register overlay, applied after the common table.
    pub regs: &'static [RegisterEntry],
    pub mbus_code: MbusCode,
}

/// All modes the driver knows about.
pub static MODES: &[Mode] = &[Mode {
    width: 2304,
    height: 1728,
    hts: 2550,
    vts: 3920,
    link_freq: 180_000_000,
    lane_count: 4,
    depth: 10,
    regs: tables::MODE_2304X1728_4LANE_REGS,
    mbus_code: MbusCode::Sbggr10,
}];

/// Pick the first catalog mode whose lane count matches the board's
/// physical lane count exactly.
pub fn select_by_lane_count(lane_count: u32) -> Result<&'static Mode> {
    MODES
        .iter()
        .find(|mode| mode.lane_count == lane_count)
        .ok_or(Error::UnsupportedLaneCount(lane_count))
}

/// Pixel rate in pixels per second: `link_freq * 2 * lanes / depth`,
/// computed in 64-bit to avoid overflow.
pub fn pixel_rate(mode: &Mode) -> u64 {
    mode.link_freq * 2 * u64::from(mode.lane_count) / u64::from(mode.depth)
}

/// Horizontal and vertical blanking derived from the mode totals.
pub fn blanking(mode: &Mode) -> (u32, u32) {
    (mode.hts - mode.width, mode.vts - mode.height)
}

/// Validate a mode's invariants. The static catalog holds by
/// construction; a dynamically loaded catalog must call this before use.
pub fn validate(mode: &Mode) -> Result<()> {
    if mode.hts < mode.width {
        return Err(Error::InvalidMode {
            width: mode.width,
            height: mode.height,
            reason: "hts smaller than width",
        });
    }
    if mode.vts < mode.height {
        return Err(Error::InvalidMode {
            width: mode.width,
            height: mode.height,
            reason: "vts smaller than height",
        });
    }
    if !SUPPORTED_LANE_COUNTS.contains(&mode.lane_count) {
        return Err(Error::InvalidMode {
            width: mode.width,
            height: mode.height,
            reason: "unsupported lane count",
        });
    }
    Ok(())
}

/// Catalog entry closest to the requested size, by summed axis distance.
pub fn find_nearest(width: u32, height: u32) -> &'static Mode {
    let distance = |mode: &Mode| {
        u64::from(mode.width.abs_diff(width)) + u64::from(mode.height.abs_diff(height))
    };
    MODES
        .iter()
        .min_by_key(|mode| distance(mode))
        .unwrap_or(&MODES[0])
}
