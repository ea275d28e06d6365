// ov16a1q-rs/ov16a1q/src/controls/mod.rs

//! Control graph: the tunable and reported sensor parameters, their
//! ranges, and the arena that owns them.
//!
//! Controls are owned by a [`ControlHandler`] and addressed by index, so
//! the device state never holds references back into the handler.

use crate::modes::{self, Mode};
use crate::types::ControlId;
use crate::{Error, Result, constants};

/// A single parameter with a range and a current value.
#[derive(Debug, Clone)]
pub struct Control {
    pub id: ControlId,
    pub min: i64,
    pub max: i64,
    pub step: u64,
    pub default: i64,
    pub read_only: bool,
    value: i64,
}

impl Control {
    pub fn new(id: ControlId, min: i64, max: i64, step: u64, default: i64) -> Self {
        Self {
            id,
            min,
            max,
            step,
            default,
            read_only: false,
            value: default,
        }
    }

    pub fn new_read_only(id: ControlId, min: i64, max: i64, step: u64, default: i64) -> Self {
        let mut ctrl = Self::new(id, min, max, step, default);
        ctrl.read_only = true;
        ctrl
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Store `val` clamped into the control's range; returns what was
    /// actually stored.
    pub fn set_clamped(&mut self, val: i64) -> i64 {
        self.value = val.clamp(self.min, self.max);
        self.value
    }

    /// Replace the allowed range and default, clamping the current value
    /// into the new range.
    pub fn modify_range(&mut self, min: i64, max: i64, step: u64, default: i64) {
        self.min = min;
        self.max = max;
        self.step = step;
        self.default = default;
        self.value = self.value.clamp(min, max);
    }
}

/// Arena owning the sensor's controls in creation order. Creation order
/// is also re-application order at stream start.
#[derive(Debug, Default)]
pub struct ControlHandler {
    controls: Vec<Control>,
}

impl ControlHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a control and return its stable index handle.
    pub fn add(&mut self, control: Control) -> usize {
        self.controls.push(control);
        self.controls.len() - 1
    }

    pub fn get(&self, index: usize) -> &Control {
        &self.controls[index]
    }

    pub fn get_mut(&mut self, index: usize) -> &mut Control {
        &mut self.controls[index]
    }

    pub fn find(&self, id: ControlId) -> Result<usize> {
        self.controls
            .iter()
            .position(|ctrl| ctrl.id == id)
            .ok_or(Error::UnknownControl(id))
    }

    /// Controls in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Control> {
        self.controls.iter()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

/// Index handles for the controls the driver touches after creation.
#[derive(Debug, Clone, Copy)]
pub struct ControlIndexes {
    pub link_freq: usize,
    pub pixel_rate: usize,
    pub hblank: usize,
    pub vblank: usize,
    pub exposure: usize,
    pub gain: usize,
}

/// Build the control graph for `mode` per the sensor's timing model:
/// link frequency and horizontal blank are fixed read-only values,
/// vertical blank and exposure are writable with mode-derived ranges,
/// analogue gain has fixed limits.
pub fn init_from_mode(mode: &Mode) -> (ControlHandler, ControlIndexes) {
    let mut handler = ControlHandler::new();

    let link = i64::try_from(mode.link_freq).unwrap_or(i64::MAX);
    let link_freq = handler.add(Control::new_read_only(
        ControlId::LinkFreq,
        link,
        link,
        1,
        link,
    ));

    let rate = i64::try_from(modes::pixel_rate(mode)).unwrap_or(i64::MAX);
    let pixel_rate = handler.add(Control::new_read_only(
        ControlId::PixelRate,
        0,
        rate,
        1,
        rate,
    ));

    let (h_blank, v_blank) = modes::blanking(mode);
    let hblank = handler.add(Control::new_read_only(
        ControlId::HBlank,
        i64::from(h_blank),
        i64::from(h_blank),
        1,
        i64::from(h_blank),
    ));

    let vblank = handler.add(Control::new(
        ControlId::VBlank,
        i64::from(v_blank),
        i64::from(0xffff - mode.height),
        1,
        i64::from(v_blank),
    ));

    let exposure_max = i64::from(mode.vts - 4);
    let exposure = handler.add(Control::new(
        ControlId::Exposure,
        0,
        exposure_max,
        1,
        exposure_max,
    ));

    let gain = handler.add(Control::new(
        ControlId::AnalogGain,
        constants::ANALOG_GAIN_MIN,
        constants::ANALOG_GAIN_MAX,
        1,
        constants::ANALOG_GAIN_DEFAULT,
    ));

    (
        handler,
        ControlIndexes {
            link_freq,
            pixel_rate,
            hblank,
            vblank,
            exposure,
            gain,
        },
    )
}
