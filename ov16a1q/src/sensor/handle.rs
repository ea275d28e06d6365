// ov16a1q-rs/ov16a1q/src/sensor/handle.rs

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{error, info, warn};

use crate::constants::{
    AUTOSUSPEND_DELAY, CHIP_ID, REG_ANALOG_GAIN, REG_CHIP_ID, REG_EXPOSURE, REG_STREAM, REG_VTS,
};
use crate::controls::{ControlHandler, ControlIndexes, init_from_mode};
use crate::modes::{self, Mode, tables};
use crate::power::{PowerState, RuntimePm};
use crate::regmap::RegisterMap;
use crate::types::{
    ControlId, Field, FormatWhich, FrameFormat, FrameSizeRange, MbusCode, Rect, SelectionTarget,
    StreamState,
};
use crate::{Error, Result};

/// A bound OV16A1Q sensor.
///
/// All mutable state sits behind one exclusive lock, so stream
/// transitions, format negotiation and control writes never interleave.
pub struct Ov16a1q {
    inner: Mutex<Inner>,
}

impl core::fmt::Debug for Ov16a1q {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ov16a1q").finish_non_exhaustive()
    }
}

struct Inner {
    regmap: RegisterMap,
    pm: RuntimePm,
    mode: &'static Mode,
    ctrls: ControlHandler,
    idx: ControlIndexes,
    fmt: FrameFormat,
    crop: Rect,
    stream: StreamState,
}

impl Ov16a1q {
    /// Bind-time bring-up: initialize the control graph for the selected
    /// mode, power on synchronously, verify the chip identity and hand
    /// power governance to the autosuspend policy.
    pub(crate) fn bind(regmap: RegisterMap, pm: RuntimePm, mode: &'static Mode) -> Result<Self> {
        let (ctrls, idx) = init_from_mode(mode);

        let mut inner = Inner {
            regmap,
            pm,
            mode,
            ctrls,
            idx,
            fmt: FrameFormat {
                width: mode.width,
                height: mode.height,
                code: mode.mbus_code,
                field: Field::None,
            },
            crop: Rect {
                left: 0,
                top: 0,
                width: mode.width,
                height: mode.height,
            },
            stream: StreamState::Stopped,
        };

        inner.pm.power_on_sync()?;
        inner.pm.set_active();
        inner.pm.get_noresume();
        inner.pm.enable();

        if let Err(err) = inner.check_sensor_id() {
            inner.pm.disable();
            inner.pm.put_noidle();
            inner.pm.force_suspend();
            return Err(err);
        }

        inner.pm.set_autosuspend_delay(AUTOSUSPEND_DELAY);
        info!("registered ov16a1q with parent pipeline");

        inner.pm.mark_last_busy();
        inner.pm.put_autosuspend();

        Ok(Self {
            inner: Mutex::new(inner),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start or stop streaming. Starting plays the common and
    /// mode-specific register tables, re-applies the current control
    /// values in creation order and writes the stream-enable register;
    /// any failure releases the power reference and surfaces the first
    /// error. Stopping is best-effort. Redundant requests are no-ops.
    pub fn set_stream(&self, on: bool) -> Result<()> {
        let mut inner = self.lock();

        if on {
            if inner.stream == StreamState::Streaming {
                return Ok(());
            }
            inner.stream = StreamState::Starting;

            if let Err(err) = inner.pm.resume_and_get() {
                inner.stream = StreamState::Stopped;
                return Err(err);
            }

            if let Err(err) = inner.start_stream() {
                error!("failed to start streaming");
                inner.pm.put_sync();
                inner.stream = StreamState::Stopped;
                return Err(err);
            }

            inner.stream = StreamState::Streaming;
        } else {
            if inner.stream != StreamState::Streaming {
                return Ok(());
            }
            inner.stream = StreamState::Stopping;
            inner.stop_stream();
            inner.pm.put_autosuspend();
            inner.stream = StreamState::Stopped;
        }

        Ok(())
    }

    /// Set a writable control. The value is clamped into the control's
    /// range; a vertical-blank write recomputes the exposure ceiling
    /// before anything reaches the bus. Hardware is only touched while
    /// the device holds an active power reference.
    pub fn set_ctrl(&self, id: ControlId, val: i64) -> Result<()> {
        let mut inner = self.lock();

        let index = inner.ctrls.find(id)?;
        if inner.ctrls.get(index).read_only {
            return Err(Error::ReadOnlyControl(id));
        }

        let stored = inner.store_ctrl(index, val);
        inner.apply_ctrl_hw(id, stored)
    }

    /// Current value of a control.
    pub fn ctrl(&self, id: ControlId) -> Result<i64> {
        let inner = self.lock();
        let index = inner.ctrls.find(id)?;
        Ok(inner.ctrls.get(index).value())
    }

    /// Allowed range of a control.
    pub fn ctrl_range(&self, id: ControlId) -> Result<(i64, i64)> {
        let inner = self.lock();
        let index = inner.ctrls.find(id)?;
        let ctrl = inner.ctrls.get(index);
        Ok((ctrl.min, ctrl.max))
    }

    /// Negotiate a frame format. `Try` only computes what the sensor
    /// would produce; `Active` selects the nearest mode and re-derives
    /// the dependent control ranges.
    pub fn set_format(&self, requested: FrameFormat, which: FormatWhich) -> Result<FrameFormat> {
        let mut inner = self.lock();

        let mode = modes::find_nearest(requested.width, requested.height);
        let negotiated = FrameFormat {
            width: mode.width,
            height: mode.height,
            code: mode.mbus_code,
            field: Field::None,
        };

        if which == FormatWhich::Active {
            inner.set_active_mode(mode)?;
        }

        Ok(negotiated)
    }

    /// The active frame format.
    pub fn format(&self) -> FrameFormat {
        self.lock().fmt
    }

    /// Enumerate the produced media bus codes.
    pub fn enum_mbus_code(&self, index: usize) -> Result<MbusCode> {
        if index != 0 {
            return Err(Error::InvalidArgument("mbus code index out of range"));
        }
        Ok(self.lock().mode.mbus_code)
    }

    /// Enumerate the discrete frame sizes for `code`.
    pub fn enum_frame_sizes(&self, index: usize, code: MbusCode) -> Result<FrameSizeRange> {
        let mode = modes::MODES
            .get(index)
            .ok_or(Error::InvalidArgument("frame size index out of range"))?;
        if code != mode.mbus_code {
            return Err(Error::InvalidArgument("mbus code does not match mode"));
        }
        Ok(FrameSizeRange {
            min_width: mode.width,
            max_width: mode.width,
            min_height: mode.height,
            max_height: mode.height,
        })
    }

    /// Selection rectangles. Everything except the live crop reports the
    /// full active array of the current mode.
    pub fn selection(&self, target: SelectionTarget) -> Rect {
        let inner = self.lock();
        match target {
            SelectionTarget::Crop => inner.crop,
            SelectionTarget::NativeSize
            | SelectionTarget::CropDefault
            | SelectionTarget::CropBounds => Rect {
                left: 0,
                top: 0,
                width: inner.mode.width,
                height: inner.mode.height,
            },
        }
    }

    /// Current streaming state.
    pub fn stream_state(&self) -> StreamState {
        self.lock().stream
    }

    /// Current runtime power state.
    pub fn power_state(&self) -> PowerState {
        self.lock().pm.state()
    }

    /// Evaluate the autosuspend policy; powers the sensor down when it
    /// has been idle past the configured delay.
    pub fn maybe_autosuspend(&self) -> bool {
        self.lock().pm.maybe_autosuspend()
    }

    /// Unbind: stop honoring power references and power off
    /// unconditionally unless already suspended.
    pub fn shutdown(&self) {
        let mut inner = self.lock();
        info!("unregistering ov16a1q");
        inner.stream = StreamState::Stopped;
        inner.pm.disable();
        inner.pm.force_suspend();
    }
}

impl Inner {
    fn check_sensor_id(&mut self) -> Result<()> {
        let id = self.regmap.read(REG_CHIP_ID, 2)?;
        if id != CHIP_ID {
            error!("chip ID mismatch: expected {CHIP_ID:#06x}, got {id:#06x}");
            return Err(Error::ChipIdMismatch {
                expected: CHIP_ID,
                actual: id,
            });
        }
        info!("detected ov16a1q sensor");
        Ok(())
    }

    /// Store a control value (clamped) and propagate the vertical-blank
    /// dependency: the exposure ceiling tracks `height + vblank - 2`,
    /// and the exposure value is moved onto the new ceiling. This
    /// bookkeeping is unconditional; it does not depend on power state.
    fn store_ctrl(&mut self, index: usize, val: i64) -> i64 {
        let stored = self.ctrls.get_mut(index).set_clamped(val);

        if self.ctrls.get(index).id == ControlId::VBlank {
            let exposure_max = i64::from(self.mode.height) + stored - 2;
            let exposure = self.ctrls.get(self.idx.exposure);
            let (min, step) = (exposure.min, exposure.step);
            let exposure = self.ctrls.get_mut(self.idx.exposure);
            exposure.modify_range(min, exposure_max, step, exposure_max);
            exposure.set_clamped(exposure_max);
        }

        stored
    }

    /// Push an accepted control value to the hardware, but only while
    /// the device is power-active; writing a suspended device is
    /// meaningless, not an error.
    fn apply_ctrl_hw(&mut self, id: ControlId, val: i64) -> Result<()> {
        if !self.pm.get_if_in_use() {
            return Ok(());
        }

        let ret = match id {
            ControlId::Exposure => self.regmap.write(REG_EXPOSURE, 3, val as u32),
            ControlId::AnalogGain => self.regmap.write(REG_ANALOG_GAIN, 2, val as u32),
            ControlId::VBlank => {
                self.regmap
                    .write(REG_VTS, 2, self.mode.height + val as u32)
            }
            _ => {
                warn!("unhandled control id: {id}");
                Ok(())
            }
        };

        self.pm.put();
        ret
    }

    /// Re-apply every writable control in creation order.
    fn apply_controls(&mut self) -> Result<()> {
        for index in 0..self.ctrls.len() {
            let ctrl = self.ctrls.get(index);
            if ctrl.read_only {
                continue;
            }
            let (id, val) = (ctrl.id, ctrl.value());
            self.apply_ctrl_hw(id, val)?;
        }
        Ok(())
    }

    fn start_stream(&mut self) -> Result<()> {
        self.regmap.play(tables::COMMON_REGS)?;
        self.regmap.play(self.mode.regs)?;
        self.apply_controls()?;
        self.regmap.write(REG_STREAM, 1, 0x01)?;
        Ok(())
    }

    fn stop_stream(&mut self) {
        if let Err(err) = self.regmap.write(REG_STREAM, 1, 0x00) {
            warn!("failed to stop streaming: {err}");
        }
    }

    /// Make `mode` the active mode and re-derive everything that hangs
    /// off it: pixel rate, blanking ranges, default format and crop.
    fn set_active_mode(&mut self, mode: &'static Mode) -> Result<()> {
        self.mode = mode;
        self.fmt = FrameFormat {
            width: mode.width,
            height: mode.height,
            code: mode.mbus_code,
            field: Field::None,
        };
        self.crop = Rect {
            left: 0,
            top: 0,
            width: mode.width,
            height: mode.height,
        };

        let rate = i64::try_from(modes::pixel_rate(mode)).unwrap_or(i64::MAX);
        let pixel_rate = self.ctrls.get_mut(self.idx.pixel_rate);
        pixel_rate.modify_range(0, rate, 1, rate);
        pixel_rate.set_clamped(rate);

        let (h_blank, v_blank) = modes::blanking(mode);
        let hblank = self.ctrls.get_mut(self.idx.hblank);
        hblank.modify_range(i64::from(h_blank), i64::from(h_blank), 1, i64::from(h_blank));

        let vblank = self.ctrls.get_mut(self.idx.vblank);
        vblank.modify_range(
            i64::from(v_blank),
            i64::from(0xffff - mode.height),
            1,
            i64::from(v_blank),
        );

        // Setting vblank to its new default propagates the exposure
        // dependency and reaches the hardware when powered.
        let stored = self.store_ctrl(self.idx.vblank, i64::from(v_blank));
        self.apply_ctrl_hw(ControlId::VBlank, stored)
    }
}
