// ov16a1q-rs/ov16a1q/src/prelude.rs

pub use crate::controls::{Control, ControlHandler};
pub use crate::modes::{Mode, MODES};
pub use crate::power::{PowerState, RuntimePm, SystemDelay};
pub use crate::regmap::RegisterMap;
pub use crate::sensor::{EndpointConfig, Ov16a1q, SensorBuilder};
pub use crate::transport::{MockBus, SensorBus};
pub use crate::{
    ControlId, Error, Field, FormatWhich, FrameFormat, FrameSizeRange, MbusCode, Rect,
    RegisterEntry, Result, SelectionTarget, StreamState,
};

// Re-export small utilities for convenience
pub use crate::utils::format_frame;
