// ov16a1q-rs/ov16a1q/src/sensor/builder.rs

use crate::power::{Clock, Delay, PowerSequencer, RegulatorBulk, ResetLine, RuntimePm, SystemDelay};
use crate::regmap::RegisterMap;
use crate::sensor::handle::Ov16a1q;
use crate::transport::SensorBus;
use crate::{Error, Result, modes};

/// Parsed board endpoint description. The physical lane count decides
/// which catalog mode the sensor runs for its entire bound lifetime.
#[derive(Debug, Clone, Copy)]
pub struct EndpointConfig {
    pub num_data_lanes: u32,
}

/// Collects the board resources and brings the sensor up.
///
/// Missing resources fail fast in acquisition order, naming what was
/// absent; identification happens after a synchronous power-on and
/// unwinds everything on mismatch.
pub struct SensorBuilder {
    bus: Option<Box<dyn SensorBus>>,
    clock: Option<Box<dyn Clock>>,
    reset: Option<Box<dyn ResetLine>>,
    supplies: Option<Box<dyn RegulatorBulk>>,
    delay: Option<Box<dyn Delay>>,
    endpoint: Option<EndpointConfig>,
}

impl SensorBuilder {
    pub fn new() -> Self {
        Self {
            bus: None,
            clock: None,
            reset: None,
            supplies: None,
            delay: None,
            endpoint: None,
        }
    }

    pub fn with_bus(mut self, bus: Box<dyn SensorBus>) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_reset_line(mut self, reset: Box<dyn ResetLine>) -> Self {
        self.reset = Some(reset);
        self
    }

    pub fn with_regulators(mut self, supplies: Box<dyn RegulatorBulk>) -> Self {
        self.supplies = Some(supplies);
        self
    }

    /// Override the settle-delay implementation. Defaults to blocking
    /// thread sleeps.
    pub fn with_delay(mut self, delay: Box<dyn Delay>) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_endpoint(mut self, endpoint: EndpointConfig) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Consume the builder, verify the hardware identity and return a
    /// bound sensor governed by runtime power management.
    pub fn probe(self) -> Result<Ov16a1q> {
        let bus = self.bus.ok_or(Error::MissingResource { resource: "i2c bus" })?;
        let clock = self.clock.ok_or(Error::MissingResource { resource: "xvclk" })?;
        let reset = self.reset.ok_or(Error::MissingResource {
            resource: "reset-gpio",
        })?;
        let supplies = self.supplies.ok_or(Error::MissingResource {
            resource: "regulators",
        })?;
        let endpoint = self.endpoint.ok_or(Error::MissingResource {
            resource: "endpoint",
        })?;
        let delay = self.delay.unwrap_or_else(|| Box::new(SystemDelay));

        let mode = modes::select_by_lane_count(endpoint.num_data_lanes)?;

        let regmap = RegisterMap::new(bus);
        let seq = PowerSequencer::new(clock, reset, supplies, delay);
        let pm = RuntimePm::new(seq);

        Ov16a1q::bind(regmap, pm, mode)
    }
}

impl Default for SensorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
