//! Combinational control logic of the pump unit.
//!
//! This module is the pure core of the crate:
//! - `SensorSnapshot`: the six sensor readings of one cycle
//! - `evaluate`: sensor readings to actuator outputs
//! - `classify`: actuator outputs to a coarse `SystemState`
//!
//! Nothing here performs I/O, logs, or keeps state between calls.

mod actuators;
mod logic;
mod sensors;
mod state;

pub use actuators::{ActuatorError, ActuatorSnapshot, ACTUATOR_COUNT};
pub use logic::{classify, evaluate};
pub use sensors::{SensorError, SensorSnapshot, SENSOR_COUNT, SENSOR_STATES};
pub use state::SystemState;
