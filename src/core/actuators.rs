//! Actuator snapshot produced by one evaluation.

use super::logic::classify;
use super::state::SystemState;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of actuator channels in a snapshot.
pub const ACTUATOR_COUNT: usize = 6;

/// Errors raised when outputs could not have come from an evaluation.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ActuatorError {
    #[error("Inconsistent actuator outputs A1..A6 {0:?}")]
    Inconsistent([bool; ACTUATOR_COUNT]),
}

/// Outputs A1 through A6, fully determined by a
/// [`SensorSnapshot`](super::SensorSnapshot).
///
/// Values only come out of [`evaluate`](super::evaluate); there is no
/// public constructor. Deserialization rejects any combination of outputs
/// that `evaluate` cannot produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawActuators")]
#[non_exhaustive]
pub struct ActuatorSnapshot {
    /// A1: main power relay.
    pub relay: bool,
    /// A2: pump motor, follows the relay.
    pub motor: bool,
    /// A3: discharge valve, follows the relay.
    pub valve: bool,
    /// A4: status indicator LED.
    pub indicator_led: bool,
    /// A5: alarm buzzer.
    pub alarm_buzzer: bool,
    /// A6: digital display, always on.
    pub digital_display: bool,
}

/// Unchecked wire form of [`ActuatorSnapshot`].
#[derive(Deserialize)]
struct RawActuators {
    relay: bool,
    motor: bool,
    valve: bool,
    indicator_led: bool,
    alarm_buzzer: bool,
    digital_display: bool,
}

impl TryFrom<RawActuators> for ActuatorSnapshot {
    type Error = ActuatorError;

    fn try_from(raw: RawActuators) -> Result<Self, Self::Error> {
        let found = [
            raw.relay,
            raw.motor,
            raw.valve,
            raw.indicator_led,
            raw.alarm_buzzer,
            raw.digital_display,
        ];
        // A closed relay implies every alarm term is clear.
        let rebuilt = Self::from_outputs(raw.relay, raw.alarm_buzzer);
        if (raw.relay && raw.alarm_buzzer) || rebuilt.to_array() != found {
            return Err(ActuatorError::Inconsistent(found));
        }
        Ok(rebuilt)
    }
}

impl ActuatorSnapshot {
    pub(crate) const fn from_outputs(relay: bool, alarm_buzzer: bool) -> Self {
        Self {
            relay,
            motor: relay,
            valve: relay,
            indicator_led: relay || alarm_buzzer,
            alarm_buzzer,
            digital_display: true,
        }
    }

    /// Outputs in A1..A6 order.
    pub const fn to_array(self) -> [bool; ACTUATOR_COUNT] {
        [
            self.relay,
            self.motor,
            self.valve,
            self.indicator_led,
            self.alarm_buzzer,
            self.digital_display,
        ]
    }

    /// Classify these outputs. Shorthand for [`classify`].
    pub fn state(self) -> SystemState {
        classify(self)
    }
}
