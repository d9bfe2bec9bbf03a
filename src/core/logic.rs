//! The decision function and the state classifier.
//!
//! Both functions are total, deterministic and free of side effects. They
//! hold no state, so any number of threads may call them concurrently.

use super::actuators::ActuatorSnapshot;
use super::sensors::SensorSnapshot;
use super::state::SystemState;

/// Derive the actuator outputs for one sensor snapshot.
///
/// - `relay = current && pressure && level && flow && !temperature && !vibration`
/// - `motor = valve = relay`
/// - `alarm_buzzer = !pressure || !level || !flow || temperature || vibration`
/// - `indicator_led = relay || alarm_buzzer`
/// - `digital_display = true`
///
/// The alarm does not look at `current`. With no supply current and every
/// other reading nominal, relay and alarm are both off.
///
/// # Example
///
/// ```rust
/// use pump_monitor::core::{evaluate, SensorSnapshot};
///
/// let low_pressure = SensorSnapshot::new(true, false, true, true, false, false);
/// let outputs = evaluate(low_pressure);
///
/// assert!(!outputs.relay);
/// assert!(outputs.alarm_buzzer);
/// assert!(outputs.indicator_led);
/// ```
pub fn evaluate(sensors: SensorSnapshot) -> ActuatorSnapshot {
    let SensorSnapshot {
        current,
        pressure,
        level,
        flow,
        temperature,
        vibration,
    } = sensors;

    let relay = current && pressure && level && flow && !temperature && !vibration;
    let alarm_buzzer = !pressure || !level || !flow || temperature || vibration;

    ActuatorSnapshot::from_outputs(relay, alarm_buzzer)
}

/// Classify actuator outputs: relay wins, then alarm, otherwise standby.
pub fn classify(actuators: ActuatorSnapshot) -> SystemState {
    if actuators.relay {
        SystemState::Normal
    } else if actuators.alarm_buzzer {
        SystemState::Fault
    } else {
        SystemState::Standby
    }
}

impl SensorSnapshot {
    /// Shorthand for [`evaluate`].
    pub fn evaluate(self) -> ActuatorSnapshot {
        evaluate(self)
    }
}
