//! Pump Monitor: combinational control logic for an industrial pump unit
//!
//! Six boolean sensor readings go in; six boolean actuator outputs and a
//! coarse system state come out. The decision function is pure and
//! memoryless: every call is independent and every one of the 64 possible
//! inputs has a defined output.
//!
//! # Modules
//!
//! - **core**: `SensorSnapshot`, `evaluate`, `classify` (the pure core)
//! - **diagnostics**: which fault conditions tripped the alarm
//! - **input**: parsing of textual sensor vectors
//! - **report**: console and JSON rendering of one evaluation
//! - **playback**: running named scenarios with an optional step delay
//!
//! # Example
//!
//! ```rust
//! use pump_monitor::core::{classify, evaluate, SensorSnapshot, SystemState};
//!
//! let sensors: SensorSnapshot = "0,1,1,1,0,0".parse().unwrap();
//! let actuators = evaluate(sensors);
//!
//! assert!(!actuators.relay);
//! assert!(!actuators.alarm_buzzer);
//! assert!(actuators.digital_display);
//! assert_eq!(classify(actuators), SystemState::Standby);
//! ```

pub mod core;
pub mod diagnostics;
pub mod input;
pub mod playback;
pub mod report;

// Re-export commonly used types
pub use self::core::{classify, evaluate, ActuatorSnapshot, SensorSnapshot, SystemState};
pub use diagnostics::FaultCause;
