//! Fault diagnostics for the alarm buzzer.
//!
//! The alarm is a disjunction of five fault terms. Diagnostics evaluate each
//! term separately and use Stillwater's `Validation` to collect every term
//! that tripped, instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use pump_monitor::core::SensorSnapshot;
//! use pump_monitor::diagnostics::{fault_causes, FaultCause};
//!
//! let sensors = SensorSnapshot::new(true, false, true, true, true, false);
//!
//! assert_eq!(
//!     fault_causes(sensors),
//!     vec![FaultCause::LowPressure, FaultCause::Overheat]
//! );
//! ```

pub mod check;
pub mod faults;

pub use check::{diagnose, fault_causes, Diagnosis};
pub use faults::FaultCause;
