//! Status reports for one evaluation.
//!
//! A report bundles a scenario name with the sensor readings, the derived
//! outputs, the classified state and any fault causes. It renders either as
//! the operator console text or as JSON.

use crate::core::{evaluate, ActuatorSnapshot, SensorSnapshot, SystemState};
use crate::diagnostics::{fault_causes, FaultCause};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised when a deserialized report disagrees with its own sensors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("Report '{scenario}' outputs do not match its sensors")]
    ActuatorMismatch { scenario: String },

    #[error("Report '{scenario}' state {found:?} does not match its outputs (expected {expected:?})")]
    StateMismatch {
        scenario: String,
        expected: SystemState,
        found: SystemState,
    },

    #[error("Report '{scenario}' fault causes do not match its sensors")]
    FaultMismatch { scenario: String },
}

/// Output format for rendered reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    /// Console text: labeled 0/1 vectors and a state line
    #[default]
    Text,

    /// One JSON object per report
    Json,
}

/// One evaluated scenario.
///
/// # Example
///
/// ```rust
/// use pump_monitor::core::{SensorSnapshot, SystemState};
/// use pump_monitor::report::StatusReport;
///
/// let report = StatusReport::new("Normal Operation", SensorSnapshot::NOMINAL);
///
/// assert_eq!(report.state, SystemState::Normal);
/// assert!(report.to_string().contains("System State: NORMAL OPERATION"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawReport")]
pub struct StatusReport {
    /// Scenario description
    pub scenario: String,

    pub sensors: SensorSnapshot,

    pub actuators: ActuatorSnapshot,

    pub state: SystemState,

    /// Tripped alarm terms, empty unless `state` is `Fault`
    pub faults: Vec<FaultCause>,

    /// When the snapshot was evaluated
    pub evaluated_at: DateTime<Utc>,
}

/// Unchecked wire form of [`StatusReport`].
#[derive(Deserialize)]
struct RawReport {
    scenario: String,
    sensors: SensorSnapshot,
    actuators: ActuatorSnapshot,
    state: SystemState,
    faults: Vec<FaultCause>,
    evaluated_at: DateTime<Utc>,
}

impl TryFrom<RawReport> for StatusReport {
    type Error = ReportError;

    fn try_from(raw: RawReport) -> Result<Self, Self::Error> {
        let report = Self::at(raw.scenario, raw.sensors, raw.evaluated_at);

        if raw.actuators != report.actuators {
            return Err(ReportError::ActuatorMismatch {
                scenario: report.scenario,
            });
        }
        if raw.state != report.state {
            return Err(ReportError::StateMismatch {
                scenario: report.scenario,
                expected: report.state,
                found: raw.state,
            });
        }
        if raw.faults != report.faults {
            return Err(ReportError::FaultMismatch {
                scenario: report.scenario,
            });
        }
        Ok(report)
    }
}

impl StatusReport {
    /// Evaluate `sensors` now and build the report.
    pub fn new(scenario: impl Into<String>, sensors: SensorSnapshot) -> Self {
        Self::at(scenario, sensors, Utc::now())
    }

    /// Evaluate `sensors` with an explicit timestamp.
    pub fn at(
        scenario: impl Into<String>,
        sensors: SensorSnapshot,
        evaluated_at: DateTime<Utc>,
    ) -> Self {
        let actuators = evaluate(sensors);
        Self {
            scenario: scenario.into(),
            sensors,
            actuators,
            state: actuators.state(),
            faults: fault_causes(sensors),
            evaluated_at,
        }
    }

    /// Render in the requested format.
    pub fn render(&self, format: ReportFormat) -> Result<String, serde_json::Error> {
        match format {
            ReportFormat::Text => Ok(self.to_string()),
            ReportFormat::Json => serde_json::to_string(self),
        }
    }
}

fn write_bits(f: &mut fmt::Formatter<'_>, prefix: char, bits: &[bool]) -> fmt::Result {
    for (i, bit) in bits.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}{}:{}", prefix, i + 1, u8::from(*bit))?;
    }
    Ok(())
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- SCENARIO: {} ---", self.scenario)?;

        f.write_str("[INPUTS]  ")?;
        write_bits(f, 'S', &self.sensors.to_array())?;
        writeln!(f)?;

        f.write_str("[OUTPUTS] ")?;
        write_bits(f, 'A', &self.actuators.to_array())?;
        writeln!(f)?;

        write!(f, "System State: {}", self.state)?;

        if !self.faults.is_empty() {
            let causes: Vec<String> = self.faults.iter().map(ToString::to_string).collect();
            write!(f, "\nFaults: {}", causes.join("; "))?;
        }
        Ok(())
    }
}
