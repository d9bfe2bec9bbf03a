//! Fault causes behind the alarm buzzer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One term of the alarm condition.
///
/// Variants are declared in sensor order (S2..S6), which is also the order
/// in which diagnostics report them.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaultCause {
    #[error("Pressure out of range (S2 off)")]
    LowPressure,

    #[error("Water level low (S3 off)")]
    LowLevel,

    #[error("No flow, dry run risk (S4 off)")]
    NoFlow,

    #[error("Motor overheat (S5 on)")]
    Overheat,

    #[error("Abnormal vibration (S6 on)")]
    AbnormalVibration,
}

impl FaultCause {
    /// Every cause, in reporting order.
    pub const ALL: [FaultCause; 5] = [
        Self::LowPressure,
        Self::LowLevel,
        Self::NoFlow,
        Self::Overheat,
        Self::AbnormalVibration,
    ];

    /// Short identifier for logs and compact reports.
    pub fn code(&self) -> &'static str {
        match self {
            Self::LowPressure => "low_pressure",
            Self::LowLevel => "low_level",
            Self::NoFlow => "no_flow",
            Self::Overheat => "overheat",
            Self::AbnormalVibration => "abnormal_vibration",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        let codes: std::collections::HashSet<_> =
            FaultCause::ALL.iter().map(FaultCause::code).collect();
        assert_eq!(codes.len(), FaultCause::ALL.len());
    }

    #[test]
    fn display_names_the_sensor() {
        assert_eq!(
            FaultCause::Overheat.to_string(),
            "Motor overheat (S5 on)"
        );
        assert_eq!(
            FaultCause::LowPressure.to_string(),
            "Pressure out of range (S2 off)"
        );
    }
}
