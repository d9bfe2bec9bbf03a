//! Coarse system-state classification.
//!
//! The state is a pure derivation of one actuator snapshot. It carries no
//! history: the same outputs always classify to the same state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating state of the pump unit.
///
/// # Example
///
/// ```rust
/// use pump_monitor::core::SystemState;
///
/// assert_eq!(SystemState::Fault.name(), "Fault");
/// assert_eq!(SystemState::Fault.label(), "FAULT DETECTED");
/// assert!(SystemState::Fault.is_fault());
/// assert!(!SystemState::Standby.is_fault());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemState {
    /// Relay closed, pump running.
    Normal,
    /// Alarm raised by at least one fault condition.
    Fault,
    /// Relay open with no alarm: supply current absent, everything else nominal.
    Standby,
}

impl SystemState {
    /// Variant name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Fault => "Fault",
            Self::Standby => "Standby",
        }
    }

    /// Operator-facing label shown on the console.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL OPERATION",
            Self::Fault => "FAULT DETECTED",
            Self::Standby => "STANDBY/OFF",
        }
    }

    /// True only for `Fault`; standby is not a fault.
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Fault)
    }
}

impl fmt::Display for SystemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
