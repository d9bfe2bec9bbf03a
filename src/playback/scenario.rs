//! Named sensor scenarios.

use crate::core::SensorSnapshot;
use serde::{Deserialize, Serialize};

/// A named sensor snapshot to play back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub sensors: SensorSnapshot,
}

impl Scenario {
    pub fn new(name: impl Into<String>, sensors: SensorSnapshot) -> Self {
        Self {
            name: name.into(),
            sensors,
        }
    }

    /// The seven scripted scenarios of the pump monitoring demo, in order.
    ///
    /// One nominal run, one scenario per alarm term, and the supply-loss
    /// case that lands in standby.
    pub fn catalogue() -> Vec<Scenario> {
        vec![
            Self::new("Normal Operation", SensorSnapshot::NOMINAL),
            Self::new(
                "Low/Over Pressure",
                SensorSnapshot::new(true, false, true, true, false, false),
            ),
            Self::new(
                "Low Water Level",
                SensorSnapshot::new(true, true, false, true, false, false),
            ),
            Self::new(
                "No Flow (Dry Run)",
                SensorSnapshot::new(true, true, true, false, false, false),
            ),
            Self::new(
                "Motor Overheat",
                SensorSnapshot::new(true, true, true, true, true, false),
            ),
            Self::new(
                "Abnormal Vibration",
                SensorSnapshot::new(true, true, true, true, false, true),
            ),
            Self::new(
                "Inactive Current (System Shut Down)",
                SensorSnapshot::new(false, true, true, true, false, false),
            ),
        ]
    }
}
