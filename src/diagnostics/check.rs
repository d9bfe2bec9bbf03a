//! Fault diagnosis using Validation.

use crate::core::SensorSnapshot;
use crate::diagnostics::faults::FaultCause;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of a diagnosis: success when healthy, otherwise every fault cause.
pub type Diagnosis = Validation<(), NonEmptyVec<FaultCause>>;

fn check(tripped: bool, cause: FaultCause) -> Diagnosis {
    if tripped {
        Validation::fail(cause)
    } else {
        Validation::success(())
    }
}

/// Check every alarm term, accumulating ALL tripped causes.
///
/// Fails exactly when [`evaluate`](crate::core::evaluate) would sound the
/// alarm buzzer. Supply current is not an alarm term, so a snapshot whose
/// only problem is missing current diagnoses as healthy.
pub fn diagnose(sensors: SensorSnapshot) -> Diagnosis {
    let checks = vec![
        check(!sensors.pressure, FaultCause::LowPressure),
        check(!sensors.level, FaultCause::LowLevel),
        check(!sensors.flow, FaultCause::NoFlow),
        check(sensors.temperature, FaultCause::Overheat),
        check(sensors.vibration, FaultCause::AbnormalVibration),
    ];

    Validation::all_vec(checks).map(|_| ())
}

/// Tripped causes as a plain list, empty when healthy.
pub fn fault_causes(sensors: SensorSnapshot) -> Vec<FaultCause> {
    match diagnose(sensors) {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(causes) => causes.iter().copied().collect(),
    }
}
