//! Property-based tests for the pump control logic.
//!
//! The input domain is only 64 snapshots, so the exhaustive checks walk all
//! of them; proptest covers the parsing and bit-packing surfaces.

use proptest::prelude::*;
use pump_monitor::core::{classify, evaluate, SensorSnapshot, SystemState};
use pump_monitor::diagnostics::{diagnose, fault_causes};
use pump_monitor::input::parse_sensors;

prop_compose! {
    fn arbitrary_sensors()(bits in prop::array::uniform6(any::<bool>())) -> SensorSnapshot {
        SensorSnapshot::from_array(bits)
    }
}

#[test]
fn evaluate_is_total_over_every_input() {
    let evaluated: Vec<_> = SensorSnapshot::all().map(evaluate).collect();
    assert_eq!(evaluated.len(), 64);
}

#[test]
fn reference_scenarios_hold() {
    let normal = evaluate(SensorSnapshot::new(true, true, true, true, false, false));
    assert_eq!(
        normal.to_array(),
        [true, true, true, true, false, true]
    );
    assert_eq!(classify(normal), SystemState::Normal);

    let low_pressure = evaluate(SensorSnapshot::new(true, false, true, true, false, false));
    assert_eq!(
        low_pressure.to_array(),
        [false, false, false, true, true, true]
    );
    assert_eq!(classify(low_pressure), SystemState::Fault);

    let overheat = evaluate(SensorSnapshot::new(true, true, true, true, true, false));
    assert!(!overheat.relay);
    assert!(overheat.alarm_buzzer);
    assert!(overheat.indicator_led);
    assert_eq!(classify(overheat), SystemState::Fault);

    let standby = evaluate(SensorSnapshot::new(false, true, true, true, false, false));
    assert!(!standby.relay);
    assert!(!standby.alarm_buzzer);
    assert_eq!(classify(standby), SystemState::Standby);
}

#[test]
fn state_counts_over_full_cube() {
    let mut normal = 0;
    let mut fault = 0;
    let mut standby = 0;
    for sensors in SensorSnapshot::all() {
        match classify(evaluate(sensors)) {
            SystemState::Normal => normal += 1,
            SystemState::Fault => fault += 1,
            SystemState::Standby => standby += 1,
        }
    }
    assert_eq!((normal, fault, standby), (1, 62, 1));
}

#[test]
fn concurrent_evaluation_matches_sequential() {
    let sequential: Vec<_> = SensorSnapshot::all().map(evaluate).collect();

    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = SensorSnapshot::all()
            .map(|sensors| scope.spawn(move || evaluate(sensors)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(sequential, parallel);
}

proptest! {
    #[test]
    fn evaluate_is_deterministic(sensors in arbitrary_sensors()) {
        prop_assert_eq!(evaluate(sensors), evaluate(sensors));
    }

    #[test]
    fn display_is_always_on(sensors in arbitrary_sensors()) {
        prop_assert!(evaluate(sensors).digital_display);
    }

    #[test]
    fn motor_and_valve_follow_relay(sensors in arbitrary_sensors()) {
        let actuators = evaluate(sensors);
        prop_assert_eq!(actuators.motor, actuators.relay);
        prop_assert_eq!(actuators.valve, actuators.relay);
    }

    #[test]
    fn relay_and_alarm_are_exclusive_with_current(
        sensors in arbitrary_sensors().prop_map(|s| SensorSnapshot { current: true, ..s })
    ) {
        let actuators = evaluate(sensors);
        prop_assert!(!(actuators.relay && actuators.alarm_buzzer));
        prop_assert!(actuators.relay || actuators.alarm_buzzer);
    }

    #[test]
    fn indicator_is_relay_or_alarm(sensors in arbitrary_sensors()) {
        let actuators = evaluate(sensors);
        prop_assert_eq!(actuators.indicator_led, actuators.relay || actuators.alarm_buzzer);
    }

    #[test]
    fn indicator_is_dark_only_in_standby(sensors in arbitrary_sensors()) {
        let actuators = evaluate(sensors);
        prop_assert_eq!(!actuators.indicator_led, classify(actuators) == SystemState::Standby);
    }

    #[test]
    fn diagnosis_fails_exactly_on_alarm(sensors in arbitrary_sensors()) {
        let actuators = evaluate(sensors);
        prop_assert_eq!(diagnose(sensors).is_failure(), actuators.alarm_buzzer);
        prop_assert_eq!(!fault_causes(sensors).is_empty(), classify(actuators).is_fault());
    }

    #[test]
    fn bits_roundtrip(bits in 0u8..64) {
        let sensors = SensorSnapshot::from_bits(bits).unwrap();
        prop_assert_eq!(sensors.bits(), bits);
    }

    #[test]
    fn out_of_range_bits_are_rejected(bits in 64u8..=u8::MAX) {
        prop_assert!(SensorSnapshot::from_bits(bits).is_err());
    }

    #[test]
    fn comma_separated_text_parses_back(sensors in arbitrary_sensors()) {
        let text = sensors
            .to_array()
            .iter()
            .map(|b| if *b { "1" } else { "0" })
            .collect::<Vec<_>>()
            .join(",");
        prop_assert_eq!(parse_sensors(&text).unwrap(), sensors);
    }

    #[test]
    fn text_with_foreign_characters_is_rejected(text in "[0-1]{0,5}[a-z2-9][0-1]{0,5}") {
        prop_assert!(parse_sensors(&text).is_err());
    }
}
