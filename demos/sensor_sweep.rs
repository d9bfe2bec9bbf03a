//! Sensor Sweep
//!
//! Evaluates all 64 sensor combinations and prints a truth table with the
//! classified state and fault causes of each row.
//!
//! Run with: cargo run --example sensor_sweep

use pump_monitor::core::{SensorSnapshot, SystemState};
use pump_monitor::diagnostics::fault_causes;

fn main() {
    println!("S1..S6  A1..A6  State    Causes");
    println!("------  ------  -------  ------");

    let mut counts = [0usize; 3];

    for sensors in SensorSnapshot::all() {
        let actuators = sensors.evaluate();
        let state = actuators.state();
        let outputs: String = actuators
            .to_array()
            .iter()
            .map(|b| if *b { '1' } else { '0' })
            .collect();
        let causes: Vec<_> = fault_causes(sensors).iter().map(|c| c.code()).collect();

        counts[match state {
            SystemState::Normal => 0,
            SystemState::Fault => 1,
            SystemState::Standby => 2,
        }] += 1;

        println!(
            "{:06b}  {}  {:<7}  {}",
            sensors.bits(),
            outputs,
            state.name(),
            causes.join(",")
        );
    }

    println!(
        "\nNormal: {}  Fault: {}  Standby: {}",
        counts[0], counts[1], counts[2]
    );
}
