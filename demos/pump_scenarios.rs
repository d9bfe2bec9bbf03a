//! Pump Scenario Playback
//!
//! Plays the seven scripted pump scenarios with a one second pause between
//! them, printing the console report for each. Sensor vectors given on the
//! command line replace the scripted scenarios; invalid ones are skipped.
//!
//! Key concepts:
//! - Pure evaluation inside an imperative playback shell
//! - Custom scenarios parsed from the command line
//! - Structured logging via `RUST_LOG`
//!
//! Run with: cargo run --example pump_scenarios
//! Or:       cargo run --example pump_scenarios -- 111100 0,1,1,1,0,0
//! Logs:     RUST_LOG=pump_monitor=debug cargo run --example pump_scenarios

use pump_monitor::input::parse_sensors;
use pump_monitor::playback::{PlaybackBuilder, Scenario};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("======================================================");
    println!("  Industrial Pump Monitoring System: Scenario Playback ");
    println!("======================================================");

    let mut builder = PlaybackBuilder::new().step_delay(Duration::from_secs(1));

    for arg in std::env::args().skip(1) {
        match parse_sensors(&arg) {
            Ok(sensors) => {
                builder = builder.scenario(Scenario::new(format!("Custom {arg}"), sensors));
            }
            Err(e) => eprintln!("Skipping '{arg}': {e}"),
        }
    }

    let playback = builder.build();
    let mut stdout = std::io::stdout().lock();

    match playback.run(&mut stdout) {
        Ok(states) => {
            let faults = states.iter().filter(|s| s.is_fault()).count();
            println!("\n======================================================");
            println!("Playback finished: {} scenarios, {} faults", states.len(), faults);
        }
        Err(e) => {
            eprintln!("Playback failed: {e}");
            std::process::exit(1);
        }
    }
}
