//! Scenario playback: the imperative shell around the pure core.
//!
//! Playback feeds named sensor snapshots through `evaluate` and `classify`,
//! writes a status report for each to any `io::Write`, and optionally pauses
//! between steps. It logs through `tracing`; install a subscriber to see it.
//!
//! # Example
//!
//! ```rust
//! use pump_monitor::core::SystemState;
//! use pump_monitor::playback::PlaybackBuilder;
//! use pump_monitor::report::ReportFormat;
//!
//! let playback = PlaybackBuilder::new().format(ReportFormat::Text).build();
//!
//! let mut out = Vec::new();
//! let states = playback.run(&mut out).unwrap();
//!
//! assert_eq!(states.first(), Some(&SystemState::Normal));
//! assert_eq!(states.last(), Some(&SystemState::Standby));
//! ```

pub mod builder;
pub mod error;
pub mod runner;
pub mod scenario;

pub use builder::PlaybackBuilder;
pub use error::PlaybackError;
pub use runner::Playback;
pub use scenario::Scenario;
