//! Sequential scenario runner.

use crate::core::SystemState;
use crate::playback::error::PlaybackError;
use crate::playback::scenario::Scenario;
use crate::report::{ReportFormat, StatusReport};
use std::io::Write;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

/// A configured playback run. Create with
/// [`PlaybackBuilder`](crate::playback::PlaybackBuilder).
#[derive(Clone, Debug)]
pub struct Playback {
    pub(crate) scenarios: Vec<Scenario>,
    pub(crate) step_delay: Duration,
    pub(crate) format: ReportFormat,
}

impl Playback {
    /// Scenarios in playback order.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Pause between consecutive scenarios.
    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Format of the written reports.
    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Evaluate every scenario in order and write its report to `out`.
    ///
    /// Sleeps `step_delay` between scenarios, not after the last one.
    /// Returns the classified state of each scenario.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<SystemState>, PlaybackError> {
        info!(
            scenarios = self.scenarios.len(),
            format = ?self.format,
            "Starting scenario playback"
        );

        let mut states = Vec::with_capacity(self.scenarios.len());

        for (index, scenario) in self.scenarios.iter().enumerate() {
            if index > 0 && !self.step_delay.is_zero() {
                thread::sleep(self.step_delay);
            }

            let report = StatusReport::new(scenario.name.as_str(), scenario.sensors);
            debug!(
                scenario = %scenario.name,
                sensors = format_args!("{:06b}", scenario.sensors.bits()),
                state = report.state.name(),
                "Evaluated scenario"
            );
            if report.state.is_fault() {
                let causes: Vec<_> = report.faults.iter().map(|c| c.code()).collect();
                warn!(scenario = %scenario.name, ?causes, "Fault detected");
            }

            self.write_report(out, &report)?;
            states.push(report.state);
        }

        info!(scenarios = states.len(), "Scenario playback finished");
        Ok(states)
    }

    fn write_report<W: Write>(
        &self,
        out: &mut W,
        report: &StatusReport,
    ) -> Result<(), PlaybackError> {
        let rendered = report
            .render(self.format)
            .map_err(|source| PlaybackError::Serialization {
                scenario: report.scenario.clone(),
                source,
            })?;

        let io_err = |source: std::io::Error| PlaybackError::Io {
            scenario: report.scenario.clone(),
            source,
        };
        match self.format {
            ReportFormat::Text => writeln!(out, "\n{rendered}").map_err(io_err)?,
            ReportFormat::Json => writeln!(out, "{rendered}").map_err(io_err)?,
        }
        out.flush().map_err(io_err)
    }
}
