//! Builder API for configuring scenario playback.

use crate::playback::runner::Playback;
use crate::playback::scenario::Scenario;
use crate::report::ReportFormat;
use std::time::Duration;

/// Builder for creating a playback run
pub struct PlaybackBuilder {
    scenarios: Option<Vec<Scenario>>,
    step_delay: Duration,
    format: ReportFormat,
}

impl PlaybackBuilder {
    pub fn new() -> Self {
        Self {
            scenarios: None,
            step_delay: Duration::ZERO,
            format: ReportFormat::Text,
        }
    }

    /// Replace the built-in catalogue
    pub fn scenarios(mut self, scenarios: Vec<Scenario>) -> Self {
        self.scenarios = Some(scenarios);
        self
    }

    /// Append one scenario (starting from an empty list)
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenarios.get_or_insert_with(Vec::new).push(scenario);
        self
    }

    /// Pause between consecutive scenarios
    pub fn step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Set report format
    pub fn format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Build the playback, defaulting to [`Scenario::catalogue`]
    pub fn build(self) -> Playback {
        Playback {
            scenarios: self.scenarios.unwrap_or_else(Scenario::catalogue),
            step_delay: self.step_delay,
            format: self.format,
        }
    }
}

impl Default for PlaybackBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SensorSnapshot;

    #[test]
    fn defaults_to_catalogue_without_delay() {
        let playback = PlaybackBuilder::new().build();

        assert_eq!(playback.scenarios(), Scenario::catalogue().as_slice());
        assert_eq!(playback.step_delay(), Duration::ZERO);
        assert_eq!(playback.format(), ReportFormat::Text);
    }

    #[test]
    fn scenario_appends_to_empty_list() {
        let playback = PlaybackBuilder::new()
            .scenario(Scenario::new("Nominal", SensorSnapshot::NOMINAL))
            .scenario(Scenario::new("Dead", SensorSnapshot::default()))
            .build();

        let names: Vec<_> = playback.scenarios().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Nominal", "Dead"]);
    }

    #[test]
    fn settings_are_stored() {
        let playback = PlaybackBuilder::default()
            .step_delay(Duration::from_millis(250))
            .format(ReportFormat::Json)
            .scenarios(Vec::new())
            .build();

        assert!(playback.scenarios().is_empty());
        assert_eq!(playback.step_delay(), Duration::from_millis(250));
        assert_eq!(playback.format(), ReportFormat::Json);
    }
}
