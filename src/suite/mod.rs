//! Acceptance suite for the calculator page
//!
//! [`SuiteRunner`] drives every [`Scenario`] against one shared
//! [`BrowserSession`]. A failing scenario is recorded (with a screenshot when
//! one can be taken) and the run moves on to the next one.

pub mod check;
pub mod config;
pub mod scenarios;

pub use config::SuiteConfig;
pub use scenarios::Scenario;

use crate::{browser::BrowserSession,
            error::Result,
            page::CalculatorPage,
            report::{ScenarioOutcome, ScenarioReport, SuiteReport}};
use std::time::{Duration, Instant};

pub struct SuiteRunner {
    config: SuiteConfig,
    scenarios: Vec<Scenario>,
}

impl SuiteRunner {
    /// Runner over every scenario
    pub fn new(config: SuiteConfig) -> Self {
        Self {
            config,
            scenarios: scenarios::all(),
        }
    }

    /// Keep only scenarios whose name contains `pattern`
    pub fn filter(mut self, pattern: &str) -> Self {
        self.scenarios.retain(|s| s.name.contains(pattern));
        self
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Run the scenarios in order against `session`
    pub fn run(&self, session: &BrowserSession) -> Result<SuiteReport> {
        let page = CalculatorPage::open(session, &self.config.page)?
            .with_lookup_wait(self.config.lookup_wait())
            .with_result_wait(self.config.result_wait())
            .with_ready_wait(self.config.ready_wait());

        let mut report = SuiteReport::new(page.url());
        let suite_start = Instant::now();

        for scenario in &self.scenarios {
            log::info!("Running {}", scenario.name);
            let start = Instant::now();
            let result = scenario.run(&page, &self.config);
            let duration = start.elapsed();

            let (outcome, screenshot) = match result {
                Ok(()) => {
                    log::info!("{} passed in {:?}", scenario.name, duration);
                    (ScenarioOutcome::Passed, None)
                }
                Err(e) => {
                    log::warn!("{} failed: {}", scenario.name, e);
                    let screenshot = session
                        .screenshot()
                        .inspect_err(|err| log::debug!("No screenshot for {}: {}", scenario.name, err))
                        .ok();
                    (ScenarioOutcome::Failed { error: e.to_string() }, screenshot)
                }
            };

            report.push(ScenarioReport {
                name: scenario.name.to_string(),
                description: scenario.description.to_string(),
                duration_ms: millis(duration),
                outcome,
                screenshot,
            });
        }

        report.duration_ms = millis(suite_start.elapsed());
        log::info!("{} passed, {} failed", report.passed(), report.failed());
        Ok(report)
    }
}

/// Whole milliseconds, saturating at `u64::MAX`
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_millis(1500)), 1500);
        assert_eq!(millis(Duration::from_micros(999)), 0);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }

    #[test]
    fn test_runner_has_all_scenarios() {
        let runner = SuiteRunner::new(SuiteConfig::default());
        assert_eq!(runner.scenarios().len(), scenarios::all().len());
    }

    #[test]
    fn test_filter_by_name() {
        let runner = SuiteRunner::new(SuiteConfig::default()).filter("numbers");
        let names: Vec<_> = runner.scenarios().iter().map(|s| s.name).collect();

        assert_eq!(names, vec!["decimal_numbers", "negative_numbers"]);
    }

    #[test]
    fn test_filter_without_match() {
        let runner = SuiteRunner::new(SuiteConfig::default()).filter("nonexistent");
        assert!(runner.scenarios().is_empty());
    }
}
