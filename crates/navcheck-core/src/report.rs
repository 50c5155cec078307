//! Step, scenario, and run result types
//!
//! Every named step independently records its own outcome; a failed step
//! carries the failure kind plus expected vs. observed values so the report
//! is actionable without re-running anything.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What went wrong in a failed step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    /// Locator matched zero elements
    ElementNotFound,
    /// Locator matched more than one element
    AmbiguousLocator,
    /// Element resolved but is not visible
    NotVisible,
    /// Element text differs from the expected value
    TextMismatch,
    /// Attribute value differs from the expected value
    AttributeMismatch,
    /// Initial page load did not complete
    Navigation,
    /// Browser-level failure while evaluating the step
    Browser,
}

/// Outcome of a single named step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepStatus {
    Passed,
    Failed {
        kind: FailureKind,
        /// Expected value, where the check compares values
        expected: Option<String>,
        /// Observed value, where one could be read
        actual: Option<String>,
    },
}

/// One named step within a scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Step label, derived from the descriptor name
    pub step: String,
    pub status: StepStatus,
}

impl StepOutcome {
    pub fn pass(step: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            status: StepStatus::Passed,
        }
    }

    pub fn fail(
        step: impl Into<String>,
        kind: FailureKind,
        expected: Option<String>,
        actual: Option<String>,
    ) -> Self {
        Self {
            step: step.into(),
            status: StepStatus::Failed {
                kind,
                expected,
                actual,
            },
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self.status, StepStatus::Passed)
    }
}

/// All step outcomes for one scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Scenario label
    pub scenario: String,
    pub started_at: DateTime<Utc>,
    pub steps: Vec<StepOutcome>,
}

impl ScenarioReport {
    pub fn new(scenario: impl Into<String>) -> Self {
        Self {
            scenario: scenario.into(),
            started_at: Utc::now(),
            steps: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: StepOutcome) {
        self.steps.push(outcome);
    }

    /// True when every recorded step passed
    pub fn passed(&self) -> bool {
        self.steps.iter().all(StepOutcome::passed)
    }

    pub fn failure_count(&self) -> usize {
        self.steps.iter().filter(|s| !s.passed()).count()
    }
}

/// Aggregate result of one verification run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Page the run was pointed at
    pub base_url: String,
    pub started_at: DateTime<Utc>,
    pub scenarios: Vec<ScenarioReport>,
}

impl RunReport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            started_at: Utc::now(),
            scenarios: Vec::new(),
        }
    }

    pub fn add_scenario(&mut self, report: ScenarioReport) {
        self.scenarios.push(report);
    }

    /// True when every step of every scenario passed
    pub fn passed(&self) -> bool {
        self.scenarios.iter().all(ScenarioReport::passed)
    }

    pub fn total_steps(&self) -> usize {
        self.scenarios.iter().map(|s| s.steps.len()).sum()
    }

    pub fn failed_steps(&self) -> usize {
        self.scenarios.iter().map(ScenarioReport::failure_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scenario_passes() {
        let report = ScenarioReport::new("text");
        assert!(report.passed());
        assert_eq!(report.failure_count(), 0);
    }

    #[test]
    fn test_failure_is_isolated_to_its_step() {
        let mut report = ScenarioReport::new("visibility");
        report.record(StepOutcome::pass("Docs"));
        report.record(StepOutcome::fail(
            "API",
            FailureKind::ElementNotFound,
            None,
            None,
        ));
        report.record(StepOutcome::pass("Community"));

        assert!(!report.passed());
        assert_eq!(report.failure_count(), 1);
        assert!(report.steps[0].passed());
        assert!(!report.steps[1].passed());
        assert!(report.steps[2].passed());
    }

    #[test]
    fn test_run_aggregation() {
        let mut run = RunReport::new("https://playwright.dev/");
        let mut ok = ScenarioReport::new("text");
        ok.record(StepOutcome::pass("Docs"));
        run.add_scenario(ok);
        assert!(run.passed());

        let mut bad = ScenarioReport::new("links");
        bad.record(StepOutcome::fail(
            "Docs",
            FailureKind::AttributeMismatch,
            Some("/docs/intro".to_string()),
            Some("/docs".to_string()),
        ));
        run.add_scenario(bad);

        assert!(!run.passed());
        assert_eq!(run.total_steps(), 2);
        assert_eq!(run.failed_steps(), 1);
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let mut report = ScenarioReport::new("theme");
        report.record(StepOutcome::fail(
            "toggle to light",
            FailureKind::AttributeMismatch,
            Some("light".to_string()),
            Some("dark".to_string()),
        ));

        let json = serde_json::to_string(&report).unwrap();
        let back: ScenarioReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.scenario, "theme");
        match &back.steps[0].status {
            StepStatus::Failed {
                kind,
                expected,
                actual,
            } => {
                assert_eq!(*kind, FailureKind::AttributeMismatch);
                assert_eq!(expected.as_deref(), Some("light"));
                assert_eq!(actual.as_deref(), Some("dark"));
            }
            StepStatus::Passed => panic!("expected failed step"),
        }
    }
}
