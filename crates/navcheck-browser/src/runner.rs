//! Scenario runner: one fresh session per scenario
//!
//! Scenarios are independent; each gets its own browser session navigated
//! to the configured base URL before its steps run, so no scenario can
//! depend on side effects of another. A navigation failure is recorded as
//! that scenario's single failed step (its dependent steps are never
//! attempted); a browser launch failure is a setup error and propagates.

use crate::error::{CheckError, Result};
use crate::scenarios;
use crate::session::BrowserSession;
use navcheck_core::descriptor::home_page_elements;
use navcheck_core::report::{FailureKind, RunReport, ScenarioReport, StepOutcome};
use navcheck_core::CheckConfig;
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

/// One of the five verification scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Visibility,
    Text,
    LinkTargets,
    ThemeToggle,
    HeroHeading,
}

impl Scenario {
    /// Every scenario, in run order
    pub const ALL: [Scenario; 5] = [
        Scenario::Visibility,
        Scenario::Text,
        Scenario::LinkTargets,
        Scenario::ThemeToggle,
        Scenario::HeroHeading,
    ];

    /// Stable name used in reports and CLI filters
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Visibility => "visibility",
            Scenario::Text => "text",
            Scenario::LinkTargets => "links",
            Scenario::ThemeToggle => "theme",
            Scenario::HeroHeading => "hero",
        }
    }

    /// Human-readable description for report rendering
    pub fn title(&self) -> &'static str {
        match self {
            Scenario::Visibility => "Header navigation element visibility",
            Scenario::Text => "Header navigation element text",
            Scenario::LinkTargets => "Header navigation link targets",
            Scenario::ThemeToggle => "Dark/light theme toggle",
            Scenario::HeroHeading => "Hero heading",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name() == s)
            .ok_or_else(|| {
                CheckError::Config(format!(
                    "Unknown scenario '{}' (expected one of: visibility, text, links, theme, hero)",
                    s
                ))
            })
    }
}

/// Run a single scenario on a fresh browser session
pub async fn run_scenario(scenario: Scenario, config: &CheckConfig) -> Result<ScenarioReport> {
    info!("Running scenario '{}'", scenario.name());

    let session = BrowserSession::launch_with_config(config.clone()).await?;
    let mut report = ScenarioReport::new(scenario.name());

    if let Err(err) = session.navigate(&config.base_url).await {
        warn!("Navigation failed for scenario '{}': {}", scenario.name(), err);
        report.record(StepOutcome::fail(
            "navigate",
            FailureKind::Navigation,
            Some(config.base_url.clone()),
            Some(err.to_string()),
        ));
        return Ok(report);
    }

    let elements = home_page_elements();
    match scenario {
        Scenario::Visibility => scenarios::visibility(&session, &elements, &mut report).await,
        Scenario::Text => scenarios::text(&session, &elements, &mut report).await,
        Scenario::LinkTargets => scenarios::link_targets(&session, &elements, &mut report).await,
        Scenario::ThemeToggle => scenarios::theme_toggle(&session, &mut report).await,
        Scenario::HeroHeading => scenarios::hero_heading(&session, &mut report).await,
    }

    session.close().await?;

    info!(
        "Scenario '{}' finished: {}/{} steps passed",
        scenario.name(),
        report.steps.len() - report.failure_count(),
        report.steps.len()
    );
    Ok(report)
}

/// Run the given scenarios in order, each on its own session
pub async fn run_all(scenarios: &[Scenario], config: &CheckConfig) -> Result<RunReport> {
    let mut run = RunReport::new(&config.base_url);

    for scenario in scenarios {
        let report = run_scenario(*scenario, config).await?;
        run.add_scenario(report);
    }

    Ok(run)
}
