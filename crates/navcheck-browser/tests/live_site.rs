//! Full verification run against the live playwright.dev home page
//!
//! Requires an installed Chrome/Chromium and network access, so it is
//! ignored by default. Run with:
//!
//! ```sh
//! cargo test -p navcheck-browser --test live_site -- --ignored
//! ```

use navcheck_browser::runner::{run_all, Scenario};
use navcheck_core::CheckConfig;

#[tokio::test]
#[ignore = "requires Chrome and network access"]
async fn all_scenarios_pass_against_live_site() {
    tracing_subscriber::fmt()
        .with_env_filter("navcheck_browser=debug")
        .try_init()
        .ok();

    let config = CheckConfig::default();
    let report = run_all(&Scenario::ALL, &config).await.expect("run failed");

    assert_eq!(report.scenarios.len(), 5);
    for scenario in &report.scenarios {
        for step in &scenario.steps {
            assert!(
                step.passed(),
                "scenario '{}' step '{}' failed: {:?}",
                scenario.scenario,
                step.step,
                step.status
            );
        }
    }
    assert!(report.passed());
}

#[tokio::test]
#[ignore = "requires Chrome and network access"]
async fn text_scenario_is_independent_of_theme_state() {
    // Theme toggling happens on its own session; running the theme scenario
    // first must not affect the text scenario's outcome.
    let config = CheckConfig::default();
    let report = run_all(&[Scenario::ThemeToggle, Scenario::Text], &config)
        .await
        .expect("run failed");

    let text = report
        .scenarios
        .iter()
        .find(|s| s.scenario == "text")
        .expect("text scenario missing");
    assert!(text.passed());
}
