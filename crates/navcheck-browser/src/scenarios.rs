//! The five verification procedures
//!
//! Each procedure evaluates one category of expectation against an
//! already-navigated session and records one named step per check. Steps in
//! the registry-driven procedures are independent: a failure in one is
//! recorded and the next descriptor is still evaluated. The theme-toggle
//! procedure is the exception: its clicks and assertions strictly
//! alternate, so a failed step stops the sequence (later toggles would
//! assert against a desynchronized state).

use crate::error::CheckError;
use crate::resolve::{click, resolve, wait_for_attribute};
use crate::session::BrowserSession;
use navcheck_core::descriptor::{
    ElementDescriptor, HERO_HEADING_PREFIX, HERO_HEADING_SUBSTRING, THEME_ATTRIBUTE,
    THEME_SWITCH_NAME,
};
use navcheck_core::locator::Locator;
use navcheck_core::report::{FailureKind, ScenarioReport, StepOutcome};
use tracing::{debug, info};

/// Check that every registered element is visible, in registry order
pub async fn visibility(
    session: &BrowserSession,
    elements: &[ElementDescriptor],
    report: &mut ScenarioReport,
) {
    for descriptor in elements {
        let outcome = match resolve(session, &descriptor.name, &descriptor.locator).await {
            Ok(element) if element.visible => StepOutcome::pass(&descriptor.name),
            Ok(_) => StepOutcome::fail(
                &descriptor.name,
                FailureKind::NotVisible,
                Some("visible".to_string()),
                Some("hidden".to_string()),
            ),
            Err(err) => resolution_failure(&descriptor.name, err, None),
        };
        log_step(&outcome);
        report.record(outcome);
    }
}

/// Check exact text for every descriptor that declares an expectation;
/// descriptors without one are skipped, not reported
pub async fn text(
    session: &BrowserSession,
    elements: &[ElementDescriptor],
    report: &mut ScenarioReport,
) {
    for (descriptor, expected) in with_expected_text(elements) {
        let outcome = match resolve(session, &descriptor.name, &descriptor.locator).await {
            Ok(element) if element.text == expected => StepOutcome::pass(&descriptor.name),
            Ok(element) => StepOutcome::fail(
                &descriptor.name,
                FailureKind::TextMismatch,
                Some(expected.to_string()),
                Some(element.text),
            ),
            Err(err) => resolution_failure(&descriptor.name, err, Some(expected.to_string())),
        };
        log_step(&outcome);
        report.record(outcome);
    }
}

/// Check the exact `href` attribute for every descriptor that declares one
pub async fn link_targets(
    session: &BrowserSession,
    elements: &[ElementDescriptor],
    report: &mut ScenarioReport,
) {
    for (descriptor, expected) in with_expected_href(elements) {
        let outcome = match resolve(session, &descriptor.name, &descriptor.locator).await {
            Ok(element) if element.href.as_deref() == Some(expected) => {
                StepOutcome::pass(&descriptor.name)
            }
            Ok(element) => StepOutcome::fail(
                &descriptor.name,
                FailureKind::AttributeMismatch,
                Some(expected.to_string()),
                element.href,
            ),
            Err(err) => resolution_failure(&descriptor.name, err, Some(expected.to_string())),
        };
        log_step(&outcome);
        report.record(outcome);
    }
}

/// Toggle the theme three times, asserting the settled root attribute after
/// every click: dark start → light → dark → light
pub async fn theme_toggle(session: &BrowserSession, report: &mut ScenarioReport) {
    let switch = Locator::button(THEME_SWITCH_NAME);
    let root = Locator::DocumentRoot;

    let sequence = [
        ("switch to light mode", "light"),
        ("switch back to dark mode", "dark"),
        ("switch to light mode again", "light"),
    ];

    for (step, expected_theme) in sequence {
        if let Err(err) = click(session, THEME_SWITCH_NAME, &switch).await {
            let outcome = resolution_failure(step, err, Some(expected_theme.to_string()));
            log_step(&outcome);
            report.record(outcome);
            return;
        }

        let outcome = match wait_for_attribute(
            session,
            "document root",
            &root,
            THEME_ATTRIBUTE,
            expected_theme,
        )
        .await
        {
            Ok(wait) if wait.matched => StepOutcome::pass(step),
            Ok(wait) => StepOutcome::fail(
                step,
                FailureKind::AttributeMismatch,
                Some(expected_theme.to_string()),
                wait.last,
            ),
            Err(err) => resolution_failure(step, err, Some(expected_theme.to_string())),
        };

        let failed = !outcome.passed();
        log_step(&outcome);
        report.record(outcome);
        if failed {
            return;
        }
    }
}

/// Check the hero heading: visible, and text contains the fixed sentence
/// (containment, not equality; trailing content is tolerated)
pub async fn hero_heading(session: &BrowserSession, report: &mut ScenarioReport) {
    let locator = Locator::heading_prefix(HERO_HEADING_PREFIX);

    let element = match resolve(session, "hero heading", &locator).await {
        Ok(element) => element,
        Err(err) => {
            let outcome = resolution_failure("hero heading visible", err, None);
            log_step(&outcome);
            report.record(outcome);
            return;
        }
    };

    let visible = if element.visible {
        StepOutcome::pass("hero heading visible")
    } else {
        StepOutcome::fail(
            "hero heading visible",
            FailureKind::NotVisible,
            Some("visible".to_string()),
            Some("hidden".to_string()),
        )
    };
    log_step(&visible);
    report.record(visible);

    let text = if element.text.contains(HERO_HEADING_SUBSTRING) {
        StepOutcome::pass("hero heading text")
    } else {
        StepOutcome::fail(
            "hero heading text",
            FailureKind::TextMismatch,
            Some(format!("contains \"{}\"", HERO_HEADING_SUBSTRING)),
            Some(element.text),
        )
    };
    log_step(&text);
    report.record(text);
}

/// Descriptors participating in the text scenario
fn with_expected_text(
    elements: &[ElementDescriptor],
) -> impl Iterator<Item = (&ElementDescriptor, &str)> {
    elements
        .iter()
        .filter_map(|d| d.expected_text.as_deref().map(|t| (d, t)))
}

/// Descriptors participating in the link-target scenario
fn with_expected_href(
    elements: &[ElementDescriptor],
) -> impl Iterator<Item = (&ElementDescriptor, &str)> {
    elements
        .iter()
        .filter_map(|d| d.expected_href.as_deref().map(|h| (d, h)))
}

/// Turn a resolution error into a failed step without aborting siblings
fn resolution_failure(step: &str, err: CheckError, expected: Option<String>) -> StepOutcome {
    match err {
        CheckError::ElementNotFound { .. } => {
            StepOutcome::fail(step, FailureKind::ElementNotFound, expected, None)
        }
        CheckError::AmbiguousLocator { count, .. } => StepOutcome::fail(
            step,
            FailureKind::AmbiguousLocator,
            expected,
            Some(format!("{} matches", count)),
        ),
        other => StepOutcome::fail(
            step,
            FailureKind::Browser,
            expected,
            Some(other.to_string()),
        ),
    }
}

fn log_step(outcome: &StepOutcome) {
    if outcome.passed() {
        info!("Step passed: {}", outcome.step);
    } else {
        info!("Step failed: {} ({:?})", outcome.step, outcome.status);
        debug!("{:?}", outcome);
    }
}
