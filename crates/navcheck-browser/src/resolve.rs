//! Locator resolution with bounded polling
//!
//! Every expectation check waits for the page to reach the expected state
//! within the configured timeout before failing; the wait lives here, not
//! in the scenario procedures.

use crate::error::{CheckError, Result};
use crate::session::BrowserSession;
use navcheck_core::locator::{AttributeProbe, ElementInfo, Locator, ProbeResult};
use std::time::Instant;
use tracing::debug;

/// Result of waiting for an attribute to settle on an expected value
#[derive(Debug, Clone)]
pub struct AttributeWait {
    /// Attribute reached the expected value within the timeout
    pub matched: bool,
    /// Last observed value (None when the attribute was absent)
    pub last: Option<String>,
}

/// Resolve a locator to its unique element, polling until the match is
/// unique or the timeout elapses
///
/// # Errors
/// `ElementNotFound` when the rule never matched anything,
/// `AmbiguousLocator` when the last poll matched more than one element.
pub async fn resolve(
    session: &BrowserSession,
    name: &str,
    locator: &Locator,
) -> Result<ElementInfo> {
    let deadline = Instant::now() + session.config().timeout();
    let script = locator.probe_js();

    loop {
        let probe = probe_once(session, &script).await?;

        if probe.count == 1 {
            if let Some(element) = probe.element {
                debug!("Resolved '{}' (visible: {})", name, element.visible);
                return Ok(element);
            }
        }

        if Instant::now() >= deadline {
            debug!("Resolution of '{}' timed out with {} matches", name, probe.count);
            return Err(if probe.count == 0 {
                CheckError::ElementNotFound {
                    name: name.to_string(),
                }
            } else {
                CheckError::AmbiguousLocator {
                    name: name.to_string(),
                    count: probe.count,
                }
            });
        }

        tokio::time::sleep(session.config().poll_interval()).await;
    }
}

/// Click the unique element the locator resolves to
pub async fn click(session: &BrowserSession, name: &str, locator: &Locator) -> Result<()> {
    // Confirm uniqueness first so a miss is reported as a resolution
    // failure, not a silent no-op click
    resolve(session, name, locator).await?;

    let raw = session.evaluate_probe(&locator.click_js()).await?;
    let probe: ProbeResult = serde_json::from_str(&raw)?;

    match probe.count {
        1 => {
            debug!("Clicked '{}'", name);
            Ok(())
        }
        0 => Err(CheckError::ElementNotFound {
            name: name.to_string(),
        }),
        count => Err(CheckError::AmbiguousLocator {
            name: name.to_string(),
            count,
        }),
    }
}

/// Poll an attribute on the locator's unique element until it equals
/// `expected` or the timeout elapses; never errors on a mismatch
pub async fn wait_for_attribute(
    session: &BrowserSession,
    name: &str,
    locator: &Locator,
    attribute: &str,
    expected: &str,
) -> Result<AttributeWait> {
    let deadline = Instant::now() + session.config().timeout();
    let script = locator.attribute_js(attribute);
    let mut last: Option<String> = None;

    loop {
        let raw = session.evaluate_probe(&script).await?;
        let probe: AttributeProbe = serde_json::from_str(&raw)?;

        if probe.count == 1 {
            last = probe.value;
            if last.as_deref() == Some(expected) {
                debug!("Attribute {}='{}' settled on '{}'", attribute, expected, name);
                return Ok(AttributeWait {
                    matched: true,
                    last,
                });
            }
        } else if Instant::now() >= deadline {
            return Err(if probe.count == 0 {
                CheckError::ElementNotFound {
                    name: name.to_string(),
                }
            } else {
                CheckError::AmbiguousLocator {
                    name: name.to_string(),
                    count: probe.count,
                }
            });
        }

        if Instant::now() >= deadline {
            debug!(
                "Attribute {} on '{}' did not settle: expected '{}', last '{:?}'",
                attribute, name, expected, last
            );
            return Ok(AttributeWait {
                matched: false,
                last,
            });
        }

        tokio::time::sleep(session.config().poll_interval()).await;
    }
}

async fn probe_once(session: &BrowserSession, script: &str) -> Result<ProbeResult> {
    let raw = session.evaluate_probe(script).await?;
    Ok(serde_json::from_str(&raw)?)
}
