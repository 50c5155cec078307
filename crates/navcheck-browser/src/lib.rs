//! Browser automation for navcheck page verification
//!
//! This crate drives a Chrome/Chromium browser over the Chrome DevTools
//! Protocol (CDP) to evaluate the element registry from `navcheck-core`
//! against the live page.
//!
//! # Example
//!
//! ```no_run
//! use navcheck_browser::runner::{run_all, Scenario};
//! use navcheck_core::CheckConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CheckConfig::default();
//!     let report = run_all(&Scenario::ALL, &config).await?;
//!
//!     for scenario in &report.scenarios {
//!         println!("{}: {} failures", scenario.scenario, scenario.failure_count());
//!     }
//!     assert!(report.passed());
//!     Ok(())
//! }
//! ```
//!
//! # Requirements
//!
//! - Chrome or Chromium installed
//! - Network access to the configured base URL
//!
//! # Architecture
//!
//! - [`session`]: browser lifecycle and page evaluation
//! - [`resolve`]: locator resolution with bounded polling
//! - [`scenarios`]: the five verification procedures
//! - [`runner`]: one fresh session per scenario, aggregated into a run report

pub mod error;
pub mod resolve;
pub mod runner;
pub mod scenarios;
pub mod session;

// Re-export commonly used types
pub use error::{CheckError, Result};
pub use runner::{run_all, run_scenario, Scenario};
pub use session::BrowserSession;
