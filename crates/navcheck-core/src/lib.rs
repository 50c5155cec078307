//! # navcheck-core
//!
//! Core types for the navcheck page verification tool.
//!
//! Everything here is plain data and logic with no browser dependency:
//!
//! - [`descriptor`]: the element registry, a static ordered table of
//!   descriptors naming the page elements to verify and their expected
//!   text/link targets
//! - [`locator`]: locator rules (role + accessible name) and the JavaScript
//!   probes that interpret them in a live page
//! - [`report`]: per-step, per-scenario, and per-run result types
//! - [`config`]: runtime configuration loaded from TOML
//! - [`error`]: unified error type for all navcheck operations
//!
//! The descriptor table is constructed once per process and read-only for
//! the process lifetime. The browser-facing half of the tool lives in
//! `navcheck-browser`.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod locator;
pub mod report;

pub use config::CheckConfig;
pub use descriptor::{
    home_page_elements, ElementDescriptor, BASE_URL, HERO_HEADING_PREFIX, HERO_HEADING_SUBSTRING,
    THEME_ATTRIBUTE, THEME_SWITCH_NAME,
};
pub use error::{CheckError, Result};
pub use locator::{ElementInfo, Locator, ProbeResult, Role};
pub use report::{FailureKind, RunReport, ScenarioReport, StepOutcome, StepStatus};
