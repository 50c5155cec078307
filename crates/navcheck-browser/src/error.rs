//! Browser error types - re-exports the unified CheckError from navcheck-core
//!
//! Browser-layer failures use the Browser and Navigation variants; locator
//! resolution uses ElementNotFound and AmbiguousLocator. Expectation
//! mismatches never surface as errors; they are recorded as failed steps.

pub use navcheck_core::{CheckError, Result};
