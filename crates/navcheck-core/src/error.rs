//! Unified error types for navcheck

use thiserror::Error;

/// Unified error type for all navcheck operations
///
/// Expectation mismatches (wrong text, wrong href, element not visible) are
/// deliberately NOT errors: they are recorded as failed steps in the report
/// so that one mismatch cannot abort sibling steps. Only failures that make
/// a step impossible to evaluate (browser trouble, resolution failures) or
/// setup failures (config, launch) surface here.
#[derive(Error, Debug)]
pub enum CheckError {
    // Browser errors
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    // Locator resolution errors
    #[error("Element not found: {name}")]
    ElementNotFound { name: String },

    #[error("Locator for '{name}' matched {count} elements, expected exactly one")]
    AmbiguousLocator { name: String, count: usize },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using CheckError
pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_error_messages() {
        let err = CheckError::ElementNotFound {
            name: "Docs".to_string(),
        };
        assert_eq!(err.to_string(), "Element not found: Docs");

        let err = CheckError::AmbiguousLocator {
            name: "Docs".to_string(),
            count: 3,
        };
        assert!(err.to_string().contains("matched 3 elements"));
    }

    #[test]
    fn test_navigation_error_includes_url() {
        let err = CheckError::Navigation {
            url: "https://playwright.dev/".to_string(),
            reason: "timeout".to_string(),
        };
        assert!(err.to_string().contains("https://playwright.dev/"));
        assert!(err.to_string().contains("timeout"));
    }
}
