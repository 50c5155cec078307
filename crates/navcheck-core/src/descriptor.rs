//! The element registry: which page elements to verify and what to expect
//!
//! The registry is a static, ordered table built once per process and never
//! mutated. `expected_text` and `expected_href` are independently optional;
//! absence means "not checked for this element", never "must be empty".

use crate::locator::Locator;
use serde::{Deserialize, Serialize};

/// Root URL of the page under verification
pub const BASE_URL: &str = "https://playwright.dev/";

/// Attribute on the document root that carries the active theme
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Accessible name of the theme switch control
pub const THEME_SWITCH_NAME: &str = "Switch between dark and light";

/// Accessible-name prefix identifying the hero heading
pub const HERO_HEADING_PREFIX: &str = "Playwright enables reliable";

/// Substring the hero heading text must contain
pub const HERO_HEADING_SUBSTRING: &str =
    "Playwright enables reliable end-to-end testing for modern web apps.";

/// One page element to verify, with its expected observable properties
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementDescriptor {
    /// Reporting label, unique within the registry
    pub name: String,
    /// Rule for finding the element
    pub locator: Locator,
    /// Exact visible text, when checked
    pub expected_text: Option<String>,
    /// Exact `href` attribute value, when checked
    pub expected_href: Option<String>,
}

impl ElementDescriptor {
    /// Descriptor with no text/href expectations (visibility check only)
    pub fn new(name: impl Into<String>, locator: Locator) -> Self {
        Self {
            name: name.into(),
            locator,
            expected_text: None,
            expected_href: None,
        }
    }

    /// Add an exact-text expectation
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.expected_text = Some(text.into());
        self
    }

    /// Add an exact-href expectation
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.expected_href = Some(href.into());
        self
    }
}

/// Header navigation elements of the playwright.dev home page, in
/// verification order
pub fn home_page_elements() -> Vec<ElementDescriptor> {
    vec![
        ElementDescriptor::new(
            "Playwright logo Playwright",
            Locator::link("Playwright logo Playwright"),
        )
        .with_text("Playwright")
        .with_href("/"),
        ElementDescriptor::new("Docs", Locator::link("Docs"))
            .with_text("Docs")
            .with_href("/docs/intro"),
        ElementDescriptor::new("API", Locator::link("API"))
            .with_text("API")
            .with_href("/docs/api/class-playwright"),
        ElementDescriptor::new("Node.js", Locator::button("Node.js")).with_text("Node.js"),
        ElementDescriptor::new("Community", Locator::link("Community"))
            .with_text("Community")
            .with_href("/community/welcome"),
        ElementDescriptor::new("GitHub repository", Locator::link("GitHub repository"))
            .with_href("https://github.com/microsoft/playwright"),
        ElementDescriptor::new("Discord server", Locator::link("Discord server"))
            .with_href("https://aka.ms/playwright/discord"),
        ElementDescriptor::new(THEME_SWITCH_NAME, Locator::button(THEME_SWITCH_NAME)),
        ElementDescriptor::new("Search (Ctrl+K)", Locator::button("Search (Ctrl+K)")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_and_size() {
        let elements = home_page_elements();
        assert_eq!(elements.len(), 9);
        assert_eq!(elements[0].name, "Playwright logo Playwright");
        assert_eq!(elements[1].name, "Docs");
        assert_eq!(elements[8].name, "Search (Ctrl+K)");
    }

    #[test]
    fn test_registry_names_are_unique() {
        let elements = home_page_elements();
        let mut names: Vec<&str> = elements.iter().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), elements.len());
    }

    #[test]
    fn test_expected_values_match_page() {
        let elements = home_page_elements();
        let docs = elements.iter().find(|e| e.name == "Docs").unwrap();
        assert_eq!(docs.expected_text.as_deref(), Some("Docs"));
        assert_eq!(docs.expected_href.as_deref(), Some("/docs/intro"));

        let github = elements.iter().find(|e| e.name == "GitHub repository").unwrap();
        assert!(github.expected_text.is_none());
        assert_eq!(
            github.expected_href.as_deref(),
            Some("https://github.com/microsoft/playwright")
        );
    }

    #[test]
    fn test_expectations_are_independently_optional() {
        let elements = home_page_elements();
        // Node.js: text but no href
        let node = elements.iter().find(|e| e.name == "Node.js").unwrap();
        assert!(node.expected_text.is_some());
        assert!(node.expected_href.is_none());
        // Theme switch and search: neither
        for name in [THEME_SWITCH_NAME, "Search (Ctrl+K)"] {
            let el = elements.iter().find(|e| e.name == name).unwrap();
            assert!(el.expected_text.is_none());
            assert!(el.expected_href.is_none());
        }
    }

    #[test]
    fn test_fixed_constants() {
        assert_eq!(BASE_URL, "https://playwright.dev/");
        assert_eq!(THEME_ATTRIBUTE, "data-theme");
        assert!(HERO_HEADING_SUBSTRING.starts_with(HERO_HEADING_PREFIX));
    }
}
