//! Locator rules and the JavaScript probes that interpret them
//!
//! A [`Locator`] names a lookup rule (role + accessible name, a CSS
//! selector, or the document root) rather than holding a closure; a single
//! resolver routine in `navcheck-browser` interprets every rule the same
//! way. Each probe is a self-contained JavaScript expression evaluated in
//! the page context that returns a JSON string, so results survive the
//! DevTools protocol regardless of serialization mode.
//!
//! A locator must resolve to exactly one element; the probes report the
//! match count so the resolver can distinguish "not found" from
//! "ambiguous".

use serde::{Deserialize, Serialize};
use std::fmt;

/// ARIA role used for element lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Link,
    Button,
    Heading,
}

impl Role {
    /// CSS selector collecting candidate elements for this role
    pub fn candidate_selector(&self) -> &'static str {
        match self {
            Role::Link => "a[href], [role=link]",
            Role::Button => "button, [role=button], input[type=button], input[type=submit]",
            Role::Heading => "h1, h2, h3, h4, h5, h6, [role=heading]",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Link => write!(f, "link"),
            Role::Button => write!(f, "button"),
            Role::Heading => write!(f, "heading"),
        }
    }
}

/// Rule for finding a unique element on a rendered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locator {
    /// Element with the given role whose accessible name equals `name` exactly
    Role { role: Role, name: String },
    /// Element with the given role whose accessible name starts with `prefix`
    RoleNamePrefix { role: Role, prefix: String },
    /// The `<html>` element
    DocumentRoot,
    /// Unique match for a CSS selector
    Css(String),
}

/// Observed state of a uniquely resolved element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementInfo {
    /// Element is rendered and not hidden
    pub visible: bool,
    /// Whitespace-normalized text content
    pub text: String,
    /// Raw `href` attribute, if any
    pub href: Option<String>,
}

/// Parsed output of [`Locator::probe_js`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Number of elements the rule matched
    pub count: usize,
    /// Element state when the match was unique
    #[serde(default)]
    pub element: Option<ElementInfo>,
}

/// Parsed output of [`Locator::attribute_js`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeProbe {
    pub count: usize,
    /// Attribute value when the match was unique; None when absent
    #[serde(default)]
    pub value: Option<String>,
}

/// Shared helpers injected into every probe: whitespace normalization,
/// accessible-name computation (aria-label, then aria-labelledby, then
/// image alt text joined with text content), and a visibility check.
const PROBE_HELPERS: &str = r#"
const norm = (s) => (s || '').replace(/\s+/g, ' ').trim();
const accName = (el) => {
    const label = el.getAttribute('aria-label');
    if (label) return norm(label);
    const refs = el.getAttribute('aria-labelledby');
    if (refs) {
        const joined = refs.split(/\s+/)
            .map((id) => { const n = document.getElementById(id); return n ? n.textContent : ''; })
            .join(' ');
        if (norm(joined)) return norm(joined);
    }
    const parts = [];
    if (el.tagName === 'IMG' && el.getAttribute('alt')) parts.push(el.getAttribute('alt'));
    for (const img of el.querySelectorAll('img[alt]')) parts.push(img.getAttribute('alt'));
    parts.push(el.textContent || '');
    return norm(parts.join(' '));
};
const isVisible = (el) =>
    el.getClientRects().length > 0 && getComputedStyle(el).visibility !== 'hidden';
const info = (el) => ({ visible: isVisible(el), text: norm(el.textContent), href: el.getAttribute('href') });
"#;

impl Locator {
    /// Locator for a link with the given accessible name
    pub fn link(name: impl Into<String>) -> Self {
        Locator::Role {
            role: Role::Link,
            name: name.into(),
        }
    }

    /// Locator for a button with the given accessible name
    pub fn button(name: impl Into<String>) -> Self {
        Locator::Role {
            role: Role::Button,
            name: name.into(),
        }
    }

    /// Locator for a heading whose accessible name starts with `prefix`
    pub fn heading_prefix(prefix: impl Into<String>) -> Self {
        Locator::RoleNamePrefix {
            role: Role::Heading,
            prefix: prefix.into(),
        }
    }

    /// JavaScript statement binding `matches` to the candidate elements
    fn matches_js(&self) -> String {
        match self {
            Locator::Role { role, name } => format!(
                "const matches = Array.from(document.querySelectorAll({sel}))\n    .filter((el) => accName(el) === {name});",
                sel = js_string(role.candidate_selector()),
                name = js_string(name),
            ),
            Locator::RoleNamePrefix { role, prefix } => format!(
                "const matches = Array.from(document.querySelectorAll({sel}))\n    .filter((el) => accName(el).startsWith({prefix}));",
                sel = js_string(role.candidate_selector()),
                prefix = js_string(prefix),
            ),
            Locator::DocumentRoot => "const matches = [document.documentElement];".to_string(),
            Locator::Css(selector) => format!(
                "const matches = Array.from(document.querySelectorAll({}));",
                js_string(selector),
            ),
        }
    }

    /// Expression reporting `{count, element}` for this rule
    pub fn probe_js(&self) -> String {
        format!(
            "(() => {{\n{helpers}\n{matches}\nreturn JSON.stringify({{ count: matches.length, element: matches.length === 1 ? info(matches[0]) : null }});\n}})()",
            helpers = PROBE_HELPERS,
            matches = self.matches_js(),
        )
    }

    /// Expression clicking the unique match, reporting `{count}`
    pub fn click_js(&self) -> String {
        format!(
            "(() => {{\n{helpers}\n{matches}\nif (matches.length === 1) matches[0].click();\nreturn JSON.stringify({{ count: matches.length }});\n}})()",
            helpers = PROBE_HELPERS,
            matches = self.matches_js(),
        )
    }

    /// Expression reading an attribute off the unique match,
    /// reporting `{count, value}`
    pub fn attribute_js(&self, attribute: &str) -> String {
        format!(
            "(() => {{\n{helpers}\n{matches}\nreturn JSON.stringify({{ count: matches.length, value: matches.length === 1 ? matches[0].getAttribute({attr}) : null }});\n}})()",
            helpers = PROBE_HELPERS,
            matches = self.matches_js(),
            attr = js_string(attribute),
        )
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Role { role, name } => write!(f, "{} \"{}\"", role, name),
            Locator::RoleNamePrefix { role, prefix } => {
                write!(f, "{} starting with \"{}\"", role, prefix)
            }
            Locator::DocumentRoot => write!(f, "document root"),
            Locator::Css(selector) => write!(f, "css \"{}\"", selector),
        }
    }
}

/// Render a Rust string as a JavaScript string literal
fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escaping() {
        assert_eq!(js_string("Docs"), "\"Docs\"");
        assert_eq!(js_string("Search (Ctrl+K)"), "\"Search (Ctrl+K)\"");
        assert_eq!(js_string("a\"b"), "\"a\\\"b\"");
        assert_eq!(js_string("a\\b"), "\"a\\\\b\"");
        assert_eq!(js_string("a\nb"), "\"a\\nb\"");
    }

    #[test]
    fn test_probe_js_embeds_role_and_name() {
        let locator = Locator::link("GitHub repository");
        let js = locator.probe_js();
        assert!(js.contains("a[href], [role=link]"));
        assert!(js.contains("\"GitHub repository\""));
        assert!(js.contains("accName(el) ==="));
        assert!(js.contains("JSON.stringify"));
    }

    #[test]
    fn test_prefix_probe_uses_starts_with() {
        let locator = Locator::heading_prefix("Playwright enables reliable");
        let js = locator.probe_js();
        assert!(js.contains("startsWith"));
        assert!(js.contains("h1, h2, h3"));
    }

    #[test]
    fn test_document_root_has_single_candidate() {
        let js = Locator::DocumentRoot.probe_js();
        assert!(js.contains("[document.documentElement]"));
    }

    #[test]
    fn test_click_js_clicks_only_unique_match() {
        let js = Locator::button("Switch between dark and light").click_js();
        assert!(js.contains("if (matches.length === 1) matches[0].click();"));
    }

    #[test]
    fn test_attribute_js_embeds_attribute_name() {
        let js = Locator::DocumentRoot.attribute_js("data-theme");
        assert!(js.contains("\"data-theme\""));
    }

    #[test]
    fn test_probe_result_parses_unique_match() {
        let raw = r#"{"count":1,"element":{"visible":true,"text":"Docs","href":"/docs/intro"}}"#;
        let probe: ProbeResult = serde_json::from_str(raw).unwrap();
        assert_eq!(probe.count, 1);
        let element = probe.element.unwrap();
        assert!(element.visible);
        assert_eq!(element.text, "Docs");
        assert_eq!(element.href.as_deref(), Some("/docs/intro"));
    }

    #[test]
    fn test_probe_result_parses_miss() {
        let raw = r#"{"count":0,"element":null}"#;
        let probe: ProbeResult = serde_json::from_str(raw).unwrap();
        assert_eq!(probe.count, 0);
        assert!(probe.element.is_none());
    }

    #[test]
    fn test_attribute_probe_parses_missing_attribute() {
        let raw = r#"{"count":1,"value":null}"#;
        let probe: AttributeProbe = serde_json::from_str(raw).unwrap();
        assert_eq!(probe.count, 1);
        assert!(probe.value.is_none());
    }

    #[test]
    fn test_locator_display() {
        assert_eq!(Locator::link("Docs").to_string(), "link \"Docs\"");
        assert_eq!(
            Locator::heading_prefix("Playwright enables reliable").to_string(),
            "heading starting with \"Playwright enables reliable\""
        );
        assert_eq!(Locator::DocumentRoot.to_string(), "document root");
    }
}
