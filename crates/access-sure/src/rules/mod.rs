//! Rule system for accessibility audits.

mod aria;
mod extended;
mod rule;
mod wcag;

pub use rule::Rule;

use access_sure_core::Check;
use indexmap::IndexMap;
use tracing::debug;

use crate::node::Document;
use crate::service::{AuditOptions, RulePreset};

/// Check descriptions. Each is both the display label and the key a
/// suggestion is generated from, so the wording is fixed.
pub mod descriptions {
    pub const ARIA_ROLES: &str = "ARIA attributes match their roles";
    pub const BUTTON_NAME: &str = "Buttons have an accessible name";
    pub const IMAGE_ALT: &str = "Image elements have alt attributes";
    pub const FORM_LABELS: &str = "Form inputs have associated labels";
    pub const COLOR_CONTRAST: &str = "Color contrast meets WCAG guidelines";
    pub const MAIN_LANDMARK: &str = "Document has a main landmark";
    pub const HEADING_HIERARCHY: &str = "Headings follow correct hierarchy";
    pub const LINK_TEXT: &str = "Links have descriptive text";
    pub const KEYBOARD_ACCESS: &str = "All interactive elements are keyboard accessible";
    pub const NO_AUTOPLAY: &str = "No auto-playing media";
}

/// Ordered collection of rules for an audit
pub struct Rules {
    /// Built-in rules for the selected preset
    builtin_rules: Vec<Rule>,
    /// Custom rules added by the user (evaluated after built-ins)
    custom_rules: IndexMap<String, Rule>,
}

impl Rules {
    /// Create a new Rules instance with the eight standard rules
    pub fn new() -> Self {
        Self::for_preset(RulePreset::Standard)
    }

    /// Standard rules followed by the keyboard and autoplay checks
    pub fn extended() -> Self {
        Self::for_preset(RulePreset::Extended)
    }

    pub fn for_preset(preset: RulePreset) -> Self {
        let mut builtin_rules = wcag::standard_rules();
        if preset == RulePreset::Extended {
            builtin_rules.extend(extended::extended_rules());
        }
        Self {
            builtin_rules,
            custom_rules: IndexMap::new(),
        }
    }

    /// Add a custom rule. A rule already stored under `key` is replaced in place.
    pub fn add(&mut self, key: &str, rule: Rule) {
        self.custom_rules.insert(key.to_string(), rule);
    }

    /// Remove a custom rule
    pub fn remove(&mut self, key: &str) -> Option<Rule> {
        self.custom_rules.shift_remove(key)
    }

    /// All rules in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.builtin_rules.iter().chain(self.custom_rules.values())
    }

    pub fn len(&self) -> usize {
        self.builtin_rules.len() + self.custom_rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evaluate every rule against the document, one check per rule
    pub fn evaluate(&self, document: &Document, options: &AuditOptions) -> Vec<Check> {
        self.iter()
            .map(|rule| {
                let check = rule.check(document, options);
                debug!(rule = %check.description, passed = check.passed, "Rule evaluated");
                check
            })
            .collect()
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Rules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_html;

    #[test]
    fn test_presets() {
        assert_eq!(Rules::new().len(), 8);
        assert_eq!(Rules::extended().len(), 10);
        assert_eq!(Rules::for_preset(RulePreset::Standard).len(), 8);
        assert_eq!(format!("{:?}", Rules::new()).matches("Rule {").count(), 8);
    }

    #[test]
    fn test_extended_order() {
        let rules = Rules::extended();
        let order: Vec<&str> = rules.iter().map(|r| r.description()).collect();
        assert_eq!(order[7], descriptions::LINK_TEXT);
        assert_eq!(order[8], descriptions::KEYBOARD_ACCESS);
        assert_eq!(order[9], descriptions::NO_AUTOPLAY);
    }

    #[test]
    fn test_custom_rules_after_builtins() {
        let mut rules = Rules::new();
        rules.add("lang", Rule::new("Page declares a language", |doc, _| {
            doc.root()
                .element_children()
                .any(|html| html.has_attribute("lang"))
        }));
        rules.add("title", Rule::new("Page has a title", |_, _| true));

        let checks = rules.evaluate(&parse_html("<main></main>"), &AuditOptions::default());
        assert_eq!(checks.len(), 10);
        assert_eq!(checks[8], Check::failed("Page declares a language"));
        assert_eq!(checks[9], Check::passed("Page has a title"));
    }

    #[test]
    fn test_add_existing_key_replaces_in_place() {
        let mut rules = Rules::new();
        rules.add("a", Rule::new("First", |_, _| true));
        rules.add("b", Rule::new("Second", |_, _| true));
        rules.add("a", Rule::new("First again", |_, _| false));

        let custom: Vec<&str> = rules.iter().skip(8).map(|r| r.description()).collect();
        assert_eq!(custom, vec!["First again", "Second"]);
    }

    #[test]
    fn test_remove_custom_rule() {
        let mut rules = Rules::new();
        rules.add("a", Rule::new("First", |_, _| true));
        assert!(rules.remove("a").is_some());
        assert!(rules.remove("a").is_none());
        assert_eq!(rules.len(), 8);
        assert!(!rules.is_empty());
    }
}
