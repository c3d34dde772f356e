//! Rule type for document checks.

use access_sure_core::Check;

use crate::node::{Document, Node};
use crate::selector::Selector;
use crate::service::AuditOptions;

/// Type alias for check functions
pub type CheckFn = Box<dyn Fn(&Document, &AuditOptions) -> bool + Send + Sync>;

/// A named check evaluated against a whole document
pub struct Rule {
    description: String,
    check: CheckFn,
}

impl Rule {
    /// Create a new rule
    pub fn new<F>(description: &str, check: F) -> Self
    where
        F: Fn(&Document, &AuditOptions) -> bool + Send + Sync + 'static,
    {
        Self {
            description: description.to_string(),
            check: Box::new(check),
        }
    }

    /// Create a rule that passes when every element matching `selector`
    /// satisfies `predicate`.
    ///
    /// Stops at the first failing element. A document with no matching
    /// elements passes.
    pub fn every<F>(description: &str, selector: Selector, predicate: F) -> Self
    where
        F: Fn(&Node, &Document, &AuditOptions) -> bool + Send + Sync + 'static,
    {
        Self::new(description, move |document, options| {
            document
                .query_all(&selector)
                .all(|node| predicate(node, document, options))
        })
    }

    /// Stable description, used as the check label
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the check
    pub fn evaluate(&self, document: &Document, options: &AuditOptions) -> bool {
        (self.check)(document, options)
    }

    /// Run the check and label the outcome
    pub fn check(&self, document: &Document, options: &AuditOptions) -> Check {
        Check::new(self.description.as_str(), self.evaluate(document, options))
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_html;

    #[test]
    fn test_every_vacuous() {
        let rule = Rule::every("No marquees", Selector::tag("marquee"), |_, _, _| false);
        let document = parse_html("<p>plain</p>");
        assert!(rule.evaluate(&document, &AuditOptions::default()));
    }

    #[test]
    fn test_every_stops_at_first_failure() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        let rule = Rule::every("Paragraphs are short", Selector::tag("p"), move |node, _, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            node.text_content().len() < 5
        });

        let document = parse_html("<p>ok</p><p>too long</p><p>ok</p>");
        assert!(!rule.evaluate(&document, &AuditOptions::default()));
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_check_carries_description() {
        let rule = Rule::new("Always passes", |_, _| true);
        let check = rule.check(&parse_html(""), &AuditOptions::default());
        assert_eq!(check, Check::passed("Always passes"));
        assert_eq!(format!("{:?}", rule), "Rule { description: \"Always passes\", .. }");
    }
}
