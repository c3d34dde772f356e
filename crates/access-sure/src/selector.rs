//! A small selector language for querying a [`Document`](crate::Document).
//!
//! Supported forms:
//!
//! - tag names: `button`, `h1`, and `*`
//! - attribute presence: `[alt]`
//! - attribute-name prefix: `[aria-*]`
//! - attribute equality: `[role="main"]`, `[role='main']`, `[role=main]`
//! - compounds: `label[for="email"]`, `input[type="text"][id]`
//! - unions: `input, textarea, select`

use std::fmt;
use std::str::FromStr;

use crate::node::Node;
use crate::{AuditError, Result};

/// One attribute test inside a compound selector
#[derive(Debug, Clone, PartialEq, Eq)]
enum AttributeMatcher {
    /// `[name]`
    Present(String),
    /// `[prefix*]`, any attribute whose name starts with `prefix`
    Prefix(String),
    /// `[name="value"]`
    Equals(String, String),
}

impl AttributeMatcher {
    fn matches(&self, node: &Node) -> bool {
        match self {
            AttributeMatcher::Present(name) => node.has_attribute(name),
            AttributeMatcher::Prefix(prefix) => {
                node.attribute_names().any(|name| name.starts_with(prefix.as_str()))
            }
            AttributeMatcher::Equals(name, value) => {
                node.get_attribute(name) == Some(value.as_str())
            }
        }
    }
}

impl fmt::Display for AttributeMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeMatcher::Present(name) => write!(f, "[{}]", name),
            AttributeMatcher::Prefix(prefix) => write!(f, "[{}*]", prefix),
            AttributeMatcher::Equals(name, value) => {
                write!(f, "[{}=\"{}\"]", name, value.replace('"', "\\\""))
            }
        }
    }
}

/// A tag test plus any number of attribute tests
#[derive(Debug, Clone, PartialEq, Eq)]
struct Compound {
    /// `None` matches any element
    tag: Option<String>,
    attributes: Vec<AttributeMatcher>,
}

impl Compound {
    fn matches(&self, node: &Node) -> bool {
        if !node.is_element() {
            return false;
        }
        if let Some(tag) = &self.tag {
            if node.tag_name() != tag.as_str() {
                return false;
            }
        }
        self.attributes.iter().all(|m| m.matches(node))
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => f.write_str(tag)?,
            None if self.attributes.is_empty() => f.write_str("*")?,
            None => {}
        }
        for matcher in &self.attributes {
            write!(f, "{}", matcher)?;
        }
        Ok(())
    }
}

/// A union of compound selectors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Compound>,
}

impl Selector {
    /// Parse a selector string
    pub fn parse(input: &str) -> Result<Self> {
        Parser::new(input).parse()
    }

    /// Match a single tag
    pub fn tag(name: &str) -> Self {
        Self::tags(&[name])
    }

    /// Match any of several tags
    pub fn tags(names: &[&str]) -> Self {
        Self {
            alternatives: names
                .iter()
                .map(|name| Compound {
                    tag: tag_filter(name),
                    attributes: Vec::new(),
                })
                .collect(),
        }
    }

    /// Match elements carrying any attribute whose name starts with `prefix`
    pub fn attribute_prefix(prefix: &str) -> Self {
        Self {
            alternatives: vec![Compound {
                tag: None,
                attributes: vec![AttributeMatcher::Prefix(prefix.to_lowercase())],
            }],
        }
    }

    /// Match `tag[attribute="value"]`; pass `*` for any tag.
    ///
    /// The value is compared verbatim, so it never needs quoting.
    pub fn attribute_equals(tag: &str, attribute: &str, value: &str) -> Self {
        Self {
            alternatives: vec![Compound {
                tag: tag_filter(tag),
                attributes: vec![AttributeMatcher::Equals(
                    attribute.to_lowercase(),
                    value.to_string(),
                )],
            }],
        }
    }

    /// Union of two selectors
    pub fn or(mut self, other: Selector) -> Self {
        self.alternatives.extend(other.alternatives);
        self
    }

    /// Check whether a node matches any alternative
    pub fn matches(&self, node: &Node) -> bool {
        self.alternatives.iter().any(|c| c.matches(node))
    }
}

impl FromStr for Selector {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, compound) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", compound)?;
        }
        Ok(())
    }
}

fn tag_filter(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() || name == "*" {
        None
    } else {
        Some(name.to_lowercase())
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':')
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn parse(mut self) -> Result<Selector> {
        let mut alternatives = Vec::new();
        loop {
            self.skip_whitespace();
            alternatives.push(self.compound()?);
            self.skip_whitespace();
            match self.bump() {
                None => break,
                Some(',') => continue,
                Some(c) => return Err(self.error(&format!("unexpected '{}'", c))),
            }
        }
        Ok(Selector { alternatives })
    }

    fn compound(&mut self) -> Result<Compound> {
        let (tag, has_tag) = match self.peek() {
            Some('*') => {
                self.bump();
                (None, true)
            }
            _ => {
                let name = self.name();
                if name.is_empty() {
                    (None, false)
                } else {
                    (Some(name.to_lowercase()), true)
                }
            }
        };

        let mut attributes = Vec::new();
        while self.peek() == Some('[') {
            self.bump();
            attributes.push(self.attribute()?);
        }

        if !has_tag && attributes.is_empty() {
            return Err(self.error("expected a tag name or attribute"));
        }
        Ok(Compound { tag, attributes })
    }

    fn attribute(&mut self) -> Result<AttributeMatcher> {
        self.skip_whitespace();
        let name = self.name().to_lowercase();
        if name.is_empty() {
            return Err(self.error("expected an attribute name"));
        }

        if self.peek() == Some('*') {
            self.bump();
            self.skip_whitespace();
            self.expect(']')?;
            return Ok(AttributeMatcher::Prefix(name));
        }

        self.skip_whitespace();
        match self.bump() {
            Some(']') => Ok(AttributeMatcher::Present(name)),
            Some('=') => {
                self.skip_whitespace();
                let value = self.value()?;
                self.skip_whitespace();
                self.expect(']')?;
                Ok(AttributeMatcher::Equals(name, value))
            }
            Some(c) => Err(self.error(&format!("unexpected '{}' in attribute", c))),
            None => Err(self.error("unterminated attribute")),
        }
    }

    fn value(&mut self) -> Result<String> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.bump();
                let mut value = String::new();
                loop {
                    match self.bump() {
                        Some('\\') => match self.bump() {
                            Some(c) => value.push(c),
                            None => return Err(self.error("unterminated string")),
                        },
                        Some(c) if c == quote => return Ok(value),
                        Some(c) => value.push(c),
                        None => return Err(self.error("unterminated string")),
                    }
                }
            }
            _ => {
                let start = self.pos;
                while let Some(c) = self.peek() {
                    if c == ']' || c.is_whitespace() {
                        break;
                    }
                    self.bump();
                }
                if self.pos == start {
                    return Err(self.error("expected an attribute value"));
                }
                Ok(self.input[start..self.pos].to_string())
            }
        }
    }

    fn name(&mut self) -> &'a str {
        let input = self.input;
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !is_name_char(c) {
                break;
            }
            self.bump();
        }
        &input[start..self.pos]
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(self.error(&format!("expected '{}', found '{}'", expected, c))),
            None => Err(self.error(&format!("expected '{}'", expected))),
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn error(&self, message: &str) -> AuditError {
        AuditError::InvalidSelector(format!(
            "{} at offset {} in {:?}",
            message, self.pos, self.input
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(tag: &str, attrs: Vec<(&str, &str)>) -> Node {
        Node::element_with_attrs(tag, attrs)
    }

    #[test]
    fn test_tag() {
        let selector = Selector::parse("button").unwrap();
        assert!(selector.matches(&el("button", vec![])));
        assert!(selector.matches(&el("BUTTON", vec![])));
        assert!(!selector.matches(&el("a", vec![])));
        assert!(!selector.matches(&Node::text("button")));
    }

    #[test]
    fn test_universal() {
        let selector = Selector::parse("*").unwrap();
        assert!(selector.matches(&el("div", vec![])));
        assert!(!selector.matches(&Node::text("x")));
    }

    #[test]
    fn test_union() {
        let selector = Selector::parse("input, textarea,select").unwrap();
        assert!(selector.matches(&el("input", vec![])));
        assert!(selector.matches(&el("textarea", vec![])));
        assert!(selector.matches(&el("select", vec![])));
        assert!(!selector.matches(&el("label", vec![])));
    }

    #[test]
    fn test_attribute_presence() {
        let selector = Selector::parse("[alt]").unwrap();
        assert!(selector.matches(&el("img", vec![("alt", "")])));
        assert!(!selector.matches(&el("img", vec![("src", "a.png")])));
    }

    #[test]
    fn test_attribute_prefix() {
        let selector = Selector::parse("[aria-*]").unwrap();
        assert!(selector.matches(&el("div", vec![("aria-hidden", "true")])));
        assert!(!selector.matches(&el("div", vec![("role", "main")])));
        assert_eq!(selector, Selector::attribute_prefix("aria-"));
    }

    #[test]
    fn test_attribute_equals_quoting() {
        for input in [
            r#"label[for="email"]"#,
            "label[for='email']",
            "label[for=email]",
            r#"label[ for = "email" ]"#,
        ] {
            let selector = Selector::parse(input).unwrap();
            assert!(selector.matches(&el("label", vec![("for", "email")])), "{}", input);
            assert!(!selector.matches(&el("label", vec![("for", "name")])), "{}", input);
            assert!(!selector.matches(&el("span", vec![("for", "email")])), "{}", input);
        }
    }

    #[test]
    fn test_attribute_without_tag() {
        let selector = Selector::parse(r#"main, [role="main"]"#).unwrap();
        assert!(selector.matches(&el("main", vec![])));
        assert!(selector.matches(&el("div", vec![("role", "main")])));
        assert!(!selector.matches(&el("div", vec![("role", "navigation")])));
    }

    #[test]
    fn test_multiple_attributes() {
        let selector = Selector::parse(r#"input[type="checkbox"][id]"#).unwrap();
        assert!(selector.matches(&el("input", vec![("type", "checkbox"), ("id", "x")])));
        assert!(!selector.matches(&el("input", vec![("type", "checkbox")])));
    }

    #[test]
    fn test_value_with_special_characters() {
        let selector = Selector::parse(r#"label[for="a,b]c"]"#).unwrap();
        assert!(selector.matches(&el("label", vec![("for", "a,b]c")])));
    }

    #[test]
    fn test_programmatic_equals_needs_no_quoting() {
        let selector = Selector::attribute_equals("label", "for", r#"we"ird"#);
        assert!(selector.matches(&el("label", vec![("for", r#"we"ird"#)])));
    }

    #[test]
    fn test_or() {
        let selector = Selector::tag("main").or(Selector::attribute_equals("*", "role", "main"));
        assert!(selector.matches(&el("section", vec![("role", "main")])));
        assert_eq!(selector.to_string(), r#"main, [role="main"]"#);
    }

    #[test]
    fn test_invalid_selectors() {
        for input in ["", ",", "a,", "[", "[alt", "[=x]", "a[b=]", "a[b=\"x]", "a b", "a[b c]"] {
            let result = Selector::parse(input);
            assert!(
                matches!(result, Err(AuditError::InvalidSelector(_))),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_display_round_trip() {
        let input = r#"input[type="text"], [aria-*], h1"#;
        let selector = Selector::parse(input).unwrap();
        assert_eq!(selector.to_string(), input);
    }
}
