//! HTML parsing support.
//!
//! Parses HTML strings with scraper (html5ever) and converts the result into
//! the owned [`Document`] tree the rules run against. Parsing is lenient:
//! unclosed tags and invalid nesting produce a best-effort tree, and the
//! implicit `html`/`head`/`body` elements are always present.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::{Document, Node};
use crate::{AuditError, Result};

/// Parse an HTML string into a Document.
///
/// # Example
///
/// ```rust
/// use access_sure::{parse_html, Selector};
///
/// let document = parse_html("<p>Hello <img src=a.png alt=''>");
/// assert_eq!(document.query_all(&Selector::tag("img")).count(), 1);
/// ```
pub fn parse_html(html: &str) -> Document {
    let parsed = Html::parse_document(html);

    let mut root = Node::document();
    root.add_child(scraper_to_node(parsed.root_element()));
    Document::from_root(root)
}

/// Parse raw bytes into a Document.
///
/// Fails only when the bytes cannot be decoded as UTF-8 text.
pub fn parse_html_bytes(bytes: &[u8]) -> Result<Document> {
    let html = std::str::from_utf8(bytes).map_err(|e| AuditError::Parse(e.to_string()))?;
    Ok(parse_html(html))
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();

    let mut node = if attrs.is_empty() {
        Node::element(tag)
    } else {
        Node::element_with_attrs(tag, attrs)
    };

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
