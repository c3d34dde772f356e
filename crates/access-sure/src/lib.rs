//! # access-sure
//!
//! Heuristic accessibility checks over parsed HTML documents.
//!
//! A page is parsed into an immutable [`Document`] tree, a fixed set of
//! independent [`Rule`]s is evaluated against it, and the outcomes are folded
//! into an [`AuditResult`] holding a pass/fail checklist, a percentage score
//! and one suggestion per failed check.
//!
//! ## Design
//!
//! Every rule is a pure function of the document. Rules never fail: a missing
//! attribute is an ordinary failing input, and a per-element rule over an
//! empty set of elements passes.
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use access_sure::AuditService;
//!
//! let service = AuditService::new();
//! let result = service
//!     .audit_html(r#"<main><h1>Pricing</h1><img src="chart.png"></main>"#)
//!     .unwrap();
//!
//! assert_eq!(result.score, 88);
//! assert_eq!(result.suggestions, vec!["Image elements have alt attributes"]);
//! ```
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use access_sure::{AuditService, Document, Node};
//!
//! let mut main = Node::element("main");
//! let mut link = Node::element_with_attrs("a", vec![("href", "/page/2")]);
//! link.add_child(Node::text("2"));
//! main.add_child(link);
//!
//! let result = AuditService::new().audit(&Document::from_root(main)).unwrap();
//! assert_eq!(result.suggestions, vec!["Links have descriptive text"]);
//! ```

pub mod html;
pub mod node;
mod rules;
pub mod selector;
mod service;
mod utilities;

pub use access_sure_core::{AuditResult, Check, SuggestionStyle};
pub use html::{parse_html, parse_html_bytes};
pub use node::{Document, Node, NodeType};
pub use rules::{descriptions, Rule, Rules};
pub use selector::Selector;
pub use service::{AuditOptions, AuditService, ContrastOptions, RulePreset};
pub use utilities::*;

/// Error type for audit operations
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("Failed to parse HTML: {0}")]
    Parse(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error(transparent)]
    Score(#[from] access_sure_core::ScoreError),
}

pub type Result<T> = std::result::Result<T, AuditError>;
