//! access-sure-core - audit report model and scoring
//!
//! This crate provides the data structures that leave the rule engine: the
//! outcome of each check, the aggregate score, and the remediation prompts.
//! It is used by both `access-sure` (which produces checks) and
//! `access-sure-server` (which serializes results to JSON).
//!
//! # Architecture
//!
//! ```text
//!                 ┌────────────┐
//! Rule outcomes ─▶│ Vec<Check> │──▶ score() ───────▶ ┌─────────────┐
//!                 │            │──▶ suggestions() ─▶ │ AuditResult │ ──▶ JSON
//!                 └────────────┘                     └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use access_sure_core::{AuditResult, Check, SuggestionStyle};
//!
//! let checks = vec![
//!     Check::new("Document has a main landmark", true),
//!     Check::new("Links have descriptive text", false),
//! ];
//!
//! let result = AuditResult::from_checks(checks, SuggestionStyle::Bare).unwrap();
//! assert_eq!(result.score, 50);
//! assert_eq!(result.suggestions, vec!["Links have descriptive text"]);
//! ```

mod options;
mod report;
mod score;

pub use options::SuggestionStyle;
pub use report::{AuditResult, Check};
pub use score::{passed_count, score, suggestions, ScoreError};
