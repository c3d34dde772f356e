//! Audit report types
//!
//! These are the values handed from the rule engine to whatever renders the
//! result. They serialize to the JSON shape served by `GET /audit`.

use serde::{Deserialize, Serialize};

use crate::options::SuggestionStyle;
use crate::score::{score, suggestions, ScoreError};

/// Outcome of a single named check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    /// Stable, human-readable label; also the key for the suggestion text
    pub description: String,

    /// Whether the document satisfied the check
    pub passed: bool,
}

impl Check {
    pub fn new(description: impl Into<String>, passed: bool) -> Self {
        Self {
            description: description.into(),
            passed,
        }
    }

    pub fn passed(description: impl Into<String>) -> Self {
        Self::new(description, true)
    }

    pub fn failed(description: impl Into<String>) -> Self {
        Self::new(description, false)
    }
}

/// The aggregate result of one audit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditResult {
    /// Every check in evaluation order
    pub checks: Vec<Check>,

    /// Percentage of passed checks, 0-100
    pub score: u8,

    /// One entry per failed check, in the same order as `checks`
    pub suggestions: Vec<String>,
}

impl AuditResult {
    /// Build a result from check outcomes, computing score and suggestions
    pub fn from_checks(checks: Vec<Check>, style: SuggestionStyle) -> Result<Self, ScoreError> {
        let score = score(&checks)?;
        let suggestions = suggestions(&checks, style);
        Ok(Self {
            checks,
            score,
            suggestions,
        })
    }

    /// Checks that did not pass
    pub fn failed_checks(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|c| !c.passed)
    }

    /// Look up a check by its description
    pub fn check(&self, description: &str) -> Option<&Check> {
        self.checks.iter().find(|c| c.description == description)
    }

    /// True when every check passed
    pub fn is_clean(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }
}
