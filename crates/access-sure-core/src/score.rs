//! Scoring
//!
//! Folds check outcomes into a percentage and a suggestion list.

use crate::options::SuggestionStyle;
use crate::report::Check;

/// Error type for scoring
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("Cannot score an empty rule set")]
    NoChecks,
}

/// Number of checks that passed
pub fn passed_count(checks: &[Check]) -> usize {
    checks.iter().filter(|c| c.passed).count()
}

/// Percentage of passed checks, rounded half up.
///
/// Integer arithmetic keeps `round(100 * k / n)` exact for every `k <= n`.
pub fn score(checks: &[Check]) -> Result<u8, ScoreError> {
    let total = checks.len();
    if total == 0 {
        return Err(ScoreError::NoChecks);
    }
    let passed = passed_count(checks);

    let rounded = (200 * passed + total) / (2 * total);
    Ok(rounded.min(100) as u8)
}

/// One suggestion per failed check, in check order
pub fn suggestions(checks: &[Check], style: SuggestionStyle) -> Vec<String> {
    checks
        .iter()
        .filter(|c| !c.passed)
        .map(|c| style.render(&c.description))
        .collect()
}
