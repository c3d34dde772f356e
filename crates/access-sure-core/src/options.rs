//! Options controlling how reports are rendered

/// How a failed check is phrased in the suggestion list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionStyle {
    /// The check description itself, e.g. `Links have descriptive text`
    #[default]
    Bare,
    /// The description behind a fixed prefix,
    /// e.g. `Suggestion for: Links have descriptive text`
    Prefixed,
}

impl SuggestionStyle {
    /// Prefix used by [`SuggestionStyle::Prefixed`]
    pub const PREFIX: &'static str = "Suggestion for: ";

    /// Render the suggestion for a failed check description
    pub fn render(self, description: &str) -> String {
        match self {
            SuggestionStyle::Bare => description.to_string(),
            SuggestionStyle::Prefixed => format!("{}{}", Self::PREFIX, description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_bare() {
        assert_eq!(SuggestionStyle::default(), SuggestionStyle::Bare);
    }

    #[test]
    fn test_render() {
        assert_eq!(
            SuggestionStyle::Bare.render("Buttons have an accessible name"),
            "Buttons have an accessible name"
        );
        assert_eq!(
            SuggestionStyle::Prefixed.render("Buttons have an accessible name"),
            "Suggestion for: Buttons have an accessible name"
        );
    }
}
