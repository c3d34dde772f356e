//! AuditService - the main entry point for running accessibility audits.

use access_sure_core::{AuditResult, Check, SuggestionStyle};
use tracing::debug;

use crate::html::{parse_html, parse_html_bytes};
use crate::node::Document;
use crate::rules::{Rule, Rules};
use crate::utilities::{contrast_ratio, Rgb};
use crate::Result;

/// Color pair used by the contrast check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastOptions {
    /// Assumed text color
    pub foreground: Rgb,

    /// Assumed background color
    pub background: Rgb,

    /// Minimum contrast ratio, 4.5 for WCAG AA body text
    pub minimum_ratio: f64,
}

impl ContrastOptions {
    pub fn ratio(&self) -> f64 {
        contrast_ratio(self.foreground, self.background)
    }

    pub fn passes(&self) -> bool {
        self.ratio() >= self.minimum_ratio
    }
}

impl Default for ContrastOptions {
    fn default() -> Self {
        Self {
            foreground: Rgb::BLACK,
            background: Rgb::WHITE,
            minimum_ratio: 4.5,
        }
    }
}

/// Built-in rule set selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RulePreset {
    /// The eight standard checks
    #[default]
    Standard,
    /// Standard checks plus keyboard access and autoplay
    Extended,
}

/// Options for AuditService
#[derive(Debug, Clone, Default)]
pub struct AuditOptions {
    /// How failed checks are turned into suggestions
    pub suggestion_style: SuggestionStyle,

    /// Palette for the contrast check
    pub contrast: ContrastOptions,

    /// Built-in rules to run
    pub preset: RulePreset,
}

/// The main service for auditing documents
#[derive(Debug)]
pub struct AuditService {
    options: AuditOptions,
    rules: Rules,
}

impl AuditService {
    /// Create a new AuditService with default options
    pub fn new() -> Self {
        Self::with_options(AuditOptions::default())
    }

    /// Create an AuditService with custom options
    pub fn with_options(options: AuditOptions) -> Self {
        let rules = Rules::for_preset(options.preset);
        Self { options, rules }
    }

    /// Audit a parsed document
    pub fn audit(&self, document: &Document) -> Result<AuditResult> {
        let checks = self.evaluate(document);
        let result = AuditResult::from_checks(checks, self.options.suggestion_style)?;
        debug!(score = result.score, failed = result.suggestions.len(), "Audit complete");
        Ok(result)
    }

    /// Parse and audit an HTML string
    pub fn audit_html(&self, html: &str) -> Result<AuditResult> {
        self.audit(&parse_html(html))
    }

    /// Decode, parse and audit raw HTML bytes
    pub fn audit_bytes(&self, bytes: &[u8]) -> Result<AuditResult> {
        self.audit(&parse_html_bytes(bytes)?)
    }

    /// Run every rule without scoring
    pub fn evaluate(&self, document: &Document) -> Vec<Check> {
        self.rules.evaluate(document, &self.options)
    }

    /// Add a custom rule
    pub fn add_rule(&mut self, key: &str, rule: Rule) -> &mut Self {
        self.rules.add(key, rule);
        self
    }

    /// Remove a custom rule
    pub fn remove_rule(&mut self, key: &str) -> &mut Self {
        self.rules.remove(key);
        self
    }

    pub fn options(&self) -> &AuditOptions {
        &self.options
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }
}

impl Default for AuditService {
    fn default() -> Self {
        Self::new()
    }
}
