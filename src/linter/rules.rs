use crate::linter::diagnostics::{Diagnostic, Location, Severity};
use crate::linter::runner::LintContext;
use crate::syntax::{SyntaxKind, SyntaxNode, normalized_heading_text, plain_text};
use crate::tier::Tier;

pub mod heading_order;
pub mod light_markdown;
pub mod line_length;
pub mod moderate_headings;
pub mod moderate_markdown;
pub mod no_emoji;
pub mod no_modal_verbs;
pub mod no_narrative;
pub mod no_strong;

/// A check that applies to documents of one tier. `check` returns nothing
/// for documents of any other tier.
pub trait Rule: Send + Sync {
    fn name(&self) -> &str;
    fn tier(&self) -> Tier;
    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic>;

    /// Strict findings are errors; the advisory tiers only warn.
    fn severity(&self) -> Severity {
        match self.tier() {
            Tier::Strict => Severity::Error,
            _ => Severity::Warning,
        }
    }

    fn report(&self, location: Option<Location>, message: impl Into<String>) -> Diagnostic
    where
        Self: Sized,
    {
        match self.severity() {
            Severity::Error => Diagnostic::error(location, self.name(), message),
            Severity::Warning => Diagnostic::warning(location, self.name(), message),
        }
    }
}

pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Vocabulary terms not matched by any heading, in vocabulary order.
pub(crate) fn missing_headings<'v>(tree: &SyntaxNode, vocabulary: &'v [String]) -> Vec<&'v str> {
    let found: Vec<String> = tree
        .descendants()
        .filter(|node| node.kind() == SyntaxKind::Heading)
        .map(|heading| normalized_heading_text(&heading))
        .collect();
    vocabulary
        .iter()
        .filter(|term| !found.contains(&term.to_lowercase()))
        .map(String::as_str)
        .collect()
}

/// Non-empty paragraphs with their trimmed prose, in document order.
pub(crate) fn paragraphs(tree: &SyntaxNode) -> impl Iterator<Item = (SyntaxNode, String)> + '_ {
    tree.descendants()
        .filter(|node| node.kind() == SyntaxKind::PARAGRAPH)
        .filter_map(|paragraph| {
            let text = plain_text(&paragraph).trim().to_string();
            (!text.is_empty()).then_some((paragraph, text))
        })
}
