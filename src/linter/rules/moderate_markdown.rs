use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::{Rule, paragraphs};
use crate::linter::runner::LintContext;
use crate::syntax::{SyntaxKind, SyntaxNode};
use crate::tier::Tier;

/// Governance paragraphs with heavy hedging, several modal verbs, or bold
/// markup.
pub struct ModerateMarkdownRule;

impl Rule for ModerateMarkdownRule {
    fn name(&self) -> &str {
        "moderate-markdown"
    }

    fn tier(&self) -> Tier {
        Tier::Moderate
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        if ctx.tier() != self.tier() {
            return Vec::new();
        }

        let thresholds = &ctx.config.thresholds;
        paragraphs(ctx.tree)
            .filter(|(paragraph, text)| {
                ctx.lexicon.count_subjective(text) > thresholds.moderate_max_subjective
                    || ctx.lexicon.count_modal(text) > thresholds.moderate_max_modal
                    || has_bold(paragraph, text)
            })
            .map(|(paragraph, _)| {
                self.report(
                    Some(Location::from_node(&paragraph, ctx.input)),
                    "Governance files should use direct, professional language",
                )
            })
            .collect()
    }
}

/// Bold markup, parsed or left literal in the prose.
fn has_bold(paragraph: &SyntaxNode, text: &str) -> bool {
    paragraph
        .descendants()
        .any(|node| node.kind() == SyntaxKind::Strong)
        || text.contains("**")
        || text.contains("__")
}
