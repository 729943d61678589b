use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::{Rule, paragraphs};
use crate::linter::runner::LintContext;
use crate::tier::Tier;

/// Only extreme hedging is flagged in general documentation.
pub struct LightMarkdownRule;

impl Rule for LightMarkdownRule {
    fn name(&self) -> &str {
        "light-markdown"
    }

    fn tier(&self) -> Tier {
        Tier::Light
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        if ctx.tier() != self.tier() {
            return Vec::new();
        }

        let thresholds = &ctx.config.thresholds;
        paragraphs(ctx.tree)
            .filter(|(_, text)| {
                ctx.lexicon.count_subjective(text) > thresholds.light_max_subjective
                    || ctx.lexicon.count_modal(text) > thresholds.light_max_modal
            })
            .map(|(paragraph, _)| {
                self.report(
                    Some(Location::from_node(&paragraph, ctx.input)),
                    "Consider using more direct language",
                )
            })
            .collect()
    }
}
