use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::Rule;
use crate::linter::runner::LintContext;
use crate::linter::text::contains_emoji;
use crate::syntax::walk::{has_code_ancestor, visit_text_runs};
use crate::tier::Tier;

/// One report per text run containing emoji, outside inline code and code
/// blocks.
pub struct NoEmojiRule;

impl Rule for NoEmojiRule {
    fn name(&self) -> &str {
        "no-emoji"
    }

    fn tier(&self) -> Tier {
        Tier::Strict
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        if ctx.tier() != self.tier() {
            return Vec::new();
        }

        let mut diagnostics = Vec::new();
        visit_text_runs(ctx.tree, |run, ancestors| {
            if !has_code_ancestor(ancestors) && contains_emoji(&run.text) {
                diagnostics.push(self.report(
                    Some(Location::from_range(run.range, ctx.input)),
                    "Emojis are prohibited in LLM-facing files",
                ));
            }
        });
        diagnostics
    }
}
