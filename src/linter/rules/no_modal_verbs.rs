use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::Rule;
use crate::linter::runner::LintContext;
use crate::syntax::walk::{has_code_ancestor, visit_text_runs};
use crate::tier::Tier;

pub struct NoModalVerbsRule;

impl Rule for NoModalVerbsRule {
    fn name(&self) -> &str {
        "no-modal-verbs"
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
            if !has_code_ancestor(ancestors) && ctx.lexicon.has_modal(&run.text) {
                diagnostics.push(self.report(
                    Some(Location::from_range(run.range, ctx.input)),
                    "Modal verbs (may/might/could) are prohibited in body content",
                ));
            }
        });
        diagnostics
    }
}
