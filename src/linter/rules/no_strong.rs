use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::Rule;
use crate::linter::runner::LintContext;
use crate::syntax::SyntaxKind;
use crate::syntax::walk::visit;
use crate::tier::Tier;

pub struct NoStrongRule;

impl Rule for NoStrongRule {
    fn name(&self) -> &str {
        "no-strong"
    }

    fn tier(&self) -> Tier {
        Tier::Strict
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        if ctx.tier() != self.tier() {
            return Vec::new();
        }

        let mut diagnostics = Vec::new();
        visit(ctx.tree, SyntaxKind::Strong, |element| {
            if let Some(node) = element.as_node() {
                diagnostics.push(self.report(
                    Some(Location::from_node(node, ctx.input)),
                    "Bold/strong emphasis is prohibited in LLM-facing files",
                ));
            }
        });
        diagnostics
    }
}
