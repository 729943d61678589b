use crate::linter::diagnostics::Diagnostic;
use crate::linter::rules::{Rule, missing_headings};
use crate::linter::runner::LintContext;
use crate::tier::Tier;

/// Nudges governance documents that are close to the standard layout.
/// Documents missing more than `moderate-max-missing-headings` governance
/// headings get no report at all.
pub struct ModerateHeadingsRule;

impl Rule for ModerateHeadingsRule {
    fn name(&self) -> &str {
        "moderate-headings"
    }

    fn tier(&self) -> Tier {
        Tier::Moderate
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        if ctx.tier() != self.tier() {
            return Vec::new();
        }

        let missing = missing_headings(ctx.tree, &ctx.config.vocabulary.governance_headings);
        let limit = ctx.config.thresholds.moderate_max_missing_headings;
        if missing.is_empty() || missing.len() > limit {
            return Vec::new();
        }

        vec![self.report(
            None,
            format!(
                "Consider adding these governance headings: {}",
                missing.join(", ")
            ),
        )]
    }
}
