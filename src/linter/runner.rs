use std::path::Path;

use crate::config::Config;
use crate::linter::diagnostics::Diagnostic;
use crate::linter::rules::RuleRegistry;
use crate::linter::text::Lexicon;
use crate::syntax::SyntaxNode;
use crate::tier::{Tier, TierClassifier};

/// Everything a rule sees for one document.
pub struct LintContext<'a> {
    pub tree: &'a SyntaxNode,
    pub input: &'a str,
    pub path: &'a Path,
    pub config: &'a Config,
    pub lexicon: &'a Lexicon,
    pub classifier: &'a TierClassifier,
}

impl LintContext<'_> {
    pub fn tier(&self) -> Tier {
        self.classifier.classify(self.path)
    }
}

pub struct LintRunner {
    registry: RuleRegistry,
}

impl LintRunner {
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Run every registered rule once. Diagnostics keep rule order, then
    /// document order within a rule.
    pub fn run(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for rule in self.registry.rules() {
            log::debug!("Running lint rule: {}", rule.name());
            let rule_diagnostics = rule.check(ctx);
            log::debug!(
                "Rule {} found {} diagnostic(s)",
                rule.name(),
                rule_diagnostics.len()
            );
            diagnostics.extend(rule_diagnostics);
        }

        diagnostics
    }
}
