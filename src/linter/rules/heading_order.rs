use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::{Rule, missing_headings};
use crate::linter::runner::LintContext;
use crate::syntax::walk::visit;
use crate::syntax::{SyntaxKind, SyntaxNode, normalized_heading_text};
use crate::tier::Tier;

/// Canonical section headings must all be present and appear in vocabulary
/// order. Headings outside the vocabulary are ignored.
pub struct HeadingOrderRule;

impl Rule for HeadingOrderRule {
    fn name(&self) -> &str {
        "heading-order"
    }

    fn tier(&self) -> Tier {
        Tier::Strict
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        if ctx.tier() != self.tier() {
            return Vec::new();
        }

        let vocabulary = &ctx.config.vocabulary.canonical_headings;
        let mut diagnostics = Vec::new();
        let seen = collect_canonical(ctx.tree, vocabulary);

        // Only the first inversion is reported.
        let mut last = 0;
        for (index, node) in &seen {
            if *index < last {
                diagnostics.push(self.report(
                    Some(Location::from_node(node, ctx.input)),
                    "Headings must follow the canonical order defined for LLM-facing files",
                ));
                break;
            }
            last = *index;
        }

        let missing = missing_headings(ctx.tree, vocabulary);
        if !missing.is_empty() {
            diagnostics.push(self.report(
                None,
                format!("Missing required headings: {}", missing.join(", ")),
            ));
        }

        diagnostics
    }
}

/// Headings found in `vocabulary`, with their vocabulary index, in document
/// order.
fn collect_canonical(tree: &SyntaxNode, vocabulary: &[String]) -> Vec<(usize, SyntaxNode)> {
    let mut seen = Vec::new();
    visit(tree, SyntaxKind::Heading, |element| {
        let Some(node) = element.as_node() else {
            return;
        };
        let text = normalized_heading_text(node);
        if let Some(index) = vocabulary.iter().position(|term| term.to_lowercase() == text) {
            seen.push((index, node.clone()));
        }
    });
    seen
}

#[cfg(test)]
mod tests {
    use crate::config::CANONICAL_HEADINGS;
    use crate::linter::Severity;
    use crate::linter::test_support::{codes, lint_at};

    fn document(headings: &[&str]) -> String {
        headings
            .iter()
            .map(|h| format!("## {h}\n\nValidate inputs.\n\n"))
            .collect()
    }

    #[test]
    fn canonical_order_is_clean() {
        let input = document(CANONICAL_HEADINGS);
        assert!(codes(&lint_at("commands/x.md", &input), "heading-order").is_empty());
    }

    #[test]
    fn first_inversion_is_reported_once() {
        let input = document(&["Scope", "Language-Rules", "Absolute-Prohibitions"]);
        let diagnostics = codes(&lint_at("commands/x.md", &input), "heading-order");
        let ordering: Vec<_> = diagnostics
            .iter()
            .filter(|d| d.message.starts_with("Headings must follow"))
            .collect();
        assert_eq!(ordering.len(), 1);
        assert_eq!(ordering[0].severity, Severity::Error);
        assert_eq!(ordering[0].location.as_ref().map(|l| l.line), Some(9));
    }

    #[test]
    fn multiple_inversions_still_one_report() {
        let input = document(&["Naming-Rules", "Scope", "Validation-Rules", "Structural-Rules"]);
        let diagnostics = codes(&lint_at("rules/a.md", &input), "heading-order");
        let ordering = diagnostics
            .iter()
            .filter(|d| d.message.starts_with("Headings must follow"))
            .count();
        assert_eq!(ordering, 1);
    }

    #[test]
    fn no_canonical_headings_lists_all_ten() {
        let diagnostics = codes(
            &lint_at("AGENTS.md", "# Overview\n\nRun tests.\n"),
            "heading-order",
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].location.is_none());
        assert_eq!(
            diagnostics[0].message,
            format!("Missing required headings: {}", CANONICAL_HEADINGS.join(", "))
        );
    }

    #[test]
    fn missing_lists_only_absent_terms() {
        let mut present: Vec<&str> = CANONICAL_HEADINGS.to_vec();
        present.retain(|h| *h != "naming-rules" && *h != "scope");
        let diagnostics = codes(&lint_at("commands/x.md", &document(&present)), "heading-order");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "Missing required headings: scope, naming-rules"
        );
    }

    #[test]
    fn setext_and_case_variants_count() {
        let mut input = String::from("SCOPE\n=====\n\n");
        input.push_str(&document(&CANONICAL_HEADINGS[1..]));
        assert!(codes(&lint_at("commands/x.md", &input), "heading-order").is_empty());
    }

    #[test]
    fn other_tiers_are_skipped() {
        assert!(codes(&lint_at("README.md", "# Intro\n"), "heading-order").is_empty());
        assert!(codes(&lint_at("governance/a.md", "# Intro\n"), "heading-order").is_empty());
    }
}
