use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::{Rule, paragraphs};
use crate::linter::runner::LintContext;
use crate::linter::text::{Lexicon, first_word};
use crate::tier::Tier;

/// Paragraphs in strict documents must read as directives: they open with a
/// directive verb and carry no hedging or narrative framing.
pub struct NoNarrativeRule;

impl Rule for NoNarrativeRule {
    fn name(&self) -> &str {
        "no-narrative"
    }

    fn tier(&self) -> Tier {
        Tier::Strict
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        if ctx.tier() != self.tier() {
            return Vec::new();
        }

        paragraphs(ctx.tree)
            .filter(|(_, text)| !is_directive(ctx.lexicon, text))
            .map(|(paragraph, _)| {
                self.report(
                    Some(Location::from_node(&paragraph, ctx.input)),
                    "Paragraph must be imperative/directive; remove narrative or subjective language",
                )
            })
            .collect()
    }
}

fn is_directive(lexicon: &Lexicon, text: &str) -> bool {
    lexicon.is_directive(&first_word(text))
        && !lexicon.has_subjective(text)
        && !lexicon.has_modal(text)
        && !lexicon.starts_narrative(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Vocabulary;
    use crate::linter::test_support::{codes, lint_at};

    fn lexicon() -> Lexicon {
        Lexicon::new(&Vocabulary::default()).unwrap()
    }

    #[test]
    fn directive_paragraph_passes() {
        let diagnostics = lint_at("commands/x.md", "Validate all inputs before dispatch.\n");
        assert!(codes(&diagnostics, "no-narrative").is_empty());
    }

    #[test]
    fn narrative_modal_paragraph_reports_once() {
        let diagnostics = lint_at("commands/x.md", "The tool may use caching.\n");
        let narrative = codes(&diagnostics, "no-narrative");
        assert_eq!(narrative.len(), 1);
        assert_eq!(narrative[0].location.as_ref().unwrap().line, 1);
    }

    #[test]
    fn each_condition_fails_on_its_own() {
        let lex = lexicon();
        assert!(is_directive(&lex, "Ensure the cache is warm."));
        assert!(!is_directive(&lex, "Caching is enabled."));
        assert!(!is_directive(&lex, "Ensure it usually works."));
        assert!(!is_directive(&lex, "Ensure it could work."));
        assert!(!is_directive(&lex, "The build runs."));
        assert!(is_directive(&lex, "Use: the cache"));
        assert!(is_directive(&lex, "- Run tests first"));
        assert!(is_directive(&lex, "**Run** tests first"));
    }

    #[test]
    fn list_items_and_quotes_are_paragraphs() {
        let input = "- Run the suite.\n- We run it nightly.\n\n> Maybe later.\n";
        let diagnostics = codes(&lint_at("commands/x.md", input), "no-narrative");
        let lines: Vec<_> = diagnostics
            .iter()
            .map(|d| d.location.as_ref().unwrap().line)
            .collect();
        assert_eq!(lines, vec![2, 4]);
    }

    #[test]
    fn leading_autolink_is_the_first_word() {
        let input = "<https://example.com/runbook> Run the checks.\n";
        assert_eq!(codes(&lint_at("commands/x.md", input), "no-narrative").len(), 1);
        let input = "Run the checks in <https://example.com/runbook>.\n";
        assert!(codes(&lint_at("commands/x.md", input), "no-narrative").is_empty());
    }

    #[test]
    fn code_and_headings_are_not_paragraphs() {
        let input = "# The heading\n\n```\nthe code\n```\n";
        assert!(codes(&lint_at("commands/x.md", input), "no-narrative").is_empty());
    }
}
