use rowan::{TextRange, TextSize};

use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::Rule;
use crate::linter::runner::LintContext;
use crate::tier::Tier;

/// Physical lines longer than the configured limit. Works on the raw text:
/// fenced regions (and the fence lines themselves) and `|` table rows are
/// skipped.
pub struct LineLengthRule;

impl Rule for LineLengthRule {
    fn name(&self) -> &str {
        "line-length"
    }

    fn tier(&self) -> Tier {
        Tier::Strict
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        if ctx.tier() != self.tier() {
            return Vec::new();
        }

        let max = ctx.config.max_line_length;
        let mut diagnostics = Vec::new();
        let mut in_fence = false;
        let mut line_start = 0;

        for (index, raw) in ctx.input.split('\n').enumerate() {
            let start = line_start;
            line_start += raw.len() + 1;

            let line = raw.strip_suffix('\r').unwrap_or(raw);
            let trimmed = line.trim();
            if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
                in_fence = !in_fence;
                continue;
            }
            if in_fence || trimmed.starts_with('|') {
                continue;
            }

            // Byte offset of the first character past the limit.
            let Some((overflow, _)) = line.char_indices().nth(max) else {
                continue;
            };
            let range = TextRange::new(
                TextSize::from((start + overflow) as u32),
                TextSize::from((start + line.len()) as u32),
            );
            diagnostics.push(self.report(
                Some(Location {
                    line: index + 1,
                    column: max + 1,
                    range,
                }),
                format!("Lines must be ≤ {max} characters in LLM-facing files"),
            ));
        }

        diagnostics
    }
}
