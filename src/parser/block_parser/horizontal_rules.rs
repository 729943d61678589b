use super::utils::{Line, emit_newline, emit_prefix, emit_trimmed};
use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

/// Three or more `-`, `*` or `_` (all the same), optionally separated by
/// spaces or tabs, indented at most three columns.
pub(crate) fn is_thematic_break(content: &str) -> bool {
    let trimmed = content.trim_start();
    if content.len() - trimmed.len() > 3 {
        return false;
    }

    let Some(first) = trimmed.chars().next() else {
        return false;
    };
    if !matches!(first, '-' | '*' | '_') {
        return false;
    }

    let mut count = 0;
    for c in trimmed.chars() {
        if c == first {
            count += 1;
        } else if c != ' ' && c != '\t' {
            return false;
        }
    }
    count >= 3
}

pub(crate) fn try_parse_thematic_break(
    lines: &[Line<'_>],
    pos: usize,
    builder: &mut GreenNodeBuilder<'static>,
) -> Option<usize> {
    let line = lines.get(pos)?;
    if !is_thematic_break(line.content()) {
        return None;
    }

    builder.start_node(SyntaxKind::ThematicBreak.into());
    emit_prefix(builder, line);
    emit_trimmed(builder, line.content(), SyntaxKind::HorizontalRule);
    emit_newline(builder, line);
    builder.finish_node();

    Some(pos + 1)
}
