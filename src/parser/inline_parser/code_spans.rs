/// Parsing for inline code spans (`code`)
use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

/// Try to parse a code span starting at the current position.
/// Returns (bytes consumed, content, backtick count), or None if the opening
/// run has no matching closing run.
pub(crate) fn try_parse_code_span(text: &str) -> Option<(usize, &str, usize)> {
    let opening_backticks = text.bytes().take_while(|&b| b == b'`').count();
    if opening_backticks == 0 {
        return None;
    }

    let rest = &text[opening_backticks..];

    let mut pos = 0;
    while pos < rest.len() {
        if rest[pos..].starts_with('`') {
            let closing_backticks = rest[pos..].bytes().take_while(|&b| b == b'`').count();

            if closing_backticks == opening_backticks {
                let code_content = &rest[..pos];
                let total_len = opening_backticks + pos + closing_backticks;
                return Some((total_len, code_content, opening_backticks));
            }
            pos += closing_backticks;
        } else {
            pos += rest[pos..].chars().next()?.len_utf8();
        }
    }

    None
}

pub(crate) fn emit_code_span(builder: &mut GreenNodeBuilder, content: &str, backtick_count: usize) {
    builder.start_node(SyntaxKind::CodeSpan.into());

    let marker = "`".repeat(backtick_count);
    builder.token(SyntaxKind::CodeSpanMarker.into(), &marker);
    if !content.is_empty() {
        builder.token(SyntaxKind::TEXT.into(), content);
    }
    builder.token(SyntaxKind::CodeSpanMarker.into(), &marker);

    builder.finish_node();
}
