use super::parse_blocks;
use super::utils::Line;
use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

/// Length of the block quote marker (`>` plus one optional space, after up
/// to three columns of indentation), if the line carries one.
fn blockquote_marker_len(line: &Line<'_>) -> Option<usize> {
    let indent = line.indent();
    if indent > 3 {
        return None;
    }
    let after_indent = &line.content()[indent..];
    let rest = after_indent.strip_prefix('>')?;
    let space = usize::from(rest.starts_with([' ', '\t']));
    Some(indent + 1 + space)
}

/// Consecutive `>` lines form one block quote whose content is parsed as
/// blocks in its own right.
pub(crate) fn try_parse_blockquote(
    lines: &[Line<'_>],
    pos: usize,
    builder: &mut GreenNodeBuilder<'static>,
) -> Option<usize> {
    blockquote_marker_len(lines.get(pos)?)?;

    let mut inner = Vec::new();
    let mut current_pos = pos;
    while let Some(line) = lines.get(current_pos) {
        let Some(marker_len) = blockquote_marker_len(line) else {
            break;
        };
        inner.push(line.advance(marker_len));
        current_pos += 1;
    }

    log::debug!(
        "Parsed block quote at lines {}-{}",
        pos + 1,
        current_pos
    );

    builder.start_node(SyntaxKind::BlockQuote.into());
    parse_blocks(&inner, builder);
    builder.finish_node();

    Some(current_pos)
}
