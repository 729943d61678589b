use super::utils::{
    Line, emit_line_as, emit_newline, emit_prefix, emit_trimmed, emit_whitespace,
    get_fence_count, leading_whitespace,
};
use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

/// Fence character and length if `trimmed` opens a fenced code block.
fn fence_open(trimmed: &str) -> Option<(char, usize)> {
    let (fence_char, fence_count) = if let Some(count) = get_fence_count(trimmed, '`') {
        ('`', count)
    } else if let Some(count) = get_fence_count(trimmed, '~') {
        ('~', count)
    } else {
        return None;
    };

    if fence_count < 3 {
        return None;
    }

    // Backtick fences cannot carry backticks in their info string
    if fence_char == '`' && trimmed[fence_count..].contains('`') {
        return None;
    }

    Some((fence_char, fence_count))
}

pub(crate) fn is_fence_open(trimmed: &str) -> bool {
    fence_open(trimmed).is_some()
}

fn is_fence_close(line: &Line<'_>, fence_char: char, fence_count: usize) -> bool {
    if line.indent() > 3 {
        return false;
    }
    let trimmed = line.content().trim_start();
    match get_fence_count(trimmed, fence_char) {
        Some(count) => count >= fence_count && trimmed[count..].trim().is_empty(),
        None => false,
    }
}

pub(crate) fn try_parse_fenced_code_block(
    lines: &[Line<'_>],
    pos: usize,
    builder: &mut GreenNodeBuilder<'static>,
) -> Option<usize> {
    let line = lines.get(pos)?;
    if line.indent() > 3 {
        return None;
    }

    let content = line.content();
    let indent = leading_whitespace(content);
    let trimmed = &content[indent..];
    let (fence_char, fence_count) = fence_open(trimmed)?;

    log::debug!("Parsing fenced code block at line {}", pos + 1);

    builder.start_node(SyntaxKind::CodeBlock.into());

    // Opening fence
    builder.start_node(SyntaxKind::CodeFenceOpen.into());
    emit_prefix(builder, line);
    emit_whitespace(builder, &content[..indent]);
    builder.token(SyntaxKind::CodeFenceMarker.into(), &trimmed[..fence_count]);
    emit_trimmed(builder, &trimmed[fence_count..], SyntaxKind::CodeInfo);
    emit_newline(builder, line);
    builder.finish_node(); // CodeFenceOpen

    let mut current_pos = pos + 1;
    let content_start = current_pos;
    while current_pos < lines.len() && !is_fence_close(&lines[current_pos], fence_char, fence_count)
    {
        current_pos += 1;
    }

    if current_pos > content_start {
        builder.start_node(SyntaxKind::CodeContent.into());
        for content_line in &lines[content_start..current_pos] {
            emit_line_as(builder, content_line, SyntaxKind::TEXT);
        }
        builder.finish_node(); // CodeContent
    }

    let found_closing = current_pos < lines.len();
    if found_closing {
        let closing = &lines[current_pos];
        let closing_content = closing.content();
        let closing_indent = leading_whitespace(closing_content);
        let closing_trimmed = &closing_content[closing_indent..];
        let closing_count = closing_trimmed
            .chars()
            .take_while(|&c| c == fence_char)
            .count();

        builder.start_node(SyntaxKind::CodeFenceClose.into());
        emit_prefix(builder, closing);
        emit_whitespace(builder, &closing_content[..closing_indent]);
        builder.token(
            SyntaxKind::CodeFenceMarker.into(),
            &closing_trimmed[..closing_count],
        );
        emit_whitespace(builder, &closing_trimmed[closing_count..]);
        emit_newline(builder, closing);
        builder.finish_node(); // CodeFenceClose

        current_pos += 1;
    }

    builder.finish_node(); // CodeBlock

    log::debug!("Parsed fenced code block, found_closing: {}", found_closing);
    Some(current_pos)
}

/// Code indented by four or more columns. Blank lines stay inside the block
/// only when more indented code follows them.
pub(crate) fn try_parse_indented_code_block(
    lines: &[Line<'_>],
    pos: usize,
    builder: &mut GreenNodeBuilder<'static>,
) -> Option<usize> {
    let line = lines.get(pos)?;
    if line.is_blank() || line.indent() < 4 {
        return None;
    }

    let mut end = pos + 1;
    let mut scan = pos + 1;
    while scan < lines.len() {
        let candidate = &lines[scan];
        if candidate.is_blank() {
            scan += 1;
            continue;
        }
        if candidate.indent() < 4 {
            break;
        }
        scan += 1;
        end = scan;
    }

    log::debug!("Parsed indented code block at lines {}-{}", pos + 1, end);

    builder.start_node(SyntaxKind::CodeBlock.into());
    builder.start_node(SyntaxKind::CodeContent.into());
    for code_line in &lines[pos..end] {
        emit_line_as(builder, code_line, SyntaxKind::TEXT);
    }
    builder.finish_node(); // CodeContent
    builder.finish_node(); // CodeBlock

    Some(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::syntax::SyntaxNode;

    fn code_blocks(tree: &SyntaxNode) -> Vec<SyntaxNode> {
        tree.descendants()
            .filter(|n| n.kind() == SyntaxKind::CodeBlock)
            .collect()
    }

    #[test]
    fn fence_openers() {
        assert!(is_fence_open("```"));
        assert!(is_fence_open("~~~ python"));
        assert!(is_fence_open("````rust"));
        assert!(!is_fence_open("``"));
        assert!(!is_fence_open("``` a`b"));
    }

    #[test]
    fn fenced_block_with_info() {
        let tree = parse("```rust\nlet x = 1;\n```\n");
        let blocks = code_blocks(&tree);
        assert_eq!(blocks.len(), 1);
        let info = blocks[0]
            .descendants_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::CodeInfo)
            .unwrap();
        assert_eq!(info.text(), "rust");
    }

    #[test]
    fn closing_fence_must_be_long_enough() {
        let tree = parse("````\n```\nstill code\n````\nafter\n");
        let blocks = code_blocks(&tree);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].text().to_string().contains("still code"));
        assert!(!blocks[0].text().to_string().contains("after"));
    }

    #[test]
    fn unclosed_fence_runs_to_end() {
        let tree = parse("~~~\na\n\nb\n");
        let blocks = code_blocks(&tree);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text().to_string(), "~~~\na\n\nb\n");
    }

    #[test]
    fn indented_block_excludes_trailing_blank_lines() {
        let tree = parse("    one\n\n    two\n\nafter\n");
        let blocks = code_blocks(&tree);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text().to_string(), "    one\n\n    two\n");
    }
}
