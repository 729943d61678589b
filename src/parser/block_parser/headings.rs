//! ATX heading parsing utilities.

use super::utils::{Line, emit_newline, emit_prefix, emit_whitespace, leading_whitespace};
use crate::parser::inline_parser::parse_inline_text;
use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

/// Heading level (1-6) if `content` is an ATX heading line.
pub(crate) fn atx_heading_level(content: &str) -> Option<usize> {
    let trimmed = content.trim_start();

    // Check leading spaces (max 3)
    let leading_spaces = content.len() - trimmed.len();
    if leading_spaces > 3 {
        return None;
    }

    let hash_count = trimmed.chars().take_while(|&c| c == '#').count();
    if hash_count == 0 || hash_count > 6 {
        return None;
    }

    // After hashes, must be end of line, space, or tab
    let after_hashes = &trimmed[hash_count..];
    if !after_hashes.is_empty() && !after_hashes.starts_with(' ') && !after_hashes.starts_with('\t')
    {
        return None;
    }

    Some(hash_count)
}

pub(crate) fn try_parse_atx_heading(
    lines: &[Line<'_>],
    pos: usize,
    builder: &mut GreenNodeBuilder<'static>,
) -> Option<usize> {
    let line = lines.get(pos)?;
    let content = line.content();
    let level = atx_heading_level(content)?;

    log::debug!("Parsed ATX heading (h{}) at line {}", level, pos + 1);

    builder.start_node(SyntaxKind::Heading.into());
    emit_prefix(builder, line);

    let indent = leading_whitespace(content);
    emit_whitespace(builder, &content[..indent]);

    // Marker node for the hashes, so the level is readable from the tree
    builder.start_node(SyntaxKind::AtxHeadingMarker.into());
    builder.token(
        SyntaxKind::AtxHeadingMarker.into(),
        &content[indent..indent + level],
    );
    builder.finish_node();

    let after_marker = &content[indent + level..];
    let gap = leading_whitespace(after_marker);
    emit_whitespace(builder, &after_marker[..gap]);

    let body_region = &after_marker[gap..];
    let body = body_region.trim_end();
    let trailing = &body_region[body.len()..];
    let (text, closing) = split_closing_sequence(body);

    builder.start_node(SyntaxKind::HeadingContent.into());
    parse_inline_text(builder, text);
    builder.finish_node();

    if !closing.is_empty() {
        let hashes = closing.trim_start();
        emit_whitespace(builder, &closing[..closing.len() - hashes.len()]);
        builder.token(SyntaxKind::AtxHeadingMarker.into(), hashes);
    }
    emit_whitespace(builder, trailing);
    emit_newline(builder, line);

    builder.finish_node(); // Heading
    Some(pos + 1)
}

/// Split an optional closing `#` sequence off the heading body. The closing
/// part keeps the whitespace that separates it from the text.
fn split_closing_sequence(body: &str) -> (&str, &str) {
    let without_hashes = body.trim_end_matches('#');
    if without_hashes.len() == body.len() {
        return (body, "");
    }
    if without_hashes.is_empty() {
        return ("", body);
    }
    if without_hashes.ends_with([' ', '\t']) {
        let text = without_hashes.trim_end();
        return (text, &body[text.len()..]);
    }
    (body, "")
}
