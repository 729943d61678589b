//! Inline links `[text](dest)`, images `![alt](dest)` and autolinks
//! `<scheme:...>`.

use super::code_spans::try_parse_code_span;
use super::parse_inline_text;
use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

/// Byte index of the `]` closing the bracket opened at `text[0]`. Nested
/// brackets, escapes and code spans are skipped.
fn find_closing_bracket(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut pos = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => {
                pos += 2;
                continue;
            }
            b'`' => {
                if let Some((len, _, _)) = try_parse_code_span(&text[pos..]) {
                    pos += len;
                    continue;
                }
            }
            b'[' => depth += 1,
            b']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(pos);
                }
            }
            _ => {}
        }
        pos += 1;
    }
    None
}

/// Byte length of `(dest "title")` at the start of `text`, with balanced
/// parentheses inside the destination.
fn destination_len(text: &str) -> Option<usize> {
    if !text.starts_with('(') {
        return None;
    }
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut pos = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => {
                pos += 2;
                continue;
            }
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos + 1);
                }
            }
            _ => {}
        }
        pos += 1;
    }
    None
}

/// Returns (bytes consumed, link text, destination part starting at `]`).
pub(crate) fn try_parse_inline_link(text: &str) -> Option<(usize, &str, &str)> {
    if !text.starts_with('[') {
        return None;
    }
    let close = find_closing_bracket(text)?;
    let dest_len = destination_len(&text[close + 1..])?;
    let end = close + 1 + dest_len;
    Some((end, &text[1..close], &text[close..end]))
}

/// Returns (bytes consumed, alt text, destination part starting at `]`).
pub(crate) fn try_parse_inline_image(text: &str) -> Option<(usize, &str, &str)> {
    let rest = text.strip_prefix('!')?;
    let (len, alt, dest) = try_parse_inline_link(rest)?;
    Some((len + 1, alt, dest))
}

/// Length of `<scheme:...>`: a scheme of 2-32 letters, digits, `+`, `.` or
/// `-`, then no spaces or `<` up to the closing `>`.
pub(crate) fn try_parse_autolink(text: &str) -> Option<usize> {
    let rest = text.strip_prefix('<')?;
    let scheme_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-')))
        .unwrap_or(rest.len());
    if !(2..=32).contains(&scheme_len)
        || !rest.starts_with(|c: char| c.is_ascii_alphabetic())
        || !rest[scheme_len..].starts_with(':')
    {
        return None;
    }
    let close = rest.find('>')?;
    if rest[..close].contains([' ', '<']) {
        return None;
    }
    Some(close + 2)
}

pub(crate) fn emit_inline_link(builder: &mut GreenNodeBuilder, link_text: &str, dest: &str) {
    builder.start_node(SyntaxKind::Link.into());
    builder.token(SyntaxKind::LinkStart.into(), "[");
    builder.start_node(SyntaxKind::LinkText.into());
    parse_inline_text(builder, link_text);
    builder.finish_node();
    builder.token(SyntaxKind::LinkDest.into(), dest);
    builder.finish_node();
}

pub(crate) fn emit_inline_image(builder: &mut GreenNodeBuilder, alt: &str, dest: &str) {
    builder.start_node(SyntaxKind::ImageLink.into());
    builder.token(SyntaxKind::ImageLinkStart.into(), "![");
    if !alt.is_empty() {
        builder.token(SyntaxKind::ImageAlt.into(), alt);
    }
    builder.token(SyntaxKind::LinkDest.into(), dest);
    builder.finish_node();
}
