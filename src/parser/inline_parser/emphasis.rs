//! `*`/`_` emphasis and strong emphasis.
//!
//! A single delimiter opens emphasis, a run of two or more opens strong
//! emphasis. The closer is searched left to right; code spans and escapes
//! between the delimiters are skipped. Unclosed delimiters stay literal.

use super::code_spans::try_parse_code_span;
use super::parse_inline_text;
use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EmphasisMatch {
    /// Bytes consumed, markers included.
    pub len: usize,
    /// 1 for emphasis, 2 for strong.
    pub level: usize,
    /// Offset of the closing marker, relative to the opener.
    content_end: usize,
}

fn delimiter_run(text: &str, at: usize, delim: u8) -> usize {
    text.as_bytes()[at..]
        .iter()
        .take_while(|&&b| b == delim)
        .count()
}

/// Try to parse emphasis opening at `pos`, which must start a delimiter run.
pub(crate) fn try_parse_emphasis(text: &str, pos: usize) -> Option<EmphasisMatch> {
    let bytes = text.as_bytes();
    let delim = *bytes.get(pos)?;
    if !matches!(delim, b'*' | b'_') {
        return None;
    }
    if pos > 0 && bytes[pos - 1] == delim {
        return None;
    }

    let before = text[..pos].chars().next_back();
    if delim == b'_' && before.is_some_and(char::is_alphanumeric) {
        return None;
    }

    let run = delimiter_run(text, pos, delim);
    let level = if run == 1 { 1 } else { 2 };
    let content_start = pos + level;
    if !text[content_start..]
        .chars()
        .next()
        .is_some_and(|c| !c.is_whitespace())
    {
        return None;
    }

    let close = find_closer(text, content_start, delim, level)?;
    Some(EmphasisMatch {
        len: close + level - pos,
        level,
        content_end: close - pos,
    })
}

/// Byte offset of the closing marker for an opener of `level` delimiters.
fn find_closer(text: &str, start: usize, delim: u8, level: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut pos = start;
    while pos < bytes.len() {
        let b = bytes[pos];
        if b == b'\\' {
            pos += 2;
            continue;
        }
        if b == b'`' {
            match try_parse_code_span(&text[pos..]) {
                Some((len, _, _)) => pos += len,
                None => pos += delimiter_run(text, pos, b'`'),
            }
            continue;
        }
        if b != delim {
            pos += 1;
            continue;
        }

        let run = delimiter_run(text, pos, delim);
        let after = text[pos + run..].chars().next();
        let before = text[..pos].chars().next_back();
        let can_close = pos > start
            && before.is_some_and(|c| !c.is_whitespace())
            && !(delim == b'_' && after.is_some_and(char::is_alphanumeric));
        let fits = if level == 1 { run == 1 } else { run >= 2 };
        if can_close && fits {
            return Some(pos + run - level);
        }
        pos += run;
    }
    None
}

pub(crate) fn emit_emphasis(
    builder: &mut GreenNodeBuilder,
    text: &str,
    pos: usize,
    found: EmphasisMatch,
) {
    let (node, marker) = if found.level == 2 {
        (SyntaxKind::Strong, SyntaxKind::StrongMarker)
    } else {
        (SyntaxKind::Emphasis, SyntaxKind::EmphasisMarker)
    };
    let open_end = pos + found.level;
    let close_start = pos + found.content_end;

    builder.start_node(node.into());
    builder.token(marker.into(), &text[pos..open_end]);
    parse_inline_text(builder, &text[open_end..close_start]);
    builder.token(marker.into(), &text[close_start..pos + found.len]);
    builder.finish_node();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::SyntaxNode;

    fn parse(text: &str) -> SyntaxNode {
        let mut builder = GreenNodeBuilder::new();
        builder.start_node(SyntaxKind::PARAGRAPH.into());
        parse_inline_text(&mut builder, text);
        builder.finish_node();
        SyntaxNode::new_root(builder.finish())
    }

    fn count(node: &SyntaxNode, kind: SyntaxKind) -> usize {
        node.descendants().filter(|n| n.kind() == kind).count()
    }

    #[test]
    fn emphasis_and_strong() {
        let found = try_parse_emphasis("*a* b", 0).unwrap();
        assert_eq!((found.len, found.level), (3, 1));
        let found = try_parse_emphasis("x __bold__", 2).unwrap();
        assert_eq!((found.len, found.level), (8, 2));
    }

    #[test]
    fn opener_followed_by_space_is_literal() {
        assert_eq!(try_parse_emphasis("* not", 0), None);
        assert_eq!(try_parse_emphasis("** not**", 0), None);
    }

    #[test]
    fn closer_preceded_by_space_is_skipped() {
        assert_eq!(try_parse_emphasis("*a *", 0), None);
        let found = try_parse_emphasis("*a * b*", 0).unwrap();
        assert_eq!(found.len, 7);
    }

    #[test]
    fn intraword_underscore_is_literal() {
        assert_eq!(try_parse_emphasis("snake_case_name", 5), None);
        assert_eq!(try_parse_emphasis("_a_b", 0), None);
    }

    #[test]
    fn code_span_hides_closer() {
        assert_eq!(try_parse_emphasis("*a `*` b", 0), None);
    }

    #[test]
    fn nested_strong_inside_emphasis() {
        let node = parse("*a **b** c*");
        assert_eq!(count(&node, SyntaxKind::Emphasis), 1);
        assert_eq!(count(&node, SyntaxKind::Strong), 1);
        assert_eq!(node.text().to_string(), "*a **b** c*");
    }

    #[test]
    fn triple_run_is_strong_around_emphasis() {
        let node = parse("***x***");
        assert_eq!(count(&node, SyntaxKind::Strong), 1);
        assert_eq!(count(&node, SyntaxKind::Emphasis), 1);
        assert_eq!(node.text().to_string(), "***x***");
    }
}
