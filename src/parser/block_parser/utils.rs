//! Shared utilities for block parsing.

use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

/// A physical line as seen by the block currently being parsed.
///
/// Container blocks (block quotes, list items) hand their children the same
/// lines with `start` moved past their markers. Bytes before `emitted` are
/// already in the tree; bytes between `emitted` and `start` are the pending
/// container prefix, written by whichever block consumes the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Line<'a> {
    raw: &'a str,
    emitted: usize,
    start: usize,
    newline: &'a str,
}

impl<'a> Line<'a> {
    /// Content of the line inside the current container.
    pub(crate) fn content(&self) -> &'a str {
        &self.raw[self.start..]
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.content().trim().is_empty()
    }

    /// Number of leading space or tab characters of the content.
    pub(crate) fn indent(&self) -> usize {
        leading_whitespace(self.content())
    }

    /// Same line, with `n` more bytes treated as container prefix.
    pub(crate) fn advance(self, n: usize) -> Self {
        Self {
            start: (self.start + n).min(self.raw.len()),
            ..self
        }
    }

    /// Same line, with everything up to the new content start already
    /// written. Used after a block emits its own marker tokens.
    pub(crate) fn advance_emitted(self, n: usize) -> Self {
        let line = self.advance(n);
        Self {
            emitted: line.start,
            ..line
        }
    }
}

/// Split input into lines, keeping LF or CRLF endings apart from content.
pub(crate) fn split_lines(input: &str) -> Vec<Line<'_>> {
    input
        .split_inclusive('\n')
        .map(|piece| {
            let (raw, newline) = strip_newline(piece);
            Line {
                raw,
                emitted: 0,
                start: 0,
                newline,
            }
        })
        .collect()
}

/// Strip trailing newline (LF or CRLF), returning content and the newline.
pub(crate) fn strip_newline(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}

pub(crate) fn leading_whitespace(text: &str) -> usize {
    text.bytes().take_while(|&b| b == b' ' || b == b'\t').count()
}

/// Count of `fence_char` at the start of `text`, if there are any.
pub(crate) fn get_fence_count(text: &str, fence_char: char) -> Option<usize> {
    let count = text.chars().take_while(|&c| c == fence_char).count();
    (count > 0).then_some(count)
}

/// Write the pending container prefix of `line` (block quote markers and
/// indentation).
pub(crate) fn emit_prefix(builder: &mut GreenNodeBuilder<'static>, line: &Line<'_>) {
    let prefix = &line.raw[line.emitted..line.start];
    let mut rest = prefix;
    while !rest.is_empty() {
        let is_marker = rest.starts_with('>');
        let len = rest
            .find(|c: char| (c == '>') != is_marker)
            .unwrap_or(rest.len());
        let kind = if is_marker {
            SyntaxKind::BlockQuoteMarker
        } else {
            SyntaxKind::WHITESPACE
        };
        builder.token(kind.into(), &rest[..len]);
        rest = &rest[len..];
    }
}

pub(crate) fn emit_newline(builder: &mut GreenNodeBuilder<'static>, line: &Line<'_>) {
    if !line.newline.is_empty() {
        builder.token(SyntaxKind::NEWLINE.into(), line.newline);
    }
}

/// Emit `text` as leading whitespace, a `kind` token for the core, and
/// trailing whitespace. Empty parts are skipped.
pub(crate) fn emit_trimmed(builder: &mut GreenNodeBuilder<'static>, text: &str, kind: SyntaxKind) {
    let leading = leading_whitespace(text);
    let core = text[leading..].trim_end();
    let trailing = &text[leading + core.len()..];

    emit_whitespace(builder, &text[..leading]);
    if !core.is_empty() {
        builder.token(kind.into(), core);
    }
    emit_whitespace(builder, trailing);
}

pub(crate) fn emit_whitespace(builder: &mut GreenNodeBuilder<'static>, text: &str) {
    if !text.is_empty() {
        builder.token(SyntaxKind::WHITESPACE.into(), text);
    }
}

/// Emit a whole line (prefix, content as a single `kind` token, newline).
pub(crate) fn emit_line_as(
    builder: &mut GreenNodeBuilder<'static>,
    line: &Line<'_>,
    kind: SyntaxKind,
) {
    emit_prefix(builder, line);
    if !line.content().is_empty() {
        builder.token(kind.into(), line.content());
    }
    emit_newline(builder, line);
}
