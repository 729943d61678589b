//! Inline parsing for paragraph, heading and table cell text.
//!
//! Recognises code spans, backslash escapes, autolinks, inline links and
//! images, and `*`/`_` emphasis. Everything else is plain `TEXT`. Markup
//! that fails to close is kept as literal text.

use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

mod code_spans;
mod emphasis;
mod escapes;
mod links;

use code_spans::{emit_code_span, try_parse_code_span};
use emphasis::{emit_emphasis, try_parse_emphasis};
use escapes::try_parse_escape;
use links::{
    emit_inline_image, emit_inline_link, try_parse_autolink, try_parse_inline_image,
    try_parse_inline_link,
};

/// Parse inline elements from text content into `builder`.
pub fn parse_inline_text(builder: &mut GreenNodeBuilder, text: &str) {
    log::trace!(
        "Parsing inline text: {:?} ({} bytes)",
        text.chars().take(40).collect::<String>(),
        text.len()
    );

    let bytes = text.as_bytes();
    let mut pos = 0;
    let mut plain_start = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let consumed = match bytes[pos] {
            b'\\' => try_parse_escape(rest).map(|len| {
                flush_text(builder, &text[plain_start..pos]);
                builder.token(SyntaxKind::EscapedChar.into(), &rest[..len]);
                len
            }),
            b'`' => match try_parse_code_span(rest) {
                Some((len, content, backtick_count)) => {
                    flush_text(builder, &text[plain_start..pos]);
                    emit_code_span(builder, content, backtick_count);
                    Some(len)
                }
                None => {
                    // An unmatched backtick run is literal; skip all of it so
                    // no shorter run inside it is retried.
                    pos += rest.bytes().take_while(|&b| b == b'`').count();
                    continue;
                }
            },
            b'<' => try_parse_autolink(rest).map(|len| {
                flush_text(builder, &text[plain_start..pos]);
                builder.token(SyntaxKind::AutoLink.into(), &rest[..len]);
                len
            }),
            b'!' => try_parse_inline_image(rest).map(|(len, alt, dest)| {
                flush_text(builder, &text[plain_start..pos]);
                emit_inline_image(builder, alt, dest);
                len
            }),
            b'[' => try_parse_inline_link(rest).map(|(len, link_text, dest)| {
                flush_text(builder, &text[plain_start..pos]);
                emit_inline_link(builder, link_text, dest);
                len
            }),
            b'*' | b'_' => match try_parse_emphasis(text, pos) {
                Some(found) => {
                    flush_text(builder, &text[plain_start..pos]);
                    emit_emphasis(builder, text, pos, found);
                    Some(found.len)
                }
                None => {
                    let delim = bytes[pos];
                    pos += rest.bytes().take_while(|&b| b == delim).count();
                    continue;
                }
            },
            _ => None,
        };

        match consumed {
            Some(len) => {
                pos += len;
                plain_start = pos;
            }
            None => pos += rest.chars().next().map_or(1, char::len_utf8),
        }
    }

    flush_text(builder, &text[plain_start..]);
}

fn flush_text(builder: &mut GreenNodeBuilder, text: &str) {
    if !text.is_empty() {
        builder.token(SyntaxKind::TEXT.into(), text);
    }
}
