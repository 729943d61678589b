//! Bullet and ordered lists.
//!
//! A list item owns its marker line plus every following line indented to
//! the item's content column, blank lines that precede such lines, and lazy
//! paragraph continuations. Item content is parsed recursively as blocks.

use super::utils::{Line, emit_prefix, emit_whitespace, leading_whitespace};
use super::{interrupts_paragraph as interrupts, parse_blocks};
use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MarkerKind {
    Bullet(char),
    Ordered(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListMarker {
    pub kind: MarkerKind,
    /// Columns of indentation before the marker.
    pub indent: usize,
    /// Byte length of the marker itself (`-`, `10.`).
    pub marker_len: usize,
    /// Offset of the item content from the start of the line content.
    pub content_offset: usize,
    /// Ordered list start number, for paragraph interruption rules.
    pub number: Option<u64>,
}

/// Parse a list marker at the start of `content`.
pub(crate) fn try_parse_list_marker(content: &str) -> Option<ListMarker> {
    let indent = leading_whitespace(content);
    if indent > 3 {
        return None;
    }
    let trimmed = &content[indent..];
    let first = trimmed.chars().next()?;

    let (kind, marker_len, number) = if matches!(first, '-' | '*' | '+') {
        (MarkerKind::Bullet(first), 1, None)
    } else {
        let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || digits > 9 {
            return None;
        }
        let delim = trimmed[digits..].chars().next()?;
        if delim != '.' && delim != ')' {
            return None;
        }
        let number = trimmed[..digits].parse().ok();
        (MarkerKind::Ordered(delim), digits + 1, number)
    };

    let after = &trimmed[marker_len..];
    if !after.is_empty() && !after.starts_with([' ', '\t']) {
        return None;
    }

    let spaces = leading_whitespace(after);
    let content_offset = if after.trim().is_empty() || spaces > 4 {
        // Empty item or indented code inside the item: content starts one
        // column after the marker.
        indent + marker_len + spaces.min(1)
    } else {
        indent + marker_len + spaces
    };

    Some(ListMarker {
        kind,
        indent,
        marker_len,
        content_offset,
        number,
    })
}

/// Bullet items and ordered items starting at 1 may interrupt a paragraph,
/// provided they are not empty.
pub(crate) fn interrupts_paragraph(content: &str) -> bool {
    match try_parse_list_marker(content) {
        Some(marker) => {
            let has_content = !content[marker.content_offset.min(content.len())..]
                .trim()
                .is_empty();
            has_content
                && match marker.kind {
                    MarkerKind::Bullet(_) => true,
                    MarkerKind::Ordered(_) => marker.number == Some(1),
                }
        }
        None => false,
    }
}

pub(crate) fn try_parse_list(
    lines: &[Line<'_>],
    pos: usize,
    builder: &mut GreenNodeBuilder<'static>,
) -> Option<usize> {
    let first = try_parse_list_marker(lines.get(pos)?.content())?;

    log::debug!("Parsing list at line {}", pos + 1);

    builder.start_node(SyntaxKind::List.into());

    let mut current_pos = pos;
    let mut marker = first;
    loop {
        current_pos = emit_list_item(lines, current_pos, marker, builder);

        // Blank lines between items belong to the list; trailing ones do not.
        let mut next = current_pos;
        while lines.get(next).is_some_and(|l| l.is_blank()) {
            next += 1;
        }
        let Some(next_marker) = lines
            .get(next)
            .and_then(|l| try_parse_list_marker(l.content()))
        else {
            break;
        };
        if next_marker.kind != first.kind {
            break;
        }

        for blank in &lines[current_pos..next] {
            builder.start_node(SyntaxKind::BlankLine.into());
            super::utils::emit_line_as(builder, blank, SyntaxKind::WHITESPACE);
            builder.finish_node();
        }
        current_pos = next;
        marker = next_marker;
    }

    builder.finish_node(); // List
    Some(current_pos)
}

fn emit_list_item(
    lines: &[Line<'_>],
    pos: usize,
    marker: ListMarker,
    builder: &mut GreenNodeBuilder<'static>,
) -> usize {
    let end = item_end(lines, pos, marker);

    builder.start_node(SyntaxKind::ListItem.into());

    let first = &lines[pos];
    let content = first.content();
    emit_prefix(builder, first);
    emit_whitespace(builder, &content[..marker.indent]);
    builder.token(
        SyntaxKind::ListMarker.into(),
        &content[marker.indent..marker.indent + marker.marker_len],
    );
    let content_offset = marker.content_offset.min(content.len());
    emit_whitespace(
        builder,
        &content[marker.indent + marker.marker_len..content_offset],
    );

    let mut inner = Vec::with_capacity(end - pos);
    inner.push(first.advance_emitted(content_offset));
    for line in &lines[pos + 1..end] {
        let strip = line.indent().min(marker.content_offset);
        inner.push(line.advance(strip));
    }

    parse_blocks(&inner, builder);

    builder.finish_node(); // ListItem
    end
}

/// Position after the last line belonging to the item that starts at `pos`.
fn item_end(lines: &[Line<'_>], pos: usize, marker: ListMarker) -> usize {
    let mut end = pos + 1;
    let mut scan = pos + 1;
    let first = lines[pos].content();
    let mut previous_blank = first[marker.content_offset.min(first.len())..]
        .trim()
        .is_empty();

    while let Some(line) = lines.get(scan) {
        if line.is_blank() {
            previous_blank = true;
            scan += 1;
            continue;
        }

        let indented = line.indent() >= marker.content_offset;
        let lazy = !previous_blank
            && try_parse_list_marker(line.content()).is_none()
            && !interrupts(line);
        if !indented && !lazy {
            break;
        }

        previous_blank = false;
        scan += 1;
        end = scan;
    }

    end
}
