use super::interrupts_paragraph;
use super::utils::{
    Line, emit_newline, emit_prefix, emit_trimmed, emit_whitespace, leading_whitespace,
};
use crate::parser::inline_parser::parse_inline_text;
use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

/// `=` (level 1) or `-` (level 2) underline of a setext heading.
fn setext_underline(line: &Line<'_>) -> Option<usize> {
    if line.indent() > 3 {
        return None;
    }
    let trimmed = line.content().trim();
    let first = trimmed.chars().next()?;
    if !matches!(first, '=' | '-') || !trimmed.chars().all(|c| c == first) {
        return None;
    }
    Some(if first == '=' { 1 } else { 2 })
}

/// A paragraph runs until a blank line or a line that opens another block.
/// When the run ends in a setext underline the lines become a heading.
pub(crate) fn try_parse_paragraph(
    lines: &[Line<'_>],
    pos: usize,
    builder: &mut GreenNodeBuilder<'static>,
) -> Option<usize> {
    let first = lines.get(pos)?;
    if first.is_blank() {
        return None;
    }

    let mut end = pos + 1;
    let mut underline = None;
    while let Some(line) = lines.get(end) {
        if line.is_blank() {
            break;
        }
        if let Some(level) = setext_underline(line) {
            underline = Some(level);
            break;
        }
        if interrupts_paragraph(line) {
            break;
        }
        end += 1;
    }

    match underline {
        Some(level) => {
            log::debug!("Parsed setext heading (h{}) at line {}", level, pos + 1);

            builder.start_node(SyntaxKind::Heading.into());
            builder.start_node(SyntaxKind::HeadingContent.into());
            for line in &lines[pos..end] {
                emit_paragraph_line(builder, line);
            }
            builder.finish_node(); // HeadingContent

            let underline_line = &lines[end];
            builder.start_node(SyntaxKind::SetextHeadingUnderline.into());
            emit_prefix(builder, underline_line);
            emit_trimmed(
                builder,
                underline_line.content(),
                SyntaxKind::SetextHeadingUnderline,
            );
            emit_newline(builder, underline_line);
            builder.finish_node(); // SetextHeadingUnderline

            builder.finish_node(); // Heading
            Some(end + 1)
        }
        None => {
            log::debug!("Parsed paragraph at lines {}-{}", pos + 1, end);

            builder.start_node(SyntaxKind::PARAGRAPH.into());
            for line in &lines[pos..end] {
                emit_paragraph_line(builder, line);
            }
            builder.finish_node(); // PARAGRAPH
            Some(end)
        }
    }
}

/// Leading indentation is not part of the paragraph text; everything after
/// it is inline content.
fn emit_paragraph_line(builder: &mut GreenNodeBuilder<'static>, line: &Line<'_>) {
    emit_prefix(builder, line);
    let content = line.content();
    let indent = leading_whitespace(content);
    emit_whitespace(builder, &content[..indent]);
    parse_inline_text(builder, &content[indent..]);
    emit_newline(builder, line);
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;
    use crate::syntax::{SyntaxKind, heading_level, normalized_heading_text};

    #[test]
    fn setext_headings() {
        let tree = parse("Scope\n=====\n\nNaming Rules\n---\n");
        let headings: Vec<_> = tree
            .descendants()
            .filter(|n| n.kind() == SyntaxKind::Heading)
            .collect();
        assert_eq!(headings.len(), 2);
        assert_eq!(heading_level(&headings[0]), Some(1));
        assert_eq!(normalized_heading_text(&headings[0]), "scope");
        assert_eq!(heading_level(&headings[1]), Some(2));
        assert_eq!(normalized_heading_text(&headings[1]), "naming rules");
    }

    #[test]
    fn blank_line_ends_paragraph() {
        let tree = parse("one\ntwo\n\nthree\n");
        assert_eq!(
            tree.descendants()
                .filter(|n| n.kind() == SyntaxKind::PARAGRAPH)
                .count(),
            2
        );
    }
}
