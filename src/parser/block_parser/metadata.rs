use super::utils::{Line, emit_line_as, emit_newline, emit_trimmed};
use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

fn is_opening_delim(line: &Line<'_>) -> bool {
    line.content().trim_end() == "---"
}

fn is_closing_delim(line: &Line<'_>) -> bool {
    matches!(line.content().trim_end(), "---" | "...")
}

/// YAML front matter: a `---` line at the very start of the document, closed
/// by `---` or `...`. Without a closing delimiter there is no front matter.
pub(crate) fn try_parse_yaml_metadata(
    lines: &[Line<'_>],
    builder: &mut GreenNodeBuilder<'static>,
) -> Option<usize> {
    let opening = lines.first()?;
    if !is_opening_delim(opening) {
        return None;
    }

    let close = lines.iter().skip(1).position(is_closing_delim)? + 1;

    log::debug!("Parsed YAML front matter ({} lines)", close + 1);

    builder.start_node(SyntaxKind::YamlMetadata.into());
    emit_trimmed(builder, opening.content(), SyntaxKind::YamlMetadataDelim);
    emit_newline(builder, opening);
    for line in &lines[1..close] {
        emit_line_as(builder, line, SyntaxKind::YamlContent);
    }
    let closing = &lines[close];
    emit_trimmed(builder, closing.content(), SyntaxKind::YamlMetadataDelim);
    emit_newline(builder, closing);
    builder.finish_node();

    Some(close + 1)
}
