use super::utils::{Line, emit_line_as};
use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

/// `<tag`, `</tag`, `<!--`, `<!DOCTYPE` or `<?`. Autolinks such as
/// `<https://example.com>` are inline content, not HTML blocks.
pub(crate) fn is_html_block_start(trimmed: &str) -> bool {
    let Some(rest) = trimmed.strip_prefix('<') else {
        return false;
    };
    let Some(first) = rest.chars().next() else {
        return false;
    };

    if first == '!' || first == '?' {
        return true;
    }

    let name = rest.strip_prefix('/').unwrap_or(rest);
    let tag_len = name
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .unwrap_or(name.len());
    if tag_len == 0 || !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return false;
    }

    // A scheme separator right after the name means an autolink
    !name[tag_len..].starts_with(':')
}

/// Raw HTML runs until the next blank line.
pub(crate) fn try_parse_html_block(
    lines: &[Line<'_>],
    pos: usize,
    builder: &mut GreenNodeBuilder<'static>,
) -> Option<usize> {
    let line = lines.get(pos)?;
    if line.indent() > 3 || !is_html_block_start(line.content().trim_start()) {
        return None;
    }

    let end = lines[pos..]
        .iter()
        .position(|l| l.is_blank())
        .map_or(lines.len(), |offset| pos + offset);

    log::debug!("Parsed HTML block at lines {}-{}", pos + 1, end);

    builder.start_node(SyntaxKind::HtmlBlock.into());
    for html_line in &lines[pos..end] {
        emit_line_as(builder, html_line, SyntaxKind::HtmlContent);
    }
    builder.finish_node();

    Some(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_starts() {
        assert!(is_html_block_start("<div>"));
        assert!(is_html_block_start("</details>"));
        assert!(is_html_block_start("<!-- comment -->"));
        assert!(is_html_block_start("<custom-element attr=1>"));
    }

    #[test]
    fn not_html() {
        assert!(!is_html_block_start("<https://example.com>"));
        assert!(!is_html_block_start("< spaced"));
        assert!(!is_html_block_start("<1>"));
        assert!(!is_html_block_start("text"));
    }
}
