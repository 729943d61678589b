//! Pipe tables (`| a | b |` rows with a `|---|---|` delimiter row).
//!
//! Only tables whose rows start with a pipe are recognised; cells are parsed
//! as inline content.

use super::utils::{Line, emit_newline, emit_prefix, emit_trimmed, emit_whitespace};
use crate::parser::inline_parser::parse_inline_text;
use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

fn is_table_row(line: &Line<'_>) -> bool {
    line.indent() <= 3 && line.content().trim_start().starts_with('|')
}

fn is_delimiter_row(line: &Line<'_>) -> bool {
    let trimmed = line.content().trim();
    is_table_row(line)
        && trimmed.contains('-')
        && trimmed
            .chars()
            .all(|c| matches!(c, '|' | ':' | '-' | ' ' | '\t'))
}

pub(crate) fn try_parse_pipe_table(
    lines: &[Line<'_>],
    pos: usize,
    builder: &mut GreenNodeBuilder<'static>,
) -> Option<usize> {
    let header = lines.get(pos)?;
    let delimiter = lines.get(pos + 1)?;
    if !is_table_row(header) || !is_delimiter_row(delimiter) {
        return None;
    }

    let end = lines[pos..]
        .iter()
        .position(|l| !is_table_row(l))
        .map_or(lines.len(), |offset| pos + offset);

    log::debug!("Parsed pipe table at lines {}-{}", pos + 1, end);

    builder.start_node(SyntaxKind::PipeTable.into());
    for (i, row) in lines[pos..end].iter().enumerate() {
        if i == 1 {
            builder.start_node(SyntaxKind::TableSeparator.into());
            emit_prefix(builder, row);
            emit_trimmed(builder, row.content(), SyntaxKind::TableSeparator);
            emit_newline(builder, row);
            builder.finish_node();
        } else {
            emit_table_row(builder, row);
        }
    }
    builder.finish_node(); // PipeTable

    Some(end)
}

fn emit_table_row(builder: &mut GreenNodeBuilder<'static>, row: &Line<'_>) {
    builder.start_node(SyntaxKind::TableRow.into());
    emit_prefix(builder, row);

    let content = row.content();
    let mut cell_start = 0;
    for pipe in split_points(content) {
        emit_cell(builder, &content[cell_start..pipe], cell_start == 0);
        builder.token(SyntaxKind::TablePipe.into(), "|");
        cell_start = pipe + 1;
    }
    emit_cell(builder, &content[cell_start..], true);

    emit_newline(builder, row);
    builder.finish_node(); // TableRow
}

/// Cells are inline content; the whitespace before the first pipe and after
/// the last one is not a cell.
fn emit_cell(builder: &mut GreenNodeBuilder<'static>, text: &str, outer: bool) {
    if outer && text.trim().is_empty() {
        emit_whitespace(builder, text);
        return;
    }

    builder.start_node(SyntaxKind::TableCell.into());
    let leading = text.len() - text.trim_start().len();
    let core = text.trim();
    emit_whitespace(builder, &text[..leading]);
    parse_inline_text(builder, core);
    emit_whitespace(builder, &text[leading + core.len()..]);
    builder.finish_node();
}

/// Byte offsets of cell-separating pipes: not escaped, not inside a code span.
fn split_points(content: &str) -> Vec<usize> {
    let mut points = Vec::new();
    let mut in_code = false;
    let mut escaped = false;
    for (i, c) in content.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '`' => in_code = !in_code,
            '|' if !in_code => points.push(i),
            _ => {}
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::syntax::plain_text;

    #[test]
    fn splits_on_unescaped_pipes() {
        assert_eq!(split_points("| a | b |"), vec![0, 4, 8]);
        assert_eq!(split_points(r"| a \| b |"), vec![0, 9]);
        assert_eq!(split_points("| `a|b` | c |"), vec![0, 8, 12]);
    }

    #[test]
    fn table_cells() {
        let tree = parse("| Name | Rule |\n| :--- | ---: |\n| x | **y** |\n");
        let cells: Vec<_> = tree
            .descendants()
            .filter(|n| n.kind() == SyntaxKind::TableCell)
            .map(|n| plain_text(&n))
            .collect();
        assert_eq!(cells, vec!["Name", "Rule", "x", "y"]);
        assert_eq!(
            tree.descendants()
                .filter(|n| n.kind() == SyntaxKind::TableRow)
                .count(),
            2
        );
    }

    #[test]
    fn header_without_delimiter_is_paragraph() {
        let tree = parse("| not | a table |\nplain\n");
        assert!(
            tree.descendants()
                .all(|n| n.kind() != SyntaxKind::PipeTable)
        );
    }
}
