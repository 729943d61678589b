//! Line-oriented block parser.
//!
//! Blocks are recognised one line at a time by a chain of `try_parse_*`
//! functions, each returning the position after the block it consumed.
//! Container blocks recurse into [`parse_blocks`] with their lines shifted
//! past the container markers. Inline content is parsed as each line is
//! emitted, so the result is a complete tree after a single pass.

use crate::syntax::{SyntaxKind, SyntaxNode};
use rowan::GreenNodeBuilder;

mod blockquotes;
mod code_blocks;
mod headings;
mod horizontal_rules;
mod html_blocks;
mod lists;
mod metadata;
mod paragraphs;
mod tables;
pub(crate) mod utils;

use blockquotes::try_parse_blockquote;
use code_blocks::{try_parse_fenced_code_block, try_parse_indented_code_block};
use headings::try_parse_atx_heading;
use horizontal_rules::try_parse_thematic_break;
use html_blocks::try_parse_html_block;
use lists::try_parse_list;
use metadata::try_parse_yaml_metadata;
use paragraphs::try_parse_paragraph;
use tables::try_parse_pipe_table;
use utils::{Line, emit_line_as, split_lines};

pub struct BlockParser<'a> {
    lines: Vec<Line<'a>>,
    builder: GreenNodeBuilder<'static>,
}

impl<'a> BlockParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: split_lines(input),
            builder: GreenNodeBuilder::new(),
        }
    }

    pub fn parse(mut self) -> SyntaxNode {
        log::debug!("Starting document parse ({} lines)", self.lines.len());

        self.builder.start_node(SyntaxKind::ROOT.into());
        self.builder.start_node(SyntaxKind::DOCUMENT.into());

        let mut pos = 0;
        if let Some(new_pos) = try_parse_yaml_metadata(&self.lines, &mut self.builder) {
            pos = new_pos;
        }
        parse_blocks(&self.lines[pos..], &mut self.builder);

        self.builder.finish_node(); // DOCUMENT
        self.builder.finish_node(); // ROOT

        SyntaxNode::new_root(self.builder.finish())
    }
}

/// Parse a run of lines belonging to one container into block nodes.
pub(crate) fn parse_blocks(lines: &[Line<'_>], builder: &mut GreenNodeBuilder<'static>) {
    let mut pos = 0;

    while pos < lines.len() {
        log::trace!("Parsing line {}: {:?}", pos + 1, lines[pos].content());

        let parsed = try_parse_blank_line(lines, pos, builder)
            .or_else(|| try_parse_fenced_code_block(lines, pos, builder))
            .or_else(|| try_parse_atx_heading(lines, pos, builder))
            .or_else(|| try_parse_thematic_break(lines, pos, builder))
            .or_else(|| try_parse_blockquote(lines, pos, builder))
            .or_else(|| try_parse_list(lines, pos, builder))
            .or_else(|| try_parse_html_block(lines, pos, builder))
            .or_else(|| try_parse_pipe_table(lines, pos, builder))
            .or_else(|| try_parse_indented_code_block(lines, pos, builder))
            .or_else(|| try_parse_paragraph(lines, pos, builder));

        match parsed {
            Some(new_pos) if new_pos > pos => pos = new_pos,
            _ => {
                // Paragraphs accept any non-blank line, so this is unreachable
                // in practice; keep the tree lossless regardless.
                builder.start_node(SyntaxKind::PARAGRAPH.into());
                emit_line_as(builder, &lines[pos], SyntaxKind::TEXT);
                builder.finish_node();
                pos += 1;
            }
        }
    }
}

fn try_parse_blank_line(
    lines: &[Line<'_>],
    pos: usize,
    builder: &mut GreenNodeBuilder<'static>,
) -> Option<usize> {
    let line = lines.get(pos)?;
    if !line.is_blank() {
        return None;
    }

    builder.start_node(SyntaxKind::BlankLine.into());
    emit_line_as(builder, line, SyntaxKind::WHITESPACE);
    builder.finish_node();

    Some(pos + 1)
}

/// Whether `line` opens a block that interrupts a running paragraph.
pub(crate) fn interrupts_paragraph(line: &Line<'_>) -> bool {
    let content = line.content();
    if line.indent() > 3 {
        return false;
    }
    let trimmed = content.trim_start();

    code_blocks::is_fence_open(trimmed)
        || headings::atx_heading_level(content).is_some()
        || horizontal_rules::is_thematic_break(content)
        || trimmed.starts_with('>')
        || lists::interrupts_paragraph(content)
        || html_blocks::is_html_block_start(trimmed)
}
