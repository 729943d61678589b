//! Parser module containing block and inline parsers.

use crate::syntax::SyntaxNode;

pub mod block_parser;
pub mod inline_parser;

pub use block_parser::BlockParser;
pub use inline_parser::parse_inline_text;

/// Parses a Markdown document into a lossless syntax tree.
///
/// Both LF and CRLF line endings are kept as `NEWLINE` tokens, so text
/// ranges in the tree are byte offsets into `input` as given.
///
/// # Examples
///
/// ```rust
/// use stricture::parser::parse;
///
/// let tree = parse("# Scope\n\nValidate inputs.\n");
/// assert_eq!(tree.text().to_string(), "# Scope\n\nValidate inputs.\n");
/// ```
pub fn parse(input: &str) -> SyntaxNode {
    BlockParser::new(input).parse()
}
