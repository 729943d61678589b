use rowan::Language;

pub mod walk;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // Tokens
    WHITESPACE = 0,
    NEWLINE,
    TEXT,
    EscapedChar,       // \* (the backslash and the escaped character)
    BlockQuoteMarker,  // >
    ListMarker,        // - + * 1. 1)
    HorizontalRule,    // --- or *** or ___
    BlankLine,
    YamlMetadataDelim, // --- or ... around front matter
    YamlContent,
    HtmlContent,
    AutoLink, // <http://example.com>

    // Links and images
    LinkStart,      // [
    LinkDest,       // ](url "title")
    ImageLinkStart, // ![
    ImageAlt,

    // Code
    CodeSpanMarker,  // ` or `` or ```
    CodeFenceMarker, // ``` or ~~~
    CodeInfo,

    // Inline emphasis markers
    EmphasisMarker, // * or _
    StrongMarker,   // ** or __

    // Tables
    TablePipe, // |

    // Composite nodes
    ROOT,
    DOCUMENT,
    YamlMetadata,
    PARAGRAPH,
    BlockQuote,
    List,
    ListItem,
    HtmlBlock,
    ThematicBreak,

    // Inline nodes
    Emphasis, // *text* or _text_
    Strong,   // **text** or __text__
    CodeSpan,
    Link,      // [text](url)
    LinkText,  // text part of link
    ImageLink, // ![alt](url)

    // Headings
    Heading,
    HeadingContent,
    AtxHeadingMarker,       // leading #####
    SetextHeadingUnderline, // ===== or -----

    // Code blocks
    CodeBlock,
    CodeFenceOpen,
    CodeFenceClose,
    CodeContent,

    // Tables
    PipeTable,
    TableRow,
    TableSeparator,
    TableCell,
}

impl SyntaxKind {
    const LAST: SyntaxKind = SyntaxKind::TableCell;

    /// Kinds whose text is literal code and must not be inspected as prose.
    pub fn is_code(self) -> bool {
        matches!(self, SyntaxKind::CodeSpan | SyntaxKind::CodeBlock)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarkdownLanguage {}

impl Language for MarkdownLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 <= SyntaxKind::LAST as u16);
        // SAFETY: `SyntaxKind` is `repr(u16)` with contiguous discriminants
        // starting at zero, and the assert above bounds `raw`.
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<MarkdownLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<MarkdownLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<MarkdownLanguage>;

/// Concatenated prose of a node: text, soft line breaks, escaped characters,
/// autolink targets and image alt text, without any markup.
///
/// Inline code content counts as prose here; callers that must skip code use
/// [`walk::visit_text_runs`] instead.
pub fn plain_text(node: &SyntaxNode) -> String {
    let mut out = String::new();
    for token in node
        .descendants_with_tokens()
        .filter_map(|element| element.into_token())
    {
        match token.kind() {
            SyntaxKind::TEXT | SyntaxKind::NEWLINE | SyntaxKind::ImageAlt => {
                out.push_str(token.text())
            }
            SyntaxKind::EscapedChar => out.push_str(token.text().trim_start_matches('\\')),
            SyntaxKind::AutoLink => out.push_str(
                token
                    .text()
                    .trim_start_matches('<')
                    .trim_end_matches('>'),
            ),
            _ => {}
        }
    }
    out
}

/// Depth of an ATX (`#` count) or setext (`=` is 1, `-` is 2) heading.
pub fn heading_level(heading: &SyntaxNode) -> Option<usize> {
    for child in heading.children() {
        match child.kind() {
            SyntaxKind::AtxHeadingMarker => {
                let marker_text = child.text().to_string();
                return Some(marker_text.trim().chars().filter(|&c| c == '#').count());
            }
            SyntaxKind::SetextHeadingUnderline => {
                let underline = child.text().to_string();
                return Some(if underline.trim_start().starts_with('=') {
                    1
                } else {
                    2
                });
            }
            _ => {}
        }
    }
    None
}

/// Heading text used for vocabulary lookup: trimmed and lowercased.
pub fn normalized_heading_text(heading: &SyntaxNode) -> String {
    plain_text(heading).trim().to_lowercase()
}
