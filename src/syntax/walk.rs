//! Depth-first traversal over the syntax tree.
//!
//! Both walkers are pre-order and visit nodes and tokens alike. The ancestor
//! variant threads an explicit stack through the recursion, so every call is
//! independent and trees can be walked from several threads at once.

use rowan::{NodeOrToken, TextRange};

use super::{SyntaxElement, SyntaxKind, SyntaxNode};

/// Invoke `callback` for every element of `kind`, in document order.
pub fn visit<F>(tree: &SyntaxNode, kind: SyntaxKind, mut callback: F)
where
    F: FnMut(&SyntaxElement),
{
    visit_ancestors(tree, kind, |element, _| callback(element));
}

/// Like [`visit`], but also hands the callback the chain of ancestor nodes,
/// from `tree` down to the element's parent.
pub fn visit_ancestors<F>(tree: &SyntaxNode, kind: SyntaxKind, mut callback: F)
where
    F: FnMut(&SyntaxElement, &[SyntaxNode]),
{
    let mut stack = Vec::new();
    walk(
        &NodeOrToken::Node(tree.clone()),
        kind,
        &mut stack,
        &mut callback,
    );
}

fn walk<F>(element: &SyntaxElement, kind: SyntaxKind, stack: &mut Vec<SyntaxNode>, callback: &mut F)
where
    F: FnMut(&SyntaxElement, &[SyntaxNode]),
{
    if element.kind() == kind {
        callback(element, stack);
    }

    if let NodeOrToken::Node(node) = element {
        stack.push(node.clone());
        for child in node.children_with_tokens() {
            walk(&child, kind, stack, callback);
        }
        stack.pop();
    }
}

/// A stretch of prose inside one parent node: `TEXT` and escaped characters
/// joined across soft line breaks and the line prefixes between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    /// Prose with escapes resolved, one `\n` per soft break, prefixes dropped.
    pub text: String,
    /// From the start of the first prose token to the end of the last.
    pub range: TextRange,
}

/// Tokens that keep a run going. Any other element ends it.
fn continues_run(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::TEXT
            | SyntaxKind::EscapedChar
            | SyntaxKind::NEWLINE
            | SyntaxKind::WHITESPACE
            | SyntaxKind::BlockQuoteMarker
    )
}

/// Invoke `callback` for every [`TextRun`] in document order, with the
/// ancestor chain from `tree` down to the run's parent.
pub fn visit_text_runs<F>(tree: &SyntaxNode, mut callback: F)
where
    F: FnMut(&TextRun, &[SyntaxNode]),
{
    let mut stack = Vec::new();
    walk_runs(tree, &mut stack, &mut callback);
}

fn walk_runs<F>(node: &SyntaxNode, stack: &mut Vec<SyntaxNode>, callback: &mut F)
where
    F: FnMut(&TextRun, &[SyntaxNode]),
{
    stack.push(node.clone());

    let mut run: Option<TextRun> = None;
    let mut pending_break = false;
    for child in node.children_with_tokens() {
        match child {
            NodeOrToken::Token(token) if continues_run(token.kind()) => {
                let piece = match token.kind() {
                    SyntaxKind::TEXT => token.text(),
                    SyntaxKind::EscapedChar => token.text().trim_start_matches('\\'),
                    SyntaxKind::NEWLINE => {
                        pending_break = run.is_some();
                        continue;
                    }
                    _ => continue,
                };
                match &mut run {
                    Some(current) => {
                        if pending_break {
                            current.text.push('\n');
                        }
                        current.text.push_str(piece);
                        current.range = current.range.cover(token.text_range());
                    }
                    None => {
                        run = Some(TextRun {
                            text: piece.to_string(),
                            range: token.text_range(),
                        })
                    }
                }
                pending_break = false;
            }
            other => {
                if let Some(done) = run.take() {
                    callback(&done, stack);
                }
                pending_break = false;
                if let NodeOrToken::Node(child_node) = other {
                    walk_runs(&child_node, stack, callback);
                }
            }
        }
    }
    if let Some(done) = run.take() {
        callback(&done, stack);
    }

    stack.pop();
}

/// True when any ancestor is inline code or a code block.
pub fn has_code_ancestor(ancestors: &[SyntaxNode]) -> bool {
    ancestors.iter().any(|node| node.kind().is_code())
}
