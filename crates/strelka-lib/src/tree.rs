//! Nested tree rebuilt from a flat span trace.
//!
//! The recognizer only ever appends spans in post-order. This pass turns
//! that sequence into a Rowan tree by interval containment: walking the
//! spans in order, each one adopts the run of already-built subtrees at the
//! top of the stack whose ranges it contains. Text between adopted children
//! (punctuation, keywords, whitespace) becomes `TEXT` and `WHITESPACE`
//! tokens, so every node's text is exactly its span's text.

use std::fmt::Write;
use std::ops::Range;

use rowan::{GreenNode, GreenToken, Language, NodeOrToken};

use crate::recognizer::{Span, SpanKind};

/// Node kinds are span kinds; the two token kinds follow them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TreeKind {
    Span(SpanKind),
    /// Source text no child span covers, or the whole text of a leaf span.
    Text,
    Whitespace,
}

const TEXT_RAW: u16 = SpanKind::COUNT as u16;
const WHITESPACE_RAW: u16 = TEXT_RAW + 1;

impl TreeKind {
    pub fn to_raw(self) -> u16 {
        match self {
            TreeKind::Span(kind) => kind as u16,
            TreeKind::Text => TEXT_RAW,
            TreeKind::Whitespace => WHITESPACE_RAW,
        }
    }

    pub fn from_raw(raw: u16) -> Option<Self> {
        match raw {
            TEXT_RAW => Some(TreeKind::Text),
            WHITESPACE_RAW => Some(TreeKind::Whitespace),
            _ => SpanKind::from_raw(raw).map(TreeKind::Span),
        }
    }

    pub fn span_kind(self) -> Option<SpanKind> {
        match self {
            TreeKind::Span(kind) => Some(kind),
            TreeKind::Text | TreeKind::Whitespace => None,
        }
    }
}

impl From<TreeKind> for rowan::SyntaxKind {
    fn from(kind: TreeKind) -> Self {
        Self(kind.to_raw())
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrelkaLang {}

impl Language for StrelkaLang {
    type Kind = TreeKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        match TreeKind::from_raw(raw.0) {
            Some(kind) => kind,
            None => panic!("raw kind {} out of range", raw.0),
        }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<StrelkaLang>;

struct Built {
    range: Range<usize>,
    green: GreenNode,
}

/// Rebuilds the tree of a post-order trace.
///
/// Returns `None` unless the spans nest into exactly one root, which is the
/// case for any accepted program and for any single successful production.
pub fn build(spans: &[Span<'_>]) -> Option<SyntaxNode> {
    let mut stack: Vec<Built> = Vec::new();

    for span in spans {
        let range = span.range();
        let split = stack
            .iter()
            .rposition(|built| !contains(&range, &built.range))
            .map_or(0, |last_outside| last_outside + 1);
        let children = stack.split_off(split);
        stack.push(Built {
            green: green_node(span, &children),
            range,
        });
    }

    match stack.as_slice() {
        [root] => Some(SyntaxNode::new_root(root.green.clone())),
        _ => None,
    }
}

fn contains(outer: &Range<usize>, inner: &Range<usize>) -> bool {
    outer.start <= inner.start && inner.end <= outer.end
}

fn green_node(span: &Span<'_>, children: &[Built]) -> GreenNode {
    let kind = TreeKind::Span(span.kind).into();
    let mut elements: Vec<NodeOrToken<GreenNode, GreenToken>> = Vec::new();

    if children.is_empty() {
        if !span.text.is_empty() {
            elements.push(NodeOrToken::Token(GreenToken::new(
                TreeKind::Text.into(),
                span.text,
            )));
        }
        return GreenNode::new(kind, elements);
    }

    let mut at = span.offset;
    for child in children {
        push_gap(&mut elements, span, at..child.range.start);
        elements.push(NodeOrToken::Node(child.green.clone()));
        at = child.range.end;
    }
    push_gap(&mut elements, span, at..span.end());
    GreenNode::new(kind, elements)
}

/// Splits the uncovered text into runs of whitespace and everything else.
fn push_gap(
    elements: &mut Vec<NodeOrToken<GreenNode, GreenToken>>,
    span: &Span<'_>,
    gap: Range<usize>,
) {
    if gap.is_empty() {
        return;
    }
    let text = &span.text[gap.start - span.offset..gap.end - span.offset];
    let mut run_start = 0;
    let mut run_kind: Option<TreeKind> = None;
    for (index, ch) in text.char_indices() {
        let kind = if ch.is_ascii_whitespace() {
            TreeKind::Whitespace
        } else {
            TreeKind::Text
        };
        if let Some(previous) = run_kind
            && previous != kind
        {
            elements.push(NodeOrToken::Token(GreenToken::new(
                previous.into(),
                &text[run_start..index],
            )));
            run_start = index;
        }
        run_kind = Some(kind);
    }
    if let Some(kind) = run_kind {
        elements.push(NodeOrToken::Token(GreenToken::new(
            kind.into(),
            &text[run_start..],
        )));
    }
}

/// Renders an indented outline, one node per line.
///
/// Leaf nodes show their text. With `raw`, the text and whitespace tokens
/// between child nodes are listed as well.
pub fn dump(node: &SyntaxNode, raw: bool) -> String {
    let mut out = String::new();
    dump_node(&mut out, node, 0, raw).expect("String write never fails");
    out
}

fn dump_node(w: &mut impl Write, node: &SyntaxNode, depth: usize, raw: bool) -> std::fmt::Result {
    let indent = "  ".repeat(depth);
    let label = label_of(node.kind());
    if node.children().next().is_none() {
        return writeln!(w, "{indent}{label} {:?}", node.text().to_string());
    }

    writeln!(w, "{indent}{label}")?;
    for element in node.children_with_tokens() {
        match element {
            NodeOrToken::Node(child) => dump_node(w, &child, depth + 1, raw)?,
            NodeOrToken::Token(token) if raw => {
                writeln!(w, "{indent}  {} {:?}", label_of(token.kind()), token.text())?;
            }
            NodeOrToken::Token(_) => {}
        }
    }
    Ok(())
}

fn label_of(kind: TreeKind) -> &'static str {
    match kind {
        TreeKind::Span(kind) => kind.as_str(),
        TreeKind::Text => "TEXT",
        TreeKind::Whitespace => "WHITESPACE",
    }
}
