//! Syntax tree consumed by rules.
//!
//! The tree is produced by the host (a Ruby parser adapter, a test fixture)
//! and handed to rules read-only. Node kinds form a closed set: rules match
//! on [`NodeKind`] instead of looking up node types by name.

use serde::{Deserialize, Serialize};

/// Half-open byte range `start..end` into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates a zero-width span at `offset`.
    #[must_use]
    pub fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Length of the span in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest span covering both `self` and `other`.
    #[must_use]
    pub fn join(self, other: Self) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Returns true if the two spans share at least one byte.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns the verbatim text covered by this span, if it lies in `source`.
    #[must_use]
    pub fn source<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

/// A syntax tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// What kind of construct this node is.
    pub kind: NodeKind,
    /// Source range of the whole construct.
    pub span: Span,
}

/// Closed set of node kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Method call without an attached block: `count 1`, `count(1)`, `a.b`.
    Call(Call),
    /// Method call with an attached `{ }` or `do ... end` block.
    Block(Block),
    /// Sequence of statements.
    Begin(Vec<Node>),
    /// Hash literal, with or without surrounding braces.
    Hash(HashLiteral),
    /// `key: value` or `key => value` inside a hash.
    Pair {
        /// Key expression.
        key: Box<Node>,
        /// Value expression.
        value: Box<Node>,
    },
    /// Block-pass argument: `&value_provider`. Anonymous `&` has no operand.
    BlockPass(Option<Box<Node>>),
    /// Scalar literal.
    Literal(LiteralKind),
    /// Bare local or variable reference.
    Identifier(String),
    /// Any other construct. Children are kept so traversal can reach
    /// nested blocks.
    Other(Vec<Node>),
}

/// A method call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Explicit receiver, `None` for `foo 1` and `foo(1)`.
    pub receiver: Option<Box<Node>>,
    /// Method name.
    pub method: String,
    /// Arguments in source order.
    pub arguments: Vec<Node>,
    /// Location of `(` and `)` when the arguments are parenthesized.
    pub parens: Option<Delimiters>,
}

/// Spans of a pair of opening and closing delimiter tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    /// Opening token.
    pub open: Span,
    /// Closing token.
    pub close: Span,
}

/// A call with an attached block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The invoked call. Normally a [`NodeKind::Call`].
    pub call: Box<Node>,
    /// Block parameters (`|user, evaluator|`).
    pub parameters: Vec<Node>,
    /// Block body; `None` for an empty block.
    pub body: Option<Box<Node>>,
}

/// A hash literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashLiteral {
    /// `Pair` nodes in source order.
    pub pairs: Vec<Node>,
    /// Whether the literal is written with `{` `}`.
    pub braces: bool,
}

/// Kinds of scalar literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// `1`
    Integer,
    /// `1.5`
    Float,
    /// `"text"`
    String,
    /// `:name`
    Symbol,
    /// `nil`
    Nil,
    /// `true`
    True,
    /// `false`
    False,
}

impl Node {
    /// Creates a node of the given kind.
    #[must_use]
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates a call node.
    #[must_use]
    pub fn call(span: Span, call: Call) -> Self {
        Self::new(NodeKind::Call(call), span)
    }

    /// Creates a block node.
    #[must_use]
    pub fn block(span: Span, call: Node, body: Option<Node>) -> Self {
        Self::new(
            NodeKind::Block(Block {
                call: Box::new(call),
                parameters: Vec::new(),
                body: body.map(Box::new),
            }),
            span,
        )
    }

    /// Creates a statement sequence spanning its first and last statement.
    ///
    /// An empty sequence gets an empty span at offset 0.
    #[must_use]
    pub fn begin(statements: Vec<Node>) -> Self {
        let span = match (statements.first(), statements.last()) {
            (Some(first), Some(last)) => first.span.join(last.span),
            _ => Span::default(),
        };
        Self::new(NodeKind::Begin(statements), span)
    }

    /// Creates a literal node.
    #[must_use]
    pub fn literal(span: Span, kind: LiteralKind) -> Self {
        Self::new(NodeKind::Literal(kind), span)
    }

    /// Returns the call if this node is a [`NodeKind::Call`].
    #[must_use]
    pub fn as_call(&self) -> Option<&Call> {
        match &self.kind {
            NodeKind::Call(call) => Some(call),
            _ => None,
        }
    }

    /// Returns the block if this node is a [`NodeKind::Block`].
    #[must_use]
    pub fn as_block(&self) -> Option<&Block> {
        match &self.kind {
            NodeKind::Block(block) => Some(block),
            _ => None,
        }
    }

    /// Direct children in source order.
    #[must_use]
    pub fn children(&self) -> Vec<&Node> {
        match &self.kind {
            NodeKind::Call(call) => call
                .receiver
                .as_deref()
                .into_iter()
                .chain(call.arguments.iter())
                .collect(),
            NodeKind::Block(block) => std::iter::once(block.call.as_ref())
                .chain(block.parameters.iter())
                .chain(block.body.as_deref())
                .collect(),
            NodeKind::Begin(nodes) | NodeKind::Other(nodes) => nodes.iter().collect(),
            NodeKind::Hash(hash) => hash.pairs.iter().collect(),
            NodeKind::Pair { key, value } => vec![key.as_ref(), value.as_ref()],
            NodeKind::BlockPass(value) => value.as_deref().into_iter().collect(),
            NodeKind::Literal(_) | NodeKind::Identifier(_) => Vec::new(),
        }
    }

    /// All nodes of the subtree in pre-order, starting with `self`.
    #[must_use]
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children().into_iter().rev());
        }
        out
    }
}

impl Call {
    /// Creates a receiver-less call without parentheses.
    #[must_use]
    pub fn bare(method: impl Into<String>, arguments: Vec<Node>) -> Self {
        Self {
            receiver: None,
            method: method.into(),
            arguments,
            parens: None,
        }
    }

    /// Sets the receiver.
    #[must_use]
    pub fn with_receiver(mut self, receiver: Node) -> Self {
        self.receiver = Some(Box::new(receiver));
        self
    }

    /// Sets the parenthesis delimiters.
    #[must_use]
    pub fn with_parens(mut self, open: Span, close: Span) -> Self {
        self.parens = Some(Delimiters { open, close });
        self
    }

    /// Span from the first argument's start to the last argument's end.
    #[must_use]
    pub fn arguments_span(&self) -> Option<Span> {
        let first = self.arguments.first()?;
        let last = self.arguments.last()?;
        Some(first.span.join(last.span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(start: usize, end: usize) -> Node {
        Node::literal(Span::new(start, end), LiteralKind::Integer)
    }

    #[test]
    fn span_source_and_join() {
        let src = "count(1)";
        let a = Span::new(0, 5);
        let b = Span::new(6, 7);
        assert_eq!(a.source(src), Some("count"));
        assert_eq!(a.join(b), Span::new(0, 7));
        assert_eq!(Span::new(3, 100).source(src), None);
    }

    #[test]
    fn span_overlap_excludes_touching() {
        assert!(Span::new(0, 3).overlaps(&Span::new(2, 4)));
        assert!(!Span::new(0, 3).overlaps(&Span::new(3, 4)));
        // Point insertions only collide with the interior of a range.
        assert!(Span::point(3).overlaps(&Span::new(0, 5)));
        assert!(!Span::point(0).overlaps(&Span::new(0, 5)));
        assert!(!Span::point(5).overlaps(&Span::new(0, 5)));
    }

    #[test]
    fn descendants_are_pre_order() {
        // foo 1, 2
        let call = Node::call(Span::new(0, 8), Call::bare("foo", vec![int(4, 5), int(7, 8)]));
        let spans: Vec<Span> = call.descendants().iter().map(|n| n.span).collect();
        assert_eq!(
            spans,
            vec![Span::new(0, 8), Span::new(4, 5), Span::new(7, 8)]
        );
    }

    #[test]
    fn begin_spans_its_statements() {
        let seq = Node::begin(vec![int(2, 3), int(10, 12)]);
        assert_eq!(seq.span, Span::new(2, 12));
        assert_eq!(Node::begin(Vec::new()).span, Span::default());
    }

    #[test]
    fn arguments_span_covers_all_arguments() {
        let call = Call::bare("foo", vec![int(4, 5), int(7, 8)]);
        assert_eq!(call.arguments_span(), Some(Span::new(4, 8)));
        assert_eq!(Call::bare("foo", Vec::new()).arguments_span(), None);
    }
}
