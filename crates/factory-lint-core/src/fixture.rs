//! Helpers for building syntax trees by hand in tests.
//!
//! A [`Fixture`] owns nothing but the source text; every builder locates its
//! node by searching that text, so spans always match what a parser would
//! report for the same snippet.
//!
//! ```
//! use factory_lint_core::fixture::Fixture;
//!
//! let fx = Fixture::new("factory :user do\n  count(1)\nend\n");
//! let count = fx.call("count(1)", vec![fx.int("1")]);
//! let factory = fx.block(
//!     "factory :user do\n  count(1)\nend",
//!     fx.call("factory :user", vec![fx.symbol(":user")]),
//!     Some(count),
//! );
//! assert_eq!(fx.text(&factory), "factory :user do\n  count(1)\nend");
//! ```
//!
//! Builders panic when the snippet is not found: they are meant for tests.

use crate::syntax::{Call, HashLiteral, LiteralKind, Node, NodeKind, Span};

/// Something that resolves to a span of the fixture source.
pub trait Locate {
    /// Resolves the span, or `None` if it does not exist.
    fn locate(&self, source: &str) -> Option<Span>;
}

/// First occurrence of the text.
impl Locate for &str {
    fn locate(&self, source: &str) -> Option<Span> {
        (*self, 0).locate(source)
    }
}

/// `n`th (0-based) occurrence of the text.
impl Locate for (&str, usize) {
    fn locate(&self, source: &str) -> Option<Span> {
        let (needle, nth) = *self;
        let (start, _) = source.match_indices(needle).nth(nth)?;
        Some(Span::new(start, start + needle.len()))
    }
}

impl Locate for Span {
    fn locate(&self, source: &str) -> Option<Span> {
        self.source(source).map(|_| *self)
    }
}

/// Builds nodes whose spans point into a fixed source text.
#[derive(Debug, Clone, Copy)]
pub struct Fixture<'s> {
    source: &'s str,
}

impl<'s> Fixture<'s> {
    /// Creates a fixture over `source`.
    #[must_use]
    pub fn new(source: &'s str) -> Self {
        Self { source }
    }

    /// The fixture source.
    #[must_use]
    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Resolves `at` to a span.
    ///
    /// # Panics
    ///
    /// Panics if the snippet does not occur in the source.
    #[must_use]
    pub fn span(&self, at: impl Locate) -> Span {
        at.locate(self.source)
            .unwrap_or_else(|| panic!("snippet not found in fixture source:\n{}", self.source))
    }

    /// Verbatim text of a node.
    #[must_use]
    pub fn text(&self, node: &Node) -> &'s str {
        node.span.source(self.source).unwrap_or("")
    }

    /// A receiver-less call. The method is the leading identifier of the
    /// snippet; `(`/`)` are recorded when the snippet continues with `(` and
    /// ends with `)`.
    #[must_use]
    pub fn call(&self, at: impl Locate, arguments: Vec<Node>) -> Node {
        let span = self.span(at);
        let text = &self.source[span.start..span.end];
        let method = leading_identifier(text);

        let mut call = Call::bare(method, arguments);
        let rest = &text[method.len()..];
        if rest.starts_with('(') && rest.ends_with(')') {
            let open = span.start + method.len();
            call = call.with_parens(Span::new(open, open + 1), Span::new(span.end - 1, span.end));
        }
        Node::call(span, call)
    }

    /// A call on `receiver`; the method is the identifier following the
    /// receiver and its `.`.
    #[must_use]
    pub fn call_on(&self, at: impl Locate, receiver: Node, arguments: Vec<Node>) -> Node {
        let span = self.span(at);
        let after = receiver.span.end.clamp(span.start, span.end);
        let rest = self.source[after..span.end].trim_start_matches(['.', '&']);
        let method = leading_identifier(rest);
        let call = Call::bare(method, arguments).with_receiver(receiver);
        Node::call(span, call)
    }

    /// A statement sequence.
    #[must_use]
    pub fn seq(&self, statements: Vec<Node>) -> Node {
        Node::begin(statements)
    }

    /// A call with an attached block.
    #[must_use]
    pub fn block(&self, at: impl Locate, call: Node, body: Option<Node>) -> Node {
        Node::block(self.span(at), call, body)
    }

    /// A scalar literal.
    #[must_use]
    pub fn literal(&self, at: impl Locate, kind: LiteralKind) -> Node {
        Node::literal(self.span(at), kind)
    }

    /// An integer literal.
    #[must_use]
    pub fn int(&self, at: impl Locate) -> Node {
        self.literal(at, LiteralKind::Integer)
    }

    /// A symbol literal.
    #[must_use]
    pub fn symbol(&self, at: impl Locate) -> Node {
        self.literal(at, LiteralKind::Symbol)
    }

    /// A string literal.
    #[must_use]
    pub fn string(&self, at: impl Locate) -> Node {
        self.literal(at, LiteralKind::String)
    }

    /// A bare identifier.
    #[must_use]
    pub fn ident(&self, at: impl Locate) -> Node {
        let span = self.span(at);
        let name = self.source[span.start..span.end].to_string();
        Node::new(NodeKind::Identifier(name), span)
    }

    /// An expression whose structure does not matter to the test.
    #[must_use]
    pub fn expr(&self, at: impl Locate) -> Node {
        Node::new(NodeKind::Other(Vec::new()), self.span(at))
    }

    /// A block-pass argument such as `&value_provider`.
    #[must_use]
    pub fn block_pass(&self, at: impl Locate) -> Node {
        let span = self.span(at);
        let operand = (span.len() > 1).then(|| {
            let inner = Span::new(span.start + 1, span.end);
            Box::new(Node::new(
                NodeKind::Identifier(self.source[inner.start..inner.end].to_string()),
                inner,
            ))
        });
        Node::new(NodeKind::BlockPass(operand), span)
    }

    /// A `key: value` pair spanning both nodes.
    #[must_use]
    pub fn pair(&self, key: Node, value: Node) -> Node {
        let span = key.span.join(value.span);
        Node::new(
            NodeKind::Pair {
                key: Box::new(key),
                value: Box::new(value),
            },
            span,
        )
    }

    /// A hash literal; braced when the snippet starts with `{`.
    #[must_use]
    pub fn hash(&self, at: impl Locate, pairs: Vec<Node>) -> Node {
        let span = self.span(at);
        let braces = self.source[span.start..span.end].starts_with('{');
        Node::new(NodeKind::Hash(HashLiteral { pairs, braces }), span)
    }
}

fn leading_identifier(text: &str) -> &str {
    let end = text
        .char_indices()
        .find(|&(_, c)| !(c.is_alphanumeric() || matches!(c, '_' | '?' | '!')))
        .map_or(text.len(), |(i, _)| i);
    &text[..end]
}
