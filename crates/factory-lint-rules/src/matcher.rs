//! Structural predicates over factory definition trees.
//!
//! Two shapes matter:
//!
//! - a candidate call: `name value...` with no receiver and a name outside
//!   the reserved sets;
//! - an attribute block: `factory|trait|transient|ignore ... do <body> end`
//!   called without a receiver.

use crate::reserved::{is_attribute_defining, is_reserved};
use factory_lint_core::{Call, Node, NodeKind};

/// An attribute definition block and the statements checked inside it.
#[derive(Debug, Clone)]
pub struct AttributeBlock<'a> {
    /// The whole block node.
    pub node: &'a Node,
    /// The defining method: `factory`, `trait`, `transient` or `ignore`.
    pub method: &'a str,
    /// Call statements of the body, in source order.
    pub terminals: Vec<&'a Node>,
}

/// Returns the call if `node` is a receiver-less, unreserved call.
#[must_use]
pub fn candidate_call(node: &Node) -> Option<&Call> {
    match &node.kind {
        NodeKind::Call(call) if call.receiver.is_none() && !is_reserved(&call.method) => {
            Some(call)
        }
        _ => None,
    }
}

/// Returns true if `node` is a receiver-less, unreserved call.
#[must_use]
pub fn is_candidate_call(node: &Node) -> bool {
    candidate_call(node).is_some()
}

/// Matches a single block node against the attribute block shape.
#[must_use]
pub fn attribute_block(node: &Node) -> Option<AttributeBlock<'_>> {
    let block = node.as_block()?;
    let call = block.call.as_call()?;
    if call.receiver.is_some() || !is_attribute_defining(&call.method) {
        return None;
    }

    Some(AttributeBlock {
        node,
        method: &call.method,
        terminals: terminal_calls(block.body.as_deref()),
    })
}

/// Finds every attribute block in `subtree`, `subtree` included, in
/// pre-order.
#[must_use]
pub fn find_attribute_blocks(subtree: &Node) -> Vec<AttributeBlock<'_>> {
    subtree
        .descendants()
        .into_iter()
        .filter_map(attribute_block)
        .collect()
}

/// Call statements of a block body.
///
/// A sequence body contributes each statement that is a call. A body that is
/// a single call contributes that call. Any other body contributes nothing.
fn terminal_calls(body: Option<&Node>) -> Vec<&Node> {
    let Some(body) = body else {
        return Vec::new();
    };

    match &body.kind {
        NodeKind::Begin(statements) => statements
            .iter()
            .filter(|s| matches!(s.kind, NodeKind::Call(_)))
            .collect(),
        NodeKind::Call(_) => vec![body],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factory_lint_core::fixture::Fixture;
    use factory_lint_core::LiteralKind;

    #[test]
    fn bare_unreserved_call_is_candidate() {
        let fx = Fixture::new("count 1");
        assert!(is_candidate_call(&fx.call("count 1", vec![fx.int("1")])));
    }

    #[test]
    fn reserved_call_is_not_candidate() {
        let fx = Fixture::new("association :author\nsequence(:email)");
        assert!(!is_candidate_call(
            &fx.call("association :author", vec![fx.symbol(":author")])
        ));
        assert!(!is_candidate_call(
            &fx.call("sequence(:email)", vec![fx.symbol(":email")])
        ));
    }

    #[test]
    fn call_with_receiver_is_not_candidate() {
        let fx = Fixture::new("user.count 1");
        let node = fx.call_on("user.count 1", fx.ident("user"), vec![fx.int("1")]);
        assert!(!is_candidate_call(&node));
    }

    #[test]
    fn non_call_is_not_candidate() {
        let fx = Fixture::new("count");
        assert!(!is_candidate_call(&fx.ident("count")));
    }

    #[test]
    fn sequence_body_yields_every_call_statement() {
        let src = "factory :user do\n  name 'x'\n  1\n  age 2\nend";
        let fx = Fixture::new(src);
        let body = fx.seq(vec![
            fx.call("name 'x'", vec![fx.string("'x'")]),
            fx.int(("1", 0)),
            fx.call("age 2", vec![fx.int("2")]),
        ]);
        let tree = fx.block(
            src,
            fx.call("factory :user", vec![fx.symbol(":user")]),
            Some(body),
        );

        let blocks = find_attribute_blocks(&tree);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].method, "factory");
        let texts: Vec<&str> = blocks[0].terminals.iter().map(|n| fx.text(n)).collect();
        assert_eq!(texts, vec!["name 'x'", "age 2"]);
    }

    #[test]
    fn single_call_body_is_sole_terminal() {
        let src = "trait :admin do\n  admin true\nend";
        let fx = Fixture::new(src);
        let tree = fx.block(
            src,
            fx.call("trait :admin", vec![fx.symbol(":admin")]),
            Some(fx.call(
                "admin true",
                vec![fx.literal("true", LiteralKind::True)],
            )),
        );

        let blocks = find_attribute_blocks(&tree);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].terminals.len(), 1);
        assert_eq!(fx.text(blocks[0].terminals[0]), "admin true");
    }

    #[test]
    fn single_non_call_body_yields_nothing() {
        let src = "factory :user do\n  1\nend";
        let fx = Fixture::new(src);
        let tree = fx.block(
            src,
            fx.call("factory :user", vec![fx.symbol(":user")]),
            Some(fx.int("1")),
        );

        let blocks = find_attribute_blocks(&tree);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].terminals.is_empty());
    }

    #[test]
    fn empty_block_yields_nothing() {
        let src = "factory :user do\nend";
        let fx = Fixture::new(src);
        let tree = fx.block(src, fx.call("factory :user", vec![fx.symbol(":user")]), None);

        let blocks = find_attribute_blocks(&tree);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].terminals.is_empty());
    }

    #[test]
    fn finds_nested_blocks() {
        let src = "factory :order do\n  trait(:paid) do\n    data(foo: 1)\n  end\nend";
        let fx = Fixture::new(src);
        let data = fx.call(
            "data(foo: 1)",
            vec![fx.hash("foo: 1", vec![fx.pair(fx.symbol("foo"), fx.int("1"))])],
        );
        let trait_block = fx.block(
            "trait(:paid) do\n    data(foo: 1)\n  end",
            fx.call("trait(:paid)", vec![fx.symbol(":paid")]),
            Some(data),
        );
        let tree = fx.block(
            src,
            fx.call("factory :order", vec![fx.symbol(":order")]),
            Some(trait_block),
        );

        let blocks = find_attribute_blocks(&tree);
        let methods: Vec<&str> = blocks.iter().map(|b| b.method).collect();
        assert_eq!(methods, vec!["factory", "trait"]);
        // The factory body is a block, not a call.
        assert!(blocks[0].terminals.is_empty());
        assert_eq!(fx.text(blocks[1].terminals[0]), "data(foo: 1)");
    }

    #[test]
    fn ignores_other_blocks_and_receivers() {
        let src = "FactoryBot.define do\n  after(:create) do\n    count 1\n  end\nend";
        let fx = Fixture::new(src);
        let after = fx.block(
            "after(:create) do\n    count 1\n  end",
            fx.call("after(:create)", vec![fx.symbol(":create")]),
            Some(fx.call("count 1", vec![fx.int("1")])),
        );
        let define = fx.block(
            src,
            fx.call_on("FactoryBot.define", fx.expr("FactoryBot"), Vec::new()),
            Some(after),
        );

        assert!(find_attribute_blocks(&define).is_empty());
    }

    #[test]
    fn defining_call_with_receiver_is_not_attribute_block() {
        let src = "config.factory :user do\n  count 1\nend";
        let fx = Fixture::new(src);
        let tree = fx.block(
            src,
            fx.call_on("config.factory :user", fx.ident("config"), vec![fx.symbol(":user")]),
            Some(fx.call("count 1", vec![fx.int("1")])),
        );

        assert!(attribute_block(&tree).is_none());
    }
}
