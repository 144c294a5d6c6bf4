//! Collects attribute declarations from factory definitions.

use crate::matcher::{find_attribute_blocks, is_candidate_call};
use factory_lint_core::Node;
use tracing::debug;

/// Returns every candidate attribute call declared directly in an attribute
/// block anywhere under `root`, in source order.
///
/// Nested blocks are visited on their own, so a trait inside a factory
/// contributes its attributes exactly like the factory does. Each call is
/// returned once even if the host hands over overlapping subtrees.
#[must_use]
pub fn scan(root: &Node) -> Vec<&Node> {
    let blocks = find_attribute_blocks(root);

    let mut calls: Vec<&Node> = blocks
        .iter()
        .flat_map(|block| block.terminals.iter().copied())
        .filter(|node| is_candidate_call(node))
        .collect();

    calls.sort_by_key(|node| (node.span.start, node.span.end));
    calls.dedup_by(|a, b| std::ptr::eq(*a, *b));

    debug!(
        blocks = blocks.len(),
        candidates = calls.len(),
        "scanned attribute blocks"
    );

    calls
}

#[cfg(test)]
mod tests {
    use super::*;
    use factory_lint_core::fixture::Fixture;

    #[test]
    fn collects_top_level_and_nested_attributes_in_source_order() {
        let src = "factory :user do\n  name 'x'\n  trait :old do\n    age 90\n  end\n  email 'e'\nend";
        let fx = Fixture::new(src);
        let old = fx.block(
            "trait :old do\n    age 90\n  end",
            fx.call("trait :old", vec![fx.symbol(":old")]),
            Some(fx.call("age 90", vec![fx.int("90")])),
        );
        let tree = fx.block(
            src,
            fx.call("factory :user", vec![fx.symbol(":user")]),
            Some(fx.seq(vec![
                fx.call("name 'x'", vec![fx.string("'x'")]),
                old,
                fx.call("email 'e'", vec![fx.string("'e'")]),
            ])),
        );

        let texts: Vec<&str> = scan(&tree).iter().map(|n| fx.text(n)).collect();
        assert_eq!(texts, vec!["name 'x'", "age 90", "email 'e'"]);
    }

    #[test]
    fn skips_reserved_and_receiver_calls() {
        let src = "factory :post do\n  association :author\n  self.title 'x'\n  body 'b'\nend";
        let fx = Fixture::new(src);
        let tree = fx.block(
            src,
            fx.call("factory :post", vec![fx.symbol(":post")]),
            Some(fx.seq(vec![
                fx.call("association :author", vec![fx.symbol(":author")]),
                fx.call_on("self.title 'x'", fx.expr("self"), vec![fx.string("'x'")]),
                fx.call("body 'b'", vec![fx.string("'b'")]),
            ])),
        );

        let texts: Vec<&str> = scan(&tree).iter().map(|n| fx.text(n)).collect();
        assert_eq!(texts, vec!["body 'b'"]);
    }

    #[test]
    fn ignores_calls_outside_attribute_blocks() {
        let src = "count 1";
        let fx = Fixture::new(src);
        assert!(scan(&fx.call(src, vec![fx.int("1")])).is_empty());
    }

    #[test]
    fn finds_blocks_below_non_matching_roots() {
        let src = "FactoryBot.define do\n  factory :user do\n    count 1\n  end\nend";
        let fx = Fixture::new(src);
        let factory = fx.block(
            "factory :user do\n    count 1\n  end",
            fx.call("factory :user", vec![fx.symbol(":user")]),
            Some(fx.call("count 1", vec![fx.int("1")])),
        );
        let tree = fx.block(
            src,
            fx.call_on("FactoryBot.define", fx.expr("FactoryBot"), Vec::new()),
            Some(factory),
        );

        let found = scan(&tree);
        assert_eq!(found.len(), 1);
        assert_eq!(fx.text(found[0]), "count 1");
    }
}
