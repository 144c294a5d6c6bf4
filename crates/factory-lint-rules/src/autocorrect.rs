//! Rewrites a static attribute declaration into its block form.
//!
//! | Shape                  | Before         | After                  |
//! |------------------------|----------------|------------------------|
//! | bare                   | `count 1`      | `count { 1 }`          |
//! | parenthesized hash     | `data(foo: 1)` | `data { { foo: 1 } }`  |
//! | parenthesized          | `count(1)`     | `count { 1 }`          |
//!
//! Only delimiters are replaced or inserted; argument text is never touched.

use factory_lint_core::{Call, Delimiters, NodeKind, TextEdit};

const WRAP_OPEN: &str = "{ ";
const BLOCK_OPEN: &str = " { ";
const BLOCK_CLOSE: &str = " }";
const BLOCK_HASH_OPEN: &str = " { { ";
const BLOCK_HASH_CLOSE: &str = " } }";

/// Syntactic shape of a call's argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallShape {
    /// Arguments written without `(` `)`.
    Bare,
    /// Parenthesized, and the sole argument is a hash without braces.
    ParenthesizedHash(Delimiters),
    /// Parenthesized, any other arguments.
    Parenthesized(Delimiters),
}

/// Classifies the argument syntax of `call`.
#[must_use]
pub fn call_shape(call: &Call) -> CallShape {
    let Some(parens) = call.parens else {
        return CallShape::Bare;
    };

    match call.arguments.as_slice() {
        [only] if matches!(&only.kind, NodeKind::Hash(hash) if !hash.braces) => {
            CallShape::ParenthesizedHash(parens)
        }
        _ => CallShape::Parenthesized(parens),
    }
}

/// Builds the edits that turn the arguments of `call` into a block body.
///
/// A bare call without arguments has nothing to wrap and yields no edits.
#[must_use]
pub fn build_edit(call: &Call) -> Vec<TextEdit> {
    match call_shape(call) {
        CallShape::Bare => call.arguments_span().map_or_else(Vec::new, |args| {
            vec![
                TextEdit::insert_before(args, WRAP_OPEN),
                TextEdit::insert_after(args, BLOCK_CLOSE),
            ]
        }),
        CallShape::ParenthesizedHash(parens) => {
            replace_parens(parens, BLOCK_HASH_OPEN, BLOCK_HASH_CLOSE)
        }
        CallShape::Parenthesized(parens) => replace_parens(parens, BLOCK_OPEN, BLOCK_CLOSE),
    }
}

fn replace_parens(parens: Delimiters, open: &str, close: &str) -> Vec<TextEdit> {
    vec![
        TextEdit::replace(parens.open, open),
        TextEdit::replace(parens.close, close),
    ]
}
