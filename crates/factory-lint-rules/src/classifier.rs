//! Static vs. deferred attribute values.

use factory_lint_core::{Call, Node, NodeKind};

/// Returns true if `argument` hands over a block instead of a value.
#[must_use]
pub fn is_deferred_argument(argument: &Node) -> bool {
    matches!(argument.kind, NodeKind::BlockPass(_))
}

/// Returns true if every argument of `call` is deferred.
///
/// A call without arguments has nothing evaluated eagerly and counts as
/// deferred.
#[must_use]
pub fn is_deferred(call: &Call) -> bool {
    call.arguments.iter().all(is_deferred_argument)
}
