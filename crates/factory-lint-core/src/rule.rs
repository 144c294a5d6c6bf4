//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::syntax::Node;
use crate::types::{Severity, Violation};

/// A per-file lint rule over a parsed syntax tree.
///
/// Rules are pure: they read the tree and the source text and return
/// violations, optionally carrying fix edits. They never modify the source.
///
/// # Example
///
/// ```ignore
/// use factory_lint_core::{FileContext, Node, Rule, Severity, Violation};
///
/// pub struct NoEmptyFactories;
///
/// impl Rule for NoEmptyFactories {
///     fn name(&self) -> &'static str { "no-empty-factories" }
///     fn code(&self) -> &'static str { "FB100" }
///
///     fn check(&self, ctx: &FileContext, tree: &Node) -> Vec<Violation> {
///         tree.descendants()
///             .into_iter()
///             .filter(|n| is_empty_factory(n))
///             .map(|n| Violation::new(self.code(), self.name(), self.default_severity(),
///                 ctx.location(n.span), "Factory has no attributes"))
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule.
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "FB001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Checks a single file and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `tree` - Root of the parsed syntax tree of the file
    fn check(&self, ctx: &FileContext, tree: &Node) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
