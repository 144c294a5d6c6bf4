//! # factory-lint-rules
//!
//! Built-in lint rules for factory-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | FB001 | `dynamic-attribute-defined-statically` | Requires attribute values to be wrapped in blocks |
//!
//! The building blocks of FB001 are public so hosts can reuse them:
//!
//! - [`reserved`]: method names that never declare attributes
//! - [`matcher`]: candidate call and attribute block predicates
//! - [`scanner`]: collects attribute declarations from a tree
//! - [`classifier`]: static vs. deferred values
//! - [`autocorrect`]: rewrite edits into block form
//!
//! ## Usage
//!
//! ```ignore
//! use factory_lint_core::Linter;
//! use factory_lint_rules::DynamicAttributeDefinedStatically;
//!
//! let linter = Linter::builder()
//!     .rule(DynamicAttributeDefinedStatically::new())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod autocorrect;
pub mod classifier;
pub mod matcher;
pub mod reserved;
pub mod scanner;

mod dynamic_attribute_defined_statically;

pub use dynamic_attribute_defined_statically::DynamicAttributeDefinedStatically;

/// Re-export core types for convenience.
pub use factory_lint_core::{Rule, RuleBox, Severity, Violation};

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(DynamicAttributeDefinedStatically::new())]
}

/// Looks up a rule by name or code.
#[must_use]
pub fn rule_by_name(name: &str) -> Option<RuleBox> {
    all_rules()
        .into_iter()
        .find(|rule| rule.name() == name || rule.code() == name)
}
