//! Rule to require blocks for attribute values in factory definitions.
//!
//! # Rationale
//!
//! An attribute declared as `closed_at 1.day.from_now` evaluates its value
//! once, when the factory is defined. Every record built afterwards shares
//! that value. Declaring `closed_at { 1.day.from_now }` evaluates it per
//! record.
//!
//! # Detected Patterns
//!
//! Inside `factory`, `trait`, `transient` and `ignore` blocks:
//!
//! - `count 1`
//! - `count(1)`
//! - `data(foo: 1)`
//!
//! # Good Patterns
//!
//! ```text
//! factory :user do
//!   status { [:active, :banned].sample }
//!   count(&value_provider)
//!   association :author
//! end
//! ```
//!
//! # Autocorrection
//!
//! Each violation carries edits that rewrite the call into block form. See
//! [`crate::autocorrect`].

use crate::autocorrect::build_edit;
use crate::classifier::is_deferred;
use crate::matcher::candidate_call;
use crate::scanner::scan;
use factory_lint_core::{FileContext, Node, Rule, Severity, Suggestion, Violation};
use tracing::trace;

/// Rule code for dynamic-attribute-defined-statically.
pub const CODE: &str = "FB001";

/// Rule name for dynamic-attribute-defined-statically.
pub const NAME: &str = "dynamic-attribute-defined-statically";

/// Message attached to every violation.
pub const MESSAGE: &str = "Use a block to set a dynamic value to an attribute.";

/// Flags attribute values that are evaluated once at definition time.
#[derive(Debug, Clone)]
pub struct DynamicAttributeDefinedStatically {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for DynamicAttributeDefinedStatically {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicAttributeDefinedStatically {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for DynamicAttributeDefinedStatically {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires attribute values in factory definitions to be wrapped in blocks"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, tree: &Node) -> Vec<Violation> {
        let mut violations = Vec::new();

        for node in scan(tree) {
            let Some(call) = candidate_call(node) else {
                continue;
            };
            if is_deferred(call) {
                trace!(attribute = %call.method, "value is deferred");
                continue;
            }

            trace!(attribute = %call.method, "value is static");
            violations.push(
                Violation::new(CODE, NAME, self.severity, ctx.location(node.span), MESSAGE)
                    .with_suggestion(Suggestion::with_fix(
                        format!("Wrap the value of `{}` in a block", call.method),
                        build_edit(call),
                    )),
            );
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factory_lint_core::apply_edits;
    use factory_lint_core::fixture::Fixture;
    use std::path::Path;

    fn check(fx: &Fixture<'_>, tree: &Node) -> Vec<Violation> {
        let ctx = FileContext::from_source(Path::new("spec/factories/users.rb"), fx.source());
        DynamicAttributeDefinedStatically::new().check(&ctx, tree)
    }

    fn factory<'s>(fx: &Fixture<'s>, body: Node) -> Node {
        fx.block(
            fx.source(),
            fx.call("factory :user", vec![fx.symbol(":user")]),
            Some(body),
        )
    }

    #[test]
    fn test_detects_static_value() {
        let fx = Fixture::new("factory :user do\n  closed_at 1.day.from_now\nend");
        let tree = factory(
            &fx,
            fx.call("closed_at 1.day.from_now", vec![fx.expr("1.day.from_now")]),
        );

        let violations = check(&fx, &tree);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);
        assert_eq!(violations[0].message, MESSAGE);
        assert_eq!(violations[0].severity, Severity::Warning);
        assert_eq!((violations[0].location.line, violations[0].location.column), (2, 3));
        assert_eq!(
            fx.span(violations[0].location.span()),
            fx.span("closed_at 1.day.from_now")
        );
    }

    #[test]
    fn test_fix_rewrites_to_block() {
        let fx = Fixture::new("factory :user do\n  closed_at 1.day.from_now\nend");
        let tree = factory(
            &fx,
            fx.call("closed_at 1.day.from_now", vec![fx.expr("1.day.from_now")]),
        );

        let violations = check(&fx, &tree);
        let fixed = apply_edits(fx.source(), violations[0].edits()).unwrap();
        assert_eq!(fixed, "factory :user do\n  closed_at { 1.day.from_now }\nend");
    }

    #[test]
    fn test_allows_block_value() {
        let src = "factory :user do\n  status { [:active, :banned].sample }\nend";
        let fx = Fixture::new(src);
        let status = fx.block(
            "status { [:active, :banned].sample }",
            fx.call("status", Vec::new()),
            Some(fx.expr("[:active, :banned].sample")),
        );
        let tree = factory(&fx, status);

        assert!(check(&fx, &tree).is_empty());
    }

    #[test]
    fn test_allows_block_pass() {
        let fx = Fixture::new("factory :user do\n  count(&value_provider)\nend");
        let tree = factory(
            &fx,
            fx.call("count(&value_provider)", vec![fx.block_pass("&value_provider")]),
        );

        assert!(check(&fx, &tree).is_empty());
    }

    #[test]
    fn test_allows_reserved_methods() {
        let src = "factory :user do\n  association :author\n  sequence(:email)\n  initialize_with(new)\nend";
        let fx = Fixture::new(src);
        let tree = factory(
            &fx,
            fx.seq(vec![
                fx.call("association :author", vec![fx.symbol(":author")]),
                fx.call("sequence(:email)", vec![fx.symbol(":email")]),
                fx.call("initialize_with(new)", vec![fx.ident("new")]),
            ]),
        );

        assert!(check(&fx, &tree).is_empty());
    }

    #[test]
    fn test_detects_in_transient_block() {
        let src = "factory :user do\n  transient do\n    rockstar true\n  end\nend";
        let fx = Fixture::new(src);
        let transient = fx.block(
            "transient do\n    rockstar true\n  end",
            fx.call("transient", Vec::new()),
            Some(fx.call(
                "rockstar true",
                vec![fx.literal("true", factory_lint_core::LiteralKind::True)],
            )),
        );
        let tree = factory(&fx, transient);

        let violations = check(&fx, &tree);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.line, 3);
    }

    #[test]
    fn test_custom_severity() {
        let fx = Fixture::new("factory :user do\n  count 1\nend");
        let tree = factory(&fx, fx.call("count 1", vec![fx.int("1")]));
        let ctx = FileContext::from_source(Path::new("users.rb"), fx.source());

        let violations = DynamicAttributeDefinedStatically::new()
            .severity(Severity::Error)
            .check(&ctx, &tree);
        assert_eq!(violations[0].severity, Severity::Error);
    }

    #[test]
    fn test_suggestion_names_attribute() {
        let fx = Fixture::new("factory :user do\n  count 1\nend");
        let tree = factory(&fx, fx.call("count 1", vec![fx.int("1")]));

        let violations = check(&fx, &tree);
        let suggestion = violations[0].suggestion.as_ref().unwrap();
        assert_eq!(suggestion.message, "Wrap the value of `count` in a block");
        assert!(suggestion.is_fixable());
    }
}
