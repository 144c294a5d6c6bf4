//! # factory-lint
//!
//! Linter for test-data factory definitions.
//!
//! This is the facade crate that re-exports the core framework and the
//! built-in rules.
//!
//! ## Usage
//!
//! The host parses a factory file into a [`Node`] tree and hands it over
//! together with the source text:
//!
//! ```rust,ignore
//! use factory_lint::{FileContext, Linter};
//! use factory_lint::rules::all_rules;
//!
//! let linter = Linter::builder()
//!     .rules(all_rules())
//!     .config_file(Path::new("factory-lint.toml"))?
//!     .build();
//!
//! let ctx = FileContext::from_source(path, &source);
//! let result = linter.lint(&ctx, &tree);
//! for violation in &result.violations {
//!     println!("{violation}");
//! }
//!
//! let fixed = linter.fix(&ctx, &tree)?;
//! ```
//!
//! ## Configuration
//!
//! ```toml
//! fail_on = "warning"
//!
//! [rules.dynamic-attribute-defined-statically]
//! severity = "error"
//! autocorrect = true
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use factory_lint_core::*;

/// Built-in rules.
pub mod rules {
    pub use factory_lint_rules::*;
}
