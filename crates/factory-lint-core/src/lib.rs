//! # factory-lint-core
//!
//! Core framework for linting test-data factory definitions.
//!
//! The host parses source files; this crate provides what rules and hosts
//! share on either side of that boundary:
//!
//! - [`Node`] and [`NodeKind`], the syntax tree handed to rules
//! - [`Rule`] trait for per-file rules
//! - [`Violation`] and [`TextEdit`] for findings and their fixes
//! - [`Linter`] for running rules and applying fixes in memory
//! - [`Config`] for TOML-based severity and autocorrect settings
//!
//! ## Example
//!
//! ```ignore
//! use factory_lint_core::{FileContext, Linter};
//!
//! let linter = Linter::builder().rule(MyRule::new()).build();
//! let ctx = FileContext::from_source(path, &source);
//! let result = linter.lint(&ctx, &tree);
//! let fixed = linter.fix(&ctx, &tree)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod linter;
mod rule;
mod types;

pub mod edit;
pub mod fixture;
pub mod syntax;

pub use config::{Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use edit::{apply_edits, EditError};
pub use linter::{Fixed, LintError, Linter, LinterBuilder};
pub use rule::{Rule, RuleBox};
pub use syntax::{Block, Call, Delimiters, HashLiteral, LiteralKind, Node, NodeKind, Span};
pub use types::{LintResult, Location, Severity, Suggestion, TextEdit, Violation, ViolationDiagnostic};
