//! Host-side harness that runs rules over a parsed file.

use crate::config::Config;
use crate::context::FileContext;
use crate::edit::{apply_edits, EditError};
use crate::rule::{Rule, RuleBox};
use crate::syntax::Node;
use crate::types::{LintResult, TextEdit, Violation};

use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while linting or fixing.
#[derive(Debug, Error)]
pub enum LintError {
    /// Fix edits could not be applied.
    #[error("Failed to apply fixes to {path}: {source}")]
    Edit {
        /// File the edits were meant for.
        path: std::path::PathBuf,
        /// Underlying edit error.
        source: EditError,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl LinterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the linter.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the linter.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Loads the configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn config_file(self, path: &std::path::Path) -> Result<Self, LintError> {
        let config = Config::from_file(path)?;
        Ok(self.config(config))
    }

    /// Builds the linter.
    #[must_use]
    pub fn build(self) -> Linter {
        Linter {
            rules: self.rules,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Outcome of [`Linter::fix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixed {
    /// Source text with all applicable fixes applied.
    pub source: String,
    /// Number of violations whose fixes were applied.
    pub corrected: usize,
}

/// Runs a set of rules over parsed files.
///
/// Use [`Linter::builder()`] to construct an instance.
pub struct Linter {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Lints one file and returns its violations sorted by position.
    #[must_use]
    pub fn lint(&self, ctx: &FileContext, tree: &Node) -> LintResult {
        debug!("Linting: {}", ctx.relative_path.display());

        let mut result = LintResult::new();
        for rule in &self.rules {
            let violations = rule.check(ctx, tree);
            let violations = self.apply_severity_override(rule.name(), violations);
            result.violations.extend(violations);
        }

        result.violations.sort_by(|a, b| {
            a.location
                .offset
                .cmp(&b.location.offset)
                .then(a.code.cmp(&b.code))
        });
        result.files_checked = 1;

        info!(
            "{}: {} violation(s) from {} rule(s)",
            ctx.relative_path.display(),
            result.violations.len(),
            self.rules.len()
        );

        result
    }

    /// Lints one file and applies every available fix in memory.
    ///
    /// Fixes from rules with `autocorrect = false` are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the collected edits conflict or do not fit the
    /// source text.
    pub fn fix(&self, ctx: &FileContext, tree: &Node) -> Result<Fixed, LintError> {
        let result = self.lint(ctx, tree);

        let fixable: Vec<&Violation> = result
            .violations
            .iter()
            .filter(|v| !v.edits().is_empty())
            .filter(|v| self.config.autocorrect_enabled(&v.rule))
            .collect();
        let edits: Vec<TextEdit> = fixable
            .iter()
            .flat_map(|v| v.edits().iter().cloned())
            .collect();

        let source = apply_edits(ctx.content, &edits).map_err(|source| LintError::Edit {
            path: ctx.relative_path.clone(),
            source,
        })?;

        debug!(
            "Applied {} edit(s) for {} violation(s)",
            edits.len(),
            fixable.len()
        );

        Ok(Fixed {
            source,
            corrected: fixable.len(),
        })
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }
}
