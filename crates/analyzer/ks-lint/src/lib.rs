//! Lint rules built on variable resolution
//!
//! Each rule is a thin consumer of [`ks_resolve`]: it picks the
//! declarations it cares about, looks at their references and reports
//! [`Diagnostic`]s. Fix mode only attaches [`TextEdit`]s; applying them is
//! left to the caller.

mod config;
mod error;
pub mod rules;

#[cfg(test)]
mod fixture;

pub use config::{LintConfig, RuleConfig};
pub use error::LintError;
pub use rules::{InlineClassRule, ShadowedVariableRule, UnusedVariableRule, VarCouldBeValRule};

use ks_span::{FileId, Location, Span};
use ks_syntax::{NodeId, SyntaxTree};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lint severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintLevel {
    /// Informational message
    Info,
    /// Warning that should be addressed
    Warning,
    /// Error that must be fixed
    Error,
}

/// Replacement of a byte span in the original source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    /// Bytes to replace
    pub span: Span,
    /// New text
    pub replacement: String,
}

/// A lint diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Lint rule that triggered this diagnostic
    pub rule: String,
    /// Severity level
    pub level: LintLevel,
    /// Human-readable message
    pub message: String,
    /// Source location
    pub location: Location,
    /// Optional suggestion for fixing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Edit produced in fix mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<TextEdit>,
}

/// State shared by the rules while linting one file
pub struct LintContext<'tree> {
    /// Tree being linted
    pub tree: &'tree SyntaxTree,
    /// File the tree was loaded from
    pub file: FileId,
    fix: bool,
    diagnostics: Vec<Diagnostic>,
}

impl<'tree> LintContext<'tree> {
    /// Create a new lint context
    #[must_use]
    pub fn new(tree: &'tree SyntaxTree, file: FileId, fix: bool) -> Self {
        Self {
            tree,
            file,
            fix,
            diagnostics: Vec::new(),
        }
    }

    /// Whether rules should attach fixes
    pub fn is_fix_mode(&self) -> bool {
        self.fix
    }

    /// Location of `node` for a diagnostic
    pub fn location(&self, node: NodeId) -> Location {
        Location::new(self.file, self.tree.line(node).unwrap_or_default())
            .with_span(self.tree.span(node))
    }

    /// Report a diagnostic
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all diagnostics
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take all diagnostics
    #[must_use]
    pub fn take_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn override_level(&mut self, from: usize, level: LintLevel) {
        for diagnostic in self.diagnostics.iter_mut().skip(from) {
            diagnostic.level = level;
        }
    }
}

/// Trait for lint rules
pub trait LintRule: Send + Sync {
    /// Rule name, as used in configuration files
    fn name(&self) -> &str;

    /// Check a whole file
    ///
    /// # Errors
    ///
    /// Fails when the resolver rejects the tree.
    fn check_file(&self, ctx: &mut LintContext<'_>) -> Result<(), LintError>;
}

/// Names of the built-in rules
pub const RULE_NAMES: [&str; 4] = [
    "inline-class",
    "unused-variable",
    "var-could-be-val",
    "shadowed-variable",
];

fn default_rules() -> Vec<Box<dyn LintRule>> {
    vec![
        Box::new(InlineClassRule),
        Box::new(UnusedVariableRule),
        Box::new(VarCouldBeValRule),
        Box::new(ShadowedVariableRule),
    ]
}

/// Linter with a collection of rules
pub struct Linter {
    rules: Vec<Box<dyn LintRule>>,
    config: LintConfig,
}

impl Linter {
    /// Create a new linter with default rules
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    /// Create a linter with specific rules
    #[must_use]
    pub fn with_rules(rules: Vec<Box<dyn LintRule>>) -> Self {
        Self {
            rules,
            config: LintConfig::default(),
        }
    }

    /// Create a linter with the default rules that `config` leaves enabled
    ///
    /// # Errors
    ///
    /// Returns [`LintError::UnknownRule`] if `config` mentions a rule that
    /// does not exist.
    pub fn from_config(config: LintConfig) -> Result<Self, LintError> {
        if let Some(name) = config
            .rules
            .keys()
            .find(|name| !RULE_NAMES.contains(&name.as_str()))
        {
            return Err(LintError::UnknownRule { name: name.clone() });
        }

        let rules = default_rules()
            .into_iter()
            .filter(|rule| config.is_enabled(rule.name()))
            .collect();
        Ok(Self { rules, config })
    }

    /// Names of the rules that will run
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Lint one file, returning its diagnostics ordered by line
    ///
    /// # Errors
    ///
    /// Fails when the resolver rejects the tree.
    pub fn lint_file(&self, tree: &SyntaxTree, file: FileId) -> Result<Vec<Diagnostic>, LintError> {
        let mut ctx = LintContext::new(tree, file, self.config.fix);

        for rule in &self.rules {
            let first = ctx.diagnostics().len();
            rule.check_file(&mut ctx)?;
            if let Some(level) = self.config.level_for(rule.name()) {
                ctx.override_level(first, level);
            }
            debug!(
                rule = rule.name(),
                reported = ctx.diagnostics().len() - first,
                "rule finished"
            );
        }

        let mut diagnostics = ctx.take_diagnostics();
        diagnostics.sort_by_key(|diagnostic| diagnostic.location.line);
        Ok(diagnostics)
    }

    /// Add a rule
    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}
