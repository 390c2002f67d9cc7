//! Per-run lint configuration

use crate::LintLevel;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Options for one lint run
///
/// Passed to [`crate::Linter::from_config`]; nothing here is global, so
/// two runs with different settings can share a process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Attach text edits to diagnostics that can be fixed automatically
    pub fix: bool,
    /// Settings per rule name
    pub rules: IndexMap<String, RuleConfig>,
}

/// Settings of a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleConfig {
    /// Whether the rule runs at all
    pub enabled: bool,
    /// Overrides the rule's default severity
    pub level: Option<LintLevel>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: None,
        }
    }
}

impl LintConfig {
    /// Whether the rule called `name` should run
    pub fn is_enabled(&self, name: &str) -> bool {
        self.rules.get(name).is_none_or(|rule| rule.enabled)
    }

    /// Configured severity for the rule called `name`
    pub fn level_for(&self, name: &str) -> Option<LintLevel> {
        self.rules.get(name).and_then(|rule| rule.level)
    }
}
