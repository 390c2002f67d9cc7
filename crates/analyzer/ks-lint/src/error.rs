//! Lint errors

use ks_resolve::ResolveError;

/// Errors that stop linting a file
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LintError {
    /// The resolver rejected the tree
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The configuration names a rule that does not exist
    #[error("unknown lint rule `{name}`")]
    UnknownRule {
        /// Rule name as written in the configuration
        name: String,
    },
}
