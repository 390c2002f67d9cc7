//! Error types for variable resolution

use ks_syntax::SyntaxKind;

/// Errors raised while resolving declarations and their references
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Declarations were requested from a node that is not the program root
    #[error("variables can only be collected from the program root, got a `{found}` node")]
    InvalidRootNode {
        /// Kind of the node that was passed instead
        found: SyntaxKind,
    },

    /// A node taking part in an ordering comparison has no line number
    #[error("node `{text}` should have a line number")]
    MissingPositionInfo {
        /// Raw text of the node
        text: String,
    },

    /// The declaration lives in a scope the resolver does not model
    /// (object bodies, companion objects); such declarations are skipped
    /// by the collector rather than reported
    #[error("declaration `{name}` at line {line:?} is not in a supported scope")]
    AmbiguousScope {
        /// Declared name
        name: String,
        /// Line of the declaration
        line: Option<u32>,
    },
}
