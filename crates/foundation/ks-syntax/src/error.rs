//! Errors raised while building a tree

use crate::kind::SyntaxKind;

/// Structural problems in a tree handed to the analyses
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// No node was added
    #[error("tree has no root node")]
    Empty,

    /// More than one top-level node was added
    #[error("tree has {count} root nodes, expected exactly one")]
    MultipleRoots {
        /// Number of top-level nodes
        count: usize,
    },

    /// Some nodes were started but never finished
    #[error("{open} node(s) were started but never finished")]
    UnclosedNodes {
        /// Number of nodes still open
        open: usize,
    },

    /// `finish_node` was called with no open node
    #[error("`finish_node` called with no open node")]
    UnbalancedFinish,

    /// A declaration, parameter or reference has no name
    #[error("`{kind}` node at line {line:?} has no name")]
    MissingName {
        /// Kind of the offending node
        kind: SyntaxKind,
        /// Its line, if known
        line: Option<u32>,
    },

    /// A qualified expression without exactly a receiver and a selector
    #[error("`{kind}` node at line {line:?} must have exactly two operands, found {found}")]
    MalformedQualified {
        /// Kind of the offending node
        kind: SyntaxKind,
        /// Its line, if known
        line: Option<u32>,
        /// Number of children found
        found: usize,
    },

    /// A `program` node below the root
    #[error("`program` node at line {line:?} is not the root of the tree")]
    NestedProgram {
        /// Its line, if known
        line: Option<u32>,
    },

    /// The JSON document is not a node tree
    #[error("invalid tree document: {0}")]
    Json(#[from] serde_json::Error),
}
