//! Syntax tree model for the analyses
//!
//! Trees are produced by an external parser front-end, either through the
//! [`TreeBuilder`] API or as a JSON document ([`NodeRepr`]), and are
//! immutable afterwards. Nodes live in an arena and are addressed by
//! [`NodeId`]; each node owns the ordered list of its children and keeps a
//! plain index to its parent.

mod builder;
mod error;
mod kind;
mod repr;
mod tree;

pub use builder::{NodeSpec, TreeBuilder};
pub use error::TreeError;
pub use kind::SyntaxKind;
pub use repr::NodeRepr;
pub use tree::{Descendants, NodeData, NodeId, SyntaxTree};
