//! JSON interchange form of a tree
//!
//! An external front-end that owns the parser dumps each file as a nested
//! [`NodeRepr`] document; [`NodeRepr::build`] turns it into a [`SyntaxTree`].

use crate::builder::{NodeSpec, TreeBuilder};
use crate::error::TreeError;
use crate::kind::SyntaxKind;
use crate::tree::SyntaxTree;
use ks_span::Span;
use serde::{Deserialize, Serialize};

/// Serialized node with its children inline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRepr {
    /// Node kind
    pub kind: SyntaxKind,
    /// Declared or referenced name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Raw text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// 1-based line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Byte span
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    /// `var` marker
    #[serde(default, skip_serializing_if = "is_false")]
    pub mutable: bool,
    /// Children in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeRepr>,
}

#[allow(clippy::trivially_copy_pass_by_ref, reason = "serde passes fields by reference")]
fn is_false(value: &bool) -> bool {
    !*value
}

impl NodeRepr {
    /// Builds the tree rooted at this node
    ///
    /// # Errors
    ///
    /// Returns the structural errors of [`TreeBuilder::finish`].
    pub fn build(&self) -> Result<SyntaxTree, TreeError> {
        let mut builder = TreeBuilder::new();
        self.push_into(&mut builder);
        builder.finish()
    }

    fn push_into(&self, builder: &mut TreeBuilder) {
        let mut spec = NodeSpec::new(self.kind);
        spec.name = self.name.as_deref();
        spec.text = self.text.as_deref();
        spec.line = self.line;
        spec.span = self.span;
        spec.mutable = self.mutable;

        builder.start_node(spec);
        for child in &self.children {
            child.push_into(builder);
        }
        builder.finish_node();
    }
}
