//! Arena-backed immutable syntax tree

use crate::error::TreeError;
use crate::kind::SyntaxKind;
use crate::repr::NodeRepr;
use ks_intern::{NameTable, Symbol};
use ks_span::Span;
use la_arena::{Arena, Idx};
use std::ops::Index;
use std::{iter, slice};

/// Stable identity of a node inside its [`SyntaxTree`]
pub type NodeId = Idx<NodeData>;

/// A single node of the tree
///
/// The parent link is a plain index, so the arena owns every node and the
/// parent relation never keeps anything alive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// The kind of this node
    pub kind: SyntaxKind,
    /// Declared or referenced name, for named kinds
    pub name: Option<Symbol>,
    /// Raw source text
    pub text: String,
    /// 1-based source line, if the producer recorded one
    pub line: Option<u32>,
    /// Byte span, if the producer recorded one
    pub span: Option<Span>,
    /// `var` declarations and parameters
    pub mutable: bool,
    /// Parent node, `None` only for the root
    pub parent: Option<NodeId>,
    /// Children in source order
    pub children: Vec<NodeId>,
}

/// Immutable syntax tree of one file
#[derive(Debug)]
pub struct SyntaxTree {
    nodes: Arena<NodeData>,
    root: NodeId,
    names: NameTable,
}

impl SyntaxTree {
    pub(crate) fn new(nodes: Arena<NodeData>, root: NodeId, names: NameTable) -> Self {
        Self { nodes, root, names }
    }

    /// Loads a tree from its JSON interchange form
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Json`] for documents that are not a node tree and
    /// the structural errors of [`NodeRepr::build`] otherwise.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        let repr: NodeRepr = serde_json::from_str(json)?;
        repr.build()
    }

    /// The root node
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes (never true for a built tree)
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Name table shared by all nodes
    pub fn names(&self) -> &NameTable {
        &self.names
    }

    /// Kind of `node`
    pub fn kind(&self, node: NodeId) -> SyntaxKind {
        self.nodes[node].kind
    }

    /// Line of `node`, if recorded
    pub fn line(&self, node: NodeId) -> Option<u32> {
        self.nodes[node].line
    }

    /// Byte span of `node`, if recorded
    pub fn span(&self, node: NodeId) -> Option<Span> {
        self.nodes[node].span
    }

    /// Raw text of `node`
    pub fn text(&self, node: NodeId) -> &str {
        &self.nodes[node].text
    }

    /// Interned name of `node`
    pub fn name_symbol(&self, node: NodeId) -> Option<Symbol> {
        self.nodes[node].name
    }

    /// Name of `node` as a string
    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.nodes[node]
            .name
            .map(|symbol| self.names.resolve(symbol))
    }

    /// Whether `node` is a `var` declaration or parameter
    pub fn is_mutable(&self, node: NodeId) -> bool {
        self.nodes[node].mutable
    }

    /// Parent of `node`
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node].parent
    }

    /// Children of `node` in source order
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node].children
    }

    /// Children of `node` with the given kind
    pub fn children_of_kind(
        &self,
        node: NodeId,
        kind: SyntaxKind,
    ) -> impl Iterator<Item = NodeId> {
        self.children(node)
            .iter()
            .copied()
            .filter(move |&child| self.kind(child) == kind)
    }

    /// First child of `node` with the given kind
    pub fn child_of_kind(&self, node: NodeId, kind: SyntaxKind) -> Option<NodeId> {
        self.children_of_kind(node, kind).next()
    }

    /// Strict ancestors of `node`, nearest first
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        iter::successors(self.parent(node), move |&current| self.parent(current))
    }

    /// Nearest strict ancestor with the given kind
    pub fn parent_of_kind(&self, node: NodeId, kind: SyntaxKind) -> Option<NodeId> {
        self.ancestors(node)
            .find(|&ancestor| self.kind(ancestor) == kind)
    }

    /// `node` and everything below it in pre-order (document order)
    pub fn descendants(&self, node: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![node],
        }
    }

    /// Whether `ancestor` is above `node`
    ///
    /// With `strict == false` a node counts as its own ancestor.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId, strict: bool) -> bool {
        if !strict && ancestor == node {
            return true;
        }
        self.ancestors(node).any(|current| current == ancestor)
    }

    /// Parameters of a function, function literal or catch clause, whether
    /// they sit directly under `owner` or inside its parameter list
    pub fn parameters(&self, owner: NodeId) -> impl Iterator<Item = NodeId> {
        self.children(owner)
            .iter()
            .flat_map(move |child| match self.kind(*child) {
                SyntaxKind::ParameterList => self.children(*child),
                SyntaxKind::Parameter => slice::from_ref(child),
                _ => &[],
            })
            .copied()
            .filter(move |&param| self.kind(param) == SyntaxKind::Parameter)
    }

    /// Receiver operand of a qualified expression
    pub fn receiver(&self, qualified: NodeId) -> Option<NodeId> {
        if !self.kind(qualified).is_qualified() {
            return None;
        }
        self.children(qualified).first().copied()
    }

    /// Selector operand of a qualified expression
    pub fn selector(&self, qualified: NodeId) -> Option<NodeId> {
        if !self.kind(qualified).is_qualified() {
            return None;
        }
        self.children(qualified).get(1).copied()
    }

    /// Operator text of a binary or unary expression
    pub fn operator(&self, expression: NodeId) -> Option<&str> {
        self.child_of_kind(expression, SyntaxKind::Operation)
            .map(|operation| self.text(operation))
    }
}

impl Index<NodeId> for SyntaxTree {
    type Output = NodeData;

    fn index(&self, node: NodeId) -> &NodeData {
        &self.nodes[node]
    }
}

/// Pre-order traversal produced by [`SyntaxTree::descendants`]
#[derive(Debug, Clone)]
pub struct Descendants<'tree> {
    tree: &'tree SyntaxTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(node).iter().rev().copied());
        Some(node)
    }
}
