//! Bottom-up construction of [`SyntaxTree`]s

use crate::error::TreeError;
use crate::kind::SyntaxKind;
use crate::tree::{NodeData, NodeId, SyntaxTree};
use ks_intern::Interner;
use ks_span::Span;
use la_arena::Arena;

/// Attributes of a node about to be added to a [`TreeBuilder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSpec<'src> {
    /// Kind of the node
    pub kind: SyntaxKind,
    /// Name for named kinds; also the default text
    pub name: Option<&'src str>,
    /// Raw text; defaults to the name, or empty
    pub text: Option<&'src str>,
    /// 1-based line
    pub line: Option<u32>,
    /// Byte span
    pub span: Option<Span>,
    /// `var` marker
    pub mutable: bool,
}

impl<'src> NodeSpec<'src> {
    /// A bare node of `kind`
    pub fn new(kind: SyntaxKind) -> Self {
        Self {
            kind,
            name: None,
            text: None,
            line: None,
            span: None,
            mutable: false,
        }
    }

    /// A `val` property named `name`
    pub fn property(name: &'src str) -> Self {
        Self::new(SyntaxKind::Property).named(name)
    }

    /// A parameter named `name`
    pub fn parameter(name: &'src str) -> Self {
        Self::new(SyntaxKind::Parameter).named(name)
    }

    /// A reference to `name`
    pub fn name_ref(name: &'src str) -> Self {
        Self::new(SyntaxKind::NameReference).named(name)
    }

    /// An operator token such as `=` or `++`
    pub fn operation(operator: &'src str) -> Self {
        Self::new(SyntaxKind::Operation).text(operator)
    }

    /// A literal constant
    pub fn literal(text: &'src str) -> Self {
        Self::new(SyntaxKind::Literal).text(text)
    }

    /// Sets the name
    #[must_use]
    pub fn named(mut self, name: &'src str) -> Self {
        self.name = Some(name);
        self
    }

    /// Sets the raw text
    #[must_use]
    pub fn text(mut self, text: &'src str) -> Self {
        self.text = Some(text);
        self
    }

    /// Sets the line
    #[must_use]
    pub fn line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the byte span
    #[must_use]
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Marks the node as `var`
    #[must_use]
    pub fn mutable(mut self) -> Self {
        self.mutable = true;
        self
    }
}

/// Builds a tree in document order: `start_node` opens a node as the last
/// child of the currently open one, `finish_node` closes it.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Arena<NodeData>,
    interner: Interner,
    open: Vec<NodeId>,
    roots: Vec<NodeId>,
    unbalanced: bool,
}

impl TreeBuilder {
    /// Creates an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a node; its children follow until the matching `finish_node`
    pub fn start_node(&mut self, spec: NodeSpec<'_>) -> NodeId {
        let name = spec.name.or_else(|| {
            (spec.kind == SyntaxKind::NameReference)
                .then_some(spec.text)
                .flatten()
        });
        let text = spec.text.or(name).unwrap_or_default().to_owned();
        let symbol = name.map(|raw| self.interner.intern(raw));
        let parent = self.open.last().copied();

        let node = self.nodes.alloc(NodeData {
            kind: spec.kind,
            name: symbol,
            text,
            line: spec.line,
            span: spec.span,
            mutable: spec.mutable,
            parent,
            children: Vec::new(),
        });

        match parent {
            Some(parent) => self.nodes[parent].children.push(node),
            None => self.roots.push(node),
        }
        self.open.push(node);
        node
    }

    /// Closes the most recently opened node
    pub fn finish_node(&mut self) {
        if self.open.pop().is_none() {
            self.unbalanced = true;
        }
    }

    /// Adds a node without children
    pub fn leaf(&mut self, spec: NodeSpec<'_>) -> NodeId {
        let node = self.start_node(spec);
        self.finish_node();
        node
    }

    /// Validates the structure and freezes the tree
    ///
    /// # Errors
    ///
    /// Fails when nodes are left open or closed twice, when there is not
    /// exactly one root, when a `program` node sits below the root, when a
    /// declaration or reference has no name, or when a qualified expression
    /// does not have exactly two operands.
    pub fn finish(self) -> Result<SyntaxTree, TreeError> {
        if self.unbalanced {
            return Err(TreeError::UnbalancedFinish);
        }
        if !self.open.is_empty() {
            return Err(TreeError::UnclosedNodes {
                open: self.open.len(),
            });
        }
        let root = match self.roots.as_slice() {
            [] => return Err(TreeError::Empty),
            [root] => *root,
            roots => return Err(TreeError::MultipleRoots { count: roots.len() }),
        };

        for (id, node) in self.nodes.iter() {
            if node.kind == SyntaxKind::Program && id != root {
                return Err(TreeError::NestedProgram { line: node.line });
            }
            if node.kind.requires_name() && node.name.is_none() {
                return Err(TreeError::MissingName {
                    kind: node.kind,
                    line: node.line,
                });
            }
            if node.kind.is_qualified() && node.children.len() != 2 {
                return Err(TreeError::MalformedQualified {
                    kind: node.kind,
                    line: node.line,
                    found: node.children.len(),
                });
            }
        }

        Ok(SyntaxTree::new(self.nodes, root, self.interner.freeze()))
    }
}
