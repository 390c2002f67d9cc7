//! Lexical scopes of declarations

use crate::declaration::has_initializer;
use crate::error::ResolveError;
use crate::ordering::comes_after;
use ks_syntax::{NodeId, SyntaxKind, SyntaxTree};

/// The boundary a declaration's references are searched in
///
/// Local declarations are visible from their position to the end of their
/// block. Members and top-level declarations are visible throughout their
/// class body or program regardless of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationScope {
    /// Nearest enclosing block
    Local(NodeId),
    /// Body of the enclosing class
    Class(NodeId),
    /// Program root
    Program(NodeId),
}

impl DeclarationScope {
    /// The scope node itself
    pub fn node(self) -> NodeId {
        match self {
            Self::Local(node) | Self::Class(node) | Self::Program(node) => node,
        }
    }
}

/// Finds the scope a property declaration belongs to
///
/// # Errors
///
/// Returns [`ResolveError::AmbiguousScope`] when the nearest scope is the
/// body of something other than a class (object declarations, companion
/// objects) or when the declaration is detached from any scope.
pub fn declaration_scope(
    tree: &SyntaxTree,
    declaration: NodeId,
) -> Result<DeclarationScope, ResolveError> {
    let nearest = tree
        .ancestors(declaration)
        .find(|&ancestor| tree.kind(ancestor).is_scope());

    match nearest {
        Some(block) if tree.kind(block) == SyntaxKind::Block => Ok(DeclarationScope::Local(block)),
        Some(body) if tree.kind(body) == SyntaxKind::ClassBody && is_supported_scope(tree, body) => {
            Ok(DeclarationScope::Class(body))
        }
        Some(root) if tree.kind(root) == SyntaxKind::Program => Ok(DeclarationScope::Program(root)),
        _ => Err(ResolveError::AmbiguousScope {
            name: tree.name(declaration).unwrap_or_default().to_owned(),
            line: tree.line(declaration),
        }),
    }
}

/// Whether the resolver knows how visibility works inside `scope`
///
/// Blocks and the program root are supported, class bodies only when they
/// belong to a `class`.
pub fn is_supported_scope(tree: &SyntaxTree, scope: NodeId) -> bool {
    match tree.kind(scope) {
        SyntaxKind::Block | SyntaxKind::Program => true,
        // TODO: object and companion object bodies need their own visibility rules
        SyntaxKind::ClassBody => tree
            .parent(scope)
            .is_some_and(|owner| tree.kind(owner) == SyntaxKind::Class),
        _ => false,
    }
}

/// Whether `candidate` contains the scope of `block`
///
/// `if` and `try` are parents of their `else` and `catch` branches, but the
/// scopes do not intersect: the statement itself does not contain the
/// alternative or handler block.
pub fn is_containing_scope(tree: &SyntaxTree, candidate: NodeId, block: NodeId) -> bool {
    let split_owner = tree.parent(block).and_then(|branch| {
        let owner_kind = match tree.kind(branch) {
            SyntaxKind::Else => SyntaxKind::If,
            SyntaxKind::Catch => SyntaxKind::Try,
            _ => return None,
        };
        tree.parent(branch)
            .filter(|&owner| tree.kind(owner) == owner_kind)
    });

    if split_owner == Some(candidate) {
        return false;
    }
    tree.is_ancestor(candidate, block, false)
}

/// Whether `node` sits in a scope strictly nested inside `scope`
pub fn in_nested_scope_of(tree: &SyntaxTree, node: NodeId, scope: NodeId) -> bool {
    tree.ancestors(node)
        .find(|&ancestor| tree.kind(ancestor).is_scope())
        .is_some_and(|home| home != scope && is_containing_scope(tree, scope, home))
}

/// Whether declaration `candidate` shadows declaration `original`
///
/// ```text
/// val a = 5          // original
/// if (flag) {
///     val a = 6      // candidate: shadows the outer `a`
/// }
/// ```
///
/// # Errors
///
/// Returns [`ResolveError::MissingPositionInfo`] if a line is missing.
pub fn is_shadow_of(
    tree: &SyntaxTree,
    candidate: NodeId,
    original: NodeId,
) -> Result<bool, ResolveError> {
    if candidate == original || tree.name_symbol(candidate) != tree.name_symbol(original) {
        return Ok(false);
    }
    let Ok(scope) = declaration_scope(tree, original) else {
        return Ok(false);
    };
    if !in_nested_scope_of(tree, candidate, scope.node()) {
        return Ok(false);
    }
    comes_after(tree, candidate, original)
}

/// Finds the initialised local property a reference most likely points to:
/// the last one with the same name declared before the reference's
/// statement, searching enclosing blocks from the innermost outwards
pub fn find_local_declaration(tree: &SyntaxTree, reference: NodeId) -> Option<NodeId> {
    let name = tree.name_symbol(reference)?;

    tree.ancestors(reference)
        .filter(|&ancestor| tree.kind(ancestor) == SyntaxKind::Block)
        .find_map(|block| {
            tree.children(block)
                .iter()
                .copied()
                .take_while(|&statement| !tree.is_ancestor(statement, reference, false))
                .filter(|&statement| {
                    tree.kind(statement) == SyntaxKind::Property
                        && tree.name_symbol(statement) == Some(name)
                        && has_initializer(tree, statement)
                })
                .last()
        })
}
