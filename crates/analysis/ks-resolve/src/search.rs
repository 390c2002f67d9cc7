//! Declaration collection and reference search

use crate::declaration::Declaration;
use crate::error::ResolveError;
use crate::ordering::comes_after;
use crate::scope::{DeclarationScope, declaration_scope};
use crate::shadow::{is_reference_to_field_of_object, is_reference_to_other_variable};
use indexmap::IndexMap;
use ks_syntax::{NodeId, SyntaxKind, SyntaxTree};
use rayon::prelude::*;
use rustc_hash::FxBuildHasher;
use tracing::{debug, trace};

/// Declarations mapped to their references, both in document order
pub type ReferenceMap = IndexMap<NodeId, Vec<NodeId>, FxBuildHasher>;

/// Operators that write to their left operand
pub const ASSIGNMENT_OPERATORS: [&str; 6] = ["=", "+=", "-=", "*=", "/=", "%="];

/// Operators that write to their single operand
pub const INCREMENT_OPERATORS: [&str; 2] = ["++", "--"];

/// Which references of a declaration a search reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchTarget {
    /// Every reference
    #[default]
    Usages,
    /// Only references that are written to
    Assignments,
}

impl SearchTarget {
    fn accepts(self, tree: &SyntaxTree, reference: NodeId) -> bool {
        match self {
            Self::Usages => true,
            Self::Assignments => is_assignment_target(tree, reference),
        }
    }
}

/// Filter accepting every declaration
pub fn any_declaration(_: &Declaration<'_>) -> bool {
    true
}

/// Whether `reference` is written to by an assignment or increment
pub fn is_assignment_target(tree: &SyntaxTree, reference: NodeId) -> bool {
    let Some(parent) = tree.parent(reference) else {
        return false;
    };
    match tree.kind(parent) {
        SyntaxKind::Binary => {
            tree.children(parent).first() == Some(&reference)
                && tree
                    .operator(parent)
                    .is_some_and(|operator| ASSIGNMENT_OPERATORS.contains(&operator))
        }
        SyntaxKind::Unary => tree
            .operator(parent)
            .is_some_and(|operator| INCREMENT_OPERATORS.contains(&operator)),
        _ => false,
    }
}

/// Every reference with the declaration's name that its kind of scope can
/// see, before shadow and field-access filtering
fn scope_candidates(
    scope: DeclarationScope,
    tree: &SyntaxTree,
    declaration: &Declaration<'_>,
) -> Result<Vec<NodeId>, ResolveError> {
    let named = |node: NodeId| {
        tree.kind(node) == SyntaxKind::NameReference
            && tree.name_symbol(node) == Some(declaration.symbol)
    };

    match scope {
        DeclarationScope::Local(block) => {
            let mut found = Vec::new();
            for reference in tree.descendants(block).filter(|&node| named(node)) {
                // a local is not visible inside its own initializer or above it
                if tree.is_ancestor(declaration.node, reference, true)
                    || comes_after(tree, declaration.node, reference)?
                {
                    continue;
                }
                found.push(reference);
            }
            Ok(found)
        }
        DeclarationScope::Class(boundary) | DeclarationScope::Program(boundary) => {
            Ok(tree.descendants(boundary).filter(|&node| named(node)).collect())
        }
    }
}

/// Collects declarations of a file and searches their references
///
/// `filter` picks the declarations a rule is interested in; `target`
/// decides whether all usages or only assignments are reported.
#[derive(Debug, Clone)]
pub struct VariablesSearch<'tree, F> {
    tree: &'tree SyntaxTree,
    root: NodeId,
    target: SearchTarget,
    filter: F,
}

impl<'tree, F> VariablesSearch<'tree, F>
where
    F: Fn(&Declaration<'tree>) -> bool,
{
    /// Creates a search over the file rooted at `root`
    pub fn new(tree: &'tree SyntaxTree, root: NodeId, target: SearchTarget, filter: F) -> Self {
        Self {
            tree,
            root,
            target,
            filter,
        }
    }

    /// Every declaration in the file that passes the filter, in document order
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidRootNode`] if the search was not
    /// created on the root of the tree or that root is not a program.
    pub fn collect_declarations(&self) -> Result<Vec<Declaration<'tree>>, ResolveError> {
        let root_kind = self.tree.kind(self.root);
        if self.root != self.tree.root() || root_kind != SyntaxKind::Program {
            return Err(ResolveError::InvalidRootNode { found: root_kind });
        }

        Ok(self
            .tree
            .descendants(self.root)
            .filter_map(|node| Declaration::from_node(self.tree, node))
            .filter(|declaration| (self.filter)(declaration))
            .collect())
    }

    /// Valid references of one declaration
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::AmbiguousScope`] for declarations in
    /// unsupported scopes and [`ResolveError::MissingPositionInfo`] when an
    /// ordering check meets a node without a line.
    pub fn search_results(&self, declaration: &Declaration<'_>) -> Result<Vec<NodeId>, ResolveError> {
        let scope = declaration_scope(self.tree, declaration.node)?;
        let mut results = Vec::new();

        for reference in scope_candidates(scope, self.tree, declaration)? {
            if !self.target.accepts(self.tree, reference) {
                continue;
            }
            if is_reference_to_field_of_object(self.tree, reference) {
                trace!(name = declaration.name, line = ?self.tree.line(reference), "skipping field access");
                continue;
            }
            if is_reference_to_other_variable(self.tree, reference, scope.node(), declaration)? {
                trace!(name = declaration.name, line = ?self.tree.line(reference), "skipping shadowed reference");
                continue;
            }
            results.push(reference);
        }
        Ok(results)
    }

    /// Maps every collected declaration to its valid references
    ///
    /// Declarations in unsupported scopes are left out of the map.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidRootNode`] or
    /// [`ResolveError::MissingPositionInfo`]; see [`Self::collect_declarations`]
    /// and [`Self::search_results`].
    pub fn collect_variables(&self) -> Result<ReferenceMap, ResolveError> {
        let mut variables = ReferenceMap::default();
        for declaration in self.collect_declarations()? {
            let result = self.search_results(&declaration);
            record(&mut variables, &declaration, result)?;
        }
        Ok(variables)
    }

    /// Same as [`Self::collect_variables`], resolving declarations in parallel
    ///
    /// # Errors
    ///
    /// See [`Self::collect_variables`].
    pub fn collect_variables_par(&self) -> Result<ReferenceMap, ResolveError>
    where
        F: Sync,
    {
        let declarations = self.collect_declarations()?;
        let results: Vec<_> = declarations
            .par_iter()
            .map(|declaration| self.search_results(declaration))
            .collect();

        let mut variables = ReferenceMap::default();
        for (declaration, result) in declarations.iter().zip(results) {
            record(&mut variables, declaration, result)?;
        }
        Ok(variables)
    }
}

fn record(
    variables: &mut ReferenceMap,
    declaration: &Declaration<'_>,
    result: Result<Vec<NodeId>, ResolveError>,
) -> Result<(), ResolveError> {
    match result {
        Ok(references) => {
            variables.insert(declaration.node, references);
            Ok(())
        }
        Err(ResolveError::AmbiguousScope { name, line }) => {
            debug!(%name, ?line, "declaration is not in a supported scope, skipping");
            Ok(())
        }
        Err(error) => Err(error),
    }
}
