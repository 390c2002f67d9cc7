//! Declarations as views over property nodes

use ks_intern::Symbol;
use ks_syntax::{NodeId, SyntaxKind, SyntaxTree};

/// Where a declaration lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locality {
    /// Inside a function, lambda or other block
    Local,
    /// Directly inside a class or object body
    Member,
    /// Directly inside the program root
    TopLevel,
}

/// A property declaration with the attributes rules filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'tree> {
    /// The property node
    pub node: NodeId,
    /// Declared name
    pub name: &'tree str,
    /// Interned declared name
    pub symbol: Symbol,
    /// `var` rather than `val`
    pub mutable: bool,
    /// Whether the property is initialised where it is declared
    pub has_initializer: bool,
    /// Local, member or top-level
    pub locality: Locality,
}

impl<'tree> Declaration<'tree> {
    /// Views `node` as a declaration; `None` unless it is a named property
    pub fn from_node(tree: &'tree SyntaxTree, node: NodeId) -> Option<Self> {
        if tree.kind(node) != SyntaxKind::Property {
            return None;
        }
        let symbol = tree.name_symbol(node)?;

        let locality = match tree
            .ancestors(node)
            .map(|ancestor| tree.kind(ancestor))
            .find(|kind| kind.is_scope())
        {
            Some(SyntaxKind::ClassBody) => Locality::Member,
            Some(SyntaxKind::Program) => Locality::TopLevel,
            _ => Locality::Local,
        };

        Some(Self {
            node,
            name: tree.names().resolve(symbol),
            symbol,
            mutable: tree.is_mutable(node),
            has_initializer: has_initializer(tree, node),
            locality,
        })
    }

    /// Whether the declaration is function- or lambda-local
    pub fn is_local(&self) -> bool {
        self.locality == Locality::Local
    }
}

/// Whether a property has an initializer expression among its children
pub(crate) fn has_initializer(tree: &SyntaxTree, property: NodeId) -> bool {
    tree.children(property)
        .iter()
        .any(|&child| tree.kind(child).is_expression())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sketch::Sketch;
    use ks_syntax::NodeSpec;

    #[test]
    fn test_locality_and_initializer() {
        let mut top_level = None;
        let mut member = None;
        let mut local = None;
        let tree = Sketch::program(|sk| {
            top_level = Some(sk.val("limit", 1));
            sk.class("C", 2, |sk| {
                member = Some(sk.leaf(NodeSpec::property("size").line(3).mutable()));
                sk.function("f", 4, &[], |sk| {
                    local = Some(sk.var("count", 5));
                });
            });
        });

        let top_level = Declaration::from_node(&tree, top_level.unwrap()).unwrap();
        assert_eq!(top_level.name, "limit");
        assert_eq!(top_level.locality, Locality::TopLevel);
        assert!(!top_level.mutable);
        assert!(top_level.has_initializer);

        let member = Declaration::from_node(&tree, member.unwrap()).unwrap();
        assert_eq!(member.locality, Locality::Member);
        assert!(member.mutable);
        assert!(!member.has_initializer);

        let local = Declaration::from_node(&tree, local.unwrap()).unwrap();
        assert!(local.is_local());
        assert!(Declaration::from_node(&tree, tree.root()).is_none());
    }
}
