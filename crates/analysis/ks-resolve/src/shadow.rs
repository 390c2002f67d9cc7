//! Filters that drop candidate references belonging to something else

use crate::declaration::Declaration;
use crate::error::ResolveError;
use crate::ordering::comes_after;
use crate::scope::is_supported_scope;
use ks_syntax::{NodeId, SyntaxKind, SyntaxTree};

/// Whether `reference` selects a field of some other object
///
/// `other.name` and `other.name()` name a member of `other`, not a
/// variable in scope. The receiver of a qualified expression is still a
/// plain reference.
pub fn is_reference_to_field_of_object(tree: &SyntaxTree, reference: NodeId) -> bool {
    let operand = tree
        .parent(reference)
        .filter(|&call| {
            tree.kind(call) == SyntaxKind::Call && tree.children(call).first() == Some(&reference)
        })
        .unwrap_or(reference);

    tree.parent(operand).is_some_and(|qualified| {
        tree.receiver(qualified) != Some(operand) && tree.selector(qualified) == Some(operand)
    })
}

/// Whether `reference` resolves to another variable with the same name
///
/// Walks the scopes between the reference and `boundary` (the scope of the
/// original declaration), innermost first. The reference belongs to
/// something else if one of them
/// - is a scope the resolver does not model,
/// - directly declares a property with the same name that covers the
///   reference (any member of a class body, or a block-local property on
///   an earlier line),
/// - is the body of a function, lambda or catch clause with a parameter of
///   the same name.
///
/// Parameters are only seen through a block body, so an expression-bodied
/// function such as `fun f(a: Int) = a` does not hide an outer `a`.
///
/// # Errors
///
/// Returns [`ResolveError::MissingPositionInfo`] if a line is missing.
pub fn is_reference_to_other_variable(
    tree: &SyntaxTree,
    reference: NodeId,
    boundary: NodeId,
    declaration: &Declaration<'_>,
) -> Result<bool, ResolveError> {
    let scopes = tree
        .ancestors(reference)
        .filter(|&ancestor| tree.kind(ancestor).is_scope())
        .take_while(|&scope| scope != boundary);

    for scope in scopes {
        if !is_supported_scope(tree, scope)
            || redeclares(tree, scope, reference, declaration)?
            || binds_parameter(tree, scope, declaration)
        {
            return Ok(true);
        }
    }
    Ok(false)
}

fn redeclares(
    tree: &SyntaxTree,
    scope: NodeId,
    reference: NodeId,
    declaration: &Declaration<'_>,
) -> Result<bool, ResolveError> {
    let visible_everywhere = tree.kind(scope) == SyntaxKind::ClassBody;

    for property in tree.children_of_kind(scope, SyntaxKind::Property) {
        if property == declaration.node || tree.name_symbol(property) != Some(declaration.symbol) {
            continue;
        }
        if visible_everywhere || comes_after(tree, reference, property)? {
            return Ok(true);
        }
    }
    Ok(false)
}

fn binds_parameter(tree: &SyntaxTree, scope: NodeId, declaration: &Declaration<'_>) -> bool {
    tree.parent(scope)
        .filter(|&owner| tree.kind(owner).owns_parameters())
        .is_some_and(|owner| {
            tree.parameters(owner)
                .any(|param| tree.name_symbol(param) == Some(declaration.symbol))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sketch::Sketch;
    use ks_syntax::NodeSpec;

    #[test]
    fn test_selectors_are_field_references() {
        let mut this_field = None;
        let mut method = None;
        let mut receiver = None;
        let mut plain = None;
        let mut safe_receiver = None;
        let mut safe_field = None;
        let tree = Sketch::program(|sk| {
            this_field = Some(sk.field(NodeSpec::new(SyntaxKind::This).text("this"), "x", 1));
            sk.node(NodeSpec::new(SyntaxKind::DotQualified).line(2), |sk| {
                receiver = Some(sk.reference("items", 2));
                sk.node(NodeSpec::new(SyntaxKind::Call).line(2), |sk| {
                    method = Some(sk.reference("size", 2));
                    sk.leaf(NodeSpec::new(SyntaxKind::ArgumentList).line(2));
                });
            });
            plain = Some(sk.call_with("x", 3));
            sk.node(NodeSpec::new(SyntaxKind::SafeQualified).line(4), |sk| {
                safe_receiver = Some(sk.reference("owner", 4));
                safe_field = Some(sk.reference("x", 4));
            });
        });

        assert!(is_reference_to_field_of_object(&tree, this_field.unwrap()));
        assert!(is_reference_to_field_of_object(&tree, method.unwrap()));
        assert!(!is_reference_to_field_of_object(&tree, receiver.unwrap()));
        assert!(!is_reference_to_field_of_object(&tree, plain.unwrap()));
        assert!(is_reference_to_field_of_object(&tree, safe_field.unwrap()));
        assert!(!is_reference_to_field_of_object(&tree, safe_receiver.unwrap()));
    }

    #[test]
    fn test_earlier_block_local_hides_outer_declaration() {
        // 1 val a = 1
        // 2 fun f() {
        // 3     a
        // 4     val a = 2
        // 5     a
        // 6 }
        let mut outer = None;
        let mut before = None;
        let mut after = None;
        let tree = Sketch::program(|sk| {
            outer = Some(sk.val("a", 1));
            sk.function("f", 2, &[], |sk| {
                before = Some(sk.reference("a", 3));
                sk.val("a", 4);
                after = Some(sk.reference("a", 5));
            });
        });
        let declaration = Declaration::from_node(&tree, outer.unwrap()).unwrap();

        assert_eq!(
            is_reference_to_other_variable(&tree, before.unwrap(), tree.root(), &declaration),
            Ok(false)
        );
        assert_eq!(
            is_reference_to_other_variable(&tree, after.unwrap(), tree.root(), &declaration),
            Ok(true)
        );
    }

    #[test]
    fn test_walk_stops_at_boundary() {
        let mut body = None;
        let mut reference = None;
        let mut declaration = None;
        let tree = Sketch::program(|sk| {
            body = Some(sk.function("f", 1, &["a"], |sk| {
                declaration = Some(sk.val("a", 2));
                reference = Some(sk.reference("a", 3));
            }));
        });
        let declaration = Declaration::from_node(&tree, declaration.unwrap()).unwrap();

        // the parameter sits outside the block the declaration lives in
        assert_eq!(
            is_reference_to_other_variable(&tree, reference.unwrap(), body.unwrap(), &declaration),
            Ok(false)
        );
    }

    #[test]
    fn test_expression_body_parameter_is_not_seen() {
        // 1 val a = 1
        // 2 fun f(a: Int) = a
        let mut outer = None;
        let mut body_use = None;
        let tree = Sketch::program(|sk| {
            outer = Some(sk.val("a", 1));
            sk.node(NodeSpec::new(SyntaxKind::Function).named("f").line(2), |sk| {
                sk.node(NodeSpec::new(SyntaxKind::ParameterList).line(2), |sk| {
                    sk.leaf(NodeSpec::parameter("a").line(2));
                });
                body_use = Some(sk.reference("a", 2));
            });
        });
        let declaration = Declaration::from_node(&tree, outer.unwrap()).unwrap();

        assert_eq!(
            is_reference_to_other_variable(&tree, body_use.unwrap(), tree.root(), &declaration),
            Ok(false)
        );
    }
}
