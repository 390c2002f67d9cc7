//! Rule: classes that wrap a single immutable value

use crate::{Diagnostic, LintContext, LintError, LintLevel, LintRule};
use ks_syntax::{NodeId, SyntaxKind, SyntaxTree};

/// Modifiers that an inline class may carry
const INLINE_MODIFIERS: [&str; 5] = ["public", "private", "final", "protected", "internal"];

/// Rule: classes that could be declared inline
///
/// A class qualifies when it holds exactly one value: either a single
/// `val` in its body and no primary constructor, or no body properties and
/// a primary constructor with one non-`var` parameter. Classes with super
/// types or with modifiers other than visibility and `final` are left
/// alone. Inline classes are still experimental, so no fix is offered.
pub struct InlineClassRule;

impl LintRule for InlineClassRule {
    fn name(&self) -> &str {
        "inline-class"
    }

    fn check_file(&self, ctx: &mut LintContext<'_>) -> Result<(), LintError> {
        let tree = ctx.tree;
        let candidates = tree
            .descendants(tree.root())
            .filter(|&node| tree.kind(node) == SyntaxKind::Class)
            .filter(|&class| {
                holds_single_value(tree, class)
                    && tree.child_of_kind(class, SyntaxKind::SuperTypeList).is_none()
                    && has_only_inline_modifiers(tree, class)
            });

        for class in candidates {
            let name = tree.name(class).unwrap_or("<anonymous>");
            ctx.report(Diagnostic {
                rule: self.name().to_owned(),
                level: LintLevel::Warning,
                message: format!("Inline class can be used: class {name}"),
                location: ctx.location(class),
                suggestion: Some(format!("Declare `{name}` as a value class")),
                fix: None,
            });
        }
        Ok(())
    }
}

fn holds_single_value(tree: &SyntaxTree, class: NodeId) -> bool {
    let properties: Vec<_> = tree
        .child_of_kind(class, SyntaxKind::ClassBody)
        .map(|body| tree.children_of_kind(body, SyntaxKind::Property).collect())
        .unwrap_or_default();
    let constructor = tree.child_of_kind(class, SyntaxKind::PrimaryConstructor);

    match (properties.as_slice(), constructor) {
        ([property], None) => !tree.is_mutable(*property),
        ([], Some(constructor)) => {
            let params: Vec<_> = tree.parameters(constructor).collect();
            matches!(params.as_slice(), [param] if !tree.is_mutable(*param))
        }
        _ => false,
    }
}

fn has_only_inline_modifiers(tree: &SyntaxTree, class: NodeId) -> bool {
    tree.child_of_kind(class, SyntaxKind::ModifierList)
        .is_none_or(|modifiers| {
            tree.children(modifiers)
                .iter()
                .all(|&modifier| INLINE_MODIFIERS.contains(&tree.text(modifier)))
        })
}
