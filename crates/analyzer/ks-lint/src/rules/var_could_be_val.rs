//! Rule: local `var`s that are never reassigned

use crate::{Diagnostic, LintContext, LintError, LintLevel, LintRule, TextEdit};
use ks_resolve::{SearchTarget, VariablesSearch};
use ks_syntax::{NodeId, SyntaxKind, SyntaxTree};

/// Rule: `var` declarations that could be `val`
pub struct VarCouldBeValRule;

impl LintRule for VarCouldBeValRule {
    fn name(&self) -> &str {
        "var-could-be-val"
    }

    fn check_file(&self, ctx: &mut LintContext<'_>) -> Result<(), LintError> {
        let tree = ctx.tree;
        let assignments =
            VariablesSearch::new(tree, tree.root(), SearchTarget::Assignments, |declaration| {
                declaration.is_local() && declaration.mutable && declaration.has_initializer
            })
            .collect_variables()?;

        for (declaration, writes) in assignments {
            if !writes.is_empty() {
                continue;
            }
            let name = tree.name(declaration).unwrap_or_default();
            let fix = if ctx.is_fix_mode() {
                var_keyword_edit(tree, declaration)
            } else {
                None
            };
            ctx.report(Diagnostic {
                rule: self.name().to_owned(),
                level: LintLevel::Warning,
                message: format!("Variable `{name}` is never reassigned"),
                location: ctx.location(declaration),
                suggestion: Some("Declare it with `val`".to_owned()),
                fix,
            });
        }
        Ok(())
    }
}

/// Replaces the `var` keyword, when the tree recorded where it is
fn var_keyword_edit(tree: &SyntaxTree, property: NodeId) -> Option<TextEdit> {
    let keyword = tree
        .children_of_kind(property, SyntaxKind::Keyword)
        .find(|&keyword| tree.text(keyword) == "var")?;
    Some(TextEdit {
        span: tree.span(keyword)?,
        replacement: "val".to_owned(),
    })
}
