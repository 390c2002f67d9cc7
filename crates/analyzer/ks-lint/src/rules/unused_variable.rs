//! Rule: local variables that are never read

use crate::{Diagnostic, LintContext, LintError, LintLevel, LintRule};
use ks_resolve::{SearchTarget, VariablesSearch};

/// Rule: Unused variables
pub struct UnusedVariableRule;

impl LintRule for UnusedVariableRule {
    fn name(&self) -> &str {
        "unused-variable"
    }

    fn check_file(&self, ctx: &mut LintContext<'_>) -> Result<(), LintError> {
        let tree = ctx.tree;
        let variables = VariablesSearch::new(tree, tree.root(), SearchTarget::Usages, |declaration| {
            declaration.is_local()
        })
        .collect_variables()?;

        for (declaration, references) in variables {
            if !references.is_empty() {
                continue;
            }
            let name = tree.name(declaration).unwrap_or_default();
            ctx.report(Diagnostic {
                rule: self.name().to_owned(),
                level: LintLevel::Warning,
                message: format!("Variable `{name}` is declared but never used"),
                location: ctx.location(declaration),
                suggestion: Some("Remove the unused variable".to_owned()),
                fix: None,
            });
        }
        Ok(())
    }
}
