//! Rule: local declarations that hide an outer one

use crate::{Diagnostic, LintContext, LintError, LintLevel, LintRule};
use indexmap::IndexMap;
use ks_intern::Symbol;
use ks_resolve::{Declaration, SearchTarget, VariablesSearch, any_declaration, is_shadow_of};
use rustc_hash::FxBuildHasher;

/// Rule: local variables shadowing an outer declaration
pub struct ShadowedVariableRule;

impl LintRule for ShadowedVariableRule {
    fn name(&self) -> &str {
        "shadowed-variable"
    }

    fn check_file(&self, ctx: &mut LintContext<'_>) -> Result<(), LintError> {
        let tree = ctx.tree;
        let declarations =
            VariablesSearch::new(tree, tree.root(), SearchTarget::Usages, any_declaration)
                .collect_declarations()?;

        let mut by_name: IndexMap<Symbol, Vec<Declaration<'_>>, FxBuildHasher> =
            IndexMap::default();
        for declaration in declarations {
            by_name.entry(declaration.symbol).or_default().push(declaration);
        }

        for same_name in by_name.values().filter(|group| group.len() > 1) {
            for candidate in same_name.iter().filter(|declaration| declaration.is_local()) {
                let mut shadowed = None;
                for original in same_name {
                    if is_shadow_of(tree, candidate.node, original.node)? {
                        shadowed = Some(original.node);
                        break;
                    }
                }
                let Some(original) = shadowed else {
                    continue;
                };

                let original_line = tree.line(original).unwrap_or_default();
                ctx.report(Diagnostic {
                    rule: self.name().to_owned(),
                    level: LintLevel::Warning,
                    message: format!(
                        "Variable `{}` shadows the declaration on line {original_line}",
                        candidate.name
                    ),
                    location: ctx.location(candidate.node),
                    suggestion: Some("Rename one of the variables".to_owned()),
                    fix: None,
                });
            }
        }
        Ok(())
    }
}
