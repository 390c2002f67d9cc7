//! Reference map command implementation

use crate::OutputFormat;
use crate::input::{find_tree_files, load_trees};
use anyhow::{Context, Result};
use colored::Colorize;
use ks_resolve::{SearchTarget, VariablesSearch, any_declaration};
use ks_syntax::SyntaxTree;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

/// A declaration with the lines of its references
#[derive(Debug, Serialize)]
pub struct DeclarationRefs {
    pub name: String,
    pub line: Option<u32>,
    pub mutable: bool,
    pub references: Vec<Option<u32>>,
}

/// Declarations of one file
#[derive(Debug, Serialize)]
pub struct FileRefs {
    pub path: PathBuf,
    pub declarations: Vec<DeclarationRefs>,
}

/// Prints the reference map of every tree under `path`
pub fn print_references(path: &Path, format: OutputFormat, assignments: bool) -> Result<()> {
    let target = if assignments {
        SearchTarget::Assignments
    } else {
        SearchTarget::Usages
    };

    let files = find_tree_files(path)?;
    if files.is_empty() {
        anyhow::bail!("No tree files found in {}", path.display());
    }
    let trees = load_trees(&files)?;

    let maps = trees
        .par_iter()
        .map(|source| {
            let declarations = resolve(&source.tree, target)
                .with_context(|| format!("resolving {}", source.path.display()))?;
            Ok(FileRefs {
                path: source.path.clone(),
                declarations,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Json => writeln!(stdout, "{}", serde_json::to_string_pretty(&maps)?)?,
        OutputFormat::Text => {
            for map in &maps {
                write!(stdout, "{map}")?;
            }
        }
    }
    Ok(())
}

/// Resolves one tree into its printable reference map
pub fn resolve(tree: &SyntaxTree, target: SearchTarget) -> Result<Vec<DeclarationRefs>> {
    let variables =
        VariablesSearch::new(tree, tree.root(), target, any_declaration).collect_variables_par()?;

    Ok(variables
        .into_iter()
        .map(|(declaration, references)| DeclarationRefs {
            name: tree.name(declaration).unwrap_or_default().to_owned(),
            line: tree.line(declaration),
            mutable: tree.is_mutable(declaration),
            references: references
                .into_iter()
                .map(|reference| tree.line(reference))
                .collect(),
        })
        .collect())
}

fn line_text(line: Option<u32>) -> String {
    line.map_or_else(|| "?".to_owned(), |line| line.to_string())
}

impl fmt::Display for FileRefs {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(out, "{}", self.path.display().to_string().bold())?;
        for declaration in &self.declarations {
            let keyword = if declaration.mutable { "var" } else { "val" };
            let lines: Vec<_> = declaration
                .references
                .iter()
                .map(|&line| line_text(line))
                .collect();
            let references = if lines.is_empty() {
                "no references".dimmed().to_string()
            } else {
                lines.join(", ")
            };
            writeln!(
                out,
                "  {} {} (line {}): {}",
                keyword.cyan(),
                declaration.name,
                line_text(declaration.line),
                references
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colored::control;
    use expect_test::expect;

    /// ```text
    /// 1 var a = 1
    /// 2 fun f() {
    /// 3     a = 2
    /// 4     val b = a
    /// 5 }
    /// ```
    const TREE: &str = r#"
    { "kind": "program", "line": 1, "children": [
      { "kind": "property", "name": "a", "line": 1, "mutable": true, "children": [
        { "kind": "literal", "text": "1", "line": 1 }
      ] },
      { "kind": "function", "name": "f", "line": 2, "children": [
        { "kind": "block", "line": 2, "children": [
          { "kind": "binary", "line": 3, "children": [
            { "kind": "name_reference", "name": "a", "line": 3 },
            { "kind": "operation", "text": "=", "line": 3 },
            { "kind": "literal", "text": "2", "line": 3 }
          ] },
          { "kind": "property", "name": "b", "line": 4, "children": [
            { "kind": "name_reference", "name": "a", "line": 4 }
          ] }
        ] }
      ] }
    ] }
    "#;

    #[test]
    fn test_usages_and_assignments() {
        control::set_override(false);
        let tree = SyntaxTree::from_json(TREE).unwrap();

        let usages = FileRefs {
            path: PathBuf::from("main.json"),
            declarations: resolve(&tree, SearchTarget::Usages).unwrap(),
        };
        expect![[r#"
            main.json
              var a (line 1): 3, 4
              val b (line 4): no references
        "#]]
        .assert_eq(&usages.to_string());

        let writes = resolve(&tree, SearchTarget::Assignments).unwrap();
        assert_eq!(writes[0].references, vec![Some(3)]);
        assert!(writes[1].references.is_empty());
    }
}
