//! Helpers shared by the analyzer integration tests
//!
//! Fixtures are syntax trees in their JSON interchange form, stored under
//! `tests/fixtures`.

use anyhow::{Context, Result};
use ks_resolve::ReferenceMap;
use ks_syntax::{NodeId, SyntaxKind, SyntaxTree};
use std::fs;
use std::path::{Path, PathBuf};

/// Absolute path of a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Loads a fixture tree
///
/// # Errors
///
/// Fails if the fixture is missing or is not a valid tree.
pub fn load_fixture(name: &str) -> Result<SyntaxTree> {
    let path = fixture_path(name);
    let json = fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    SyntaxTree::from_json(&json).with_context(|| format!("loading {}", path.display()))
}

/// The property called `name` declared on `line`
pub fn declaration_at(tree: &SyntaxTree, name: &str, line: u32) -> Option<NodeId> {
    tree.descendants(tree.root()).find(|&node| {
        tree.kind(node) == SyntaxKind::Property
            && tree.name(node) == Some(name)
            && tree.line(node) == Some(line)
    })
}

/// Lines of the references recorded for `declaration`
pub fn reference_lines(tree: &SyntaxTree, variables: &ReferenceMap, declaration: NodeId) -> Vec<u32> {
    variables
        .get(&declaration)
        .into_iter()
        .flatten()
        .filter_map(|&reference| tree.line(reference))
        .collect()
}

/// One line per declaration: `name@line -> [reference lines]`
pub fn render_reference_map(tree: &SyntaxTree, variables: &ReferenceMap) -> String {
    variables
        .keys()
        .map(|&declaration| {
            format!(
                "{}@{} -> {:?}\n",
                tree.name(declaration).unwrap_or_default(),
                tree.line(declaration).unwrap_or_default(),
                reference_lines(tree, variables, declaration)
            )
        })
        .collect()
}
