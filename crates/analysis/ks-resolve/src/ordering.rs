//! Source-order comparisons

use crate::error::ResolveError;
use ks_syntax::{NodeId, SyntaxTree};

/// Whether `node` starts on a later line than `other`
///
/// Nodes on the same line are never "after" each other.
///
/// # Errors
///
/// Returns [`ResolveError::MissingPositionInfo`] if either node has no line.
pub fn comes_after(tree: &SyntaxTree, node: NodeId, other: NodeId) -> Result<bool, ResolveError> {
    let this_line = line_of(tree, node)?;
    let other_line = line_of(tree, other)?;
    Ok(this_line > other_line)
}

fn line_of(tree: &SyntaxTree, node: NodeId) -> Result<u32, ResolveError> {
    tree.line(node)
        .ok_or_else(|| ResolveError::MissingPositionInfo {
            text: tree.text(node).to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ks_syntax::{NodeSpec, SyntaxKind, TreeBuilder};

    fn tree_with_lines(lines: &[Option<u32>]) -> (SyntaxTree, Vec<NodeId>) {
        let mut builder = TreeBuilder::new();
        builder.start_node(NodeSpec::new(SyntaxKind::Program).line(1));
        let nodes = lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let mut spec = NodeSpec::literal(["first", "second", "third"][index]);
                spec.line = *line;
                builder.leaf(spec)
            })
            .collect();
        builder.finish_node();
        (builder.finish().unwrap(), nodes)
    }

    #[test]
    fn test_later_line_comes_after() {
        let (tree, nodes) = tree_with_lines(&[Some(2), Some(5)]);

        assert_eq!(comes_after(&tree, nodes[1], nodes[0]), Ok(true));
        assert_eq!(comes_after(&tree, nodes[0], nodes[1]), Ok(false));
    }

    #[test]
    fn test_same_line_is_never_after() {
        let (tree, nodes) = tree_with_lines(&[Some(3), Some(3)]);

        assert_eq!(comes_after(&tree, nodes[0], nodes[1]), Ok(false));
        assert_eq!(comes_after(&tree, nodes[1], nodes[0]), Ok(false));
        assert_eq!(comes_after(&tree, nodes[0], nodes[0]), Ok(false));
    }

    #[test]
    fn test_comparisons_are_antisymmetric() {
        let (tree, nodes) = tree_with_lines(&[Some(1), Some(7), Some(7)]);

        for &left in &nodes {
            for &right in &nodes {
                let forward = comes_after(&tree, left, right).unwrap();
                let backward = comes_after(&tree, right, left).unwrap();
                assert!(!(forward && backward));
            }
        }
    }

    #[test]
    fn test_missing_line_is_an_error() {
        let (tree, nodes) = tree_with_lines(&[Some(1), None]);

        assert_eq!(
            comes_after(&tree, nodes[0], nodes[1]),
            Err(ResolveError::MissingPositionInfo {
                text: "second".to_owned()
            })
        );
        assert!(comes_after(&tree, nodes[1], nodes[0]).is_err());
    }
}
