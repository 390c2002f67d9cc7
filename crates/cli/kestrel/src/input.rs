//! Locating and loading tree files

use anyhow::{Context, Result};
use ks_span::FileId;
use ks_syntax::SyntaxTree;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extension of exported tree files
const TREE_EXTENSION: &str = "json";

/// A loaded tree and where it came from
pub struct SourceTree {
    pub path: PathBuf,
    pub file: FileId,
    pub tree: SyntaxTree,
}

/// Tree files under `path`, sorted so output is stable
pub fn find_tree_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if path.is_file() {
        files.push(path.to_path_buf());
    } else if path.is_dir() {
        collect_dir(path, &mut files)?;
        files.sort();
    } else {
        anyhow::bail!("{} does not exist", path.display());
    }

    Ok(files)
}

fn collect_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))?;
    for entry in entries {
        let entry_path = entry?.path();
        if entry_path.is_dir() {
            collect_dir(&entry_path, files)?;
        } else if entry_path
            .extension()
            .is_some_and(|ext| ext == TREE_EXTENSION)
        {
            files.push(entry_path);
        }
    }
    Ok(())
}

/// Parses every file in parallel; file ids follow the order of `files`
pub fn load_trees(files: &[PathBuf]) -> Result<Vec<SourceTree>> {
    files
        .par_iter()
        .enumerate()
        .map(|(index, path)| {
            let file = FileId::new(u32::try_from(index).context("too many input files")?);
            let json =
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            let tree = SyntaxTree::from_json(&json)
                .with_context(|| format!("loading tree from {}", path.display()))?;
            debug!(path = %path.display(), nodes = tree.len(), "loaded tree");
            Ok(SourceTree {
                path: path.clone(),
                file,
                tree,
            })
        })
        .collect()
}
