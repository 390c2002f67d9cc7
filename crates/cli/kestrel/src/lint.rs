//! Lint command implementation

use crate::OutputFormat;
use crate::config::load_config;
use crate::input::{find_tree_files, load_trees};
use anyhow::{Context, Result};
use colored::Colorize;
use ks_lint::{Diagnostic, LintLevel, Linter};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

/// Diagnostics of one file
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

/// Lints every tree under `path`; returns whether any error was found
pub fn run_lint(
    path: &Path,
    format: OutputFormat,
    config_path: Option<&Path>,
    fix: bool,
) -> Result<bool> {
    let mut config = load_config(config_path, path)?;
    config.fix |= fix;
    let linter = Linter::from_config(config)?;

    let files = find_tree_files(path)?;
    if files.is_empty() {
        anyhow::bail!("No tree files found in {}", path.display());
    }
    let trees = load_trees(&files)?;

    let reports = trees
        .par_iter()
        .map(|source| {
            let diagnostics = linter
                .lint_file(&source.tree, source.file)
                .with_context(|| format!("linting {}", source.path.display()))?;
            Ok(FileReport {
                path: source.path.clone(),
                diagnostics,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Json => writeln!(stdout, "{}", serde_json::to_string_pretty(&reports)?)?,
        OutputFormat::Text => write!(stdout, "{}", TextReport(&reports))?,
    }

    Ok(reports
        .iter()
        .flat_map(|report| &report.diagnostics)
        .any(|diagnostic| diagnostic.level == LintLevel::Error))
}

/// Human readable rendering of a set of reports
pub struct TextReport<'a>(pub &'a [FileReport]);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let all = || self.0.iter().flat_map(|report| &report.diagnostics);
        if all().next().is_none() {
            return writeln!(out, "{} No issues found", "Success:".green().bold());
        }

        for report in self.0 {
            for diagnostic in &report.diagnostics {
                let level_str = match diagnostic.level {
                    LintLevel::Error => "error".red().bold(),
                    LintLevel::Warning => "warning".yellow().bold(),
                    LintLevel::Info => "info".cyan().bold(),
                };

                writeln!(out, "{}: {} [{}]", level_str, diagnostic.message, diagnostic.rule)?;
                writeln!(
                    out,
                    "  --> {}:{}",
                    report.path.display(),
                    diagnostic.location.line
                )?;
                if let Some(suggestion) = &diagnostic.suggestion {
                    writeln!(out, "  {} {}", "help:".cyan().bold(), suggestion)?;
                }
                if let Some(edit) = &diagnostic.fix {
                    writeln!(
                        out,
                        "  {} replace bytes {}..{} with `{}`",
                        "fix:".green().bold(),
                        edit.span.start,
                        edit.span.end,
                        edit.replacement
                    )?;
                }
                writeln!(out)?;
            }
        }

        let errors = all()
            .filter(|diagnostic| diagnostic.level == LintLevel::Error)
            .count();
        let warnings = all()
            .filter(|diagnostic| diagnostic.level == LintLevel::Warning)
            .count();
        writeln!(
            out,
            "{} {} errors, {} warnings",
            "Summary:".bold(),
            errors,
            warnings
        )
    }
}
