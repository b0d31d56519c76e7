//! Command-line front end for the stylesheet geometry pipelines.
//!
//! Every command reads stylesheets from disk and produces a JSON value; the
//! binary only prints it.

use anyhow::{Context as _, Result, anyhow, bail};
use css::{
    AngularCollapse, CompareOptions, CompressionState, Fold, analyze_compression_potential,
    analyze_geometry, analyze_structure, compare_compression, minify, transform_fold_to_graph,
};
use log::{debug, info};
use serde_json::{Value, json, to_value};
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

/// Usage text shown for argument errors.
pub const USAGE: &str = "Usage:
  stylefold graph <FILE> [--fold <SYMBOL>]
  stylefold analyze <FILE> [--kind structural|geometric|compression]
  stylefold compare <ORIGINAL> [<COMPRESSED>] [--fold <SYMBOL>] [--state <STATE>] [--target <PERCENT>] [--epsilon <RADIANS>]";

/// Which report `analyze` produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnalysisKind {
    #[default]
    Structural,
    Geometric,
    Compression,
}

impl AnalysisKind {
    fn from_flag(value: &str) -> Result<Self> {
        match value {
            "structural" => Ok(Self::Structural),
            "geometric" => Ok(Self::Geometric),
            "compression" => Ok(Self::Compression),
            other => bail!("unknown analysis kind '{other}'"),
        }
    }
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Graph {
        path: PathBuf,
        fold: Fold,
    },
    Analyze {
        path: PathBuf,
        kind: AnalysisKind,
    },
    Compare {
        original: PathBuf,
        /// Minified original when absent.
        compressed: Option<PathBuf>,
        options: CompareOptions,
    },
}

/// Take the value following the flag at `index`.
fn flag_value<'args>(args: &'args [String], index: usize, flag: &str) -> Result<&'args str> {
    args.get(index.saturating_add(1))
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{flag} needs a value"))
}

fn parse_number(value: &str, flag: &str) -> Result<f64> {
    let number: f64 = value
        .parse()
        .with_context(|| format!("{flag} expects a number, got '{value}'"))?;
    if !number.is_finite() {
        bail!("{flag} must be finite");
    }
    Ok(number)
}

impl Command {
    /// Parse arguments without the program name.
    ///
    /// # Errors
    /// Returns an error for an unknown command or flag, a missing file, or a
    /// flag value that does not parse.
    pub fn parse(args: &[String]) -> Result<Self> {
        let (name, rest) = args
            .split_first()
            .ok_or_else(|| anyhow!("missing command"))?;

        let mut positional: Vec<PathBuf> = Vec::new();
        let mut fold = None;
        let mut kind = AnalysisKind::default();
        let mut options = CompareOptions::default();
        let mut index = 0;
        while let Some(arg) = rest.get(index) {
            match arg.as_str() {
                "--fold" => fold = Some(Fold::from_symbol(flag_value(rest, index, arg)?)),
                "--kind" => kind = AnalysisKind::from_flag(flag_value(rest, index, arg)?)?,
                "--state" => {
                    let tag = flag_value(rest, index, arg)?;
                    options.state = CompressionState::from_tag(tag)
                        .ok_or_else(|| anyhow!("unknown compression state '{tag}'"))?;
                }
                "--target" => {
                    options.target_efficiency = parse_number(flag_value(rest, index, arg)?, arg)?;
                }
                "--epsilon" => options.epsilon = parse_number(flag_value(rest, index, arg)?, arg)?,
                flag if flag.starts_with("--") => bail!("unknown flag '{flag}'"),
                path => {
                    positional.push(PathBuf::from(path));
                    index = index.saturating_add(1);
                    continue;
                }
            }
            index = index.saturating_add(2);
        }

        let mut files = positional.into_iter();
        let first = files.next().ok_or_else(|| anyhow!("{name} needs a file"))?;
        match name.as_str() {
            "graph" => Ok(Self::Graph {
                path: first,
                fold: fold.unwrap_or_default(),
            }),
            "analyze" => Ok(Self::Analyze { path: first, kind }),
            "compare" => {
                if let Some(symbol) = fold {
                    options.fold = symbol;
                }
                Ok(Self::Compare {
                    original: first,
                    compressed: files.next(),
                    options,
                })
            }
            other => bail!("unknown command '{other}'"),
        }
    }
}

fn read_stylesheet(path: &Path) -> Result<String> {
    let text =
        read_to_string(path).with_context(|| format!("reading stylesheet {}", path.display()))?;
    debug!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Execute `command` and return its JSON result.
///
/// # Errors
/// Returns an error if an input file cannot be read.
pub fn run(command: &Command) -> Result<Value> {
    match command {
        Command::Graph { path, fold } => {
            let css = read_stylesheet(path)?;
            let graph = transform_fold_to_graph(&css, *fold, CompressionState::Raw);
            info!(
                "{}: {} nodes, {} edges",
                path.display(),
                graph.node_count(),
                graph.edge_count()
            );
            Ok(to_value(graph)?)
        }
        Command::Analyze { path, kind } => {
            let css = read_stylesheet(path)?;
            let value = match kind {
                AnalysisKind::Structural => to_value(analyze_structure(&css))?,
                AnalysisKind::Geometric => to_value(analyze_geometry(&css))?,
                AnalysisKind::Compression => to_value(analyze_compression_potential(
                    &css,
                    &AngularCollapse::default(),
                ))?,
            };
            Ok(value)
        }
        Command::Compare {
            original,
            compressed,
            options,
        } => {
            let original_css = read_stylesheet(original)?;
            let compressed_css = match compressed {
                Some(path) => read_stylesheet(path)?,
                None => minify(&original_css),
            };
            let report = compare_compression(
                &original_css,
                &compressed_css,
                options,
                &AngularCollapse::new(options.epsilon),
            );
            info!(
                "efficiency {:.2}% (target {:.2}%)",
                report.efficiency, options.target_efficiency
            );
            Ok(json!({
                "options": to_value(options)?,
                "compressed_css": compressed_css,
                "report": to_value(report)?,
            }))
        }
    }
}
