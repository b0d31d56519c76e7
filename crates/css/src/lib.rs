//! Stylesheet geometry pipelines.
//!
//! Text goes through the lenient parser, every selector and declaration is
//! placed in the plane, and the resulting graph is folded. The pipelines here
//! glue those steps together and score a stylesheet against a compressed
//! variant of itself.

mod options;
mod report;

pub use options::CompareOptions;
pub use report::{CompressionPotential, CompressionReport, GraphMetrics, StructureReport};

pub use css_selectors::{Specificity, specificity_of};
pub use css_syntax::{Declaration, Selector, Stylesheet, minify, parse_stylesheet};
pub use geom_analysis::GeometryReport;
pub use geom_core::Point;
pub use geom_embed::{StyleGraph, embed_declaration, embed_selector, text_to_vectors};
pub use geom_fold::{CompressionState, Fold, Folded, apply_fold};
pub use geom_scoring::{AngularCollapse, Collapse, CollapseOp, efficiency, similarity};

use geom_analysis::specificity_range;
use geom_embed::text_units;
use geom_scoring::compression_ratio;
use log::debug;
use std::collections::BTreeMap;

/// Build the graph of `sheet` and fold its nodes.
///
/// When the fold merges nodes, edges follow the merge and never dangle.
pub fn fold_graph(sheet: &Stylesheet, fold: Fold) -> StyleGraph {
    let graph = StyleGraph::from_stylesheet(sheet);
    let Folded { points, assignment } = fold.compress(&graph.nodes);
    graph.reassign(points, &assignment)
}

/// Parse `css`, embed it and apply `fold`.
///
/// `state` is accepted for callers that track compression stages; it does not
/// change the result.
pub fn transform_fold_to_graph(css: &str, fold: Fold, state: CompressionState) -> StyleGraph {
    debug!("transforming stylesheet with {fold} in state {}", state.tag());
    fold_graph(&parse_stylesheet(css), fold)
}

/// Score `compressed` as a compressed form of `original`.
///
/// The compressed text's own query (selectors then property names) is spread
/// into vectors and collapsed against its folded graph; the score is then
/// blended with the size ratio into an efficiency percentage.
pub fn compare_compression<C>(
    original: &str,
    compressed: &str,
    options: &CompareOptions,
    collapse: &C,
) -> CompressionReport
where
    C: Collapse + ?Sized,
{
    debug!(
        "comparing with {} in state {}",
        options.fold,
        options.state.tag()
    );
    let sheet = parse_stylesheet(compressed);
    let graph = fold_graph(&sheet, options.fold);
    let query = text_to_vectors(&sheet.query_text());
    let collapse_score = similarity(collapse, &query, graph.to_vectors());

    let original_len = text_units(original);
    let compressed_len = text_units(compressed);
    let efficiency = efficiency(original_len, compressed_len, collapse_score);
    debug!(
        "compression {original_len} -> {compressed_len} units, collapse {collapse_score:.4}, efficiency {efficiency:.2}%"
    );
    CompressionReport {
        graph,
        compression_ratio: compression_ratio(original_len, compressed_len),
        collapse_score,
        efficiency,
        meets_target: efficiency >= options.target_efficiency,
    }
}

/// [`compare_compression`] against the minified form of `original`, using the
/// built-in [`AngularCollapse`] with the options' epsilon.
pub fn compress_and_compare(original: &str, options: &CompareOptions) -> (String, CompressionReport) {
    let compressed = minify(original);
    let report = compare_compression(
        original,
        &compressed,
        options,
        &AngularCollapse::new(options.epsilon),
    );
    (compressed, report)
}

/// Counts, specificity range, property usage and graph size of `css`.
pub fn analyze_structure(css: &str) -> StructureReport {
    let sheet = parse_stylesheet(css);
    let graph = fold_graph(&sheet, Fold::Ui);
    let mut property_distribution = BTreeMap::new();
    for declaration in &sheet.declarations {
        *property_distribution
            .entry(declaration.name.clone())
            .or_insert(0) += 1;
    }
    StructureReport {
        selector_count: sheet.selectors.len(),
        declaration_count: sheet.declarations.len(),
        specificity_range: specificity_range(sheet.specificities()),
        property_distribution,
        graph: GraphMetrics::of(&graph),
    }
}

/// Point-set statistics of the UI-folded graph of `css`.
pub fn analyze_geometry(css: &str) -> GeometryReport {
    let graph = transform_fold_to_graph(css, Fold::Ui, CompressionState::Raw);
    GeometryReport::of(&graph.nodes)
}

/// Minify `css` and measure what that gains and what structure it keeps.
pub fn analyze_compression_potential<C>(css: &str, collapse: &C) -> CompressionPotential
where
    C: Collapse + ?Sized,
{
    let minified = minify(css);
    let original_graph = transform_fold_to_graph(css, Fold::Ui, CompressionState::Raw);
    let minified_graph = transform_fold_to_graph(&minified, Fold::Ui, CompressionState::Raw);
    let structure_preservation = similarity(
        collapse,
        original_graph.to_vectors(),
        minified_graph.to_vectors(),
    );

    let original_size = text_units(css);
    let minified_size = text_units(&minified);
    let potential_gain = if original_size == 0 {
        0.0
    } else {
        original_size.saturating_sub(minified_size) as f64 / original_size as f64 * 100.0
    };
    CompressionPotential {
        original_size,
        minified_size,
        compression_ratio: compression_ratio(original_size, minified_size),
        structure_preservation,
        potential_gain,
    }
}
