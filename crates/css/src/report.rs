//! Serializable results of the pipelines.

use geom_embed::StyleGraph;
use serde::Serialize;
use std::collections::BTreeMap;

/// Size counters of a [`StyleGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GraphMetrics {
    /// Selector plus declaration nodes after folding.
    pub node_count: usize,
    /// Edges after folding, always in range.
    pub edge_count: usize,
    /// Edges per node.
    pub density: f64,
}

impl GraphMetrics {
    /// Read the counters off `graph`.
    pub fn of(graph: &StyleGraph) -> Self {
        Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            density: graph.density(),
        }
    }
}

/// What a stylesheet is made of.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StructureReport {
    pub selector_count: usize,
    pub declaration_count: usize,
    /// `(min, max)` weighted specificity; `(0, 0)` without selectors.
    pub specificity_range: (u32, u32),
    /// Occurrences per property name, sorted by name.
    pub property_distribution: BTreeMap<String, usize>,
    pub graph: GraphMetrics,
}

/// How much a stylesheet shrinks under minification and how much structure survives.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CompressionPotential {
    /// UTF-16 units.
    pub original_size: usize,
    /// UTF-16 units.
    pub minified_size: usize,
    pub compression_ratio: f64,
    /// Collapse score between the original and minified graphs.
    pub structure_preservation: f64,
    /// Percentage of the original removed; 0 for empty input.
    pub potential_gain: f64,
}

/// Outcome of comparing a stylesheet with a compressed variant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompressionReport {
    /// Folded graph of the compressed text.
    pub graph: StyleGraph,
    /// Original length over compressed length, in UTF-16 units.
    pub compression_ratio: f64,
    /// Clamped collapse score of the query against the graph.
    pub collapse_score: f64,
    /// Weighted blend of ratio and score, as a percentage; may exceed 100.
    pub efficiency: f64,
    /// Whether `efficiency` reached the requested target.
    pub meets_target: bool,
}
