//! Node and edge lists built from a parsed stylesheet.

use crate::{embed_declaration, embed_selector};
use css_syntax::Stylesheet;
use geom_core::Point;
use log::trace;
use serde::Serialize;
use std::collections::HashSet;

/// A stylesheet as a point graph.
///
/// Selector nodes come first, in parse order, joined into a path. Each
/// declaration follows as its own node with one edge from its selector.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StyleGraph {
    pub nodes: Vec<Point>,
    /// `(from, to)` node indices, always in range.
    pub edges: Vec<(usize, usize)>,
}

impl StyleGraph {
    /// Build the graph for `sheet`.
    ///
    /// # Panics
    /// Panics if a declaration refers to a selector index outside the sheet.
    /// The parser never produces such a sheet; a hand-built one that does is a
    /// logic error, and a dangling edge would be worse than stopping.
    pub fn from_stylesheet(sheet: &Stylesheet) -> Self {
        let selector_count = sheet.selectors.len();
        let mut nodes = Vec::with_capacity(selector_count + sheet.declarations.len());
        let mut edges = Vec::with_capacity(
            selector_count.saturating_sub(1) + sheet.declarations.len(),
        );

        for (index, selector) in sheet.selectors.iter().enumerate() {
            nodes.push(embed_selector(selector));
            if index > 0 {
                edges.push((index - 1, index));
            }
        }

        for declaration in &sheet.declarations {
            assert!(
                declaration.selector_index < selector_count,
                "declaration `{}` refers to selector {} of {}",
                declaration.name,
                declaration.selector_index,
                selector_count
            );
            edges.push((declaration.selector_index, nodes.len()));
            nodes.push(embed_declaration(declaration));
        }

        trace!(
            "built style graph: {} nodes, {} edges",
            nodes.len(),
            edges.len()
        );
        Self { nodes, edges }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges per node; nodes are floored at one so an empty graph has density 0.
    pub fn density(&self) -> f64 {
        self.edges.len() as f64 / self.nodes.len().max(1) as f64
    }

    /// The node positions as plain vectors, in node order.
    pub fn to_vectors(&self) -> &[Point] {
        &self.nodes
    }

    /// Replace the nodes with `nodes`, where `assignment[i]` names the new node
    /// that old node `i` was merged into.
    ///
    /// Edges are carried through the assignment. Edges that collapse onto one
    /// node and repeated edges are dropped; edges whose endpoints have no
    /// assignment in range are dropped too, so the result never dangles.
    #[must_use]
    pub fn reassign(&self, nodes: Vec<Point>, assignment: &[usize]) -> Self {
        let identity = nodes.len() == self.nodes.len()
            && assignment.len() == self.nodes.len()
            && assignment.iter().enumerate().all(|(old, &new)| old == new);
        if identity {
            return Self {
                nodes,
                edges: self.edges.clone(),
            };
        }

        let mut seen = HashSet::with_capacity(self.edges.len());
        let edges = self
            .edges
            .iter()
            .filter_map(|&(from, to)| {
                let mapped_from = *assignment.get(from)?;
                let mapped_to = *assignment.get(to)?;
                let in_range = mapped_from < nodes.len() && mapped_to < nodes.len();
                (in_range && mapped_from != mapped_to).then_some((mapped_from, mapped_to))
            })
            .filter(|edge| seen.insert(*edge))
            .collect();
        Self { nodes, edges }
    }
}
