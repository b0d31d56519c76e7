#![cfg(test)]

use css_syntax::parse_stylesheet;
use geom_core::Point;
use geom_embed::{StyleGraph, embed_selector};
use rayon::prelude::*;

const SHEET: &str = "
    .container { display: grid; gap: 20px; padding: 20px; }
    .item { border-radius: 8px; padding: 16px; }
    .item:hover { transform: translateY(-4px); }
    #main .item > a { color: red }
";

fn bits(points: &[Point]) -> Vec<(u64, u64)> {
    points
        .iter()
        .map(|point| (point.x.to_bits(), point.y.to_bits()))
        .collect()
}

#[test]
fn same_selector_same_point_across_documents() {
    let first = parse_stylesheet(".item { color: red }");
    let second = parse_stylesheet("a { x: y } b { x: y } .item { margin: 0 }");
    let lone = embed_selector(&first.selectors[0]);
    let embedded = embed_selector(&second.selectors[2]);
    assert_eq!(lone.x.to_bits(), embedded.x.to_bits());
    assert_eq!(lone.y.to_bits(), embedded.y.to_bits());
}

#[test]
fn graph_cardinality_matches_sheet() {
    let sheet = parse_stylesheet(SHEET);
    let graph = StyleGraph::from_stylesheet(&sheet);
    let selectors = sheet.selectors.len();
    let declarations = sheet.declarations.len();
    assert_eq!(selectors, 4);
    assert_eq!(declarations, 7);
    assert_eq!(graph.node_count(), selectors + declarations);
    assert_eq!(graph.edge_count(), selectors - 1 + declarations);
    assert!(
        graph
            .edges
            .iter()
            .all(|&(from, to)| from < graph.node_count() && to < graph.node_count())
    );
}

#[test]
fn concurrent_builds_are_bit_identical() {
    let _ = env_logger::builder().is_test(true).try_init();
    let reference = bits(&StyleGraph::from_stylesheet(&parse_stylesheet(SHEET)).nodes);
    let runs: Vec<Vec<(u64, u64)>> = (0..64)
        .into_par_iter()
        .map(|_| bits(&StyleGraph::from_stylesheet(&parse_stylesheet(SHEET)).nodes))
        .collect();
    assert!(runs.iter().all(|run| *run == reference));
}
