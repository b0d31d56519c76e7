//! Deterministic placement of stylesheet items in the plane.
//!
//! Every function here is a pure function of its input strings: the same text
//! lands on bit-identical coordinates in any document, on any call.

#![forbid(unsafe_code)]

mod graph;
mod hash;

pub use graph::StyleGraph;
pub use hash::{string_hash, text_units};

use css_syntax::{Declaration, Selector};
use geom_core::Point;

/// Place a selector: specificity drives the x extent, text length drives y,
/// both along an angle taken from the selector's hash.
pub fn embed_selector(selector: &Selector) -> Point {
    let angle = f64::from(string_hash(&selector.text) % 360).to_radians();
    let complexity = text_units(&selector.text) as f64 / 100.0;
    Point::new(
        f64::from(selector.specificity) * angle.cos(),
        complexity * angle.sin(),
    )
}

/// Place a declaration in the unit square from its name and value hashes.
pub fn embed_declaration(declaration: &Declaration) -> Point {
    Point::new(
        f64::from(string_hash(&declaration.name) % 100) / 100.0,
        f64::from(string_hash(&declaration.value) % 100) / 100.0,
    )
}

/// Spiral a text into points: the `i`-th of `n` UTF-16 units sits at radius
/// `i / n` and at an angle of its code unit value in degrees.
pub fn text_to_vectors(text: &str) -> Vec<Point> {
    let total = text_units(text) as f64;
    text.encode_utf16()
        .enumerate()
        .map(|(position, unit)| {
            let angle = f64::from(unit % 360).to_radians();
            let radius = position as f64 / total;
            Point::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}
