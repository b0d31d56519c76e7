//! Similarity and compression-efficiency scoring.
//!
//! How similar two vector sequences are is decided by a [`Collapse`]
//! primitive. The scorer only feeds it vectors in a fixed order (query first,
//! reference second) and keeps the result inside `[0, 1]`.

#![forbid(unsafe_code)]

mod collapse;
mod ops;

pub use collapse::{AngularCollapse, Collapse, DEFAULT_EPSILON};
pub use ops::CollapseOp;

use geom_core::Point;
use log::warn;

/// Weight of the size ratio in [`efficiency`].
pub const RATIO_WEIGHT: f64 = 0.6;
/// Weight of the similarity score in [`efficiency`].
pub const SIMILARITY_WEIGHT: f64 = 0.4;

/// Score `query` against `reference` with `collapse`, clamped to `[0, 1]`.
/// A primitive that returns NaN scores 0.
pub fn similarity<C>(collapse: &C, query: &[Point], reference: &[Point]) -> f64
where
    C: Collapse + ?Sized,
{
    let raw = collapse.collapse(query, reference);
    if raw.is_nan() {
        warn!("collapse primitive returned NaN; scoring 0");
        return 0.0;
    }
    raw.clamp(0.0, 1.0)
}

/// `original / max(1, compressed)`.
pub fn compression_ratio(original_len: usize, compressed_len: usize) -> f64 {
    original_len as f64 / compressed_len.max(1) as f64
}

/// Blend of size reduction and structural preservation, as a percentage.
///
/// `(ratio * 0.6 + similarity * 0.4) * 100`. Not clamped: a large enough
/// ratio pushes it past 100.
pub fn efficiency(original_len: usize, compressed_len: usize, similarity_score: f64) -> f64 {
    let ratio = compression_ratio(original_len, compressed_len);
    ratio.mul_add(RATIO_WEIGHT, similarity_score * SIMILARITY_WEIGHT) * 100.0
}
