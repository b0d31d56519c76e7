//! The similarity primitive seam.

use core::f64::consts::{PI, TAU};
use geom_core::Point;

/// Angular tolerance of [`AngularCollapse::default`], ten degrees in radians.
pub const DEFAULT_EPSILON: f64 = 0.174_532_9;

/// Compares an ordered query sequence against an ordered reference sequence.
///
/// Implementations should return a value in `[0, 1]`; callers going through
/// [`crate::similarity`] get the value clamped either way.
pub trait Collapse {
    /// Similarity of `query` to `reference`, nominally in `[0, 1]`.
    fn collapse(&self, query: &[Point], reference: &[Point]) -> f64;
}

impl<F> Collapse for F
where
    F: Fn(&[Point], &[Point]) -> f64,
{
    fn collapse(&self, query: &[Point], reference: &[Point]) -> f64 {
        self(query, reference)
    }
}

/// Built-in primitive that compares directions.
///
/// Each query vector is matched to the reference vector closest in polar
/// angle. Matches within `epsilon` count fully, farther ones count
/// `epsilon / distance`. The score is the mean over the query; an empty
/// query or reference scores 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngularCollapse {
    epsilon: f64,
}

impl AngularCollapse {
    /// A non-positive or non-finite `epsilon` falls back to [`DEFAULT_EPSILON`].
    pub fn new(epsilon: f64) -> Self {
        let epsilon = if epsilon.is_finite() && epsilon > 0.0 {
            epsilon
        } else {
            DEFAULT_EPSILON
        };
        Self { epsilon }
    }

    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    fn contribution(&self, distance: f64) -> f64 {
        if distance <= self.epsilon {
            1.0
        } else {
            self.epsilon / distance
        }
    }
}

impl Default for AngularCollapse {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON)
    }
}

/// Distance between two angles along the circle, in `[0, π]`.
fn angular_distance(left: f64, right: f64) -> f64 {
    let raw = (left - right).abs() % TAU;
    if raw > PI { TAU - raw } else { raw }
}

impl Collapse for AngularCollapse {
    fn collapse(&self, query: &[Point], reference: &[Point]) -> f64 {
        if query.is_empty() || reference.is_empty() {
            return 0.0;
        }
        let reference_angles: Vec<f64> = reference.iter().map(|point| point.angle()).collect();
        let total: f64 = query
            .iter()
            .map(|point| {
                let angle = point.angle();
                let nearest = reference_angles
                    .iter()
                    .map(|&other| angular_distance(angle, other))
                    .fold(PI, f64::min);
                self.contribution(nearest)
            })
            .sum();
        total / query.len() as f64
    }
}
