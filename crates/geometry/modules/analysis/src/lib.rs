//! Read-only statistics over point sets.
//!
//! Every function accepts an empty set and returns a neutral value for it
//! rather than dividing by zero.

#![forbid(unsafe_code)]

pub use geom_core::centroid;

use geom_core::{Point, population_variance};
use serde::Serialize;

/// Largest distance from the origin; 0 for an empty set.
pub fn spread(points: &[Point]) -> f64 {
    points
        .iter()
        .map(|point| point.norm())
        .fold(0.0, f64::max)
}

/// Population variance of the polar angles `atan2(y, x)`.
pub fn angle_variance(points: &[Point]) -> f64 {
    let angles: Vec<f64> = points.iter().map(|point| point.angle()).collect();
    population_variance(&angles)
}

/// `1 / (1 + mean distance between each point and its reflection through the
/// origin)`. 1.0 for a set centred on the origin point by point, and for the
/// empty set.
pub fn symmetry_score(points: &[Point]) -> f64 {
    if points.is_empty() {
        return 1.0;
    }
    let total: f64 = points.iter().map(|&point| point.distance(-point)).sum();
    1.0 / (1.0 + total / points.len() as f64)
}

/// `1 / (1 + variance of the distances from the origin)`. 1.0 when every point
/// lies on one circle, and for the empty set.
pub fn clustering_score(points: &[Point]) -> f64 {
    let distances: Vec<f64> = points.iter().map(|point| point.norm()).collect();
    1.0 / (1.0 + population_variance(&distances))
}

/// `(min, max)` of the given specificities, `(0, 0)` when there are none.
pub fn specificity_range<I>(specificities: I) -> (u32, u32)
where
    I: IntoIterator<Item = u32>,
{
    specificities
        .into_iter()
        .fold(None, |range, value| match range {
            None => Some((value, value)),
            Some((low, high)) => Some((value.min(low), value.max(high))),
        })
        .unwrap_or((0, 0))
}

/// All point-set statistics at once.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GeometryReport {
    /// See [`centroid`].
    pub centroid: Point,
    /// See [`spread`].
    pub spread: f64,
    /// See [`angle_variance`].
    pub angle_variance: f64,
    /// See [`symmetry_score`].
    pub symmetry_score: f64,
    /// See [`clustering_score`].
    pub clustering_score: f64,
}

impl GeometryReport {
    /// Compute every statistic over `points`.
    pub fn of(points: &[Point]) -> Self {
        Self {
            centroid: centroid(points),
            spread: spread(points),
            angle_variance: angle_variance(points),
            symmetry_score: symmetry_score(points),
            clustering_score: clustering_score(points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_neutral() {
        let report = GeometryReport::of(&[]);
        assert_eq!(report.centroid, Point::ORIGIN);
        assert!(report.spread.abs() < f64::EPSILON);
        assert!(report.angle_variance.abs() < f64::EPSILON);
        assert!((report.symmetry_score - 1.0).abs() < f64::EPSILON);
        assert!((report.clustering_score - 1.0).abs() < f64::EPSILON);
        assert_eq!(specificity_range(Vec::<u32>::new()), (0, 0));
    }

    #[test]
    fn origin_only_is_perfectly_symmetric() {
        let points = [Point::ORIGIN, Point::ORIGIN];
        assert!((symmetry_score(&points) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn symmetry_drops_with_distance() {
        // Each point is 2 * |p| away from its reflection; mean 2 * 1.5 = 3.
        let points = [Point::new(1.0, 0.0), Point::new(0.0, -2.0)];
        assert!((symmetry_score(&points) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn circle_clusters_perfectly() {
        let circle: Vec<Point> = (0..8)
            .map(|step| {
                let angle = f64::from(step) * 45.0_f64.to_radians();
                Point::new(2.0 * angle.cos(), 2.0 * angle.sin())
            })
            .collect();
        assert!((clustering_score(&circle) - 1.0).abs() < 1e-12);
        assert!((spread(&circle) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn clustering_uses_radial_variance() {
        // Radii 1 and 3: variance 1, score 1/2.
        let points = [Point::new(1.0, 0.0), Point::new(0.0, 3.0)];
        assert!((clustering_score(&points) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn angle_variance_of_opposed_axes() {
        // Angles 0 and π/2: variance (π/4)^2.
        let points = [Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
        let expected = (45.0_f64.to_radians()).powi(2);
        assert!((angle_variance(&points) - expected).abs() < 1e-12);
    }

    #[test]
    fn range_of_specificities() {
        assert_eq!(specificity_range([10, 111, 1, 20]), (1, 111));
        assert_eq!(specificity_range([7]), (7, 7));
    }
}
