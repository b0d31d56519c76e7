//! Deterministic k-means for the data fold.
//!
//! Seeds are the first `limit` points, so the same input order always gives
//! the same clusters, and inputs of at most `limit` distinct points come back
//! as singletons.

use geom_core::{Point, centroid};
use log::trace;

#[derive(Debug, Default)]
pub(crate) struct Clustering {
    /// One centroid per non-empty cluster, each the mean of its members.
    pub centroids: Vec<Point>,
    /// Cluster index for every input point.
    pub assignment: Vec<usize>,
}

/// Cluster `points` into at most `limit` groups.
pub(crate) fn cluster(points: &[Point], limit: usize, max_iterations: usize) -> Clustering {
    let seeds = limit.min(points.len());
    if seeds == 0 {
        return Clustering::default();
    }

    let mut centroids: Vec<Point> = points.iter().take(seeds).copied().collect();
    let mut assignment = assign_to_nearest(points, &centroids);
    for iteration in 0..max_iterations {
        centroids = update_centroids(points, &assignment, &centroids);
        let next = assign_to_nearest(points, &centroids);
        if next == assignment {
            trace!("k-means converged after {} iterations", iteration + 1);
            break;
        }
        assignment = next;
    }

    compact(points, &assignment, seeds)
}

/// Index of the nearest centroid for each point; ties go to the lower index.
fn assign_to_nearest(points: &[Point], centroids: &[Point]) -> Vec<usize> {
    points
        .iter()
        .map(|&point| {
            centroids
                .iter()
                .enumerate()
                .min_by(|(_, left), (_, right)| {
                    point
                        .distance_squared(**left)
                        .total_cmp(&point.distance_squared(**right))
                })
                .map_or(0, |(index, _)| index)
        })
        .collect()
}

/// Mean of each cluster's members. A cluster that lost all members keeps its
/// previous centroid so it can win points back.
fn update_centroids(points: &[Point], assignment: &[usize], previous: &[Point]) -> Vec<Point> {
    previous
        .iter()
        .enumerate()
        .map(|(cluster, &fallback)| {
            let members = members_of(points, assignment, cluster);
            if members.is_empty() {
                fallback
            } else {
                centroid(&members)
            }
        })
        .collect()
}

fn members_of(points: &[Point], assignment: &[usize], cluster: usize) -> Vec<Point> {
    points
        .iter()
        .zip(assignment)
        .filter(|&(_, &assigned)| assigned == cluster)
        .map(|(&point, _)| point)
        .collect()
}

/// Drop empty clusters, renumber the rest in order, and recompute every
/// centroid from the final membership.
fn compact(points: &[Point], assignment: &[usize], seeds: usize) -> Clustering {
    let mut renumbered = vec![None; seeds];
    let mut centroids = Vec::with_capacity(seeds);
    for (cluster, slot) in renumbered.iter_mut().enumerate() {
        let members = members_of(points, assignment, cluster);
        if !members.is_empty() {
            *slot = Some(centroids.len());
            centroids.push(centroid(&members));
        }
    }
    let assignment = assignment
        .iter()
        .map(|&cluster| renumbered.get(cluster).copied().flatten().unwrap_or(0))
        .collect();
    Clustering {
        centroids,
        assignment,
    }
}
