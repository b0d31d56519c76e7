//! Named geometric folds applied to embedded point sets.
//!
//! A fold never grows the point set. `Data` clusters, `Ui` scales, and the
//! remaining folds pass points through untouched.

#![forbid(unsafe_code)]

mod kmeans;
mod state;

pub use state::CompressionState;

use core::fmt;
use geom_core::Point;
use log::debug;
use serde::Serialize;

/// Largest number of points the data fold leaves behind.
pub const DATA_FOLD_CLUSTERS: usize = 5;
/// Lloyd iterations the data fold runs before giving up on convergence.
pub const DATA_FOLD_MAX_ITERATIONS: usize = 32;
/// Factor applied to both coordinates by the UI fold.
pub const UI_FOLD_SCALE: f64 = 0.8;

/// Glyph framing fold symbols in their long form, as in `⟁UI_FOLD⟁`.
const FOLD_GLYPH: char = '\u{27C1}';

/// A fold selected by symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Fold {
    /// Cluster into at most [`DATA_FOLD_CLUSTERS`] centroids.
    #[serde(rename = "DATA_FOLD")]
    Data,
    /// Identity for now.
    #[serde(rename = "CODE_FOLD")]
    Code,
    /// Uniform scale by [`UI_FOLD_SCALE`].
    #[default]
    #[serde(rename = "UI_FOLD")]
    Ui,
    /// Identity for now.
    #[serde(rename = "STORAGE_FOLD")]
    Storage,
    /// Any symbol not listed above; identity.
    #[serde(rename = "UNRECOGNIZED")]
    Unrecognized,
}

/// Output of a fold: the new points and, for each input point, the index of
/// the output point it became part of.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Folded {
    pub points: Vec<Point>,
    pub assignment: Vec<usize>,
}

impl Folded {
    fn identity(points: Vec<Point>) -> Self {
        let assignment = (0..points.len()).collect();
        Self { points, assignment }
    }
}

impl Fold {
    /// Resolve a fold symbol. Both `UI_FOLD` and `⟁UI_FOLD⟁` are accepted;
    /// anything else is [`Fold::Unrecognized`].
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol.trim().trim_matches(FOLD_GLYPH) {
            "DATA_FOLD" => Self::Data,
            "CODE_FOLD" => Self::Code,
            "UI_FOLD" => Self::Ui,
            "STORAGE_FOLD" => Self::Storage,
            _ => Self::Unrecognized,
        }
    }

    /// Bare symbol name; empty for [`Fold::Unrecognized`].
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Data => "DATA_FOLD",
            Self::Code => "CODE_FOLD",
            Self::Ui => "UI_FOLD",
            Self::Storage => "STORAGE_FOLD",
            Self::Unrecognized => "",
        }
    }

    /// Apply the fold, keeping track of which input went where.
    pub fn compress(self, points: &[Point]) -> Folded {
        debug!("applying {self} to {} points", points.len());
        match self {
            Self::Data => {
                let clustering =
                    kmeans::cluster(points, DATA_FOLD_CLUSTERS, DATA_FOLD_MAX_ITERATIONS);
                Folded {
                    points: clustering.centroids,
                    assignment: clustering.assignment,
                }
            }
            Self::Ui => Folded::identity(
                points
                    .iter()
                    .map(|point| point.scale(UI_FOLD_SCALE))
                    .collect(),
            ),
            Self::Code | Self::Storage | Self::Unrecognized => Folded::identity(points.to_vec()),
        }
    }
}

impl From<&str> for Fold {
    fn from(symbol: &str) -> Self {
        Self::from_symbol(symbol)
    }
}

impl fmt::Display for Fold {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized => formatter.write_str("unrecognized fold"),
            known => write!(formatter, "{FOLD_GLYPH}{}{FOLD_GLYPH}", known.symbol()),
        }
    }
}

/// Apply `fold` to `points` and return only the folded points.
pub fn apply_fold(points: &[Point], fold: Fold) -> Vec<Point> {
    fold.compress(points).points
}
