use geom_fold::{CompressionState, Fold};
use geom_scoring::DEFAULT_EPSILON;
use serde::Serialize;

/// Knobs for [`crate::compare_compression`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CompareOptions {
    /// Fold applied to the compressed stylesheet's graph.
    pub fold: Fold,
    /// Declared stage of the compressed text; carried, never consulted.
    pub state: CompressionState,
    /// Efficiency percentage the comparison must reach to meet its target.
    pub target_efficiency: f64,
    /// Angular tolerance for the built-in collapse primitive, in radians.
    pub epsilon: f64,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            fold: Fold::Ui,
            state: CompressionState::Optimized,
            target_efficiency: 90.0,
            epsilon: DEFAULT_EPSILON,
        }
    }
}
