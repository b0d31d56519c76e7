//! Compression operations expressed as vector sequences for a collapse.

use geom_core::Point;

/// How a compression operation turns its input and parameters into the
/// vectors handed to a [`crate::Collapse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollapseOp {
    /// Input followed by one `(p, 0)` vector per parameter.
    Compress,
    /// Input reflected through the origin.
    Decompress,
    /// Input scaled by the first parameter; unchanged without parameters.
    Optimize,
    /// Input unchanged.
    Transform,
}

impl CollapseOp {
    pub fn vectors(self, input: &[Point], parameters: &[f64]) -> Vec<Point> {
        match self {
            Self::Compress => input
                .iter()
                .copied()
                .chain(parameters.iter().map(|&param| Point::new(param, 0.0)))
                .collect(),
            Self::Decompress => input.iter().map(|&point| -point).collect(),
            Self::Optimize => match parameters.first() {
                Some(&weight) => input.iter().map(|point| point.scale(weight)).collect(),
                None => input.to_vec(),
            },
            Self::Transform => input.to_vec(),
        }
    }
}
