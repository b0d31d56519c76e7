//! Compression stages a caller can attach to a fold request.

use serde::Serialize;

/// Caller-declared stage of a stylesheet's compression.
///
/// Accepted alongside a fold and carried through untouched; no fold looks at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompressionState {
    /// Untouched source text.
    #[default]
    Raw,
    /// Some passes applied.
    PartiallyCompressed,
    /// A fold has been applied.
    Folded,
    Superposed,
    Entangled,
    /// Fully processed output.
    Optimized,
}

impl CompressionState {
    /// All states, in pipeline order.
    pub const ALL: [Self; 6] = [
        Self::Raw,
        Self::PartiallyCompressed,
        Self::Folded,
        Self::Superposed,
        Self::Entangled,
        Self::Optimized,
    ];

    /// Kebab-case name used on the command line and in JSON.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::PartiallyCompressed => "partially-compressed",
            Self::Folded => "folded",
            Self::Superposed => "superposed",
            Self::Entangled => "entangled",
            Self::Optimized => "optimized",
        }
    }

    /// Inverse of [`CompressionState::tag`]; `None` for unknown tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.tag() == tag)
    }
}
