//! Lenient stylesheet parsing into flat selector and declaration lists.
//!
//! Rules are found with a greedy, non-nested matcher: a selector is any run of
//! text without `{`, a body any non-empty run without `}`. Nested blocks and
//! at-rules are not understood; they are skipped or split in odd places, and
//! never cause an error.

mod minify;
mod parser;

pub use minify::minify;
pub use parser::{RawRule, RuleScanner, parse_stylesheet};

use serde::Serialize;

/// A selector (or selector list) in parse order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Selector {
    /// Trimmed prelude text.
    pub text: String,
    /// Position among the stylesheet's selectors, dense and 0-based.
    pub index: usize,
    /// Weighted specificity, see [`css_selectors::Specificity::score`].
    pub specificity: u32,
}

/// A single `name: value` pair owned by a selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// Property name, trimmed; case is preserved.
    pub name: String,
    /// Everything after the first `:`, trimmed.
    pub value: String,
    /// Index of the owning [`Selector`].
    pub selector_index: usize,
}

/// A parsed stylesheet. Declarations refer to selectors by index, never the reverse.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Stylesheet {
    /// Selectors in source order.
    pub selectors: Vec<Selector>,
    /// Declarations in source order.
    pub declarations: Vec<Declaration>,
}

impl Stylesheet {
    /// True when no rule was matched.
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty() && self.declarations.is_empty()
    }

    /// Declarations belonging to the selector at `selector_index`.
    pub fn declarations_of(&self, selector_index: usize) -> impl Iterator<Item = &Declaration> {
        self.declarations
            .iter()
            .filter(move |decl| decl.selector_index == selector_index)
    }

    /// Specificity scores in selector order.
    pub fn specificities(&self) -> impl Iterator<Item = u32> + '_ {
        self.selectors.iter().map(|selector| selector.specificity)
    }

    /// Selector texts followed by property names, joined by single spaces.
    ///
    /// This is the textual query used when comparing a stylesheet against its
    /// own geometry.
    pub fn query_text(&self) -> String {
        self.selectors
            .iter()
            .map(|selector| selector.text.as_str())
            .chain(self.declarations.iter().map(|decl| decl.name.as_str()))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
