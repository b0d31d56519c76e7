//! Selector tokenization and specificity weighting.
//!
//! Selectors are never matched against a document here. The tokenizer only
//! recognizes enough structure to weigh a selector the way the stylesheet
//! embedding needs it:
//! - ID markers (`#id`)
//! - Class, attribute and pseudo-class markers (`.cls`, `[attr]`, `:hover`)
//! - Element and pseudo-element names (`div`, `::before`)
//!
//! Combinators, commas, the universal selector and anything unrecognized
//! carry no weight.

mod parser;
mod specificity;

pub use parser::{SelectorTokenizer, parse_simple_selectors};
pub use specificity::{Specificity, specificity_of, specificity_of_simples};

/// Simple selectors recognized by the tokenizer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SimpleSelector {
    /// Type selector such as `div`.
    Type(String),
    /// Class selector `.name`.
    Class(String),
    /// ID selector `#name`.
    IdSelector(String),
    /// Attribute selector `[name...]`; only the attribute name is kept.
    Attribute(String),
    /// Pseudo-class such as `:hover` or `:not`.
    PseudoClass(String),
    /// Pseudo-element such as `::before`, including the legacy single-colon forms.
    PseudoElement(String),
    /// Universal selector `*`.
    Universal,
}
