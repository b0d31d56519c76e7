//! Selector specificity.

use crate::SimpleSelector;
use crate::parser::SelectorTokenizer;

/// Specificity triple (ids, classes/attributes/pseudo-classes, elements/pseudo-elements).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Collapse the triple into a single weight: `100a + 10b + c`.
    ///
    /// The columns are not carried over, so eleven classes outweigh one id.
    pub const fn score(self) -> u32 {
        self.0
            .saturating_mul(100)
            .saturating_add(self.1.saturating_mul(10))
            .saturating_add(self.2)
    }
}

/// Compute the specificity of a sequence of simple selectors.
pub fn specificity_of_simples<'sel, I>(simples: I) -> Specificity
where
    I: IntoIterator<Item = &'sel SimpleSelector>,
{
    simples
        .into_iter()
        .fold(Specificity::default(), |acc, simple| match simple {
            SimpleSelector::IdSelector(_) => Specificity(acc.0.saturating_add(1), acc.1, acc.2),
            SimpleSelector::Class(_)
            | SimpleSelector::Attribute(_)
            | SimpleSelector::PseudoClass(_) => {
                Specificity(acc.0, acc.1.saturating_add(1), acc.2)
            }
            SimpleSelector::Type(_) | SimpleSelector::PseudoElement(_) => {
                Specificity(acc.0, acc.1, acc.2.saturating_add(1))
            }
            SimpleSelector::Universal => acc,
        })
}

/// Compute the specificity of raw selector text.
pub fn specificity_of(selector: &str) -> Specificity {
    let simples: Vec<SimpleSelector> = SelectorTokenizer::new(selector).collect();
    specificity_of_simples(&simples)
}
