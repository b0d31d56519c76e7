//! Selector tokenizer.

use crate::SimpleSelector;

/// Pseudo-elements that CSS 2 allowed with a single colon.
const LEGACY_PSEUDO_ELEMENTS: [&str; 4] = ["before", "after", "first-line", "first-letter"];

/// Tokenizer over a selector string, yielding only weighted simple selectors.
pub struct SelectorTokenizer<'input> {
    /// Selector text being scanned.
    input: &'input str,
    /// Current byte offset into `input`; always on a char boundary.
    index: usize,
}

impl<'input> SelectorTokenizer<'input> {
    /// Construct a tokenizer from input.
    #[inline]
    pub const fn new(input: &'input str) -> Self {
        Self { input, index: 0 }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.index).copied()
    }

    #[inline]
    fn bump(&mut self) {
        self.index = self.index.saturating_add(1);
    }

    /// Consume an identifier (ASCII alphanumerics, `-`, `_`, and any non-ASCII text).
    fn consume_ident(&mut self) -> String {
        let start = self.index;
        while let Some(byte) = self.peek() {
            if is_ident_byte(byte) {
                self.bump();
            } else {
                break;
            }
        }
        self.input
            .get(start..self.index)
            .unwrap_or_default()
            .to_ascii_lowercase()
    }

    /// Consume an attribute selector body up to and including the closing `]`.
    /// Quoted values may contain `]`.
    fn consume_attr(&mut self) -> SimpleSelector {
        // skip '['
        self.bump();
        self.skip_spaces();
        let name = self.consume_ident();
        let mut quote: Option<u8> = None;
        while let Some(byte) = self.peek() {
            self.bump();
            match (quote, byte) {
                (None, b']') => break,
                (None, b'"' | b'\'') => quote = Some(byte),
                (Some(open), _) if open == byte => quote = None,
                _ => {}
            }
        }
        SimpleSelector::Attribute(name)
    }

    /// Consume `:name` or `::name`.
    fn consume_pseudo(&mut self) -> SimpleSelector {
        // skip ':'
        self.bump();
        if self.peek() == Some(b':') {
            self.bump();
            return SimpleSelector::PseudoElement(self.consume_ident());
        }
        let name = self.consume_ident();
        if LEGACY_PSEUDO_ELEMENTS.contains(&name.as_str()) {
            SimpleSelector::PseudoElement(name)
        } else {
            SimpleSelector::PseudoClass(name)
        }
    }

    /// Skip ASCII whitespace.
    #[inline]
    fn skip_spaces(&mut self) {
        while matches!(self.peek(), Some(byte) if byte.is_ascii_whitespace()) {
            self.bump();
        }
    }
}

impl Iterator for SelectorTokenizer<'_> {
    type Item = SimpleSelector;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.peek() {
            match current {
                b'*' => {
                    self.bump();
                    return Some(SimpleSelector::Universal);
                }
                b'.' => {
                    self.bump();
                    return Some(SimpleSelector::Class(self.consume_ident()));
                }
                b'#' => {
                    self.bump();
                    return Some(SimpleSelector::IdSelector(self.consume_ident()));
                }
                b'[' => return Some(self.consume_attr()),
                b':' => return Some(self.consume_pseudo()),
                // Numbers (`2n+1`, `1.5`) are arguments, not element names.
                b'0'..=b'9' => {
                    self.consume_ident();
                }
                byte if is_ident_byte(byte) => {
                    return Some(SimpleSelector::Type(self.consume_ident()));
                }
                _ => self.bump(),
            }
        }
        None
    }
}

#[inline]
const fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' || byte >= 0x80
}

/// Tokenize selector text into its weighted simple selectors, in source order.
///
/// Combinators, commas and parentheses are skipped, so a selector list such as
/// `a, b > c` yields its simples flattened.
pub fn parse_simple_selectors(input: &str) -> Vec<SimpleSelector> {
    SelectorTokenizer::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_with_combinators() {
        let simples = parse_simple_selectors("#main > ul.nav li:hover");
        assert_eq!(
            simples,
            vec![
                SimpleSelector::IdSelector("main".to_owned()),
                SimpleSelector::Type("ul".to_owned()),
                SimpleSelector::Class("nav".to_owned()),
                SimpleSelector::Type("li".to_owned()),
                SimpleSelector::PseudoClass("hover".to_owned()),
            ]
        );
    }

    #[test]
    fn attribute_contents_are_opaque() {
        let simples = parse_simple_selectors(r#"input[type="a]b .c"]"#);
        assert_eq!(
            simples,
            vec![
                SimpleSelector::Type("input".to_owned()),
                SimpleSelector::Attribute("type".to_owned()),
            ]
        );
    }

    #[test]
    fn pseudo_elements_both_syntaxes() {
        let simples = parse_simple_selectors("p::first-line, a:after");
        assert_eq!(
            simples,
            vec![
                SimpleSelector::Type("p".to_owned()),
                SimpleSelector::PseudoElement("first-line".to_owned()),
                SimpleSelector::Type("a".to_owned()),
                SimpleSelector::PseudoElement("after".to_owned()),
            ]
        );
    }

    #[test]
    fn numeric_arguments_are_skipped() {
        let simples = parse_simple_selectors("li:nth-child(2n+1)");
        assert_eq!(
            simples,
            vec![
                SimpleSelector::Type("li".to_owned()),
                SimpleSelector::PseudoClass("nth-child".to_owned()),
            ]
        );
    }

    #[test]
    fn garbage_never_panics() {
        for input in ["", "{{}}", "[", "::", "\"", "#", "é.ü", "\u{1F600} > *"] {
            let _simples = parse_simple_selectors(input);
        }
        assert_eq!(
            parse_simple_selectors("é.ü"),
            vec![
                SimpleSelector::Type("é".to_owned()),
                SimpleSelector::Class("ü".to_owned()),
            ]
        );
    }
}
