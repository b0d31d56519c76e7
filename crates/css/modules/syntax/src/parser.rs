//! Rule scanning and declaration splitting.

use crate::{Declaration, Selector, Stylesheet};
use css_selectors::specificity_of;
use log::debug;

/// One matched `prelude { body }` pair, borrowed from the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawRule<'input> {
    /// Text before `{`, untrimmed. Never empty and never contains `{`.
    pub prelude: &'input str,
    /// Text between the braces, untrimmed. Never empty and never contains `}`.
    pub body: &'input str,
}

/// Iterator over the rules of a stylesheet, left to right.
///
/// Each match takes the longest `{`-free run as prelude and the longest
/// `}`-free run as body, so a body may contain a stray `{` while a prelude may
/// start with the `}` left behind by an empty block.
pub struct RuleScanner<'input> {
    /// Stylesheet text.
    input: &'input str,
    /// Byte offset where the next match attempt starts.
    cursor: usize,
}

impl<'input> RuleScanner<'input> {
    /// Construct a scanner over `input`.
    #[inline]
    pub const fn new(input: &'input str) -> Self {
        Self { input, cursor: 0 }
    }

    #[inline]
    fn finish(&mut self) -> Option<RawRule<'input>> {
        self.cursor = self.input.len();
        None
    }
}

impl<'input> Iterator for RuleScanner<'input> {
    type Item = RawRule<'input>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = self.input.get(self.cursor..)?;
            let Some(open_offset) = rest.find('{') else {
                return self.finish();
            };
            if open_offset == 0 {
                // A prelude needs at least one character.
                self.cursor = self.cursor.saturating_add(1);
                continue;
            }
            let open = self.cursor.saturating_add(open_offset);
            let body_start = open.saturating_add(1);
            let Some(close_offset) = self
                .input
                .get(body_start..)
                .and_then(|tail| tail.find('}'))
            else {
                return self.finish();
            };
            if close_offset == 0 {
                // Empty body; every start up to `{` would fail the same way.
                self.cursor = body_start;
                continue;
            }
            let close = body_start.saturating_add(close_offset);
            let prelude = self.input.get(self.cursor..open)?;
            let body = self.input.get(body_start..close)?;
            self.cursor = close.saturating_add(1);
            return Some(RawRule { prelude, body });
        }
    }
}

/// Split a rule body into declarations owned by `selector_index`.
///
/// Items are separated by `;` and split on their first `:`. Empty items and
/// items without a colon are skipped.
fn split_declarations(body: &str, selector_index: usize) -> impl Iterator<Item = Declaration> + '_ {
    body.trim().split(';').filter_map(move |raw_item| {
        let item = raw_item.trim();
        if item.is_empty() {
            return None;
        }
        let (name, value) = item.split_once(':')?;
        Some(Declaration {
            name: name.trim().to_owned(),
            value: value.trim().to_owned(),
            selector_index,
        })
    })
}

/// Parse a full stylesheet. Never fails; text without rules yields an empty sheet.
pub fn parse_stylesheet(css: &str) -> Stylesheet {
    let mut sheet = Stylesheet::default();
    for (index, rule) in RuleScanner::new(css).enumerate() {
        let text = rule.prelude.trim();
        sheet.selectors.push(Selector {
            text: text.to_owned(),
            index,
            specificity: specificity_of(text).score(),
        });
        sheet.declarations.extend(split_declarations(rule.body, index));
    }
    debug!(
        "parsed stylesheet: {} selectors, {} declarations from {} bytes",
        sheet.selectors.len(),
        sheet.declarations.len(),
        css.len()
    );
    sheet
}
