//! Whitespace and comment stripping.
//!
//! This is text substitution only. It does not rewrite values, merge rules or
//! otherwise try to keep the stylesheet equivalent.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

/// Substitutions applied in order.
const PASSES: [(&str, &str); 7] = [
    (r"/\*(?s:.*?)\*/", ""),
    (r"\s+", " "),
    (r";\s*", ";"),
    (r":\s+", ":"),
    (r"\s*\{\s*", "{"),
    (r"\s*\}\s*", "}"),
    (r",\s+", ","),
];

static COMPILED_PASSES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    PASSES
        .iter()
        .filter_map(|&(pattern, replacement)| match Regex::new(pattern) {
            Ok(regex) => Some((regex, replacement)),
            Err(err) => {
                warn!("skipping minify pass {pattern}: {err}");
                None
            }
        })
        .collect()
});

/// Strip comments and redundant whitespace from a stylesheet.
pub fn minify(css: &str) -> String {
    let mut out = css.to_owned();
    for (regex, replacement) in COMPILED_PASSES.iter() {
        out = regex.replace_all(&out, *replacement).into_owned();
    }
    out.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_comments_and_spacing() {
        let css = "/* header */\n.container {\n  width: 100px;\n  height : 100px;\n}\n\na,  b { color:  red }";
        assert_eq!(
            minify(css),
            ".container{width:100px;height :100px;}a,b{color:red}"
        );
    }

    #[test]
    fn multiline_comment_removed() {
        assert_eq!(minify("a{/* one\ntwo */x:y}"), "a{x:y}");
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(minify(""), "");
        assert_eq!(minify(" \n\t "), "");
    }
}
