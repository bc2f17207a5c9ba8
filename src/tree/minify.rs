//! Script minifier: strips comments and collapses whitespace.
//!
//! Matching is lexical, not a tokenizer: `//` and `/*` inside string literals
//! are treated as comment starts, so `"http://x"` loses everything after `//`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Block or line comment, whichever starts first
static COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/|//[^\n]*").expect("comment pattern is valid"));
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Minify script source text.
///
/// Comments are removed in a single left-to-right pass, so a removal never
/// splices the text around it into a new comment marker. Whitespace is
/// collapsed afterwards; collapsing first would fuse a line comment with every
/// line after it.
pub fn minify(text: &str) -> String {
    let without_comments = COMMENT.replace_all(text, "");
    WHITESPACE
        .replace_all(&without_comments, " ")
        .trim()
        .to_string()
}
