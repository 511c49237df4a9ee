//! Text transform rules applied to file contents.
//!
//! A rule is a pure `text -> text` substitution over a file's full content,
//! with no knowledge of Python grammar. Rules are deliberately lexical: an
//! arrow sequence inside a string literal or comment is rewritten like any
//! other match. A tokenizer-based rule can implement [`TransformRule`] and
//! slot in without touching the scanner or the stripper.

use std::borrow::Cow;

mod return_annotation;

pub use return_annotation::ReturnAnnotation;

/// A pure text-to-text substitution.
pub trait TransformRule {
    /// Apply the rule, returning borrowed input when nothing matched.
    fn apply<'a>(&self, source: &'a str) -> Cow<'a, str>;
}
