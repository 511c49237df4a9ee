use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::TransformRule;

// Optional whitespace (newlines included), the arrow token, then everything
// up to but excluding the signature colon.
static RETURN_ANNOTATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*->\s*[^:\n]+").unwrap());

/// Deletes `-> SomeType` spans from function signatures.
///
/// The colon that opens the function body and any parameter annotations are
/// left intact:
///
/// ```
/// use dehint::rules::{ReturnAnnotation, TransformRule};
///
/// let stripped = ReturnAnnotation.apply("def f(x: int) -> str:\n    pass");
/// assert_eq!(stripped, "def f(x: int):\n    pass");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ReturnAnnotation;

impl TransformRule for ReturnAnnotation {
    fn apply<'a>(&self, source: &'a str) -> Cow<'a, str> {
        RETURN_ANNOTATION_REGEX.replace_all(source, "")
    }
}
