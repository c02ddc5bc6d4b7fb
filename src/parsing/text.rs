//! Canonical text form for label comparisons

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase, strip diacritics and trim surrounding whitespace
///
/// Lowercasing happens before decomposition so that characters whose lowercase
/// form carries a combining mark (e.g. `İ`) still end up mark-free, which keeps
/// the function idempotent.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}
