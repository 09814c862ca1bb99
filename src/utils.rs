//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Strip diacritics so accented and ASCII spellings tokenize to the same term:
/// - "résumé" → "resume"
/// - "café" → "cafe"
/// - "naïve" → "naive"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out every combining mark (general category M, any script),
///    so Arabic harakat and Hebrew niqqud go the same way as Latin accents
///
/// Without the feature the input is returned unchanged.
#[cfg(feature = "unicode-normalization")]
pub fn strip_accents(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn strip_accents(value: &str) -> String {
    value.to_string()
}

/// Word characters: anything alphanumeric in Unicode, plus underscore.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
