use once_cell::sync::Lazy;
use regex::Regex;

use crate::vocab;

static SYMBOL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s'’]").unwrap());

/// Strips punctuation and symbols from a token, leaving word characters and
/// apostrophes. A single trailing apostrophe is dropped as well, so a
/// possessive like `dogs'` cleans to `dogs`.
pub fn clean_word(word: &str) -> String {
    let cleaned = SYMBOL_RE.replace_all(word, "");
    let cleaned = cleaned.trim();
    cleaned
        .strip_suffix(['\'', '’'])
        .unwrap_or(cleaned)
        .to_string()
}

/// Decides whether a single token may be hidden.
///
/// A token stays visible when its cleaned form is in the protected
/// vocabulary, comes out empty, or starts with an uppercase letter (the
/// proper-noun guard). What remains is hidden only if it is purely
/// alphabetic, or keeps an apostrophe and is longer than one character
/// (contractions and possessives).
pub fn is_removable(word: &str) -> bool {
    let cleaned = clean_word(word);

    if cleaned.is_empty() || vocab::is_protected(&cleaned) {
        return false;
    }
    if cleaned.chars().next().is_some_and(char::is_uppercase) {
        return false;
    }

    let has_apostrophe = cleaned.contains('\'') || cleaned.contains('’');
    cleaned.chars().all(char::is_alphabetic) || (has_apostrophe && cleaned.chars().count() > 1)
}
