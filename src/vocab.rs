use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Words and glyphs that are never hidden, regardless of position or
/// difficulty. Mostly function words, plus the fillers and clipped
/// contraction pieces that show up in dictation transcripts.
const PROTECTED_WORDS: &[&str] = &[
    "ha", "it", "hum", "um", "umm", "hmm", "oh", "yeah", "a", "an", "and", "the", "so", "well",
    "of", "to", "or", "ok", "bye", "hello", "I", "for", "okay", "now", "erm", "s", "ve", "t", "m",
    "com", "ll", ".", "d’,", "d'.", "...", ",", ";", ":", "-", "_", ")", "(", "?", "¿", "!", "¡",
    "'ll", "'ve", "'re", "'t", "'s", "'m", "right", "yep", "alright", "is", "err", "no", "yes",
    "ja", "Ah", "Ohh", "but", "podcast", "am", "not", "in", "are", "he",
];

static PROTECTED_LOOKUP: Lazy<HashSet<String>> =
    Lazy::new(|| PROTECTED_WORDS.iter().map(|w| w.to_lowercase()).collect());

/// Case-insensitive membership check against the protected vocabulary.
pub fn is_protected(word: &str) -> bool {
    PROTECTED_LOOKUP.contains(&word.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_ignores_case() {
        assert!(is_protected("the"));
        assert!(is_protected("The"));
        assert!(is_protected("THE"));
        assert!(is_protected("i"));
        assert!(is_protected("ah"));
    }

    #[test]
    fn punctuation_glyphs_are_protected() {
        assert!(is_protected("."));
        assert!(is_protected("..."));
        assert!(is_protected("¿"));
        assert!(is_protected("'s"));
    }

    #[test]
    fn ordinary_words_are_not_protected() {
        assert!(!is_protected("fox"));
        assert!(!is_protected("melody"));
        assert!(!is_protected("tutor"));
    }
}
