use once_cell::sync::Lazy;
use regex::Regex;

// "Punctuation" throughout this module is any character that is not a word
// character, whitespace, or an apostrophe (straight or curly).
static PUNCT_BEFORE_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^\w\s'’])(\w)").unwrap());
static CURLY_BEFORE_STOP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(’)([,.])").unwrap());
static STOP_BEFORE_CURLY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([,.])(’)").unwrap());
static WHITESPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static SPACE_BEFORE_PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([^\w\s'’])").unwrap());

/// Puts a single space between a punctuation mark and a word character that
/// follows it directly, so whitespace tokenization yields clean word
/// boundaries. Marks stay attached on their left (`end. Finally`), and
/// apostrophes inside contractions are left alone. A curly apostrophe
/// directly against a comma or period is spaced out in either order.
/// Whitespace runs collapse to one space and the ends are trimmed; no
/// character other than whitespace is ever added or dropped.
pub fn separate_punctuation(text: &str) -> String {
    let text = PUNCT_BEFORE_WORD_RE.replace_all(text, "$1 $2");
    let text = CURLY_BEFORE_STOP_RE.replace_all(&text, "$1 $2");
    let text = STOP_BEFORE_CURLY_RE.replace_all(&text, "$1 $2");
    WHITESPACE_RUN_RE.replace_all(&text, " ").trim().to_string()
}

/// Removes whitespace a space-joined token sequence leaves in front of
/// punctuation, restoring natural attachment (`dog .` back to `dog.`).
pub fn reattach_punctuation(text: &str) -> String {
    SPACE_BEFORE_PUNCT_RE.replace_all(text, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn inserts_space_between_punctuation_and_word() {
        assert_eq!(separate_punctuation("end.Finally"), "end. Finally");
        assert_eq!(separate_punctuation("one,two,three"), "one, two, three");
    }

    #[test]
    fn contractions_keep_their_apostrophes() {
        assert_eq!(separate_punctuation("that's it"), "that's it");
        assert_eq!(separate_punctuation("don’t stop"), "don’t stop");
    }

    #[test]
    fn curly_apostrophe_is_spaced_from_comma_and_period() {
        assert_eq!(separate_punctuation("the dogs’, sadly"), "the dogs’ , sadly");
        assert_eq!(separate_punctuation("said,’twas fine"), "said, ’twas fine");
    }

    #[test]
    fn whitespace_runs_collapse_and_ends_trim() {
        assert_eq!(separate_punctuation("  hello   world "), "hello world");
        assert_eq!(separate_punctuation("a\n\tb"), "a b");
        assert_eq!(separate_punctuation(""), "");
    }

    #[test]
    fn reattach_pulls_punctuation_back_onto_words() {
        assert_eq!(reattach_punctuation("dog ,"), "dog,");
        assert_eq!(reattach_punctuation("over , under ."), "over, under.");
        assert_eq!(reattach_punctuation("plain words"), "plain words");
    }

    #[test]
    fn normalize_then_reassemble_keeps_punctuation_attached() {
        let normalized = separate_punctuation("Well, that's it.");
        let rejoined = normalized.split_whitespace().collect::<Vec<_>>().join(" ");
        let reassembled = reattach_punctuation(&rejoined);

        assert_eq!(reassembled, "Well, that's it.");
        assert!(!reassembled.contains(" ."));
        assert!(!reassembled.contains(" ,"));
    }

    proptest! {
        #[test]
        fn separation_only_adjusts_spacing(content in "\\PC*") {
            let separated = separate_punctuation(&content);
            let before: Vec<char> = content.chars().filter(|c| !c.is_whitespace()).collect();
            let after: Vec<char> = separated.chars().filter(|c| !c.is_whitespace()).collect();
            prop_assert_eq!(before, after);
        }
    }
}
