// Text Segmentation Service
// Sentence and word splitting; the foundation every metric builds on.

use regex::Regex;
use std::sync::OnceLock;

static SENTENCE_END_RE: OnceLock<Regex> = OnceLock::new();
static WORD_RE: OnceLock<Regex> = OnceLock::new();

/// Runs of terminal punctuation end a sentence.
pub(crate) fn sentence_end_re() -> &'static Regex {
    SENTENCE_END_RE.get_or_init(|| Regex::new(r"[.!?]+").unwrap())
}

fn word_re() -> &'static Regex {
    WORD_RE.get_or_init(|| Regex::new(r"\b\w+\b").unwrap())
}

/// Split text into sentences on runs of `.`, `!`, `?`.
///
/// Fragments are trimmed and empty ones discarded; original order is kept.
/// Text without terminal punctuation comes back as a single sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    sentence_end_re()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whitespace-delimited word count of a single sentence.
pub fn count_words(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}

/// Lowercased alphanumeric word tokens, for syllable-based metrics.
pub fn word_tokens(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    word_re()
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t ").is_empty());
    }

    #[test]
    fn test_split_sentences_basic() {
        assert_eq!(split_sentences("Hi."), vec!["Hi"]);
        assert_eq!(split_sentences("Hi! Bye?"), vec!["Hi", "Bye"]);
    }

    #[test]
    fn test_split_sentences_terminator_runs() {
        assert_eq!(split_sentences("Wow!!! Really??"), vec!["Wow", "Really"]);
    }

    #[test]
    fn test_unterminated_text_is_one_sentence() {
        assert_eq!(
            split_sentences("no punctuation here"),
            vec!["no punctuation here"]
        );
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("Cats say meow"), 3);
        assert_eq!(count_words("  spaced   out  "), 2);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_word_tokens_lowercase() {
        assert_eq!(word_tokens("Dogs bark. Loudly!"), vec!["dogs", "bark", "loudly"]);
    }
}
