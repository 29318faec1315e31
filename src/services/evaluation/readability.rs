// Readability Estimator
// Heuristic syllable counting and Flesch Reading Ease approximation.
// No dictionary lookup and no exception list; the error is acceptable for
// threshold checks against a 7-year-old reading level.

use crate::services::text_processor::{split_sentences, word_tokens};

/// Count syllables in a word by counting contiguous vowel groups.
///
/// A trailing `e` is treated as silent. The result is never below 1.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut count: i64 = 0;
    let mut previous_was_vowel = false;

    for ch in word.chars() {
        let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u');
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }

    if word.ends_with('e') {
        count -= 1;
    }

    count.max(1) as usize
}

/// Flesch Reading Ease, clamped to [0, 100].
///
/// 90-100 reads at roughly 5th grade, 80-90 at 6th, 70-80 at 7th.
/// Empty text scores a full 100.0: nothing to read is maximally easy.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return 100.0;
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();
    let sentence_count = sentences.len();

    if word_count == 0 {
        return 100.0;
    }

    let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();

    let score = 206.835
        - 1.015 * (word_count as f64 / sentence_count as f64)
        - 84.6 * (syllable_count as f64 / word_count as f64);
    score.clamp(0.0, 100.0)
}

/// Count words with 3 or more syllables.
pub fn count_complex_words(text: &str) -> usize {
    word_tokens(text)
        .iter()
        .filter(|w| count_syllables(w) >= 3)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_syllables_basics() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("water"), 2);
        assert_eq!(count_syllables("banana"), 3);
    }

    #[test]
    fn test_count_syllables_silent_e() {
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("blue"), 1);
    }

    #[test]
    fn test_count_syllables_never_zero() {
        // "the" has one vowel group and a trailing e; the clamp keeps it at 1.
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("xyz"), 1);
        assert_eq!(count_syllables(""), 1);
    }

    #[test]
    fn test_flesch_empty_text() {
        assert_eq!(flesch_reading_ease(""), 100.0);
        assert_eq!(flesch_reading_ease("   "), 100.0);
    }

    #[test]
    fn test_flesch_bounds() {
        let samples = [
            "Cats say meow.",
            "The interdisciplinary epistemological reconceptualization necessitated extraordinary organizational restructuring.",
            "Hi.",
            "word",
        ];
        for text in samples {
            let score = flesch_reading_ease(text);
            assert!((0.0..=100.0).contains(&score), "out of range for {text:?}: {score}");
        }
    }

    #[test]
    fn test_flesch_simple_text_is_easy() {
        assert!(flesch_reading_ease("Cats say meow. Dogs say woof.") >= 90.0);
    }

    #[test]
    fn test_count_complex_words() {
        assert_eq!(count_complex_words("The cat sat"), 0);
        assert_eq!(count_complex_words("A wonderful banana"), 2);
    }
}
