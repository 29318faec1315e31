// Lexical Issue Detectors
// Keyword/regex heuristics for technical jargon, scary content and tone
// problems. Matching granularity is substring unless noted; false positives
// inside longer words are accepted behavior, not bugs to fix.

use regex::Regex;
use std::sync::OnceLock;

use crate::services::lexicon::{
    BANNED_PHRASES, FILLER_PHRASES, TECHNICAL_BANLIST, TECHNICAL_TERMS,
};
use crate::services::text_processor::{count_words, split_sentences};

static CHEMICAL_FORMULA_RE: OnceLock<Regex> = OnceLock::new();
static DEGREE_NOTATION_RE: OnceLock<Regex> = OnceLock::new();
static SCARY_CONTENT_RE: OnceLock<Regex> = OnceLock::new();
static REWRITE_FORMULA_RE: OnceLock<Regex> = OnceLock::new();
static REWRITE_DEGREE_RE: OnceLock<Regex> = OnceLock::new();

fn chemical_formula_re() -> &'static Regex {
    CHEMICAL_FORMULA_RE
        .get_or_init(|| Regex::new(r"\b[A-Z][a-z]?\d+\b|\bH2O\b|\bCO2\b|\bO2\b").unwrap())
}

// Degree sign matched as the character, not a byte sequence; "10 degrees"
// needs the separating whitespace.
fn degree_notation_re() -> &'static Regex {
    DEGREE_NOTATION_RE.get_or_init(|| Regex::new(r"\d+\s*°|\d+\s+degrees?").unwrap())
}

fn scary_content_re() -> &'static Regex {
    SCARY_CONTENT_RE.get_or_init(|| Regex::new(r"death|die|kill|hurt|scary|monster").unwrap())
}

// Wider net than the evaluator's: also flags all-caps tokens like NASA or DNA3.
fn rewrite_formula_re() -> &'static Regex {
    REWRITE_FORMULA_RE
        .get_or_init(|| Regex::new(r"\b[A-Z][a-z]?\d+\b|\b[A-Z]{2,}\d*\b").unwrap())
}

fn rewrite_degree_re() -> &'static Regex {
    REWRITE_DEGREE_RE.get_or_init(|| Regex::new(r"(?i)\d+\s*°|degrees?").unwrap())
}

/// Find technical vocabulary in the text.
///
/// Terms are matched as case-insensitive substrings in lexicon order;
/// synthetic tags for chemical formulas and degree notation follow.
pub fn find_technical_terms(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut found = Vec::new();

    for term in TECHNICAL_TERMS {
        if text_lower.contains(term) {
            found.push((*term).to_string());
        }
    }

    if chemical_formula_re().is_match(text) {
        found.push("chemical_formula".to_string());
    }

    if degree_notation_re().is_match(text) {
        found.push("degree_notation".to_string());
    }

    found
}

/// Check for safety issues: banned phrases and potentially scary words.
pub fn check_safety(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut issues = Vec::new();

    for phrase in BANNED_PHRASES {
        if text_lower.contains(phrase) {
            issues.push(format!("banned_phrase: {}", phrase));
        }
    }

    if scary_content_re().is_match(&text_lower) {
        issues.push("potentially_scary_content".to_string());
    }

    issues
}

/// Decide whether a response should be rewritten before reaching the child.
///
/// A deliberately looser ruleset than the scoring evaluator: it only fires
/// on clear problems and describes each one. Returns the decision together
/// with the issue descriptions.
pub fn needs_rewrite(text: &str) -> (bool, Vec<String>) {
    let mut issues = Vec::new();

    let sentences = split_sentences(text.trim());
    if sentences.len() > 8 {
        issues.push(format!("Too many sentences: {} > 8", sentences.len()));
    }

    if rewrite_formula_re().is_match(text) {
        issues.push("Contains chemical formula".to_string());
    }

    if rewrite_degree_re().is_match(text) {
        issues.push("Contains degree notation".to_string());
    }

    let text_lower = text.to_lowercase();
    let found_banned: Vec<&str> = TECHNICAL_BANLIST
        .iter()
        .filter(|word| text_lower.contains(**word))
        .copied()
        .collect();
    if !found_banned.is_empty() {
        let shown = &found_banned[..found_banned.len().min(3)];
        issues.push(format!("Contains banned words: {}", shown.join(", ")));
    }

    if !sentences.is_empty() {
        let total_words: usize = sentences.iter().map(|s| count_words(s)).sum();
        let avg_words = total_words as f64 / sentences.len() as f64;
        if avg_words > 12.0 {
            issues.push(format!("Sentences too long: avg {:.1} words", avg_words));
        }
    }

    for filler in FILLER_PHRASES {
        if text_lower.contains(filler) {
            issues.push(format!("Contains filler: '{}'", filler));
            break;
        }
    }

    if text_lower.contains("want more") || text_lower.contains("want to know more") {
        issues.push("Contains 'Want more?' (UI handles this)".to_string());
    }

    (!issues.is_empty(), issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_technical_terms_substring() {
        let found = find_technical_terms("Water is made of molecules.");
        assert_eq!(found, vec!["molecule"]);
    }

    #[test]
    fn test_find_chemical_formula() {
        let found = find_technical_terms("Water is H2O you know");
        assert!(found.contains(&"chemical_formula".to_string()));
        assert!(find_technical_terms("Try some O2").contains(&"chemical_formula".to_string()));
    }

    #[test]
    fn test_rewrite_formula_catches_all_caps_tokens() {
        // The evaluator's pattern needs a digit after a single capital; the
        // rewrite check also nets all-caps tokens like CH4.
        let (flag, issues) = needs_rewrite("CH4 is a gas");
        assert!(flag);
        assert!(issues.contains(&"Contains chemical formula".to_string()));
    }

    #[test]
    fn test_find_degree_notation() {
        assert!(find_technical_terms("It boils at 100 degrees").contains(&"degree_notation".to_string()));
        assert!(find_technical_terms("about 35° outside").contains(&"degree_notation".to_string()));
        assert!(!find_technical_terms("to some degree").contains(&"degree_notation".to_string()));
    }

    #[test]
    fn test_check_safety_banned_phrase() {
        let issues = check_safety("Good thinking! The sky is blue.");
        assert_eq!(issues, vec!["banned_phrase: good thinking"]);
    }

    #[test]
    fn test_check_safety_scary_content() {
        let issues = check_safety("The monster was scary");
        assert_eq!(issues, vec!["potentially_scary_content"]);
    }

    #[test]
    fn test_check_safety_clean_text() {
        assert!(check_safety("Cats say meow. Dogs say woof.").is_empty());
    }

    #[test]
    fn test_needs_rewrite_sentence_count() {
        let text = "One. Two. Three. Four. Five. Six. Seven. Eight. Nine.";
        let (flag, issues) = needs_rewrite(text);
        assert!(flag);
        assert!(issues.contains(&"Too many sentences: 9 > 8".to_string()));
    }

    #[test]
    fn test_needs_rewrite_banned_words_reports_first_three() {
        let (flag, issues) = needs_rewrite("hydrogen and oxygen react in the atmosphere");
        assert!(flag);
        let banned = issues.iter().find(|i| i.starts_with("Contains banned words:")).unwrap();
        // Banlist order, capped at three.
        assert_eq!(banned, "Contains banned words: atmosphere, react, hydrogen");
    }

    #[test]
    fn test_needs_rewrite_filler_first_match_only() {
        let (flag, issues) = needs_rewrite("Great question. Let me explain.");
        assert!(flag);
        let fillers: Vec<_> = issues.iter().filter(|i| i.starts_with("Contains filler")).collect();
        assert_eq!(fillers, vec!["Contains filler: 'great question'"]);
    }

    #[test]
    fn test_needs_rewrite_clean_text() {
        let (flag, issues) = needs_rewrite("Cats purr when happy. It is a tiny rumble.");
        assert!(!flag, "unexpected issues: {issues:?}");
    }

    #[test]
    fn test_needs_rewrite_long_sentences() {
        let text = "This single sentence keeps going on and on with far too many little words for one breath to hold.";
        let (flag, issues) = needs_rewrite(text);
        assert!(flag);
        assert!(issues.iter().any(|i| i.starts_with("Sentences too long")));
    }
}
