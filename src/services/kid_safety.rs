// Kid Safety Transformer
// Deterministic cleanup of backend responses: filler removal, "want more"
// stripping, whitespace normalization and hard truncation. Deliberately
// minimal; wording stays the model's own.

use regex::Regex;
use std::sync::OnceLock;

use crate::services::lexicon::{EGREGIOUS_FILLERS, UNSAFE_TOPIC_KEYWORDS};
use crate::services::text_processor::sentence_end_re;

static FILLER_RES: OnceLock<Vec<Regex>> = OnceLock::new();
static WANT_MORE_RE: OnceLock<Regex> = OnceLock::new();
static SPACE_RUN_RE: OnceLock<Regex> = OnceLock::new();
static LEADING_PUNCT_RE: OnceLock<Regex> = OnceLock::new();

// Each filler also consumes an optional sentence terminator and trailing
// whitespace so removal does not leave stray punctuation behind.
fn filler_res() -> &'static [Regex] {
    FILLER_RES.get_or_init(|| {
        EGREGIOUS_FILLERS
            .iter()
            .map(|filler| {
                Regex::new(&format!(r"(?i){}[.!?]?\s*", regex::escape(filler))).unwrap()
            })
            .collect()
    })
}

fn want_more_re() -> &'static Regex {
    WANT_MORE_RE.get_or_init(|| Regex::new(r"(?i)Want\s+(to\s+know\s+)?more\??\.?").unwrap())
}

// Spaces and tabs only. Newlines carry the answer's paragraph and list
// structure and must survive cleanup verbatim.
fn space_run_re() -> &'static Regex {
    SPACE_RUN_RE.get_or_init(|| Regex::new(r"[ \t]+").unwrap())
}

fn leading_punct_re() -> &'static Regex {
    LEADING_PUNCT_RE.get_or_init(|| Regex::new(r"^\s*[,.]\s*").unwrap())
}

/// Remove egregious filler phrases and "Want more?" hooks, then normalize
/// horizontal whitespace. Newlines are preserved.
pub fn clean_response(text: &str) -> String {
    let mut result = text.to_string();

    for re in filler_res() {
        result = re.replace_all(&result, "").into_owned();
    }

    result = want_more_re().replace_all(&result, "").into_owned();
    result = space_run_re().replace_all(&result, " ").into_owned();
    result = leading_punct_re().replace(&result, "").into_owned();

    result.trim().to_string()
}

/// Minimal cleanup pass over a backend response.
///
/// No truncation and no word substitution: the upstream model is trusted to
/// phrase things for kids, so only mechanical filler/whitespace cleanup is
/// applied. Returns the cleaned text and whether anything changed.
pub fn enforce_kid_safety(text: &str) -> (String, bool) {
    if text.is_empty() {
        return (text.to_string(), false);
    }

    let cleaned = clean_response(text);
    let was_modified = cleaned != text;
    (cleaned, was_modified)
}

/// Hard-truncate to the first two sentences, keeping original terminators.
pub fn truncate_to_two_sentences(text: &str) -> String {
    let trimmed = text.trim();
    let mut result = String::new();
    let mut sentence_count = 0;
    let mut last_end = 0;

    for m in sentence_end_re().find_iter(trimmed) {
        let sentence = &trimmed[last_end..m.start()];
        last_end = m.end();
        if sentence.trim().is_empty() {
            continue;
        }
        result.push_str(sentence);
        result.push_str(m.as_str());
        sentence_count += 1;
        if sentence_count >= 2 {
            return result.trim().to_string();
        }
    }

    // Unterminated tail counts as a sentence.
    let tail = &trimmed[last_end..];
    if sentence_count < 2 && !tail.trim().is_empty() {
        result.push_str(tail);
    }

    result.trim().to_string()
}

/// Check whether a question is appropriate to even ask the backend.
///
/// Lowercase substring scan over a small denylist; on a hit the caller
/// shows the returned redirect message instead of generating.
pub fn is_safe_topic(question: &str) -> (bool, String) {
    let question_lower = question.to_lowercase();
    for keyword in UNSAFE_TOPIC_KEYWORDS {
        if question_lower.contains(keyword) {
            return (false, "Let's ask an adult together about that.".to_string());
        }
    }
    (true, String::new())
}
