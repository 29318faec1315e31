// Language & Variant Detection
// Coarse heuristic identification: script analysis first, then stopword
// frequency to tell the Latin-script candidates apart. Refines "pt" into
// "pt-PT" via marker words and applies the matching vocabulary substitutions.

use regex::Regex;
use std::sync::OnceLock;

use crate::services::lexicon::{PT_PT_MARKERS, PT_PT_REPLACEMENTS};

// Small per-language stopword samples; a handful of hits is enough for the
// short questions and answers this crate sees.
const EN_STOPWORDS: &[&str] = &[
    "the", "and", "is", "of", "to", "in", "that", "it", "you", "for", "was",
    "on", "are", "with", "they", "this", "have", "from", "what", "why",
    "how", "there", "do", "does",
];

const PT_STOPWORDS: &[&str] = &[
    "que", "não", "uma", "um", "para", "com", "por", "mais", "como", "mas",
    "isto", "isso", "é", "são", "muito", "bom", "boa", "você", "sim", "os",
    "do", "da", "dos", "das", "tu", "te", "sabes", "porque", "quando", "onde",
];

const ES_STOPWORDS: &[&str] = &[
    "el", "la", "los", "las", "es", "y", "en", "un", "una", "por", "para",
    "con", "como", "pero", "más", "qué", "muy", "sí", "este", "esta", "esto",
    "cuando", "donde", "porque",
];

static PT_PT_RES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();

fn pt_pt_res() -> &'static [(Regex, &'static str)] {
    PT_PT_RES.get_or_init(|| {
        PT_PT_REPLACEMENTS
            .iter()
            .map(|(br_word, pt_word)| {
                let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(br_word))).unwrap();
                (re, *pt_word)
            })
            .collect()
    })
}

fn stopword_hits(words: &[String], stopwords: &[&str]) -> usize {
    words.iter().filter(|w| stopwords.contains(&w.as_str())).count()
}

/// Detect the language of the text.
///
/// Never fails: anything without a recognizable signal is reported as "en".
/// Portuguese text containing a Portugal-specific marker word is upgraded
/// to "pt-PT".
pub fn detect_language(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "en".to_string();
    }

    // Script analysis: CJK and Cyrillic are unambiguous at any length.
    let total_alpha = trimmed.chars().filter(|c| c.is_alphabetic()).count();
    if total_alpha > 0 {
        let han = trimmed
            .chars()
            .filter(|c| ('\u{4e00}'..='\u{9fff}').contains(c))
            .count();
        if han as f64 / total_alpha as f64 > 0.3 {
            return "zh".to_string();
        }
        let cyrillic = trimmed
            .chars()
            .filter(|c| ('\u{0400}'..='\u{052f}').contains(c))
            .count();
        if cyrillic as f64 / total_alpha as f64 > 0.3 {
            return "ru".to_string();
        }
    }

    // Latin-script disambiguation via stopword frequency.
    let words: Vec<String> = trimmed
        .to_lowercase()
        .split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();

    let en = stopword_hits(&words, EN_STOPWORDS);
    let pt = stopword_hits(&words, PT_STOPWORDS);
    let es = stopword_hits(&words, ES_STOPWORDS);

    let lang = if pt > en && pt >= es {
        "pt"
    } else if es > en && es > pt {
        "es"
    } else {
        "en"
    };

    if lang == "pt" {
        let text_lower = trimmed.to_lowercase();
        if PT_PT_MARKERS.iter().any(|marker| text_lower.contains(marker)) {
            return "pt-PT".to_string();
        }
    }

    lang.to_string()
}

/// Apply language-specific formatting.
///
/// For "pt-PT" this rewrites Brazilian vocabulary into the European
/// equivalents as whole words, case-insensitively, in mapping order.
/// Every other language tag passes through unchanged.
pub fn format_for_language(text: &str, language: &str) -> String {
    if language != "pt-PT" {
        return text.to_string();
    }

    let mut result = text.to_string();
    for (re, pt_word) in pt_pt_res() {
        result = re.replace_all(&result, *pt_word).into_owned();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_english() {
        assert_eq!(detect_language("Hello there"), "en");
        assert_eq!(detect_language("Why is the sky blue?"), "en");
    }

    #[test]
    fn test_detect_portuguese_variant() {
        assert_eq!(detect_language("Isto é muito bom, tu sabes."), "pt-PT");
    }

    #[test]
    fn test_detect_portuguese_without_markers() {
        assert_eq!(detect_language("Isto é muito bom, sim."), "pt");
    }

    #[test]
    fn test_detect_empty_defaults_to_english() {
        assert_eq!(detect_language(""), "en");
        assert_eq!(detect_language("12345"), "en");
    }

    #[test]
    fn test_detect_chinese() {
        assert_eq!(detect_language("这是第一句。这是第二句。"), "zh");
    }

    #[test]
    fn test_format_for_language_pt_pt() {
        assert_eq!(
            format_for_language("Você pega o trem e um sorvete", "pt-PT"),
            "tu pega o comboio e um gelado"
        );
    }

    #[test]
    fn test_format_for_language_whole_word_only() {
        // "vocês" must not be rewritten by the "você" rule.
        assert_eq!(format_for_language("vocês sabem", "pt-PT"), "vocês sabem");
    }

    #[test]
    fn test_format_for_language_other_tags_unchanged() {
        assert_eq!(format_for_language("Você pega o trem", "en"), "Você pega o trem");
        assert_eq!(format_for_language("banheiro", "pt"), "banheiro");
    }
}
