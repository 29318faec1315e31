// Lexicon Data
// Process-wide read-only word lists used by the detectors and transformers.
// Declared order is load-bearing: detectors report matches in list order.

/// Everyday words a 7-year-old is expected to know (sample list).
pub const SIMPLE_WORDS: &[&str] = &[
    "cat", "dog", "water", "rain", "sun", "moon", "star", "tree", "flower",
    "happy", "sad", "big", "small", "hot", "cold", "fast", "slow",
    "mom", "dad", "friend", "play", "run", "jump", "eat", "sleep",
    "color", "sound", "light", "dark", "up", "down", "in", "out",
];

/// Technical vocabulary that should never appear in an answer.
/// Matched as case-insensitive substrings by the evaluator.
pub const TECHNICAL_TERMS: &[&str] = &[
    "molecule", "atom", "frequency", "vibration", "chemical", "formula",
    "compound", "element", "particle", "wavelength", "spectrum",
    "atmospheric", "electromagnetic", "synthesis", "quantum",
    "algorithm", "coefficient", "density", "velocity", "acceleration",
];

/// Phrases flagged as safety issues by the evaluator.
pub const BANNED_PHRASES: &[&str] = &[
    "let me explain", "good thinking", "actually", "basically",
    "as an ai", "i can provide", "there are several types",
];

/// Wider banlist used by the rewrite-intervention check. Includes the
/// lowercase chemical formulas so they are caught even without digits-regex
/// support.
pub const TECHNICAL_BANLIST: &[&str] = &[
    "intersect", "intersection", "atmosphere", "atmospheric", "hydrides", "hydride",
    "compound", "compounds", "molecule", "molecules", "molecular",
    "react", "reaction", "reactions", "approximate", "approximately",
    "radius", "quantum", "algorithm", "methane", "hydrogen", "oxygen",
    "element", "elements", "chemical", "chemistry", "formula", "formulas",
    "viscosity", "frequency", "frequencies", "laryngeal", "vibration", "vibrations",
    "electromagnetic", "spectrum", "wavelength", "particles", "electrons",
    "photosynthesis", "synthesis", "synthesize", "degrees", "angle", "angles",
    "coefficient", "density", "mass", "velocity", "acceleration",
    "ch4", "h2o", "co2", "o2", "h2", "ch3", "nh3",
];

/// Conversational hedges unsuitable for the target tone. The rewrite check
/// reports only the first match.
pub const FILLER_PHRASES: &[&str] = &[
    "good thinking",
    "great question",
    "i can provide",
    "i can explain",
    "as an ai",
    "there are three types",
    "there are several types",
    "let me explain",
    "the answer is",
    "actually",
    "basically",
    "essentially",
    "furthermore",
    "however",
    "therefore",
    "in fact",
    "want more?",
    "would you like to know more",
];

/// Fillers that never belong in an answer and are removed outright by the
/// cleanup transformer. Trailing commas are part of the phrase so that bare
/// mid-sentence uses of "actually"/"basically" survive.
pub const EGREGIOUS_FILLERS: &[&str] = &[
    "good thinking",
    "great question",
    "boa pergunta",
    "as an ai",
    "let me explain",
    "actually,",
    "basically,",
    "there are three types",
    "there are several types",
];

/// Topics that get redirected to an adult before any generation happens.
pub const UNSAFE_TOPIC_KEYWORDS: &[&str] = &[
    "violence", "death", "kill", "murder", "suicide",
    "drug", "alcohol", "cigarette", "smoke",
    "sex", "adult", "inappropriate",
];

/// Words specific to European Portuguese; any hit upgrades "pt" to "pt-PT".
pub const PT_PT_MARKERS: &[&str] = &["tu", "torneira", "autocarro", "comboio", "miúdo"];

/// Brazilian → European Portuguese vocabulary substitutions, applied as
/// whole-word case-insensitive replacements in this order.
pub const PT_PT_REPLACEMENTS: &[(&str, &str)] = &[
    ("você", "tu"),
    ("vocês", "vocês"),
    ("banheiro", "casa de banho"),
    ("trem", "comboio"),
    ("ônibus", "autocarro"),
    ("sorvete", "gelado"),
    ("criança", "miúdo"),
    ("crianças", "miúdos"),
];

/// Whether a word belongs to the simple-word sample list.
pub fn is_simple_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    SIMPLE_WORDS.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_simple_word() {
        assert!(is_simple_word("cat"));
        assert!(is_simple_word("Water"));
        assert!(!is_simple_word("molecule"));
    }

    #[test]
    fn test_lexicons_are_lowercase() {
        // Detectors lowercase the input once and compare directly.
        for term in TECHNICAL_TERMS.iter().chain(TECHNICAL_BANLIST) {
            assert_eq!(*term, term.to_lowercase());
        }
        for phrase in BANNED_PHRASES.iter().chain(FILLER_PHRASES) {
            assert_eq!(*phrase, phrase.to_lowercase());
        }
    }
}
