// Kidfilter Data Models
// Migrated from Python dataclass/Pydantic schemas

use serde::{Deserialize, Serialize};

// ============ Evaluation ============

/// Metrics describing how kid-friendly a single response is.
///
/// Produced fresh per evaluation call; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationMetrics {
    pub sentence_count: usize,
    /// Mean whitespace-delimited word count per sentence, rounded to 1 decimal.
    pub avg_words_per_sentence: f64,
    pub max_words_in_sentence: usize,
    /// Flesch Reading Ease, clamped to [0, 100], rounded to 1 decimal.
    pub readability_score: f64,
    /// Words with 3 or more syllables.
    pub complex_word_count: usize,
    /// Technical vocabulary hits plus synthetic tags such as
    /// "chemical_formula" and "degree_notation", in detection order.
    pub technical_terms_found: Vec<String>,
    /// "banned_phrase: <phrase>" entries and category tags, in detection order.
    pub safety_issues: Vec<String>,
    /// Diagnostic score in [0, 100], rounded to 1 decimal. Intentionally
    /// independent of `passed`: the two use different thresholds.
    pub overall_score: f64,
    pub passed: bool,
}

/// One evaluated question/response pair inside a batch report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRecord {
    pub question: String,
    pub response: String,
    pub metrics: EvaluationMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total: usize,
    pub passed: usize,
    /// Percentage in [0, 100], rounded to 1 decimal. 0.0 for an empty batch.
    pub pass_rate: f64,
    /// Mean overall score, rounded to 1 decimal. 0.0 for an empty batch.
    pub avg_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub results: Vec<EvaluationRecord>,
    pub summary: BatchSummary,
}

// ============ Chat ============

/// One turn of conversation history passed to the generation backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// "user" or "assistant".
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

// ============ Ask Pipeline ============

/// Result of running one question through the full tutor pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskOutcome {
    pub session_id: String,
    /// Detected language tag of the question ("en", "pt", "pt-PT", ...).
    pub language: String,
    pub response: String,
    /// True when the cleanup transformer changed the backend text.
    pub was_modified: bool,
}

// ============ Conversation Log ============

/// One Q&A exchange as persisted to the daily JSONL log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub session_id: String,
    /// RFC 3339 local timestamp.
    pub timestamp: String,
    pub day_of_week: String,
    pub time_of_day: String,
    pub language: String,
    pub question: String,
    pub response: String,
    pub response_length: usize,
    pub question_length: usize,
}
