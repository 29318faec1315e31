// Kidfilter Core Services
// Migrated from the Python backend

pub mod config_store;
pub mod evaluation;
pub mod kid_safety;
pub mod language;
pub mod lexicon;
pub mod prompts;
pub mod providers;
pub mod rate_limiter;
pub mod session_log;
pub mod text_processor;
pub mod tutor;

pub use config_store::{AppConfig, ConfigStore, RateLimitConfig};
pub use kid_safety::{clean_response, enforce_kid_safety, is_safe_topic, truncate_to_two_sentences};
pub use language::{detect_language, format_for_language};
pub use providers::{get_backend, AnthropicBackend, GenerationBackend, GenerationError};
pub use rate_limiter::RateLimiter;
pub use session_log::ConversationLogger;
pub use text_processor::{count_words, split_sentences};
pub use tutor::KidTutor;

// Re-export evaluation module functions
pub use evaluation::{
    check_safety,
    count_complex_words,
    count_syllables,
    evaluate,
    evaluate_batch,
    find_technical_terms,
    flesch_reading_ease,
    needs_rewrite,
    overall_score,
};
