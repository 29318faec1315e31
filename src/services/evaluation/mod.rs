// Evaluation Module
// Response quality measurement organized into specialized submodules:
// - readability: syllable heuristic and Flesch Reading Ease
// - detectors: technical-term, safety and rewrite-intervention heuristics
// - scoring: per-response metrics, pass/fail gate and batch reports

pub mod detectors;
pub mod readability;
pub mod scoring;

pub use detectors::{check_safety, find_technical_terms, needs_rewrite};
pub use readability::{count_complex_words, count_syllables, flesch_reading_ease};
pub use scoring::{evaluate, evaluate_batch, overall_score};
