// Scoring & Policy Engine
// Combines segmentation, readability and the lexical detectors into a
// bounded diagnostic score plus a hard pass/fail gate. The two use
// different thresholds on purpose and may disagree; see overall_score.

use crate::models::{BatchReport, BatchSummary, EvaluationMetrics, EvaluationRecord};
use crate::services::evaluation::detectors::{check_safety, find_technical_terms};
use crate::services::evaluation::readability::{count_complex_words, flesch_reading_ease};
use crate::services::text_processor::{count_words, split_sentences};

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Diagnostic 0-100 score built from additive penalties and one bonus.
///
/// Reporting only: the binary `passed` decision applies raw thresholds to
/// the underlying metrics instead, so a response can score low here and
/// still pass, or the other way around.
pub fn overall_score(
    sentence_count: usize,
    avg_words: f64,
    readability: f64,
    complex_count: usize,
    technical_found: &[String],
    safety_issues: &[String],
) -> f64 {
    let mut score = 100.0;

    if sentence_count > 2 {
        score -= (sentence_count as f64 - 2.0) * 20.0;
    }

    if avg_words > 10.0 {
        score -= 30f64.min((avg_words - 10.0) * 3.0);
    }

    if readability >= 90.0 {
        score += 10.0;
    } else if readability < 80.0 {
        score -= 30f64.min(80.0 - readability);
    }

    score -= complex_count as f64 * 5.0;
    score -= technical_found.len() as f64 * 15.0;
    score -= safety_issues.len() as f64 * 20.0;

    score.clamp(0.0, 100.0)
}

/// Evaluate a response for kid-friendliness.
///
/// Pure computation over the input string; total for any input including
/// the empty string.
pub fn evaluate(response: &str) -> EvaluationMetrics {
    let response = response.trim();

    let sentences = split_sentences(response);
    let sentence_count = sentences.len();

    let word_counts: Vec<usize> = sentences.iter().map(|s| count_words(s)).collect();
    let avg_words = if word_counts.is_empty() {
        0.0
    } else {
        word_counts.iter().sum::<usize>() as f64 / word_counts.len() as f64
    };
    let max_words = word_counts.iter().copied().max().unwrap_or(0);

    let readability = flesch_reading_ease(response);
    let complex_count = count_complex_words(response);
    let technical_found = find_technical_terms(response);
    let safety_issues = check_safety(response);

    let score = overall_score(
        sentence_count,
        avg_words,
        readability,
        complex_count,
        &technical_found,
        &safety_issues,
    );

    let passed = sentence_count <= 5
        && avg_words <= 15.0
        && readability >= 75.0
        && technical_found.is_empty()
        && safety_issues.is_empty();

    EvaluationMetrics {
        sentence_count,
        avg_words_per_sentence: round1(avg_words),
        max_words_in_sentence: max_words,
        readability_score: round1(readability),
        complex_word_count: complex_count,
        technical_terms_found: technical_found,
        safety_issues,
        overall_score: round1(score),
        passed,
    }
}

/// Evaluate a batch of (question, response) pairs and summarize.
///
/// An empty batch yields an empty result list and a zeroed summary.
pub fn evaluate_batch(pairs: &[(String, String)]) -> BatchReport {
    let results: Vec<EvaluationRecord> = pairs
        .iter()
        .map(|(question, response)| EvaluationRecord {
            question: question.clone(),
            response: response.clone(),
            metrics: evaluate(response),
        })
        .collect();

    let total = results.len();
    let passed = results.iter().filter(|r| r.metrics.passed).count();
    let (pass_rate, avg_score) = if total == 0 {
        (0.0, 0.0)
    } else {
        let rate = passed as f64 / total as f64 * 100.0;
        let avg = results.iter().map(|r| r.metrics.overall_score).sum::<f64>() / total as f64;
        (round1(rate), round1(avg))
    };

    BatchReport {
        results,
        summary: BatchSummary {
            total,
            passed,
            pass_rate,
            avg_score,
        },
    }
}
