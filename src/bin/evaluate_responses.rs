use anyhow::{Context, Result};
use kidfilter::services::evaluation::{evaluate_batch, needs_rewrite};
use serde::Deserialize;

#[derive(Deserialize)]
struct PairLine {
    question: String,
    response: String,
}

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

fn preview(s: &str, max_chars: usize) -> String {
    let mut out: String = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        out.push_str("...");
    }
    out.replace('\n', " ")
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage:\n  cargo run --bin evaluate_responses -- <pairs.jsonl> [--rewrite-checks] [--out <json_path>]\n\nInput: one JSON object per line with \"question\" and \"response\" fields."
        );
        return Ok(());
    }

    let path = args[1].clone();
    let show_rewrite = has_flag(&args, "--rewrite-checks");
    let out_path = parse_arg_value(&args, "--out");

    let content = std::fs::read_to_string(&path).with_context(|| format!("read {}", path))?;
    let pairs: Vec<(String, String)> = content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let parsed: PairLine =
                serde_json::from_str(line).with_context(|| format!("parse line: {}", preview(line, 60)))?;
            Ok((parsed.question, parsed.response))
        })
        .collect::<Result<_>>()?;

    let report = evaluate_batch(&pairs);

    println!("File: {}", path);
    println!("Pairs: {}", report.summary.total);
    println!(
        "Passed: {} ({:.1}%)",
        report.summary.passed, report.summary.pass_rate
    );
    println!("Average score: {:.1}", report.summary.avg_score);
    println!();

    for record in &report.results {
        let m = &record.metrics;
        let status = if m.passed { "PASS" } else { "FAIL" };
        println!("[{}] {}", status, preview(&record.question, 60));
        println!(
            "      score={:.1} sentences={} avg_words={:.1} readability={:.1} complex={}",
            m.overall_score,
            m.sentence_count,
            m.avg_words_per_sentence,
            m.readability_score,
            m.complex_word_count
        );
        if !m.technical_terms_found.is_empty() {
            println!("      technical: {}", m.technical_terms_found.join(", "));
        }
        if !m.safety_issues.is_empty() {
            println!("      safety: {}", m.safety_issues.join("; "));
        }
        if show_rewrite {
            let (flagged, issues) = needs_rewrite(&record.response);
            if flagged {
                println!("      rewrite: {}", issues.join("; "));
            }
        }
    }

    if let Some(out) = out_path {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&out, json).with_context(|| format!("write {}", out))?;
        println!("\nReport written to {}", out);
    }

    Ok(())
}
