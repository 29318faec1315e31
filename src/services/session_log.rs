// Conversation Logging Service
// Append-only record of every Q&A exchange, one JSON object per line,
// partitioned into a file per calendar day.

use chrono::Local;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

use crate::models::ConversationRecord;

/// Writes and reads the daily conversation JSONL files.
pub struct ConversationLogger {
    logs_dir: PathBuf,
}

impl ConversationLogger {
    pub fn new(logs_dir: PathBuf) -> Self {
        Self { logs_dir }
    }

    /// Default logs directory: `KIDFILTER_LOG_DIR`, else the platform
    /// data-local dir, else `./logs`.
    pub fn default_logs_dir() -> PathBuf {
        match std::env::var("KIDFILTER_LOG_DIR") {
            Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
            _ => dirs::data_local_dir()
                .map(|p| p.join("kidfilter").join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs")),
        }
    }

    /// Generate a new short session id for tracking conversations.
    pub fn start_session(&self) -> String {
        Uuid::new_v4().to_string()[..8].to_string()
    }

    /// Append one Q&A exchange to today's log file.
    pub fn log_exchange(
        &self,
        session_id: &str,
        question: &str,
        response: &str,
        language: &str,
    ) -> Result<(), String> {
        fs::create_dir_all(&self.logs_dir)
            .map_err(|e| format!("Failed to create logs dir: {}", e))?;

        let now = Local::now();
        let log_file = self
            .logs_dir
            .join(format!("conversations_{}.jsonl", now.format("%Y%m%d")));

        let record = ConversationRecord {
            session_id: session_id.to_string(),
            timestamp: now.to_rfc3339(),
            day_of_week: now.format("%A").to_string(),
            time_of_day: now.format("%H:%M:%S").to_string(),
            language: language.to_string(),
            question: question.to_string(),
            response: response.to_string(),
            response_length: response.chars().count(),
            question_length: question.chars().count(),
        };

        let line = serde_json::to_string(&record)
            .map_err(|e| format!("Failed to serialize log entry: {}", e))?;

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .map_err(|e| format!("Failed to open log file: {}", e))?;

        writeln!(file, "{}", line).map_err(|e| format!("Failed to write log entry: {}", e))
    }

    /// Read every record from all daily files, oldest file first.
    /// Unparsable lines are skipped.
    pub fn load_entries(&self) -> Vec<ConversationRecord> {
        let mut files: Vec<PathBuf> = match fs::read_dir(&self.logs_dir) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| {
                    p.file_name()
                        .and_then(|n| n.to_str())
                        .map(|n| n.starts_with("conversations_") && n.ends_with(".jsonl"))
                        .unwrap_or(false)
                })
                .collect(),
            Err(_) => return Vec::new(),
        };
        files.sort();

        let mut records = Vec::new();
        for path in files {
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            for line in content.lines() {
                if line.trim().is_empty() {
                    continue;
                }
                if let Ok(record) = serde_json::from_str::<ConversationRecord>(line) {
                    records.push(record);
                }
            }
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_session_id_shape() {
        let logger = ConversationLogger::new(PathBuf::from("unused"));
        let id = logger.start_session();
        assert_eq!(id.len(), 8);
        assert_ne!(id, logger.start_session());
    }

    #[test]
    fn test_log_exchange_appends_parseable_lines() {
        let dir = tempfile::tempdir().unwrap();
        let logger = ConversationLogger::new(dir.path().to_path_buf());

        logger
            .log_exchange("abc12345", "Why do cats purr?", "Cats purr when happy.", "en")
            .unwrap();
        logger
            .log_exchange("abc12345", "Porquê?", "Porque sim!", "pt-PT")
            .unwrap();

        let records = logger.load_entries();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].session_id, "abc12345");
        assert_eq!(records[0].question, "Why do cats purr?");
        assert_eq!(records[0].response_length, "Cats purr when happy.".chars().count());
        assert_eq!(records[1].language, "pt-PT");
    }

    #[test]
    fn test_load_entries_missing_dir_is_empty() {
        let logger = ConversationLogger::new(PathBuf::from("/nonexistent/kidfilter-test"));
        assert!(logger.load_entries().is_empty());
    }

    #[test]
    fn test_load_entries_skips_bad_lines() {
        let dir = tempfile::tempdir().unwrap();
        let logger = ConversationLogger::new(dir.path().to_path_buf());
        logger.log_exchange("s1", "q", "r", "en").unwrap();

        let file = dir.path().join("conversations_19700101.jsonl");
        fs::write(&file, "not json\n").unwrap();

        assert_eq!(logger.load_entries().len(), 1);
    }
}
