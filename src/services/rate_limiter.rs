// Rate Limiting Service
// Per-session sliding window so one child (or one stuck client) cannot
// hammer the backend. Check and record happen under a single lock:
// two concurrent requests must not both observe "under limit".

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::Mutex;

const DEFAULT_MAX_REQUESTS: usize = 30;
const DEFAULT_WINDOW_MINUTES: i64 = 10;

const RATE_LIMIT_MESSAGE: &str =
    "Too many questions! Take a break and come back in a few minutes 😊";

/// In-memory sliding-window rate limiter keyed by session id.
pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    requests: Mutex<HashMap<String, Vec<DateTime<Utc>>>>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW_MINUTES)
    }
}

impl RateLimiter {
    pub fn new(max_requests: usize, window_minutes: i64) -> Self {
        Self {
            max_requests,
            window: Duration::minutes(window_minutes),
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Check whether the session may make another request, recording it if so.
    ///
    /// Prune, check and append run as one atomic step under the lock.
    /// Returns the admit decision and, when refused, a kid-friendly message.
    pub async fn check_rate_limit(&self, session_id: &str) -> (bool, String) {
        let mut requests = self.requests.lock().await;
        let now = Utc::now();

        let entry = requests.entry(session_id.to_string()).or_default();
        entry.retain(|req_time| now - *req_time < self.window);

        if entry.len() >= self.max_requests {
            return (false, RATE_LIMIT_MESSAGE.to_string());
        }

        entry.push(now);
        (true, String::new())
    }

    /// Remaining requests for the session within the current window.
    pub async fn get_remaining(&self, session_id: &str) -> usize {
        let requests = self.requests.lock().await;
        let now = Utc::now();

        match requests.get(session_id) {
            Some(entries) => {
                let valid = entries.iter().filter(|t| now - **t < self.window).count();
                self.max_requests.saturating_sub(valid)
            }
            None => self.max_requests,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_admits_until_cap_then_refuses() {
        let limiter = RateLimiter::new(3, 10);

        for _ in 0..3 {
            let (ok, msg) = limiter.check_rate_limit("session-a").await;
            assert!(ok);
            assert!(msg.is_empty());
        }

        let (ok, msg) = limiter.check_rate_limit("session-a").await;
        assert!(!ok);
        assert_eq!(msg, RATE_LIMIT_MESSAGE);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let limiter = RateLimiter::new(1, 10);
        assert!(limiter.check_rate_limit("a").await.0);
        assert!(limiter.check_rate_limit("b").await.0);
        assert!(!limiter.check_rate_limit("a").await.0);
    }

    #[tokio::test]
    async fn test_get_remaining() {
        let limiter = RateLimiter::new(5, 10);
        assert_eq!(limiter.get_remaining("s").await, 5);
        limiter.check_rate_limit("s").await;
        limiter.check_rate_limit("s").await;
        assert_eq!(limiter.get_remaining("s").await, 3);
    }
}
