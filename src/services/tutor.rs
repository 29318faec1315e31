// Tutor Pipeline
// The full ask flow: topic gate -> rate limit -> language detection ->
// generation -> cleanup -> variant formatting -> conversation log.
// Generation failure is swallowed into the friendly fallback; log failures
// are traced and never surface to the child.

use chrono::Local;
use tracing::{info, warn};

use crate::models::{AskOutcome, Message};
use crate::services::config_store::AppConfig;
use crate::services::kid_safety::{enforce_kid_safety, is_safe_topic};
use crate::services::language::{detect_language, format_for_language};
use crate::services::prompts::{FALLBACK_RESPONSE, SYSTEM_PROMPT};
use crate::services::providers::GenerationBackend;
use crate::services::rate_limiter::RateLimiter;
use crate::services::session_log::ConversationLogger;

/// Keep the last 3 exchanges of history for context.
const MAX_HISTORY_MESSAGES: usize = 6;

pub struct KidTutor<B: GenerationBackend> {
    backend: B,
    logger: ConversationLogger,
    rate_limiter: RateLimiter,
    config: AppConfig,
}

impl<B: GenerationBackend> KidTutor<B> {
    pub fn new(backend: B, logger: ConversationLogger, config: AppConfig) -> Self {
        let rate_limiter = RateLimiter::new(
            config.rate_limit.max_requests,
            config.rate_limit.window_minutes,
        );
        Self {
            backend,
            logger,
            rate_limiter,
            config,
        }
    }

    /// Answer one question, running the complete safety pipeline.
    pub async fn ask(
        &self,
        session_id: Option<&str>,
        question: &str,
        history: &[Message],
    ) -> AskOutcome {
        let session_id = match session_id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => self.logger.start_session(),
        };
        let language = detect_language(question);

        let (safe, redirect) = is_safe_topic(question);
        if !safe {
            return AskOutcome {
                session_id,
                language,
                response: redirect,
                was_modified: false,
            };
        }

        let (admitted, limit_message) = self.rate_limiter.check_rate_limit(&session_id).await;
        if !admitted {
            return AskOutcome {
                session_id,
                language,
                response: limit_message,
                was_modified: false,
            };
        }

        let recent = if history.len() > MAX_HISTORY_MESSAGES {
            &history[history.len() - MAX_HISTORY_MESSAGES..]
        } else {
            history
        };

        let date_str = Local::now().format("%A, %d de %B de %Y");
        let system = format!("{}\n\nHoje é {}.", SYSTEM_PROMPT, date_str);

        let raw = match self
            .backend
            .generate(
                &system,
                question,
                recent,
                self.config.max_tokens,
                self.config.temperature,
            )
            .await
        {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!("generation failed, using fallback: {}", e);
                FALLBACK_RESPONSE.to_string()
            }
        };

        let (cleaned, was_modified) = enforce_kid_safety(&raw);
        let response = format_for_language(&cleaned, &language);

        if was_modified {
            info!(
                "response modified by kid-safety filter for: {}",
                question.chars().take(50).collect::<String>()
            );
        }

        if let Err(e) = self
            .logger
            .log_exchange(&session_id, question, &response, &language)
        {
            warn!("failed to log exchange: {}", e);
        }

        AskOutcome {
            session_id,
            language,
            response,
            was_modified,
        }
    }
}
