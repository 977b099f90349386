//! Fixed-delay stand-in for a real message generation service

use async_trait::async_trait;
use tokio::time::{sleep, Duration};

use super::{ReplyError, ReplyRequest, ReplyService};
use crate::storage::settings::AppSettings;

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_REPLY_TEXT: &str = "I'm processing your message and will respond thoughtfully...";

/// Answers every message with the same text after a fixed delay
#[derive(Clone, Debug)]
pub struct SimulatedReplyService {
    delay: Duration,
    text: String,
}

impl SimulatedReplyService {
    pub fn new(delay: Duration, text: impl Into<String>) -> Self {
        Self {
            delay,
            text: text.into(),
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(
            Duration::from_millis(settings.reply_delay_ms),
            settings.simulated_reply.clone(),
        )
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedReplyService {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY, DEFAULT_REPLY_TEXT)
    }
}

#[async_trait]
impl ReplyService for SimulatedReplyService {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn reply(&self, request: &ReplyRequest) -> Result<String, ReplyError> {
        tracing::debug!(
            request = %request.id,
            conversation = %request.conversation_id,
            "Simulating reply in {:?}",
            self.delay
        );
        sleep(self.delay).await;
        Ok(self.text.clone())
    }
}
