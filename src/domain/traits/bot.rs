use async_trait::async_trait;
use crate::application::errors::BotError;

/// Bot trait - abstraction for chat surfaces
#[async_trait]
pub trait Bot: Send + Sync {
    /// Start the bot and begin listening for messages
    async fn start(&self) -> Result<(), BotError>;

    /// Send a message to a chat
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<String, BotError>;

    /// Send an assistant answer, revealed character by character where the surface supports it
    async fn send_answer(&self, chat_id: &str, text: &str) -> Result<String, BotError> {
        self.send_message(chat_id, text).await
    }

    /// Get bot info
    fn bot_info(&self) -> BotInfo;
}

/// Bot information
#[derive(Debug, Clone)]
pub struct BotInfo {
    pub name: String,
}
