//! Console adapter for the interactive assistant

use async_trait::async_trait;
use std::io::Write;
use std::time::Duration;
use crate::domain::traits::{Bot, BotInfo};
use crate::application::errors::BotError;

pub const TAGLINE: &str = "Prepare smarter, achieve better results with AI assistance";

const TAGLINE_DELAY: Duration = Duration::from_millis(50);

/// Every prefix of `text` on a char boundary, from empty to complete
pub fn reveal_frames(text: &str) -> impl Iterator<Item = &str> + '_ {
    std::iter::once(0)
        .chain(text.char_indices().map(|(i, c)| i + c.len_utf8()))
        .map(move |end| &text[..end])
}

/// Timing for the typed answer presentation
#[derive(Debug, Clone, Copy)]
pub struct RevealTiming {
    pub thinking: Duration,
    pub per_char: Duration,
}

impl RevealTiming {
    pub fn from_millis(thinking_ms: u64, per_char_ms: u64) -> Self {
        Self {
            thinking: Duration::from_millis(thinking_ms),
            per_char: Duration::from_millis(per_char_ms),
        }
    }

    pub fn instant() -> Self {
        Self::from_millis(0, 0)
    }
}

/// Console bot adapter
pub struct ConsoleAdapter {
    info: BotInfo,
    timing: RevealTiming,
}

impl ConsoleAdapter {
    pub fn new(name: impl Into<String>, timing: RevealTiming) -> Self {
        Self {
            info: BotInfo { name: name.into() },
            timing,
        }
    }

    /// Read one line; `None` at end of input
    pub async fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        std::io::stdout().flush().ok()?;

        let mut input = String::new();
        match std::io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(input.trim_end_matches(['\r', '\n']).to_string()),
        }
    }

    /// Type out the hero tagline
    pub async fn show_tagline(&self) {
        let delay = if self.timing.per_char.is_zero() { Duration::ZERO } else { TAGLINE_DELAY };
        type_out(TAGLINE, delay).await;
    }
}

async fn type_out(text: &str, delay: Duration) {
    if delay.is_zero() {
        println!("{}", text);
        return;
    }

    let mut stdout = std::io::stdout();
    for frame in reveal_frames(text) {
        let _ = write!(stdout, "\r{}", frame);
        let _ = stdout.flush();
        tokio::time::sleep(delay).await;
    }
    println!();
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new("examai-bot", RevealTiming::instant())
    }
}

#[async_trait]
impl Bot for ConsoleAdapter {
    async fn start(&self) -> Result<(), BotError> {
        tracing::info!("Starting console assistant");
        Ok(())
    }

    async fn send_message(&self, _chat_id: &str, text: &str) -> Result<String, BotError> {
        println!("{}", text);
        Ok("console_msg".to_string())
    }

    async fn send_answer(&self, _chat_id: &str, text: &str) -> Result<String, BotError> {
        if !self.timing.thinking.is_zero() {
            print!("...");
            let _ = std::io::stdout().flush();
            tokio::time::sleep(self.timing.thinking).await;
            print!("\r   \r");
        }
        type_out(text, self.timing.per_char).await;
        Ok("console_msg".to_string())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}
