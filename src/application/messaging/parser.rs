//! Message parser - Parses raw console lines into structured messages

use crate::domain::entities::{Message, Content};

/// Parses incoming lines into structured Message objects
pub struct MessageParser {
    command_prefix: String,
}

impl MessageParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
        }
    }

    /// Parse a line of input
    pub fn parse(&self, chat_id: impl Into<String>, text: impl Into<String>) -> Message {
        let text = text.into();
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Message::new(chat_id, Content::Empty);
        }

        // Check if it's a command
        if trimmed.starts_with('/') || trimmed.starts_with(&self.command_prefix) {
            return self.parse_command(chat_id, trimmed);
        }

        Message::from_text(chat_id, trimmed)
    }

    /// Parse a command message
    fn parse_command(&self, chat_id: impl Into<String>, text: &str) -> Message {
        // Remove the command prefix (either / or custom prefix)
        let cmd_text = match text.strip_prefix(self.command_prefix.as_str()) {
            Some(rest) => rest,
            None => text.trim_start_matches('/'),
        };

        // Split command and arguments, keeping the argument text as typed
        let (name, rest) = cmd_text
            .trim_start()
            .split_once(char::is_whitespace)
            .unwrap_or((cmd_text.trim_start(), ""));
        let rest = rest.trim();
        let args = rest.split_whitespace().map(|s| s.to_string()).collect();

        Message::from_command(chat_id, name, args).with_arg_text(rest)
    }
}
