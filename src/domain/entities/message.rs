use chrono::{DateTime, Utc};

/// Type of message content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Text,
    Command,
}

impl MessageType {
    pub fn as_str(&self) -> &str {
        match self {
            MessageType::Text => "text",
            MessageType::Command => "command",
        }
    }
}

/// Message content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Command { name: String, args: Vec<String> },
    Empty,
}

impl Content {
    pub fn is_command(&self) -> bool {
        matches!(self, Content::Command { .. })
    }
}

/// Represents an incoming message from a chat surface
#[derive(Debug, Clone)]
pub struct Message {
    pub chat_id: String,
    pub content: Content,
    pub message_type: MessageType,
    pub timestamp: DateTime<Utc>,
    /// Argument text exactly as typed after the command name
    arg_text: String,
}

impl Message {
    pub fn new(chat_id: impl Into<String>, content: Content) -> Self {
        let message_type = if content.is_command() {
            MessageType::Command
        } else {
            MessageType::Text
        };
        let arg_text = match &content {
            Content::Command { args, .. } => args.join(" "),
            _ => String::new(),
        };
        Self {
            chat_id: chat_id.into(),
            content,
            message_type,
            timestamp: Utc::now(),
            arg_text,
        }
    }

    pub fn from_text(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(chat_id, Content::Text(text.into()))
    }

    pub fn from_command(chat_id: impl Into<String>, name: impl Into<String>, args: Vec<String>) -> Self {
        Self::new(chat_id, Content::Command { name: name.into(), args })
    }

    /// Keep the argument text verbatim instead of the space-joined args
    pub fn with_arg_text(mut self, text: impl Into<String>) -> Self {
        self.arg_text = text.into();
        self
    }

    pub fn arg_text(&self) -> &str {
        &self.arg_text
    }

    /// Command arguments, empty for non-command messages
    pub fn args(&self) -> &[String] {
        match &self.content {
            Content::Command { args, .. } => args,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_text_defaults_to_joined_args() {
        let msg = Message::from_command("c", "plan", vec!["ssc".to_string(), "now".to_string()]);
        assert_eq!(msg.arg_text(), "ssc now");
        assert_eq!(Message::from_text("c", "hello").arg_text(), "");

        let raw = msg.with_arg_text("ssc   now");
        assert_eq!(raw.arg_text(), "ssc   now");
        assert_eq!(raw.args(), &["ssc".to_string(), "now".to_string()]);
    }
}
