//! Message dispatcher - Routes messages to handlers

use std::sync::Arc;
use crate::domain::entities::{Command, Content, Message, Theme};
use crate::application::errors::{BotError, CommandError};
use crate::application::services::{AssistantService, CommandService, ThemeService};
use super::parser::MessageParser;
use super::middleware::{Context, Middleware, MiddlewareChain, MiddlewareError};

/// What to send back for a processed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain text, printed as is
    Text(String),
    /// Assistant answer, eligible for the typed reveal
    Answer(String),
    /// Nothing to send
    None,
}

/// Message dispatcher - routes messages through middleware to handlers
pub struct MessageDispatcher {
    parser: MessageParser,
    middleware: MiddlewareChain,
    commands: CommandService,
    assistant: Arc<AssistantService>,
    themes: ThemeService,
}

impl MessageDispatcher {
    pub fn new(mut commands: CommandService, assistant: Arc<AssistantService>, themes: ThemeService) -> Self {
        // Theme needs the async store, so it is answered here rather than by a handler
        commands.register(Command::new("theme")
            .with_description("Show or change the color theme")
            .with_usage("/theme [toggle|light|dark]"));

        Self {
            parser: MessageParser::new(commands.prefix()),
            middleware: MiddlewareChain::new(),
            commands,
            assistant,
            themes,
        }
    }

    /// Add middleware to the chain
    pub fn with_middleware<M: Middleware + 'static>(mut self, middleware: M) -> Self {
        self.middleware = self.middleware.add(middleware);
        self
    }

    /// Process a raw line of input
    pub async fn process_text(&self, chat_id: impl Into<String>, text: impl Into<String>) -> Result<Reply, BotError> {
        let message = self.parser.parse(chat_id, text);
        self.process(message).await
    }

    /// Process a message through the dispatcher
    pub async fn process(&self, message: Message) -> Result<Reply, BotError> {
        match self.middleware.next().run(Context::new(message)) {
            Ok(ctx) => self.run_handler(ctx.message).await,
            Err(MiddlewareError::Blocked(msg)) => Ok(Reply::Text(msg)),
            Err(MiddlewareError::Internal(msg)) => Err(BotError::Internal(msg)),
        }
    }

    /// Run the actual handler after middleware
    async fn run_handler(&self, message: Message) -> Result<Reply, BotError> {
        match &message.content {
            Content::Command { name, args } if self.is_theme(name) => {
                let text = self.handle_theme(args.first().map(String::as_str)).await?;
                Ok(Reply::Text(text))
            }
            Content::Command { .. } => {
                let response = self.commands.handle(&message)?;
                Ok(response.map(Reply::Text).unwrap_or(Reply::None))
            }
            Content::Text(text) => {
                let answer = self.assistant.ask(text)?;
                Ok(Reply::Answer(answer))
            }
            Content::Empty => Ok(Reply::None),
        }
    }

    fn is_theme(&self, name: &str) -> bool {
        name.eq_ignore_ascii_case("theme")
    }

    async fn handle_theme(&self, arg: Option<&str>) -> Result<String, BotError> {
        let theme = match arg.map(|a| a.to_lowercase()) {
            None => self.themes.current().await?,
            Some(a) if a == "toggle" => self.themes.toggle().await?,
            Some(a) => {
                let theme: Theme = a.parse().map_err(CommandError::InvalidArgs)?;
                self.themes.set(theme).await?
            }
        };
        Ok(format!("Theme: {} (switch: {})", theme, theme.icon()))
    }

    pub fn prefix(&self) -> &str {
        self.commands.prefix()
    }
}
