use crate::domain::entities::{Command, CommandRegistry, Message, Content};
use crate::application::errors::CommandError;

/// Service for managing and executing commands
pub struct CommandService {
    registry: CommandRegistry,
    prefix: String,
}

impl CommandService {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            registry: CommandRegistry::new(),
            prefix: prefix.into(),
        }
    }

    pub fn register(&mut self, command: Command) {
        self.registry.register(command);
    }

    pub fn register_defaults(&mut self, bot_name: &str) {
        // Help is answered from the registry itself
        self.register(Command::new("help")
            .with_description("Show help message")
            .with_usage("/help [command]"));

        let version = format!("{} v{}", bot_name, env!("CARGO_PKG_VERSION"));
        self.register(Command::new("version")
            .with_description("Show bot version")
            .with_handler(move |_| Ok(version.clone())));
    }

    pub fn handle(&self, message: &Message) -> Result<Option<String>, CommandError> {
        let Content::Command { name, args } = &message.content else {
            return Ok(None);
        };

        let cmd = self.registry.find(name)
            .ok_or_else(|| CommandError::NotFound(name.clone()))?;

        if cmd.name == "help" {
            return Ok(Some(self.get_help(args.first().map(String::as_str))));
        }

        // Commands without a handler are answered by their owner, not here
        let handler = cmd.handler.as_ref()
            .ok_or_else(|| CommandError::NotFound(cmd.name.clone()))?;
        Ok(Some(handler(message)?))
    }

    pub fn get_help(&self, command: Option<&str>) -> String {
        if let Some(name) = command {
            if let Some(cmd) = self.registry.find(name) {
                let mut help = format!("{}{} - {}", self.prefix, cmd.name, cmd.description.as_deref().unwrap_or("No description"));
                if let Some(usage) = &cmd.usage {
                    help.push_str(&format!("\nUsage: {}", usage));
                }
                return help;
            }
            return format!("Command {}{} not found", self.prefix, name);
        }

        // List all commands
        let mut help = "Available commands:\n".to_string();
        for cmd in self.registry.all() {
            help.push_str(&format!("  {}{} - {}\n", self.prefix, cmd.name, cmd.description.as_deref().unwrap_or("")));
        }
        help.push_str("Anything else is sent to the AI demo.");
        help
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}
