use clap::{Parser, Subcommand};
use std::sync::Arc;

mod domain;
mod application;
mod infrastructure;

use application::errors::{BotError, QueryError};
use application::messaging::{LoggingMiddleware, MessageDispatcher, QueryValidationMiddleware, Reply};
use application::services::{register_portal_commands, AssistantService, CommandService, ThemeService};
use application::services::assistant_service::PLACEHOLDER;
use domain::entities::Message;
use domain::traits::{Bot, RandomSource};
use infrastructure::adapters::{ConsoleAdapter, RevealTiming};
use infrastructure::config::Config;
use infrastructure::random::{SeededRandom, ThreadRandom};
use infrastructure::storage::JsonStore;

const CHAT_ID: &str = "console";

#[derive(Parser)]
#[command(name = "examai-bot")]
#[command(about = "Exam preparation assistant for the console", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml", global = true)]
    config: String,

    /// Seed for the fallback answers (reproducible sessions)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive assistant
    Run,
    /// Ask the AI demo a single question
    Ask {
        /// The question
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Show the study plan for an exam category
    Plan {
        category: Option<String>,
    },
    /// Show or change the color theme
    Theme {
        /// toggle, light or dark
        action: Option<String>,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let config = load_config(&cli.config);

    let result = match cli.command {
        Commands::Version => {
            println!("{} v{}", config.bot.name, env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
        command => match tokio::runtime::Runtime::new() {
            Ok(rt) => rt.block_on(run_command(command, config, cli.seed)),
            Err(e) => Err(BotError::Internal(format!("Failed to start runtime: {}", e))),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: &str) -> Config {
    if std::path::Path::new(path).exists() {
        Config::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    }
}

async fn run_command(command: Commands, config: Config, seed: Option<u64>) -> Result<(), BotError> {
    let timing = RevealTiming::from_millis(
        config.assistant.thinking_delay_ms,
        config.assistant.reveal_delay_ms,
    );
    let bot_name = config.bot.name.clone();
    let dispatcher = build_dispatcher(&config, seed).await?;

    match command {
        Commands::Run => {
            let bot = ConsoleAdapter::new(bot_name, timing);
            run_console_bot(&bot, &dispatcher).await
        }
        Commands::Ask { question } => {
            let question = question.join(" ");
            if question.trim().is_empty() {
                return Err(QueryError::Empty.into());
            }
            let message = Message::from_text(CHAT_ID, question);
            print_reply(dispatcher.process(message).await?);
            Ok(())
        }
        Commands::Plan { category } => {
            let message = Message::from_command(CHAT_ID, "plan", category.into_iter().collect());
            print_reply(dispatcher.process(message).await?);
            Ok(())
        }
        Commands::Theme { action } => {
            let message = Message::from_command(CHAT_ID, "theme", action.into_iter().collect());
            print_reply(dispatcher.process(message).await?);
            Ok(())
        }
        Commands::Version | Commands::InitConfig => Ok(()),
    }
}

async fn build_dispatcher(config: &Config, seed: Option<u64>) -> Result<MessageDispatcher, BotError> {
    let resolver = config.assistant.build_resolver()?;
    let rng: Box<dyn RandomSource> = match seed {
        Some(seed) => {
            tracing::info!("Using seeded fallback answers ({})", seed);
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(ThreadRandom::new()),
    };
    let assistant = Arc::new(AssistantService::new(resolver, rng));

    let store = JsonStore::open(&config.storage.path).await?;
    let themes = ThemeService::new(Arc::new(store));

    let mut commands = CommandService::new(&config.bot.prefix);
    commands.register_defaults(&config.bot.name);
    register_portal_commands(&mut commands, config.study_plan_catalog(), config.tool_catalog());

    Ok(MessageDispatcher::new(commands, assistant, themes)
        .with_middleware(LoggingMiddleware)
        .with_middleware(QueryValidationMiddleware))
}

fn print_reply(reply: Reply) {
    if let Reply::Text(text) | Reply::Answer(text) = reply {
        println!("{}", text);
    }
}

async fn run_console_bot(bot: &ConsoleAdapter, dispatcher: &MessageDispatcher) -> Result<(), BotError> {
    bot.start().await?;

    let info = bot.bot_info();
    tracing::info!("Assistant started: {}", info.name);

    bot.show_tagline().await;
    bot.send_message(CHAT_ID, PLACEHOLDER).await?;
    bot.send_message(CHAT_ID, &format!("Type {}help for commands.", dispatcher.prefix())).await?;

    // Main loop, ends at end of input
    while let Some(input) = bot.read_line("> ").await {
        let sent = match dispatcher.process_text(CHAT_ID, input).await {
            Ok(Reply::Answer(text)) => bot.send_answer(CHAT_ID, &text).await,
            Ok(Reply::Text(text)) => bot.send_message(CHAT_ID, &text).await,
            Ok(Reply::None) => continue,
            Err(e) => bot.send_message(CHAT_ID, &format!("Error: {}", e)).await,
        };
        if let Err(e) = sent {
            tracing::error!("Failed to send reply: {}", e);
        }
    }

    tracing::info!("Input closed, shutting down");
    Ok(())
}

fn init_config() -> Result<(), BotError> {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config)
        .map_err(|e| BotError::Internal(format!("Failed to render config: {}", e)))?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
