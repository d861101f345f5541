use std::sync::Arc;
use super::*;
use crate::application::errors::{CommandError, QueryError};
use crate::application::messaging::MessageParser;
use crate::domain::entities::{Message, Theme};
use crate::domain::traits::Store;
use crate::infrastructure::config::Config;
use crate::infrastructure::random::SequenceRandom;
use crate::infrastructure::storage::MemoryStore;

fn assistant(indices: Vec<usize>) -> AssistantService {
    let resolver = Config::default().assistant.build_resolver().unwrap();
    AssistantService::new(resolver, Box::new(SequenceRandom::new(indices)))
}

fn commands() -> CommandService {
    let config = Config::default();
    let mut commands = CommandService::new("/");
    commands.register_defaults("examai-bot");
    register_portal_commands(&mut commands, config.study_plan_catalog(), config.tool_catalog());
    commands
}

fn run(commands: &CommandService, name: &str, args: &[&str]) -> Result<Option<String>, CommandError> {
    let msg = Message::from_command("test", name, args.iter().map(|s| s.to_string()).collect());
    commands.handle(&msg)
}

#[test]
fn test_assistant_rejects_blank_queries() {
    let service = assistant(vec![0]);
    assert_eq!(service.ask(""), Err(QueryError::Empty));
    assert_eq!(service.ask(" \t\n"), Err(QueryError::Empty));
}

#[test]
fn test_assistant_answers_from_rules_and_pool() {
    let service = assistant(vec![2]);
    let answer = service.ask("  Any tips on current affairs?  ").unwrap();
    assert!(answer.starts_with("General knowledge requires"));

    let fallback = service.ask("asdkjasd").unwrap();
    assert_eq!(fallback, service.resolver().pool().get(2).unwrap());
}

#[tokio::test]
async fn test_theme_defaults_to_light_and_toggles() {
    let store = Arc::new(MemoryStore::new());
    let themes = ThemeService::new(store.clone());

    assert_eq!(themes.current().await.unwrap(), Theme::Light);
    assert_eq!(themes.toggle().await.unwrap(), Theme::Dark);
    assert_eq!(store.get(theme_service::THEME_KEY).await.unwrap().as_deref(), Some("dark"));
    assert_eq!(themes.toggle().await.unwrap(), Theme::Light);
}

#[tokio::test]
async fn test_unknown_stored_theme_reads_as_light() {
    let store = Arc::new(MemoryStore::new());
    store.set(theme_service::THEME_KEY, "sepia").await.unwrap();
    let themes = ThemeService::new(store);
    assert_eq!(themes.current().await.unwrap(), Theme::Light);
}

#[test]
fn test_plan_command() {
    let commands = commands();
    let plan = run(&commands, "plan", &["UPSC"]).unwrap().unwrap();
    assert!(plan.starts_with("UPSC Study Plan - 12 Months\n- Month 1-3"));

    let listing = run(&commands, "plan", &[]).unwrap().unwrap();
    assert!(listing.contains("banking, ssc, upsc"));

    assert!(matches!(run(&commands, "plan", &["gate"]), Err(CommandError::InvalidArgs(_))));
}

#[test]
fn test_tool_command() {
    let commands = commands();
    let blurb = run(&commands, "tool", &["predictor"]).unwrap().unwrap();
    assert!(blurb.starts_with("Score Predictor"));
    assert_eq!(run(&commands, "tool", &["planner"]).unwrap().unwrap(), "planner is coming soon!");
}

#[test]
fn test_contact_and_subscribe_commands() {
    let commands = commands();
    let ok = run(&commands, "contact", &["Asha", "|", "asha@example.com", "|", "Nice", "site"]).unwrap();
    assert_eq!(ok.as_deref(), Some(crate::application::validation::CONTACT_THANKS));

    match run(&commands, "contact", &["Asha", "|", "nope"]) {
        Err(CommandError::InvalidArgs(msg)) => {
            assert!(msg.contains("Please enter a valid email address."));
            assert!(msg.contains("Message is required."));
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    let sub = run(&commands, "subscribe", &["me@example.com"]).unwrap().unwrap();
    assert!(sub.ends_with("me@example.com"));
    assert!(run(&commands, "subscribe", &[]).is_err());
}

#[test]
fn test_resource_command() {
    let commands = commands();
    let reply = run(&commands, "resource", &["Previous", "Year", "Papers"]).unwrap().unwrap();
    assert_eq!(reply, "Previous Year Papers is coming soon! Stay tuned for updates.");

    let reply = run(&commands, "resource", &[]).unwrap().unwrap();
    assert_eq!(reply, "This feature is coming soon! Stay tuned for updates.");
}

#[test]
fn test_contact_message_keeps_its_spacing() {
    let commands = commands();
    let parser = MessageParser::new("/");
    let msg = parser.parse("test", "/contact Asha | asha@example.com | Loved it.\t\tMore  mocks please");

    assert_eq!(msg.arg_text(), "Asha | asha@example.com | Loved it.\t\tMore  mocks please");
    let form = crate::application::validation::ContactForm::parse(msg.arg_text());
    assert_eq!(form.message, "Loved it.\t\tMore  mocks please");
    assert!(commands.handle(&msg).unwrap().is_some());

    let sub = parser.parse("test", "/subscribe   me@example.com  ");
    let reply = commands.handle(&sub).unwrap().unwrap();
    assert!(reply.ends_with("sent to me@example.com"));
}

#[test]
fn test_help_and_unknown_commands() {
    let commands = commands();
    let help = run(&commands, "help", &[]).unwrap().unwrap();
    for name in ["/clear", "/contact", "/plan", "/resource", "/subscribe", "/tool", "/version"] {
        assert!(help.contains(name), "help missing {}", name);
    }

    let plan_help = run(&commands, "help", &["plan"]).unwrap().unwrap();
    assert!(plan_help.contains("Usage: /plan <category>"));

    let version = run(&commands, "VERSION", &[]).unwrap().unwrap();
    assert_eq!(version, format!("examai-bot v{}", env!("CARGO_PKG_VERSION")));

    assert!(matches!(run(&commands, "rss", &[]), Err(CommandError::NotFound(_))));
}

#[test]
fn test_registered_command_without_handler_is_not_found() {
    let mut commands = commands();
    commands.register(crate::domain::entities::Command::new("theme").with_description("Owned elsewhere"));

    assert!(matches!(run(&commands, "theme", &[]), Err(CommandError::NotFound(ref n)) if n == "theme"));
    assert!(commands.get_help(None).contains("/theme - Owned elsewhere"));
}
