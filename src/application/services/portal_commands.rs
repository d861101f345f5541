//! Portal commands: study plans, tools, forms

use crate::application::errors::CommandError;
use crate::application::validation::{self, ContactForm, CONTACT_THANKS};
use crate::domain::entities::{Command, StudyPlanCatalog, ToolCatalog};
use super::assistant_service::PLACEHOLDER;
use super::CommandService;

pub fn register_portal_commands(commands: &mut CommandService, plans: StudyPlanCatalog, tools: ToolCatalog) {
    commands.register(Command::new("plan")
        .with_description("Show the study plan for an exam category")
        .with_usage("/plan <category>")
        .with_handler(move |msg| {
            let Some(category) = msg.args().first() else {
                let list: Vec<&str> = plans.categories().collect();
                return Ok(format!("Categories: {}\nUsage: /plan <category>", list.join(", ")));
            };
            plans.get(category)
                .map(|plan| plan.render())
                .ok_or_else(|| CommandError::InvalidArgs(format!("unknown category '{}'", category)))
        }));

    commands.register(Command::new("tool")
        .with_description("Describe an AI tool")
        .with_usage("/tool <analyzer|generator|tutor|predictor>")
        .with_handler(move |msg| {
            match msg.args().first() {
                Some(key) => Ok(tools.describe(key)),
                None => {
                    let list: Vec<&str> = tools.keys().collect();
                    Ok(format!("Tools: {}", list.join(", ")))
                }
            }
        }));

    commands.register(Command::new("resource")
        .with_description("Open a study resource")
        .with_usage("/resource <title>")
        .with_handler(|msg| {
            let title = msg.arg_text().trim();
            let title = if title.is_empty() { "This feature" } else { title };
            Ok(format!("{} is coming soon! Stay tuned for updates.", title))
        }));

    commands.register(Command::new("contact")
        .with_description("Send feedback")
        .with_usage("/contact <name> | <email> | <message>")
        .with_handler(|msg| {
            let form = ContactForm::parse(msg.arg_text());
            match form.validate() {
                Ok(()) => {
                    tracing::info!("Contact form accepted from {}", form.email.trim());
                    Ok(CONTACT_THANKS.to_string())
                }
                Err(errors) => {
                    let lines: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                    Err(CommandError::InvalidArgs(lines.join("; ")))
                }
            }
        }));

    commands.register(Command::new("subscribe")
        .with_description("Subscribe to the newsletter")
        .with_usage("/subscribe <email>")
        .with_handler(|msg| {
            validation::subscribe(msg.arg_text())
                .map_err(|e| CommandError::InvalidArgs(e.to_string()))
        }));

    commands.register(Command::new("clear")
        .with_description("Reset the AI demo")
        .with_aliases(vec!["reset".to_string()])
        .with_handler(|_| Ok(PLACEHOLDER.to_string())));
}
