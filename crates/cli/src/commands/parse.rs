use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use shoppingbot_core::{AppConfig, ApplicationError, IntentLoaderRegistry, LexRequestFactory};
use tracing::info;

use super::CommandResult;

const COMMAND: &str = "parse";

pub fn run(config: &AppConfig, file: Option<&Path>) -> CommandResult {
    match read_payload(file) {
        Ok(raw) => run_with_input(config, &raw),
        Err(error) => CommandResult::from_error(
            COMMAND,
            &ApplicationError::Input(format!("{error:#}")),
        ),
    }
}

pub fn run_with_input(config: &AppConfig, raw: &str) -> CommandResult {
    let factory = LexRequestFactory::new(IntentLoaderRegistry::shared())
        .with_confirmation_field(config.request.confirmation_field);

    let request = match factory.from_json(raw) {
        Ok(request) => request,
        Err(error) => return CommandResult::from_error(COMMAND, &ApplicationError::from(error)),
    };

    info!(
        event_name = "cli.parse.completed",
        intent_name = request.intent_name.as_deref().unwrap_or("none"),
        confirmation_field = ?factory.confirmation_field(),
        "lex payload parsed"
    );

    match serde_json::to_value(&request) {
        Ok(data) => CommandResult::success(COMMAND, "lex request normalized", Some(data)),
        Err(error) => CommandResult::failure(COMMAND, "serialization", error.to_string(), 1),
    }
}

fn read_payload(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("could not read payload file `{}`", path.display())),
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw).context("could not read payload from stdin")?;
            Ok(raw)
        }
    }
}
