use serde::Serialize;
use shoppingbot_core::IntentLoaderRegistry;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct IntentSummary {
    intent: &'static str,
    slots: &'static [&'static str],
}

pub fn run() -> CommandResult {
    let registry = IntentLoaderRegistry::shared();
    let summaries = registry
        .intent_names()
        .into_iter()
        .map(|intent| IntentSummary { intent, slots: registry.resolve(Some(intent)).slot_keys() })
        .collect::<Vec<_>>();

    match serde_json::to_value(&summaries) {
        Ok(data) => CommandResult::success(
            "intents",
            format!("{} intents registered", registry.loader_count()),
            Some(data),
        ),
        Err(error) => CommandResult::failure("intents", "serialization", error.to_string(), 1),
    }
}
