use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::attribute::{
    confirmation_status_value, invocation_source_value, output_dialog_mode_value,
};
use super::event::{CurrentIntent, LexEvent};
use super::model::{
    ConfirmationStatus, InvocationSource, LexRequest, OutputDialogMode, UserIdType,
};
use super::strategy::IntentLoaderRegistry;
use crate::errors::PayloadError;

const FACEBOOK_USER_ID_LEN: usize = 16;

/// Key of `currentIntent` the confirmation status is read from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationField {
    /// `currentIntent.invocationSource`, the key deployed bots have always been read with.
    #[default]
    InvocationSource,
    /// `currentIntent.confirmationStatus`, the key the platform documents.
    ConfirmationStatus,
}

impl std::str::FromStr for ConfirmationField {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "invocation_source" => Ok(Self::InvocationSource),
            "confirmation_status" => Ok(Self::ConfirmationStatus),
            other => Err(format!(
                "unsupported confirmation field `{other}` (expected invocation_source|confirmation_status)"
            )),
        }
    }
}

/// Turns inbound Lex events into [`LexRequest`]s.
///
/// The factory borrows its loader registry, so one registry can back any number of factories
/// and concurrent builds.
#[derive(Clone, Copy)]
pub struct LexRequestFactory<'a> {
    loaders: &'a IntentLoaderRegistry,
    confirmation_field: ConfirmationField,
}

impl Default for LexRequestFactory<'static> {
    fn default() -> Self {
        Self::new(IntentLoaderRegistry::shared())
    }
}

impl<'a> LexRequestFactory<'a> {
    pub fn new(loaders: &'a IntentLoaderRegistry) -> Self {
        Self { loaders, confirmation_field: ConfirmationField::default() }
    }

    pub fn with_confirmation_field(mut self, confirmation_field: ConfirmationField) -> Self {
        self.confirmation_field = confirmation_field;
        self
    }

    pub fn confirmation_field(&self) -> ConfirmationField {
        self.confirmation_field
    }

    pub fn from_json(&self, raw: &str) -> Result<LexRequest, PayloadError> {
        let event = LexEvent::from_json(raw)?;
        Ok(self.build(event.as_ref()))
    }

    pub fn from_value(&self, value: &Value) -> Result<LexRequest, PayloadError> {
        let event = LexEvent::from_value(value)?;
        Ok(self.build(event.as_ref()))
    }

    /// Builds the request in two passes: top-level fields first, then the intent section.
    /// An absent event yields a request made only of defaults.
    pub fn build(&self, event: Option<&LexEvent>) -> LexRequest {
        let mut request = LexRequest::default();
        let Some(event) = event else {
            return request;
        };

        request.user_id = event.user_id.clone();
        request.user_id_type = classify_user_id(event.user_id.as_deref());
        request.input_transcript = event.input_transcript.clone();
        request.invocation_source = resolve_invocation_source(event.invocation_source.as_deref());
        request.output_dialog_mode =
            resolve_output_dialog_mode(event.output_dialog_mode.as_deref());
        if let Some(bot) = &event.bot {
            request.bot_name = bot.name.clone();
        }
        if let Some(session_attributes) = &event.session_attributes {
            request.session_attributes = session_attributes.clone();
        }

        if let Some(intent) = &event.current_intent {
            self.load_intent(intent, &mut request);
        }

        debug!(
            event_name = "request.factory.built",
            intent_name = request.intent_name.as_deref().unwrap_or("none"),
            user_id_type = ?request.user_id_type,
            invocation_source = request.invocation_source.as_str(),
            output_dialog_mode = request.output_dialog_mode.as_str(),
            confirmation_status = request.confirmation_status.as_str(),
            "lex request normalized"
        );
        request
    }

    fn load_intent(&self, intent: &CurrentIntent, request: &mut LexRequest) {
        let marker = match self.confirmation_field {
            ConfirmationField::InvocationSource => intent.invocation_source.as_deref(),
            ConfirmationField::ConfirmationStatus => intent.confirmation_status.as_deref(),
        };
        request.confirmation_status = resolve_confirmation_status(marker);
        request.intent_name = intent.name.clone();

        let intent_name = request.intent_name.as_deref();
        if let Some(name) = intent_name.filter(|name| !self.loaders.is_supported(name)) {
            debug!(
                event_name = "request.factory.unsupported_intent",
                intent_name = name,
                "no slot loader registered for intent"
            );
        }

        let loader = self.loaders.resolve(intent_name);
        loader.load(request, intent.slots.as_ref());
    }
}

/// A user id of exactly sixteen ASCII digits is a Facebook page-scoped id.
pub fn classify_user_id(user_id: Option<&str>) -> UserIdType {
    match user_id {
        Some(id) if id.len() == FACEBOOK_USER_ID_LEN && id.bytes().all(|b| b.is_ascii_digit()) => {
            UserIdType::Facebook
        }
        _ => UserIdType::Undefined,
    }
}

fn resolve_invocation_source(value: Option<&str>) -> InvocationSource {
    if value == Some(invocation_source_value::DIALOG_CODE_HOOK) {
        InvocationSource::DialogCodeHook
    } else {
        InvocationSource::FulfillmentCodeHook
    }
}

fn resolve_output_dialog_mode(value: Option<&str>) -> OutputDialogMode {
    if value == Some(output_dialog_mode_value::VOICE) {
        OutputDialogMode::Voice
    } else {
        OutputDialogMode::Text
    }
}

fn resolve_confirmation_status(value: Option<&str>) -> ConfirmationStatus {
    match value {
        Some(confirmation_status_value::CONFIRMED) => ConfirmationStatus::Confirmed,
        Some(confirmation_status_value::DENIED) => ConfirmationStatus::Denied,
        _ => ConfirmationStatus::None,
    }
}
