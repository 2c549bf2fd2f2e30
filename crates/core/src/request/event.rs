use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::PayloadError;

/// Raw slot values keyed by slot name. Lex sends `null` for slots the user has not filled.
pub type SlotMap = HashMap<String, Option<String>>;

/// Shape-checked view of an inbound Lex event.
///
/// Every field is optional: absence is never an error. A field that is present with the wrong
/// JSON type is rejected while decoding, so the factory never has to deal with it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LexEvent {
    pub user_id: Option<String>,
    pub input_transcript: Option<String>,
    pub invocation_source: Option<String>,
    pub output_dialog_mode: Option<String>,
    pub bot: Option<BotDescriptor>,
    pub session_attributes: Option<Map<String, Value>>,
    pub current_intent: Option<CurrentIntent>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BotDescriptor {
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentIntent {
    pub name: Option<String>,
    /// `currentIntent.invocationSource`. Not part of the published schema, but it is the key
    /// the legacy confirmation lookup reads.
    pub invocation_source: Option<String>,
    pub confirmation_status: Option<String>,
    pub slots: Option<SlotMap>,
}

impl LexEvent {
    /// Decodes a JSON document. Blank input and `null` both mean "no payload".
    pub fn from_json(raw: &str) -> Result<Option<Self>, PayloadError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }

        let value = serde_json::from_str::<Value>(raw)
            .map_err(|error| PayloadError::MalformedJson(error.to_string()))?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Option<Self>, PayloadError> {
        match value {
            Value::Null => return Ok(None),
            Value::Object(_) => {}
            other => return Err(PayloadError::NotAnObject { found: json_kind(other) }),
        }

        serde_path_to_error::deserialize(value).map(Some).map_err(|error| {
            PayloadError::InvalidShape {
                path: error.path().to_string(),
                message: error.inner().to_string(),
            }
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
