use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};

use super::attribute::{
    confirmation_status_value, invocation_source_value, output_dialog_mode_value,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum UserIdType {
    #[default]
    Undefined,
    Facebook,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum InvocationSource {
    DialogCodeHook,
    #[default]
    FulfillmentCodeHook,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum OutputDialogMode {
    Voice,
    #[default]
    Text,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ConfirmationStatus {
    Confirmed,
    Denied,
    #[default]
    None,
}

impl InvocationSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DialogCodeHook => invocation_source_value::DIALOG_CODE_HOOK,
            Self::FulfillmentCodeHook => invocation_source_value::FULFILLMENT_CODE_HOOK,
        }
    }
}

impl OutputDialogMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Voice => output_dialog_mode_value::VOICE,
            Self::Text => output_dialog_mode_value::TEXT,
        }
    }
}

impl ConfirmationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => confirmation_status_value::CONFIRMED,
            Self::Denied => confirmation_status_value::DENIED,
            Self::None => confirmation_status_value::NONE,
        }
    }
}

/// Normalized form of one inbound Lex event.
///
/// Built once by [`LexRequestFactory`](super::factory::LexRequestFactory) and handed to
/// downstream code by value. Slot fields stay `None` unless the loader registered for
/// `intent_name` filled them in.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LexRequest {
    pub user_id: Option<String>,
    pub user_id_type: UserIdType,
    pub input_transcript: Option<String>,
    pub invocation_source: InvocationSource,
    pub output_dialog_mode: OutputDialogMode,
    pub bot_name: Option<String>,
    pub session_attributes: Map<String, Value>,
    pub intent_name: Option<String>,
    pub confirmation_status: ConfirmationStatus,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub product: Option<String>,
    pub amount: Option<Decimal>,
    pub unit: Option<String>,
    pub fat_percentage: Option<Decimal>,
}

impl LexRequest {
    pub fn has_slot_values(&self) -> bool {
        self.first_name.is_some()
            || self.last_name.is_some()
            || self.product.is_some()
            || self.amount.is_some()
            || self.unit.is_some()
            || self.fat_percentage.is_some()
    }

    pub fn session_attribute(&self, key: &str) -> Option<&Value> {
        self.session_attributes.get(key)
    }
}
