//! Key names and enumerated string values of the inbound Lex event.
//!
//! These are an external contract and must match the platform's published schema verbatim.

pub const USER_ID: &str = "userId";
pub const INPUT_TRANSCRIPT: &str = "inputTranscript";
pub const INVOCATION_SOURCE: &str = "invocationSource";
pub const OUTPUT_DIALOG_MODE: &str = "outputDialogMode";
pub const BOT: &str = "bot";
pub const BOT_NAME: &str = "name";
pub const SESSION_ATTRIBUTES: &str = "sessionAttributes";
pub const CURRENT_INTENT: &str = "currentIntent";
pub const CURRENT_INTENT_NAME: &str = "name";
pub const CONFIRMATION_STATUS: &str = "confirmationStatus";
pub const SLOTS: &str = "slots";

pub mod invocation_source_value {
    pub const DIALOG_CODE_HOOK: &str = "DialogCodeHook";
    pub const FULFILLMENT_CODE_HOOK: &str = "FulfillmentCodeHook";
}

pub mod output_dialog_mode_value {
    pub const VOICE: &str = "Voice";
    pub const TEXT: &str = "Text";
}

pub mod confirmation_status_value {
    pub const CONFIRMED: &str = "Confirmed";
    pub const DENIED: &str = "Denied";
    pub const NONE: &str = "None";
}
