pub mod config;
pub mod errors;
pub mod request;

pub use config::{AppConfig, ConfigError, LoadOptions, LogFormat};
pub use errors::{ApplicationError, PayloadError};
pub use request::event::{LexEvent, SlotMap};
pub use request::factory::{classify_user_id, ConfirmationField, LexRequestFactory};
pub use request::model::{
    ConfirmationStatus, InvocationSource, LexRequest, OutputDialogMode, UserIdType,
};
pub use request::strategy::{
    default_registry, IntentLoader, IntentLoaderRegistry, UnsupportedIntentLoader,
};
