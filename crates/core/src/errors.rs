use thiserror::Error;

use crate::config::ConfigError;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("malformed payload json: {0}")]
    MalformedJson(String),
    #[error("payload must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("invalid payload at `{path}`: {message}")]
    InvalidShape { path: String, message: String },
}

impl PayloadError {
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::MalformedJson(_) => "payload_malformed_json",
            Self::NotAnObject { .. } => "payload_not_an_object",
            Self::InvalidShape { .. } => "payload_invalid_shape",
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Payload(#[from] PayloadError),
    #[error("configuration failure: {0}")]
    Configuration(String),
    #[error("input failure: {0}")]
    Input(String),
}

impl ApplicationError {
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Payload(error) => error.error_class(),
            Self::Configuration(_) => "config_validation",
            Self::Input(_) => "input_unavailable",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Configuration(_) => 2,
            Self::Payload(_) => 3,
            Self::Input(_) => 4,
        }
    }
}

impl From<ConfigError> for ApplicationError {
    fn from(value: ConfigError) -> Self {
        Self::Configuration(value.to_string())
    }
}
