//! Lex event ingestion.
//!
//! ```text
//! raw JSON → LexEvent (shape check) → LexRequestFactory → LexRequest
//!                                           ↓
//!                          IntentLoaderRegistry → IntentLoader (slots)
//! ```

pub mod attribute;
pub mod event;
pub mod factory;
pub mod intents;
pub mod model;
pub mod strategy;
