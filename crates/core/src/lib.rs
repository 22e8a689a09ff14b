pub mod language;
pub mod message;

// Re-export the pieces callers actually touch
pub use language::{resolve_lang, DEFAULT_LANG, SUPPORTED_LANGS};
pub use message::message_sn;

/// Production host of the device cloud HTTP API.
pub const API_DOMAIN: &str = "api.device-link.net";
