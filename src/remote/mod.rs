//! Remote collaborators: chat completion and translation lookup.
//!
//! Both are blocking HTTP calls meant to run through
//! [`BackgroundCall`](task::BackgroundCall) so the caller never stalls on
//! the network. Failures surface as inline error strings, never crashes.

pub mod chat;
pub mod task;
pub mod translate;

pub use chat::{ChatClient, ChatMessage, API_KEY_ENV};
pub use task::{BackgroundCall, RequestTracker};
pub use translate::{language_code, language_names, Translator};
