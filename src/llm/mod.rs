//! LLM Integration
//!
//! Turns decisions and daily facts into short sentences for a business owner.
//!
//! - **client**: OpenAI-compatible chat-completions client
//! - **explain**: Prompting, with deterministic template fallbacks
//!
//! The LLM is optional. Without an API key, or when the provider fails, every
//! caller still gets a sentence from the templates.

mod client;
mod explain;

pub use client::{LlmClient, LlmError};
pub use explain::{template_explanation, Explainer};
