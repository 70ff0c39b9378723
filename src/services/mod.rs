//! Service layer modules for external integrations and shared utilities.

pub mod cache;
pub mod genai;

pub use cache::MemoryCache;
pub use genai::{GenAiClient, GenerativeApi, Prompt};
