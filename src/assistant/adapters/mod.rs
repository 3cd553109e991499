//! Adapters implementing the generative-model port.

pub mod gemini;
pub mod scripted;

pub use gemini::GeminiModel;
pub use scripted::ScriptedModel;
