//! Model requests and the fixed prompts the pipeline sends.

mod prompt;
mod request;

pub use prompt::{ANALYSIS_PROMPT, PromptError, render_structuring_prompt};
pub use request::{InlineData, ModelRequest};
