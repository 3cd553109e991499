//! Fixed instructions for report analysis and plan structuring.

use minijinja::Environment;
use thiserror::Error;

/// Instruction sent with an uploaded report.
pub const ANALYSIS_PROMPT: &str = "\
You are an expert cancer and any disease diagnosis analyst. Use your knowledge base to answer \
questions about giving personalized recommended treatments.
Give a detailed treatment plan for me. Make it more readable, clear, and easy to understand, \
with paragraphs to enhance readability.";

const STRUCTURING_TEMPLATE: &str = r#"Your role and goal is to be an expert that will be using this treatment plan {{ treatment_plan }} to create Columns:
- Todo: Tasks that need to be started
- Doing: Tasks that are in progress
- Done: Tasks that are completed

Each task should include a brief description. The tasks should be categorized appropriately based on the stage of the treatment process.

Please provide the results in the following format for easy front-end display:
{
  "columns": [
    { "id": "todo", "title": "Todo" },
    { "id": "doing", "title": "Work in progress" },
    { "id": "done", "title": "Done" }
  ],
  "tasks": [
    { "id": "1", "columnId": "todo", "content": "Example task 1" },
    { "id": "2", "columnId": "todo", "content": "Example task 2" },
    { "id": "3", "columnId": "doing", "content": "Example task 3" },
    { "id": "4", "columnId": "doing", "content": "Example task 4" },
    { "id": "5", "columnId": "done", "content": "Example task 5" }
  ]
}"#;

/// Error returned when a prompt template fails to render.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render prompt: {0}")]
pub struct PromptError(pub String);

/// Renders the structuring instruction around a treatment plan.
///
/// # Errors
///
/// Returns [`PromptError`] when template rendering fails.
pub fn render_structuring_prompt(treatment_plan: &str) -> Result<String, PromptError> {
    let environment = Environment::new();
    environment
        .render_str(
            STRUCTURING_TEMPLATE,
            minijinja::context! { treatment_plan => treatment_plan },
        )
        .map_err(|err| PromptError(err.to_string()))
}
