//! Gemini `generateContent` client.
//!
//! Transient failures are retried with exponential backoff up to the
//! configured budget; see [`GenerativeModelError::is_retryable`]. Everything
//! else is returned on first sight.

use crate::assistant::domain::ModelRequest;
use crate::assistant::ports::{GenerativeModel, GenerativeModelError, GenerativeModelResult};
use crate::config::ModelSettings;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

/// Gemini API client.
#[derive(Debug, Clone)]
pub struct GeminiModel {
    http: Client,
    settings: ModelSettings,
}

impl GeminiModel {
    /// Builds a client from resolved settings.
    ///
    /// # Errors
    ///
    /// Returns [`GenerativeModelError::Configuration`] when the API key or
    /// model name is blank, or [`GenerativeModelError::Transport`] when the
    /// HTTP client cannot be built.
    pub fn from_settings(settings: &ModelSettings) -> GenerativeModelResult<Self> {
        if settings.api_key.trim().is_empty() {
            return Err(GenerativeModelError::Configuration(
                "API key is empty".to_owned(),
            ));
        }
        if settings.model.trim().is_empty() {
            return Err(GenerativeModelError::Configuration(
                "model name is empty".to_owned(),
            ));
        }

        let http = Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(GenerativeModelError::transport)?;

        Ok(Self {
            http,
            settings: settings.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }

    async fn attempt(&self, url: &str, body: &serde_json::Value) -> GenerativeModelResult<String> {
        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", self.settings.api_key.as_str())
            .json(body)
            .send()
            .await
            .map_err(|err| self.map_send_error(err))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerativeModelError::Api {
                status: status.as_u16(),
                message: api_error_message(&message),
            });
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| GenerativeModelError::InvalidResponse(err.to_string()))?;
        extract_text(payload)
    }

    fn map_send_error(&self, err: reqwest::Error) -> GenerativeModelError {
        if err.is_timeout() {
            GenerativeModelError::TimedOut(self.settings.request_timeout)
        } else {
            GenerativeModelError::transport(err)
        }
    }
}

#[async_trait]
impl GenerativeModel for GeminiModel {
    async fn generate(&self, request: &ModelRequest) -> GenerativeModelResult<String> {
        let url = self.endpoint();
        let body = build_request_body(request);
        debug!(
            model = %self.settings.model,
            attachments = request.attachments().len(),
            "sending generateContent request"
        );

        let mut attempt: u32 = 0;
        loop {
            if attempt > 0 {
                tokio::time::sleep(ModelSettings::backoff(attempt)).await;
            }

            match self.attempt(&url, &body).await {
                Ok(text) => {
                    debug!(attempt, chars = text.len(), "generateContent succeeded");
                    return Ok(text);
                }
                Err(err) if err.is_retryable() && attempt < self.settings.max_retries => {
                    warn!(attempt, error = %err, "retrying generateContent after transient error");
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

/// Builds the JSON body for a `generateContent` call.
pub(crate) fn build_request_body(request: &ModelRequest) -> serde_json::Value {
    let mut parts = vec![serde_json::json!({ "text": request.prompt() })];
    parts.extend(request.attachments().iter().map(|attachment| {
        serde_json::json!({
            "inline_data": {
                "mime_type": attachment.mime_type(),
                "data": attachment.data(),
            }
        })
    }));

    serde_json::json!({
        "contents": [{ "role": "user", "parts": parts }]
    })
}

/// Joins the text parts of the first candidate.
pub(crate) fn extract_text(payload: GenerateContentResponse) -> GenerativeModelResult<String> {
    if let Some(reason) = payload
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(GenerativeModelError::InvalidResponse(format!(
            "prompt blocked: {reason}"
        )));
    }

    let text: String = payload
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GenerativeModelError::EmptyResponse);
    }
    Ok(text)
}

fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_owned())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
mod tests {
    use super::*;
    use crate::assistant::domain::InlineData;
    use rstest::rstest;

    fn parse(body: &str) -> GenerateContentResponse {
        serde_json::from_str(body).expect("fixture should deserialize")
    }

    #[rstest]
    fn request_body_places_prompt_before_attachments() {
        let request = ModelRequest::text("analyse this")
            .with_attachment(InlineData::from_bytes("application/pdf", b"%PDF"));

        let body = build_request_body(&request);
        let parts = &body["contents"][0]["parts"];

        assert_eq!(parts[0]["text"], "analyse this");
        assert_eq!(parts[1]["inline_data"]["mime_type"], "application/pdf");
        assert_eq!(parts[1]["inline_data"]["data"], "JVBERg==");
    }

    #[rstest]
    fn text_parts_of_first_candidate_are_joined() {
        let payload = parse(
            r#"{"candidates":[
                {"content":{"parts":[{"text":"first "},{"text":"second"}]}},
                {"content":{"parts":[{"text":"ignored"}]}}
            ]}"#,
        );

        assert_eq!(extract_text(payload).expect("text"), "first second");
    }

    #[rstest]
    #[case(r#"{"candidates":[]}"#)]
    #[case(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#)]
    #[case(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#)]
    fn missing_text_is_an_empty_response(#[case] body: &str) {
        assert!(matches!(
            extract_text(parse(body)),
            Err(GenerativeModelError::EmptyResponse)
        ));
    }

    #[rstest]
    fn blocked_prompt_is_an_invalid_response() {
        let payload = parse(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#);

        let err = extract_text(payload).expect_err("blocked prompt");
        assert!(matches!(err, GenerativeModelError::InvalidResponse(ref m) if m.contains("SAFETY")));
    }

    #[rstest]
    #[case(r#"{"error":{"code":429,"message":"quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#, "quota exceeded")]
    #[case("upstream unavailable\n", "upstream unavailable")]
    fn api_error_messages_are_extracted(#[case] body: &str, #[case] expected: &str) {
        assert_eq!(api_error_message(body), expected);
    }

    #[rstest]
    fn blank_api_key_is_rejected() {
        let settings = ModelSettings::new("   ");
        assert!(matches!(
            GeminiModel::from_settings(&settings),
            Err(GenerativeModelError::Configuration(_))
        ));
    }

    #[rstest]
    fn endpoint_includes_model_name() {
        let mut settings = ModelSettings::new("key");
        settings.base_url = "http://localhost:9000/".to_owned();
        let model = GeminiModel::from_settings(&settings).expect("client");

        assert_eq!(
            model.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-1.5-pro:generateContent"
        );
    }
}
