//! HTTP transport for the caption-suggestion collaborator

use crate::error::{MomoError, Result};
use crate::infrastructure::Config;
use serde_json::{json, Value};

/// What the service "says" when it answers with no candidate text
pub const CAPTION_PLACEHOLDER: &str = "AI 在发呆...";

/// One round-trip to the text-generation collaborator. The trait is the seam
/// the retrying caption service is tested through.
pub trait CaptionTransport {
    /// Ask for one caption. `image_base64` rides inline when present.
    fn generate(&self, prompt: &str, image_base64: Option<&str>) -> Result<String>;
}

/// Blocking client for the Gemini-shaped `generateContent` REST call
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &Config, api_key: String) -> Self {
        GeminiClient {
            http: reqwest::blocking::Client::new(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
        }
    }
}

impl CaptionTransport for GeminiClient {
    fn generate(&self, prompt: &str, image_base64: Option<&str>) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );

        let response = self
            .http
            .post(&url)
            .json(&request_body(prompt, image_base64))
            .send()
            .map_err(|e| MomoError::Transport(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MomoError::Transport(format!(
                "caption service returned {}",
                status
            )));
        }

        let data: Value = response
            .json()
            .map_err(|e| MomoError::Transport(format!("unreadable response: {}", e)))?;

        Ok(extract_candidate_text(&data)
            .unwrap_or_else(|| CAPTION_PLACEHOLDER.to_string()))
    }
}

fn request_body(prompt: &str, image_base64: Option<&str>) -> Value {
    let parts = match image_base64 {
        Some(data) => json!([
            { "text": prompt },
            { "inlineData": { "mimeType": "image/jpeg", "data": data } }
        ]),
        None => json!([{ "text": prompt }]),
    };
    json!({ "contents": [{ "parts": parts }] })
}

/// Pull the first candidate's text out of a `generateContent` response
fn extract_candidate_text(data: &Value) -> Option<String> {
    data.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(|s| s.to_string())
}
