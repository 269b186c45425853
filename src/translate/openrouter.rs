use super::interface::{CompletionBackend, TranslateError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-r1:free";

// OpenRouter attributes requests to an app via these two headers.
const REFERER: &str = "http://localhost";
const APP_TITLE: &str = "FluentFlow";

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for an OpenRouter-compatible chat-completion endpoint. The
/// credential is supplied per call — it lives in the user's settings, not
/// in the client.
pub struct OpenRouterClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OpenRouterClient {
    pub fn new(base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

#[async_trait]
impl CompletionBackend for OpenRouterClient {
    async fn complete(
        &self,
        credential: &str,
        instruction: &str,
    ) -> Result<String, TranslateError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: instruction.to_string(),
            }],
            temperature: 0.3,
            max_tokens: 1000,
        };

        let client = self.client.clone();
        let url_clone = url.clone();
        let credential = credential.to_string();
        let body = request_body.clone();

        let response = crate::utils::http::request_with_retry(
            move || {
                let client = client.clone();
                let url = url_clone.clone();
                let body = body.clone();
                let credential = credential.clone();
                async move {
                    client
                        .post(&url)
                        .header("Authorization", format!("Bearer {}", credential))
                        .header("Content-Type", "application/json")
                        .header("HTTP-Referer", REFERER)
                        .header("X-Title", APP_TITLE)
                        .json(&body)
                        .send()
                        .await
                }
            },
            2,
        )
        .await
        .map_err(TranslateError::Transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(TranslateError::Api(format!("{}: {}", status, error_text)));
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| TranslateError::Api(format!("Malformed response: {}", e)))?;

        let content = body
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .unwrap_or("");

        Ok(clean_completion(content))
    }

    fn id(&self) -> &str {
        "openrouter"
    }
}

/// Strip boilerplate some models wrap around the translation
/// ("Translation: ...", "The translation from X to Y is: ...") and, when
/// extra prose remains across lines, keep only the first non-empty line.
pub(crate) fn clean_completion(raw: &str) -> String {
    let mut text = raw.trim();

    for prefix in [
        "here is the translation:",
        "translated text:",
        "translation:",
    ] {
        if let Some(rest) = strip_prefix_ignore_case(text, prefix) {
            text = rest.trim_start();
            break;
        }
    }

    // "The translation from <X> to <Y> is: ..." — keep what follows the colon.
    if strip_prefix_ignore_case(text, "the translation").is_some() {
        if let Some(rest) = text.splitn(2, [':', '：']).nth(1) {
            text = rest.trim_start();
        }
    }

    if text.contains('\n') {
        if let Some(line) = text.lines().map(str::trim).find(|line| !line.is_empty()) {
            return line.to_string();
        }
    }

    text.trim().to_string()
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut rest = text;
    for expected in prefix.chars() {
        let actual = rest.chars().next()?;
        if !actual.eq_ignore_ascii_case(&expected) {
            return None;
        }
        rest = &rest[actual.len_utf8()..];
    }
    Some(rest)
}
