use crate::domain::error::ProxyError;
use crate::domain::model::ModelReply;
use crate::domain::traits::ModelClient;
use crate::infrastructure::config::AnthropicConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

// Anthropic Messages API structures
#[derive(Serialize, Debug)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Serialize, Debug)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize, Debug)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize, Debug)]
struct ContentBlock {
    // Non-text blocks carry no text and contribute nothing
    #[serde(default)]
    text: Option<String>,
}

/// Anthropic Messages API client
pub struct AnthropicClient {
    client: Client,
    config: AnthropicConfig,
}

impl AnthropicClient {
    pub fn new(client: Client, config: AnthropicConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self) -> String {
        format!("{}/messages", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ModelClient for AnthropicClient {
    async fn complete(&self, prompt: &str) -> Result<ModelReply, ProxyError> {
        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| ProxyError::Config("Anthropic API key not configured".to_string()))?;

        let body = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!(
            model = %self.config.model,
            max_tokens = self.config.max_tokens,
            "Calling Anthropic API"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", api_key)
            .header("anthropic-version", &self.config.api_version)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            error!(status = status.as_u16(), "Anthropic API error: {}", text);
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                body: text,
            });
        }

        let data: MessagesResponse = serde_json::from_slice(&response.bytes().await?)?;
        let segments = data
            .content
            .into_iter()
            .map(|block| block.text.unwrap_or_default())
            .collect();

        Ok(ModelReply { segments })
    }
}
