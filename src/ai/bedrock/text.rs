use super::client::BedrockHttpClient;
use super::types::{
    AnthropicContentPart, AnthropicInvokeRequest, AnthropicInvokeResponse, AnthropicMessage,
};
use crate::ai::TextGenerationService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
const MAX_TOKENS: u32 = 4096;

/// Text generation passthrough for Anthropic models on Bedrock.
pub struct BedrockTextClient {
    http: BedrockHttpClient,
    model: String,
}

impl BedrockTextClient {
    pub fn new(api_key: String, endpoint: String, model: String) -> Self {
        Self::new_with_client(api_key, endpoint, model, reqwest::Client::new())
    }

    pub fn new_with_client(
        api_key: String,
        endpoint: String,
        model: String,
        client: reqwest::Client,
    ) -> Self {
        Self {
            http: BedrockHttpClient::new_with_client(
                api_key,
                endpoint,
                Duration::from_secs(30),
                client,
            ),
            model,
        }
    }

    fn extract_text(response: &AnthropicInvokeResponse) -> Option<String> {
        response
            .content
            .iter()
            .find_map(|part| match part.part_type.as_str() {
                "text" => part.text.clone(),
                _ => None,
            })
    }
}

#[async_trait]
impl TextGenerationService for BedrockTextClient {
    async fn generate_text(&self, system_prompt: &str, prompt: &str) -> Result<String> {
        let request = AnthropicInvokeRequest {
            anthropic_version: ANTHROPIC_VERSION.to_string(),
            max_tokens: MAX_TOKENS,
            system: system_prompt.to_string(),
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: vec![AnthropicContentPart {
                    part_type: "text".to_string(),
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        let response: AnthropicInvokeResponse =
            self.http.invoke_model(&self.model, &request).await?;

        Self::extract_text(&response)
            .ok_or_else(|| Error::Upstream("No text content in model response".to_string()))
    }
}
