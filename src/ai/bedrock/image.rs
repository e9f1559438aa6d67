use super::client::BedrockHttpClient;
use super::types::{SdxlInvokeRequest, SdxlInvokeResponse, TextPrompt};
use crate::ai::ImageGenerationService;
use crate::{Error, Result};
use async_trait::async_trait;
use base64::Engine as _;
use std::time::Duration;

/// Preset styles accepted by Stable Diffusion XL.
pub const STYLE_PRESETS: [&str; 17] = [
    "3d-model",
    "analog-film",
    "anime",
    "cinematic",
    "comic-book",
    "digital-art",
    "enhance",
    "fantasy-art",
    "isometric",
    "line-art",
    "low-poly",
    "modeling-compound",
    "neon-punk",
    "origami",
    "photographic",
    "pixel-art",
    "tile-texture",
];

/// Image generation passthrough for Stable Diffusion XL on Bedrock.
pub struct BedrockImageClient {
    http: BedrockHttpClient,
    model: String,
}

impl BedrockImageClient {
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
                Duration::from_secs(60),
                client,
            ),
            model,
        }
    }
}

#[async_trait]
impl ImageGenerationService for BedrockImageClient {
    async fn generate_image(&self, prompt: &str, style: Option<&str>) -> Result<Vec<u8>> {
        let request = SdxlInvokeRequest {
            text_prompts: vec![TextPrompt {
                text: prompt.to_string(),
            }],
            cfg_scale: 10,
            seed: 0,
            steps: 50,
            style_preset: style.map(str::to_string),
        };

        let response: SdxlInvokeResponse = self.http.invoke_model(&self.model, &request).await?;

        let artifact = response
            .artifacts
            .first()
            .and_then(|artifact| artifact.base64.as_deref())
            .ok_or_else(|| Error::Upstream("No image artifact in response".to_string()))?;

        base64::engine::general_purpose::STANDARD
            .decode(artifact)
            .map_err(|e| Error::Upstream(format!("Failed to decode base64 image: {}", e)))
    }
}
