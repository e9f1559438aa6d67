//! AI service integration for call analytics and the model playground
//!
//! Provides interfaces to Amazon Bedrock for schema-enforced transcript
//! analysis, text generation, and image generation.

pub mod bedrock;
pub mod mock;

pub use bedrock::{BedrockAnalyticsClient, BedrockImageClient, BedrockTextClient};
pub use mock::{MockCallAnalysisClient, MockImageGenerationClient, MockTextGenerationClient};

use crate::models::CallAnalysis;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CallAnalysisService: Send + Sync {
    async fn analyze_transcript(&self, transcript: &str) -> Result<CallAnalysis>;
}

#[async_trait]
pub trait TextGenerationService: Send + Sync {
    async fn generate_text(&self, system_prompt: &str, prompt: &str) -> Result<String>;
}

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    async fn generate_image(&self, prompt: &str, style: Option<&str>) -> Result<Vec<u8>>;
}
