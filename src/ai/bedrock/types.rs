//! Bedrock-specific request/response payloads used by provider modules.

use serde::{Deserialize, Serialize};

/// Request body for the Bedrock Converse API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverseRequest {
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_config: Option<ToolConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardrail_config: Option<GuardrailConfig>,
}

/// Conversation message (request and response side).
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: Vec<ContentBlock>,
}

/// One Converse content block; exactly one of the fields is set per block.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_use: Option<ToolUseBlock>,
}

/// Tool invocation emitted by the model.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolUseBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_use_id: Option<String>,
    pub name: String,
    pub input: serde_json::Value,
}

/// Tool declarations plus the invocation policy.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    pub tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub tool_spec: ToolSpec,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub input_schema: ToolInputSchema,
}

#[derive(Debug, Serialize)]
pub struct ToolInputSchema {
    pub json: serde_json::Value,
}

/// Serializes to `{"any": {}}`, forcing the model to invoke a declared tool.
#[derive(Debug, Serialize)]
pub struct ToolChoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub any: Option<AnyToolChoice>,
}

#[derive(Debug, Serialize)]
pub struct AnyToolChoice {}

/// Guardrail policy reference attached to Converse requests.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardrailConfig {
    pub guardrail_identifier: String,
    pub guardrail_version: String,
    pub trace: String,
}

/// Top-level Converse response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverseResponse {
    pub output: ConverseOutput,
    pub stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConverseOutput {
    pub message: Message,
}

/// Request body for Anthropic-model invocations (messages API schema).
#[derive(Debug, Serialize)]
pub struct AnthropicInvokeRequest {
    pub anthropic_version: String,
    pub max_tokens: u32,
    pub system: String,
    pub messages: Vec<AnthropicMessage>,
}

#[derive(Debug, Serialize)]
pub struct AnthropicMessage {
    pub role: String,
    pub content: Vec<AnthropicContentPart>,
}

/// One content segment in an Anthropic message (request and response side).
#[derive(Debug, Serialize, Deserialize)]
pub struct AnthropicContentPart {
    #[serde(rename = "type")]
    pub part_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnthropicInvokeResponse {
    pub content: Vec<AnthropicContentPart>,
}

/// Request body for Stable Diffusion XL invocations.
#[derive(Debug, Serialize)]
pub struct SdxlInvokeRequest {
    pub text_prompts: Vec<TextPrompt>,
    pub cfg_scale: u32,
    pub seed: u32,
    pub steps: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_preset: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TextPrompt {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SdxlInvokeResponse {
    pub artifacts: Vec<SdxlArtifact>,
}

/// One generated image artifact (base64-encoded).
#[derive(Debug, Deserialize)]
pub struct SdxlArtifact {
    pub base64: Option<String>,
}
