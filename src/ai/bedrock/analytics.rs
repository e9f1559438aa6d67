use super::client::BedrockHttpClient;
use super::types::{
    AnyToolChoice, ContentBlock, ConverseRequest, ConverseResponse, GuardrailConfig, Message,
    Tool, ToolChoice, ToolConfig, ToolInputSchema, ToolSpec,
};
use crate::ai::CallAnalysisService;
use crate::models::CallAnalysis;
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use std::time::Duration;

const TOOL_NAME: &str = "voice_analytics";
const TOOL_DESCRIPTION: &str = "Get the characteristics of a call between a call center agent \
     and customer, using the transcript as the input. The interactions are for a company that \
     sells unicorn related products.";

/// JSON schema the model is forced to fill in. All seven fields are required,
/// so a conforming tool invocation is always a complete extraction.
fn tool_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "Summary": {
                "type": "string",
                "description": "Summary of the call in no more than 50 words. Summary is for call center managers or executives, presented in passive voice."
            },
            "Topic": {
                "type": "string",
                "description": "Topic of the call. Can be from one of these or something else (unicorn issue, billing issue, cancellation)."
            },
            "Product": {
                "type": "string",
                "description": "What product did the customer call about? (unicorn rental, unicorn warranty, unicorn accessory, unicorn legs)."
            },
            "Resolved": {
                "type": "string",
                "description": "Did the agent resolve the customer's questions? (yes or no)"
            },
            "Callback": {
                "type": "string",
                "description": "Was this a callback? (yes or no)"
            },
            "Politeness": {
                "type": "string",
                "description": "Was the agent polite and professional? (yes or no)"
            },
            "Actions": {
                "type": "string",
                "description": "What actions did the Agent take? "
            }
        },
        "required": [
            "Summary",
            "Topic",
            "Product",
            "Resolved",
            "Callback",
            "Politeness",
            "Actions"
        ]
    })
}

/// Schema-enforced transcript analysis via the Bedrock Converse API.
pub struct BedrockAnalyticsClient {
    http: BedrockHttpClient,
    model: String,
    guardrail: Option<GuardrailConfig>,
}

impl BedrockAnalyticsClient {
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
            guardrail: None,
        }
    }

    /// Attach a guardrail policy to every analysis request.
    pub fn with_guardrail(mut self, identifier: String, version: String) -> Self {
        self.guardrail = Some(GuardrailConfig {
            guardrail_identifier: identifier,
            guardrail_version: version,
            trace: "enabled".to_string(),
        });
        self
    }

    fn build_request(&self, transcript: &str) -> ConverseRequest {
        ConverseRequest {
            messages: vec![Message {
                role: "user".to_string(),
                content: vec![ContentBlock {
                    text: Some(prompts::render(
                        prompts::ANALYSIS_USER,
                        &[("transcript", transcript)],
                    )),
                    tool_use: None,
                }],
            }],
            tool_config: Some(ToolConfig {
                tools: vec![Tool {
                    tool_spec: ToolSpec {
                        name: TOOL_NAME.to_string(),
                        description: TOOL_DESCRIPTION.to_string(),
                        input_schema: ToolInputSchema {
                            json: tool_schema(),
                        },
                    },
                }],
                tool_choice: Some(ToolChoice {
                    any: Some(AnyToolChoice {}),
                }),
            }),
            guardrail_config: self.guardrail.clone(),
        }
    }
}

#[async_trait]
impl CallAnalysisService for BedrockAnalyticsClient {
    async fn analyze_transcript(&self, transcript: &str) -> Result<CallAnalysis> {
        let request = self.build_request(transcript);

        let response: ConverseResponse = self.http.converse(&self.model, &request).await?;

        let tool_input = response
            .output
            .message
            .content
            .iter()
            .find_map(|block| block.tool_use.as_ref())
            .map(|tool_use| tool_use.input.clone())
            .ok_or_else(|| {
                Error::IncompleteExtraction(
                    "Model response contains no tool invocation".to_string(),
                )
            })?;

        serde_json::from_value(tool_input).map_err(|e| {
            Error::IncompleteExtraction(format!("Tool input missing required fields: {}", e))
        })
    }
}
