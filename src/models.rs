//! Data models and structures
//!
//! Defines the core data structures for transcripts, extracted call
//! analytics, and application configuration.

use serde::{Deserialize, Serialize};

/// Speaker role attached to each transcript turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParticipantRole {
    Agent,
    Customer,
}

impl std::fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParticipantRole::Agent => write!(f, "AGENT"),
            ParticipantRole::Customer => write!(f, "CUSTOMER"),
        }
    }
}

/// One speaker turn, using the field names Transcribe call analytics emits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    #[serde(rename = "ParticipantRole")]
    pub role: ParticipantRole,
    #[serde(rename = "Content")]
    pub content: String,
}

/// Event payload delivered by the analytics trigger: one job identifier and
/// the ordered transcript turns for that call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEvent {
    #[serde(rename = "JobName")]
    pub job_name: String,
    #[serde(rename = "Transcript")]
    pub transcript: Vec<Turn>,
}

/// Structured call analytics extracted by the model.
///
/// All seven fields are required; deserialization fails if any is missing,
/// so a value of this type is always a complete extraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallAnalysis {
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Topic")]
    pub topic: String,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Resolved")]
    pub resolved: String,
    #[serde(rename = "Callback")]
    pub callback: String,
    #[serde(rename = "Politeness")]
    pub politeness: String,
    #[serde(rename = "Actions")]
    pub actions: String,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub bedrock_api_key: String,
    pub bedrock_endpoint: String,
    pub analytics_model_id: String,
    pub text_model_id: String,
    pub image_model_id: String,
    pub table_name: Option<String>,
    pub aws_region: String,
    pub guardrail_identifier: Option<String>,
    pub guardrail_version: Option<String>,
    pub dry_run: bool,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let aws_region =
            std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());
        let bedrock_endpoint = std::env::var("BEDROCK_ENDPOINT").unwrap_or_else(|_| {
            format!("https://bedrock-runtime.{}.amazonaws.com", aws_region)
        });
        let dry_run = std::env::var("DRY_RUN")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let table_name = std::env::var("TEAM_DDB_TABLE").ok();
        if table_name.is_none() && !dry_run {
            return Err(crate::Error::Generic("TEAM_DDB_TABLE not set".to_string()));
        }

        Ok(Self {
            bedrock_api_key: std::env::var("AWS_BEARER_TOKEN_BEDROCK").map_err(|_| {
                crate::Error::Generic("AWS_BEARER_TOKEN_BEDROCK not set".to_string())
            })?,
            bedrock_endpoint,
            analytics_model_id: std::env::var("ANALYTICS_MODEL_ID")
                .unwrap_or_else(|_| "anthropic.claude-3-haiku-20240307-v1:0".to_string()),
            text_model_id: std::env::var("TEXT_MODEL_ID")
                .unwrap_or_else(|_| "anthropic.claude-3-haiku-20240307-v1:0".to_string()),
            image_model_id: std::env::var("IMAGE_MODEL_ID")
                .unwrap_or_else(|_| "stability.stable-diffusion-xl-v1".to_string()),
            table_name,
            aws_region,
            guardrail_identifier: std::env::var("GUARDRAIL_IDENTIFIER").ok(),
            guardrail_version: std::env::var("GUARDRAIL_VERSION").ok(),
            dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&ParticipantRole::Agent).unwrap();
        assert_eq!(json, "\"AGENT\"");

        let role: ParticipantRole = serde_json::from_str("\"CUSTOMER\"").unwrap();
        assert_eq!(role, ParticipantRole::Customer);
    }

    #[test]
    fn test_role_display_matches_wire_form() {
        assert_eq!(ParticipantRole::Agent.to_string(), "AGENT");
        assert_eq!(ParticipantRole::Customer.to_string(), "CUSTOMER");
    }

    #[test]
    fn test_turn_uses_transcribe_field_names() {
        let turn: Turn = serde_json::from_str(
            r#"{"ParticipantRole": "AGENT", "Content": "Hi!"}"#,
        )
        .unwrap();
        assert_eq!(turn.role, ParticipantRole::Agent);
        assert_eq!(turn.content, "Hi!");
    }

    #[test]
    fn test_call_analysis_requires_all_fields() {
        let complete = serde_json::json!({
            "Summary": "The customer called about a warranty claim.",
            "Topic": "billing issue",
            "Product": "unicorn warranty",
            "Resolved": "yes",
            "Callback": "no",
            "Politeness": "yes",
            "Actions": "refunded fee"
        });
        let analysis: CallAnalysis = serde_json::from_value(complete).unwrap();
        assert_eq!(analysis.product, "unicorn warranty");

        let missing = serde_json::json!({
            "Summary": "A call happened.",
            "Topic": "billing issue"
        });
        assert!(serde_json::from_value::<CallAnalysis>(missing).is_err());
    }

    #[test]
    fn test_call_analysis_serializes_exact_field_names() {
        let analysis = CallAnalysis {
            summary: "s".to_string(),
            topic: "t".to_string(),
            product: "p".to_string(),
            resolved: "yes".to_string(),
            callback: "no".to_string(),
            politeness: "yes".to_string(),
            actions: "a".to_string(),
        };

        let json = serde_json::to_value(&analysis).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        for expected in [
            "Summary",
            "Topic",
            "Product",
            "Resolved",
            "Callback",
            "Politeness",
            "Actions",
        ] {
            assert!(keys.contains(&expected), "missing key {}", expected);
        }
    }
}
