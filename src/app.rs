//! Application orchestration for call analysis and the model playground.

use crate::ai::{
    BedrockAnalyticsClient, BedrockImageClient, BedrockTextClient, CallAnalysisService,
    ImageGenerationService, TextGenerationService,
};
use crate::models::{CallAnalysis, Config, TranscriptEvent};
use crate::storage::{AnalyticsStore, DynamoDbStore, MockAnalyticsStore};
use crate::transcript;
use crate::Result;
use tracing::info;

/// Coordinates transcript flattening, model extraction, and the record-store
/// write for one analytics job, plus the playground passthroughs.
pub struct App {
    analytics: Box<dyn CallAnalysisService>,
    text: Box<dyn TextGenerationService>,
    image: Box<dyn ImageGenerationService>,
    store: Box<dyn AnalyticsStore>,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub analytics: Box<dyn CallAnalysisService>,
    pub text: Box<dyn TextGenerationService>,
    pub image: Box<dyn ImageGenerationService>,
    pub store: Box<dyn AnalyticsStore>,
}

impl App {
    /// Build an app from concrete service dependencies.
    ///
    /// This is primarily useful for integration tests and local harnesses
    /// that need to inject mocks.
    pub fn with_services(services: AppServices) -> Self {
        Self {
            analytics: services.analytics,
            text: services.text,
            image: services.image,
            store: services.store,
        }
    }

    /// Construct an app from environment configuration (`Config::from_env`).
    pub async fn new() -> Result<Self> {
        let config = Config::from_env()?;

        // Reuse one HTTP connection pool across provider clients.
        let http_client = reqwest::Client::new();

        let mut analytics = BedrockAnalyticsClient::new_with_client(
            config.bedrock_api_key.clone(),
            config.bedrock_endpoint.clone(),
            config.analytics_model_id.clone(),
            http_client.clone(),
        );
        if let (Some(identifier), Some(version)) = (
            config.guardrail_identifier.clone(),
            config.guardrail_version.clone(),
        ) {
            info!("Guardrail enabled: {} (version {})", identifier, version);
            analytics = analytics.with_guardrail(identifier, version);
        }
        info!("Analytics model: {}", config.analytics_model_id);

        let text = BedrockTextClient::new_with_client(
            config.bedrock_api_key.clone(),
            config.bedrock_endpoint.clone(),
            config.text_model_id.clone(),
            http_client.clone(),
        );

        let image = BedrockImageClient::new_with_client(
            config.bedrock_api_key.clone(),
            config.bedrock_endpoint.clone(),
            config.image_model_id.clone(),
            http_client,
        );

        let store: Box<dyn AnalyticsStore> = if config.dry_run {
            info!("DRY_RUN enabled - analytics records will stay in memory");
            Box::new(MockAnalyticsStore::new())
        } else {
            Box::new(
                DynamoDbStore::new(
                    config.aws_region.clone(),
                    config
                        .table_name
                        .clone()
                        .expect("TEAM_DDB_TABLE validated in Config::from_env"),
                )
                .await?,
            )
        };

        Ok(Self::with_services(AppServices {
            analytics: Box::new(analytics),
            text: Box::new(text),
            image: Box::new(image),
            store,
        }))
    }

    /// Run the full analytics pipeline for one transcript event: flatten the
    /// turns, extract structured analytics, store the record under the job
    /// name. Any failure aborts the pipeline; nothing is written on error.
    pub async fn analyze_call(&self, event: &TranscriptEvent) -> Result<CallAnalysis> {
        info!(
            "Analyzing call for job {} ({} turns)",
            event.job_name,
            event.transcript.len()
        );

        let plain_transcript = transcript::flatten_transcript(&event.transcript);
        let analysis = self.analytics.analyze_transcript(&plain_transcript).await?;
        info!(
            "Extraction complete for job {} (topic: {})",
            event.job_name, analysis.topic
        );

        self.store.put_analysis(&event.job_name, &analysis).await?;
        info!("Stored analytics record for job {}", event.job_name);

        Ok(analysis)
    }

    /// Playground passthrough: generate a text block from a prompt.
    pub async fn generate_text(&self, system_prompt: &str, prompt: &str) -> Result<String> {
        self.text.generate_text(system_prompt, prompt).await
    }

    /// Playground passthrough: generate image bytes from a prompt.
    pub async fn generate_image(&self, prompt: &str, style: Option<&str>) -> Result<Vec<u8>> {
        self.image.generate_image(prompt, style).await
    }
}

#[cfg(test)]
mod tests {
    use super::{App, AppServices};
    use crate::ai::{
        MockCallAnalysisClient, MockImageGenerationClient, MockTextGenerationClient,
    };
    use crate::models::{CallAnalysis, ParticipantRole, TranscriptEvent, Turn};
    use crate::storage::MockAnalyticsStore;
    use crate::Error;

    fn sample_event() -> TranscriptEvent {
        TranscriptEvent {
            job_name: "job-42".to_string(),
            transcript: vec![
                Turn {
                    role: ParticipantRole::Agent,
                    content: "Hi!".to_string(),
                },
                Turn {
                    role: ParticipantRole::Customer,
                    content: "My unicorn warranty overcharged me".to_string(),
                },
            ],
        }
    }

    fn sample_analysis() -> CallAnalysis {
        CallAnalysis {
            summary: "The customer was refunded a warranty fee.".to_string(),
            topic: "billing issue".to_string(),
            product: "unicorn warranty".to_string(),
            resolved: "yes".to_string(),
            callback: "no".to_string(),
            politeness: "yes".to_string(),
            actions: "refunded fee".to_string(),
        }
    }

    fn build_test_app(
        analytics: MockCallAnalysisClient,
        store: MockAnalyticsStore,
    ) -> App {
        App::with_services(AppServices {
            analytics: Box::new(analytics),
            text: Box::new(MockTextGenerationClient::new()),
            image: Box::new(MockImageGenerationClient::new()),
            store: Box::new(store),
        })
    }

    #[tokio::test]
    async fn test_analyze_call_stores_record_under_job_name() {
        let store = MockAnalyticsStore::new();
        let store_probe = store.clone();
        let app = build_test_app(
            MockCallAnalysisClient::new().with_analysis_response(sample_analysis()),
            store,
        );

        let analysis = app.analyze_call(&sample_event()).await.unwrap();
        assert_eq!(analysis, sample_analysis());

        assert_eq!(store_probe.get_write_count(), 1);
        assert_eq!(store_probe.get_record("job-42"), Some(sample_analysis()));
    }

    #[tokio::test]
    async fn test_analyze_call_upstream_failure_writes_nothing() {
        let store = MockAnalyticsStore::new();
        let store_probe = store.clone();
        let app = build_test_app(
            MockCallAnalysisClient::new().with_upstream_failure("simulated timeout"),
            store,
        );

        let err = app.analyze_call(&sample_event()).await.unwrap_err();
        assert!(matches!(err, Error::Upstream(_)));
        assert_eq!(store_probe.get_write_count(), 0);
    }

    #[tokio::test]
    async fn test_analyze_call_storage_failure_propagates() {
        let analytics = MockCallAnalysisClient::new().with_analysis_response(sample_analysis());
        let analytics_probe = analytics.clone();
        let app = build_test_app(
            analytics,
            MockAnalyticsStore::new().with_write_failure("table missing"),
        );

        let err = app.analyze_call(&sample_event()).await.unwrap_err();
        assert!(matches!(err, Error::StorageWrite(_)));
        assert_eq!(analytics_probe.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_generate_text_passthrough() {
        let app = App::with_services(AppServices {
            analytics: Box::new(MockCallAnalysisClient::new()),
            text: Box::new(
                MockTextGenerationClient::new()
                    .with_text_response("Unicorns are majestic.".to_string()),
            ),
            image: Box::new(MockImageGenerationClient::new()),
            store: Box::new(MockAnalyticsStore::new()),
        });

        let text = app
            .generate_text("You are a helpful assistant.", "Tell me about unicorns")
            .await
            .unwrap();
        assert_eq!(text, "Unicorns are majestic.");
    }

    #[tokio::test]
    async fn test_generate_image_passthrough() {
        let image = MockImageGenerationClient::new().with_image_response(vec![1, 2, 3]);
        let image_probe = image.clone();
        let app = App::with_services(AppServices {
            analytics: Box::new(MockCallAnalysisClient::new()),
            text: Box::new(MockTextGenerationClient::new()),
            image: Box::new(image),
            store: Box::new(MockAnalyticsStore::new()),
        });

        let bytes = app
            .generate_image("a unicorn", Some("anime"))
            .await
            .unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);
        assert_eq!(image_probe.get_call_count(), 1);
    }
}
