use super::{CallAnalysisService, ImageGenerationService, TextGenerationService};
use crate::models::CallAnalysis;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockCallAnalysisClient {
    responses: Arc<Mutex<Vec<CallAnalysis>>>,
    failure: Arc<Mutex<Option<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockCallAnalysisClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_analysis_response(self, response: CallAnalysis) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    /// Make every call fail with `Error::Upstream(message)`.
    pub fn with_upstream_failure(self, message: &str) -> Self {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockCallAnalysisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CallAnalysisService for MockCallAnalysisClient {
    async fn analyze_transcript(&self, _transcript: &str) -> Result<CallAnalysis> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(Error::Upstream(message));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok(CallAnalysis {
                summary: "The customer was assisted with a product question.".to_string(),
                topic: "unicorn issue".to_string(),
                product: "unicorn rental".to_string(),
                resolved: "yes".to_string(),
                callback: "no".to_string(),
                politeness: "yes".to_string(),
                actions: "answered questions".to_string(),
            })
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[derive(Clone)]
pub struct MockTextGenerationClient {
    responses: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockTextGenerationClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_text_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockTextGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerationService for MockTextGenerationClient {
    async fn generate_text(&self, _system_prompt: &str, prompt: &str) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(format!("Mock response to: {}", prompt))
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[derive(Clone)]
pub struct MockImageGenerationClient {
    responses: Arc<Mutex<Vec<Vec<u8>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockImageGenerationClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_image_response(self, response: Vec<u8>) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockImageGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageGenerationClient {
    async fn generate_image(&self, _prompt: &str, _style: Option<&str>) -> Result<Vec<u8>> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Return a tiny valid PNG as default
            Ok(vec![
                0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
                0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk
                0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1 pixel
                0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49,
                0x44, 0x41, // IDAT chunk
                0x54, 0x08, 0x99, 0x63, 0xF8, 0xCF, 0xC0, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0xE2,
                0x25, 0x00, 0xBC, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, // IEND chunk
                0x44, 0xAE, 0x42, 0x60, 0x82,
            ])
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_analysis_default_response_is_complete() {
        let client = MockCallAnalysisClient::new();
        let analysis = client.analyze_transcript("AGENT: Hi!\n").await.unwrap();

        assert!(!analysis.summary.is_empty());
        assert!(!analysis.actions.is_empty());
        assert_eq!(client.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_analysis_custom_responses_cycle() {
        let first = CallAnalysis {
            summary: "First call".to_string(),
            topic: "billing issue".to_string(),
            product: "unicorn warranty".to_string(),
            resolved: "yes".to_string(),
            callback: "no".to_string(),
            politeness: "yes".to_string(),
            actions: "refunded fee".to_string(),
        };
        let client = MockCallAnalysisClient::new().with_analysis_response(first.clone());

        let analysis1 = client.analyze_transcript("t").await.unwrap();
        let analysis2 = client.analyze_transcript("t").await.unwrap();
        assert_eq!(analysis1, first);
        assert_eq!(analysis2, first);
        assert_eq!(client.get_call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_analysis_failure() {
        let client = MockCallAnalysisClient::new().with_upstream_failure("simulated timeout");

        let err = client.analyze_transcript("t").await.unwrap_err();
        assert!(matches!(err, Error::Upstream(_)));
        assert_eq!(client.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_text_generation_echoes_prompt_by_default() {
        let client = MockTextGenerationClient::new();
        let text = client.generate_text("system", "hello").await.unwrap();
        assert!(text.contains("hello"));
    }

    #[tokio::test]
    async fn test_mock_image_generation_default_png() {
        let client = MockImageGenerationClient::new();
        let bytes = client.generate_image("prompt", None).await.unwrap();
        assert_eq!(&bytes[..4], &[0x89, 0x50, 0x4E, 0x47]);
    }
}
