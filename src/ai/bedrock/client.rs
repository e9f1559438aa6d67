use crate::{Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Lightweight Bedrock runtime REST client used by the provider modules.
///
/// Authenticates with a Bedrock API key (bearer token). The endpoint is
/// injectable so tests can point at a local mock server.
pub struct BedrockHttpClient {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    timeout: Duration,
}

impl BedrockHttpClient {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Self {
        Self::new_with_client(api_key, base_url, timeout, Client::new())
    }

    pub fn new_with_client(
        api_key: String,
        base_url: String,
        timeout: Duration,
        client: Client,
    ) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    async fn post_to_url<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        url: String,
        request: &Req,
    ) -> Result<Resp> {
        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Bedrock: {}", e);
                Error::Upstream(format!("Failed to reach Bedrock: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::error!("Bedrock API error (status {}): {}", status, error_text);
            return Err(Error::Upstream(format!(
                "Bedrock API error (status {}): {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to read Bedrock response: {}", e)))?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Bedrock response: {}\nBody: {}", e, body);
            Error::Upstream(format!("Failed to parse Bedrock response: {}", e))
        })
    }

    /// Calls the Converse API for the given model.
    pub async fn converse<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        model_id: &str,
        request: &Req,
    ) -> Result<Resp> {
        let url = format!("{}/model/{}/converse", self.base_url, model_id);
        self.post_to_url(url, request).await
    }

    /// Calls the InvokeModel API with a model-native request body.
    pub async fn invoke_model<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        model_id: &str,
        request: &Req,
    ) -> Result<Resp> {
        let url = format!("{}/model/{}/invoke", self.base_url, model_id);
        self.post_to_url(url, request).await
    }
}
