use super::AnalyticsStore;
use crate::models::CallAnalysis;
use crate::{Error, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::{config::Region, types::AttributeValue, Client as DynamoDbClient};

pub struct DynamoDbStore {
    client: DynamoDbClient,
    table_name: String,
}

impl DynamoDbStore {
    pub async fn new(region: String, table_name: String) -> Result<Self> {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region))
            .load()
            .await;

        let client = DynamoDbClient::new(&config);

        Ok(Self { client, table_name })
    }
}

#[async_trait]
impl AnalyticsStore for DynamoDbStore {
    async fn put_analysis(&self, job_name: &str, analysis: &CallAnalysis) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item(
                "call_analytics_job_name",
                AttributeValue::S(job_name.to_string()),
            )
            .item("summary", AttributeValue::S(analysis.summary.clone()))
            .item("topic", AttributeValue::S(analysis.topic.clone()))
            .item("product", AttributeValue::S(analysis.product.clone()))
            .item("resolved", AttributeValue::S(analysis.resolved.clone()))
            .item("callback", AttributeValue::S(analysis.callback.clone()))
            .item("politeness", AttributeValue::S(analysis.politeness.clone()))
            .item("actions", AttributeValue::S(analysis.actions.clone()))
            .send()
            .await
            .map_err(|e| Error::StorageWrite(format!("Failed to put analytics record: {}", e)))?;

        Ok(())
    }
}
