//! Analytics record store integration
//!
//! Handles writing extracted call analytics into DynamoDB, keyed by the
//! analytics job name.

pub mod client;
pub mod mock;

pub use client::DynamoDbStore;
pub use mock::MockAnalyticsStore;

use crate::models::CallAnalysis;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    async fn put_analysis(&self, job_name: &str, analysis: &CallAnalysis) -> Result<()>;
}
