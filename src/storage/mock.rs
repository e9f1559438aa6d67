use super::AnalyticsStore;
use crate::models::CallAnalysis;
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockAnalyticsStore {
    records: Arc<Mutex<HashMap<String, CallAnalysis>>>,
    failure: Arc<Mutex<Option<String>>>,
    write_count: Arc<Mutex<usize>>,
}

impl MockAnalyticsStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
            failure: Arc::new(Mutex::new(None)),
            write_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Make every write fail with `Error::StorageWrite(message)`.
    pub fn with_write_failure(self, message: &str) -> Self {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn get_write_count(&self) -> usize {
        *self.write_count.lock().unwrap()
    }

    pub fn get_record(&self, job_name: &str) -> Option<CallAnalysis> {
        self.records.lock().unwrap().get(job_name).cloned()
    }

    pub fn get_records(&self) -> HashMap<String, CallAnalysis> {
        self.records.lock().unwrap().clone()
    }
}

impl Default for MockAnalyticsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyticsStore for MockAnalyticsStore {
    async fn put_analysis(&self, job_name: &str, analysis: &CallAnalysis) -> Result<()> {
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(Error::StorageWrite(message));
        }

        let mut count = self.write_count.lock().unwrap();
        *count += 1;

        self.records
            .lock()
            .unwrap()
            .insert(job_name.to_string(), analysis.clone());
        Ok(())
    }
}
