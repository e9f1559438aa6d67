//! Call analytics for the unicorn-products support desk
//!
//! This application runs schema-enforced analytics extraction over recorded
//! call transcripts through Amazon Bedrock, relaying the results to a
//! DynamoDB record store or an interactive playground surface.

pub mod ai;
pub mod app;
pub mod error;
pub mod models;
pub mod prompts;
pub mod storage;
pub mod transcript;

pub use error::{Error, Result};
