pub mod analytics;
pub mod client;
pub mod image;
pub mod text;
pub mod types;

pub use analytics::BedrockAnalyticsClient;
pub use image::BedrockImageClient;
pub use text::BedrockTextClient;
