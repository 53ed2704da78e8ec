pub mod analysis;
pub mod client;
pub mod types;

pub use analysis::GeminiAnalysisClient;
