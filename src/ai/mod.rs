//! AI service integration for image analysis
//!
//! Provides the service seam for sending an encoded image to a multimodal
//! model and getting back a structured prompt breakdown.

pub mod gemini;
pub mod mime;
pub mod mock;

pub use gemini::GeminiAnalysisClient;
pub use mock::MockAnalysisClient;

use crate::models::AnalysisResult;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ImageAnalysisService: Send + Sync {
    /// Analyze one image, single-shot. `base64_data` carries the image with
    /// no data-URL prefix; `mime_type` is its declared content type.
    async fn analyze_image(&self, base64_data: &str, mime_type: &str) -> Result<AnalysisResult>;
}
