use super::ImageAnalysisService;
use crate::models::AnalysisResult;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Scripted stand-in for the real analysis client.
///
/// Responses are consumed in order and cycle when exhausted; every call's
/// arguments are recorded so tests can assert on the outbound payload.
pub struct MockAnalysisClient {
    responses: Arc<Mutex<Vec<std::result::Result<AnalysisResult, String>>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockAnalysisClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_result(self, result: AnalysisResult) -> Self {
        self.responses.lock().unwrap().push(Ok(result));
        self
    }

    pub fn with_error(self, message: &str) -> Self {
        self.responses.lock().unwrap().push(Err(message.to_string()));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// `(base64_data, mime_type)` of the most recent call, if any.
    pub fn last_call(&self) -> Option<(String, String)> {
        self.calls.lock().unwrap().last().cloned()
    }
}

impl Default for MockAnalysisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageAnalysisService for MockAnalysisClient {
    async fn analyze_image(&self, base64_data: &str, mime_type: &str) -> Result<AnalysisResult> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((base64_data.to_string(), mime_type.to_string()));
        let count = calls.len();
        drop(calls);

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default canned analysis
            return Ok(AnalysisResult {
                prompt: format!("A detailed scene captured as {}", mime_type),
                artistic_style: "Photography".to_string(),
                keywords: vec!["mock".to_string(), "analysis".to_string()],
                composition: "Centered".to_string(),
            });
        }

        let index = (count - 1) % responses.len();
        match &responses[index] {
            Ok(result) => Ok(result.clone()),
            Err(message) => Err(Error::AiProvider(message.clone())),
        }
    }
}
