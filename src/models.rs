//! Data models and structures
//!
//! Defines the selected-image payload, the structured analysis returned by
//! the model, and the runtime configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Structured breakdown of an image returned by the analysis model.
///
/// All four fields are required; the request's response schema enforces
/// this on the provider side and serde enforces it on ours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Detailed prompt suitable for recreating the image in a generator.
    pub prompt: String,
    /// Concise description of the artistic medium and visual style.
    pub artistic_style: String,
    /// 5-10 tagging/prompting keywords, order preserved from the model.
    pub keywords: Vec<String>,
    /// Camera angle, framing, and composition notes.
    pub composition: String,
}

/// An image the user selected, fully read and encoded for transport.
///
/// Replaced wholesale on a new selection and cleared on removal. The raw
/// bytes back the preview widget; `base64_data` is the transport payload
/// with no data-URL prefix.
#[derive(Debug, Clone)]
pub struct SelectedImage {
    pub path: PathBuf,
    pub file_name: String,
    pub bytes: Arc<Vec<u8>>,
    pub base64_data: String,
    pub mime_type: String,
}

impl SelectedImage {
    /// Data-URL form of the payload, usable anywhere a display string is
    /// expected. The body after the first comma is exactly `base64_data`.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64_data)
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub analysis_model: String,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| crate::Error::Generic("GEMINI_API_KEY not set".to_string()))?,
            analysis_model: std::env::var("GEMINI_ANALYSIS_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_result_uses_camel_case_keys() {
        let result = AnalysisResult {
            prompt: "A fluffy cat...".to_string(),
            artistic_style: "Photography".to_string(),
            keywords: vec!["cute".to_string(), "cat".to_string()],
            composition: "Close-up".to_string(),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"artisticStyle\":\"Photography\""));

        let deserialized: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, result);
    }

    #[test]
    fn test_analysis_result_rejects_missing_fields() {
        let json = r#"{"prompt": "p", "artisticStyle": "s", "keywords": []}"#;
        assert!(serde_json::from_str::<AnalysisResult>(json).is_err());
    }

    #[test]
    fn test_keywords_preserve_order() {
        let json = r#"{
            "prompt": "p",
            "artisticStyle": "s",
            "keywords": ["cinematic lighting", "8k", "bokeh"],
            "composition": "c"
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.keywords, vec!["cinematic lighting", "8k", "bokeh"]);
    }

    #[test]
    fn test_data_url_round_trips_to_payload() {
        use base64::Engine as _;

        let bytes = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x12, 0x34];
        let image = SelectedImage {
            path: PathBuf::from("cat.jpg"),
            file_name: "cat.jpg".to_string(),
            bytes: Arc::new(bytes.clone()),
            base64_data: base64::engine::general_purpose::STANDARD.encode(&bytes),
            mime_type: "image/jpeg".to_string(),
        };

        let url = image.data_url();
        let (header, body) = url.split_once(',').unwrap();
        assert_eq!(header, "data:image/jpeg;base64");
        assert_eq!(body, image.base64_data);

        let decoded = base64::engine::general_purpose::STANDARD
            .decode(body)
            .unwrap();
        assert_eq!(decoded, bytes);
    }
}
