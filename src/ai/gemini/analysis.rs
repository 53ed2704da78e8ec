use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentResponse, InlineData, Part};
use crate::ai::ImageAnalysisService;
use crate::models::AnalysisResult;
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

/// Response schema sent with every analysis request. Forces the model to
/// return exactly the four `AnalysisResult` fields as JSON.
fn analysis_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "prompt": {
                "type": "STRING",
                "description": "A highly detailed, descriptive prompt suitable for generating an image in Stable Diffusion or Midjourney that looks exactly like the input image. Describe the subject, action, clothing, environment, lighting, and mood.",
            },
            "artisticStyle": {
                "type": "STRING",
                "description": "A concise description of the artistic medium and visual style (e.g., 'Cyberpunk Digital Art', 'Oil Painting on Canvas', 'Hyper-realistic Photography').",
            },
            "keywords": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of 5-10 comma-separated keywords useful for tagging or prompting (e.g., 'cinematic lighting, 8k, bokeh, octane render').",
            },
            "composition": {
                "type": "STRING",
                "description": "Description of the camera angle, framing, and composition (e.g., 'Low angle shot, rule of thirds, wide depth of field').",
            },
        },
        "required": ["prompt", "artisticStyle", "keywords", "composition"],
    })
}

pub struct GeminiAnalysisClient {
    http: GeminiHttpClient,
}

impl GeminiAnalysisClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: GeminiHttpClient::new(api_key, model, Duration::from_secs(30)),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }
}

#[async_trait]
impl ImageAnalysisService for GeminiAnalysisClient {
    async fn analyze_image(&self, base64_data: &str, mime_type: &str) -> Result<AnalysisResult> {
        tracing::debug!(
            "Analyzing {} image ({} base64 chars) via Gemini",
            mime_type,
            base64_data.len()
        );

        let request = GenerateContentRequest {
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part::Text {
                    text: prompts::ANALYSIS_SYSTEM.trim().to_string(),
                }],
            }),
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.to_string(),
                            data: base64_data.to_string(),
                        },
                    },
                    Part::Text {
                        text: prompts::ANALYSIS_USER.trim().to_string(),
                    },
                ],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(analysis_schema()),
            }),
        };

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        let text = response
            .candidates
            .first()
            .and_then(|c| {
                c.content.parts.iter().find_map(|p| match p {
                    Part::Text { text } => Some(text.clone()),
                    _ => None,
                })
            })
            .ok_or_else(|| Error::AiProvider("No response text from Gemini".to_string()))?;

        let result: AnalysisResult = serde_json::from_str(&text).map_err(|e| {
            Error::AiProvider(format!("Failed to parse Gemini analysis response: {}", e))
        })?;

        tracing::info!(
            "Gemini analysis complete: style={:?}, {} keywords",
            result.artistic_style,
            result.keywords.len()
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn canned_result_json() -> String {
        serde_json::json!({
            "prompt": "A fluffy cat...",
            "artisticStyle": "Photography",
            "keywords": ["cute", "cat"],
            "composition": "Close-up"
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_analyze_image_parses_structured_result() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(r"/v1beta/models/.+:generateContent"))
            .and(body_string_contains("\"inlineData\""))
            .and(body_string_contains("\"mimeType\":\"image/jpeg\""))
            .and(body_string_contains("\"responseSchema\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [{ "text": canned_result_json() }]
                    }
                }]
            })))
            .mount(&server)
            .await;

        let client = GeminiAnalysisClient::new(
            "test-key".to_string(),
            "gemini-2.5-flash".to_string(),
        )
        .with_base_url(server.uri());

        let result = client.analyze_image("QUJD", "image/jpeg").await.unwrap();
        assert_eq!(result.prompt, "A fluffy cat...");
        assert_eq!(result.artistic_style, "Photography");
        assert_eq!(result.keywords, vec!["cute", "cat"]);
        assert_eq!(result.composition, "Close-up");
    }

    #[tokio::test]
    async fn test_request_carries_payload_and_instructions() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(r"/v1beta/models/.+:generateContent"))
            .and(body_string_contains("\"data\":\"cGF5bG9hZA==\""))
            .and(body_string_contains("prompt engineer"))
            .and(body_string_contains("system_instruction"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [{ "text": canned_result_json() }]
                    }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = GeminiAnalysisClient::new(
            "test-key".to_string(),
            "gemini-2.5-flash".to_string(),
        )
        .with_base_url(server.uri());

        client
            .analyze_image("cGF5bG9hZA==", "image/png")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_api_error_returns_ai_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(r"/v1beta/models/.+:generateContent"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;

        let client =
            GeminiAnalysisClient::new("key".to_string(), "gemini-2.5-flash".to_string())
                .with_base_url(server.uri());

        let err = client.analyze_image("QUJD", "image/png").await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }

    #[tokio::test]
    async fn test_missing_text_returns_ai_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(r"/v1beta/models/.+:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": []
            })))
            .mount(&server)
            .await;

        let client =
            GeminiAnalysisClient::new("key".to_string(), "gemini-2.5-flash".to_string())
                .with_base_url(server.uri());

        let err = client.analyze_image("QUJD", "image/png").await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }

    #[tokio::test]
    async fn test_non_conforming_json_returns_ai_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(r"/v1beta/models/.+:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [{ "text": "{\"prompt\": \"only one field\"}" }]
                    }
                }]
            })))
            .mount(&server)
            .await;

        let client =
            GeminiAnalysisClient::new("key".to_string(), "gemini-2.5-flash".to_string())
                .with_base_url(server.uri());

        let err = client.analyze_image("QUJD", "image/png").await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }

    #[test]
    fn test_schema_requires_all_four_fields() {
        let schema = analysis_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 4);
        for field in ["prompt", "artisticStyle", "keywords", "composition"] {
            assert!(required.iter().any(|v| v == field));
            assert!(schema["properties"][field].is_object());
        }
    }
}
