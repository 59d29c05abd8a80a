pub mod http;

pub use http::HttpBackend;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Body of the POST sent to the translation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source: String,
    pub target: String,
}

/// Backend reply. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TranslationResponse {
    pub translation: Option<String>,
    pub error: Option<String>,
}

impl TranslationResponse {
    /// The translated text, if present and non-empty.
    pub fn translated_text(&self) -> Option<&str> {
        self.translation.as_deref().filter(|t| !t.is_empty())
    }
}

#[async_trait]
pub trait Backend: Send + Sync {
    async fn send(&self, request: &TranslationRequest) -> Result<TranslationResponse>;
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = TranslationRequest {
            text: "hello".to_string(),
            source: "en".to_string(),
            target: "fr".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"text": "hello", "source": "en", "target": "fr"})
        );
    }

    #[test]
    fn test_response_translation_present() {
        let response: TranslationResponse =
            serde_json::from_str(r#"{"translation": "bonjour"}"#).unwrap();
        assert_eq!(response.translated_text(), Some("bonjour"));
    }

    #[test]
    fn test_response_empty_object() {
        let response: TranslationResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, TranslationResponse::default());
        assert_eq!(response.translated_text(), None);
    }

    #[test]
    fn test_response_empty_translation_counts_as_missing() {
        let response: TranslationResponse =
            serde_json::from_str(r#"{"translation": ""}"#).unwrap();
        assert_eq!(response.translated_text(), None);
    }

    #[test]
    fn test_response_keeps_whitespace() {
        let response: TranslationResponse =
            serde_json::from_str(r#"{"translation": "  hola \n"}"#).unwrap();
        assert_eq!(response.translated_text(), Some("  hola \n"));
    }

    #[test]
    fn test_response_ignores_unknown_fields() {
        let response: TranslationResponse =
            serde_json::from_str(r#"{"translated_text": "x", "error": "Invalid language choice"}"#)
                .unwrap();
        assert_eq!(response.translated_text(), None);
        assert_eq!(response.error.as_deref(), Some("Invalid language choice"));
    }
}
