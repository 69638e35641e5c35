//! Gemini generateContent provider.
//!
//! One POST per call, credential passed as a query parameter, no retries. The
//! credential is opaque here: never validated, never logged — error messages
//! carry the HTTP status, not the URL.

use crate::client::GenerativeClient;
use salus_core::config::ApiConfig;
use salus_core::credential::ApiCredential;
use salus_core::error::SuggestError;
use anyhow::Result;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: String,
    model: String,
    credential: ApiCredential,
    generation: salus_core::config::GenerationParams,
}

impl GeminiClient {
    pub fn new(config: &ApiConfig, credential: ApiCredential) -> Result<Self> {
        Ok(Self {
            http: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            credential,
            generation: config.generation.clone(),
        })
    }
}

#[async_trait::async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, SuggestError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let payload = json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "temperature": self.generation.temperature,
                "topK": self.generation.top_k,
                "topP": self.generation.top_p,
                "maxOutputTokens": self.generation.max_output_tokens,
            }
        });

        // reqwest errors embed the request URL, and the URL carries the key;
        // strip it before the message can reach a log line.
        let response = self
            .http
            .post(&url)
            .query(&[("key", self.credential.expose())])
            .json(&payload)
            .send()
            .await
            .map_err(|e| SuggestError::RemoteCall(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::RemoteCall(format!("HTTP {status}")));
        }

        let body: Value = response.json().await.map_err(|e| {
            SuggestError::RemoteCall(format!("reading response body: {}", e.without_url()))
        })?;

        body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                SuggestError::ResponseParse("no candidate text in response".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GeminiClient {
        GeminiClient::new(
            &ApiConfig::default(),
            ApiCredential::new("test-key").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let mut cfg = ApiConfig::default();
        cfg.base_url = "http://localhost:8080/v1beta/".to_string();
        let c = GeminiClient::new(&cfg, ApiCredential::new("k").unwrap()).unwrap();
        assert_eq!(c.base_url, "http://localhost:8080/v1beta");
    }

    #[test]
    fn test_debug_does_not_leak_credential() {
        let dbg = format!("{:?}", client());
        assert!(!dbg.contains("test-key"));
    }

    #[tokio::test]
    async fn test_transport_error_does_not_leak_credential() {
        // Port 9 (discard) refuses connections; the resulting transport error
        // must not carry the request URL with the key in it.
        let mut cfg = ApiConfig::default();
        cfg.base_url = "http://127.0.0.1:9/v1beta".to_string();
        cfg.timeout_secs = 2;
        let client =
            GeminiClient::new(&cfg, ApiCredential::new("SECRET-KEY-12345").unwrap()).unwrap();

        let err = client.generate_text("prompt").await.unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, SuggestError::RemoteCall(_)));
        assert!(
            !msg.contains("SECRET-KEY-12345"),
            "credential leaked into error text: {msg}"
        );
        assert!(!msg.contains("key="), "request URL leaked into error text: {msg}");
    }
}
