//! Mock generative provider — deterministic responses for testing without a
//! credential or network access.

use crate::client::GenerativeClient;
use salus_core::error::SuggestError;

#[derive(Debug, Clone)]
enum Behavior {
    Reply(String),
    HttpError(u16),
    NetworkError,
}

#[derive(Debug, Clone)]
pub struct MockGenerative {
    behavior: Behavior,
}

impl MockGenerative {
    /// Always returns the given text as the model output.
    pub fn replying(text: &str) -> Self {
        Self {
            behavior: Behavior::Reply(text.to_string()),
        }
    }

    /// Always fails as if the endpoint returned the given status.
    pub fn failing_http(status: u16) -> Self {
        Self {
            behavior: Behavior::HttpError(status),
        }
    }

    /// Always fails as if the request never reached the endpoint.
    pub fn failing_network() -> Self {
        Self {
            behavior: Behavior::NetworkError,
        }
    }
}

#[async_trait::async_trait]
impl GenerativeClient for MockGenerative {
    async fn generate_text(&self, _prompt: &str) -> Result<String, SuggestError> {
        match &self.behavior {
            Behavior::Reply(text) => Ok(text.clone()),
            Behavior::HttpError(status) => Err(SuggestError::RemoteCall(format!("HTTP {status}"))),
            Behavior::NetworkError => {
                Err(SuggestError::RemoteCall("connection refused".to_string()))
            }
        }
    }
}
