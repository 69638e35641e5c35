//! Generative suggestion client: prompt in, suggestion triple out.
//!
//! The HTTP transport sits behind [`GenerativeClient`] so tests can swap in a
//! deterministic provider. The suggester itself never returns partial data: a
//! failed call or an unparseable reply comes back as a typed error for the
//! orchestrator to recover from.

use crate::{parse, prompts};
use async_trait::async_trait;
use salus_core::error::SuggestError;
use salus_core::profile::UserProfile;
use salus_core::suggestion::{Source, Suggestion};
use std::sync::Arc;

/// One-shot text generation against a generative-language endpoint.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Send a single prompt and return the model's raw text output.
    async fn generate_text(&self, prompt: &str) -> Result<String, SuggestError>;
}

/// The AI suggestion path: builds the prompt, calls the provider once, parses
/// the reply into a [`Suggestion`]. No retries.
#[derive(Clone)]
pub struct AiSuggester {
    client: Arc<dyn GenerativeClient>,
}

impl AiSuggester {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self { client }
    }

    /// Fetch a suggestion for the given mood, personalized by the profile when
    /// present. The returned suggestion's `mood` field is the input text as-is.
    pub async fn fetch(
        &self,
        mood: &str,
        profile: Option<&UserProfile>,
    ) -> Result<Suggestion, SuggestError> {
        let prompt = prompts::build_prompt(mood, profile);
        let text = self.client.generate_text(&prompt).await?;
        let fields = parse::parse_suggestion_fields(&text)?;
        Ok(Suggestion::new(
            mood,
            fields.activity,
            fields.tip,
            fields.meditation,
            Source::Ai,
        ))
    }
}
