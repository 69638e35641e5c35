//! Suggestion orchestrator: the single entry point for a mood query.
//!
//! Validates the input, prefers the AI path when one is configured, and
//! degrades to the rule engine on any AI failure without surfacing it as an
//! error — the caller gets exactly one suggestion or a validation failure,
//! never an AI outage. The orchestrator never persists anything; saving is an
//! explicit, separate operation.

use crate::client::AiSuggester;
use crate::rules::RuleEngine;
use salus_core::error::SuggestError;
use salus_core::profile::UserProfile;
use salus_core::suggestion::Suggestion;

pub struct Orchestrator {
    rules: RuleEngine,
    ai: Option<AiSuggester>,
}

impl Orchestrator {
    /// Rule-based suggestions only (no credential configured).
    pub fn rule_only() -> Self {
        Self {
            rules: RuleEngine::new(),
            ai: None,
        }
    }

    /// AI-first with transparent rule fallback.
    pub fn with_ai(ai: AiSuggester) -> Self {
        Self {
            rules: RuleEngine::new(),
            ai: Some(ai),
        }
    }

    pub fn has_ai(&self) -> bool {
        self.ai.is_some()
    }

    /// Answer a mood query with exactly one suggestion.
    ///
    /// Returns `EmptyMood` if the input is blank after trimming. An AI failure
    /// is logged and recovered here; it never reaches the caller.
    pub async fn query(
        &self,
        raw_mood: &str,
        profile: Option<&UserProfile>,
    ) -> Result<Suggestion, SuggestError> {
        let mood = raw_mood.trim().to_lowercase();
        if mood.is_empty() {
            return Err(SuggestError::EmptyMood);
        }

        if let Some(ai) = &self.ai {
            match ai.fetch(&mood, profile).await {
                Ok(suggestion) => return Ok(suggestion),
                Err(e) if e.is_recoverable() => {
                    tracing::warn!("AI suggestions unavailable, falling back to rules: {}", e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(self.rules.generate(&mood))
    }
}
