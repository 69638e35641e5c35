//! The suggestion triple: one activity, one tip, one meditation per query.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Rule,
    Ai,
}

/// A three-part wellness recommendation, immutable once produced.
///
/// The `mood` field holds the text the user typed (normalized), not the
/// canonical category used for rule lookup — display shows what the user said.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub mood: String,
    pub activity: String,
    pub tip: String,
    pub meditation: String,
    pub timestamp: DateTime<Utc>,
    pub source: Source,
}

impl Suggestion {
    /// Assemble a suggestion, stamping the current instant.
    pub fn new(
        mood: impl Into<String>,
        activity: impl Into<String>,
        tip: impl Into<String>,
        meditation: impl Into<String>,
        source: Source,
    ) -> Self {
        Self {
            mood: mood.into(),
            activity: activity.into(),
            tip: tip.into(),
            meditation: meditation.into(),
            timestamp: Utc::now(),
            source,
        }
    }

    /// Content equality ignoring the creation timestamp.
    pub fn same_content(&self, other: &Suggestion) -> bool {
        self.activity == other.activity
            && self.tip == other.tip
            && self.meditation == other.meditation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Source::Rule).unwrap(), "\"rule\"");
        assert_eq!(serde_json::to_string(&Source::Ai).unwrap(), "\"ai\"");
    }

    #[test]
    fn test_suggestion_json_roundtrip() {
        let s = Suggestion::new("tired", "nap", "hydrate", "body scan", Source::Rule);
        let json = serde_json::to_string(&s).unwrap();
        let restored: Suggestion = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, s);
    }

    #[test]
    fn test_same_content_ignores_timestamp_and_mood() {
        let a = Suggestion::new("tired", "nap", "hydrate", "body scan", Source::Rule);
        let b = Suggestion::new("sleepy", "nap", "hydrate", "body scan", Source::Rule);
        assert!(a.same_content(&b));
    }
}
