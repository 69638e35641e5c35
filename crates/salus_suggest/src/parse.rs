//! Lenient parsing of the model's text output into the three suggestion fields.
//!
//! The model is instructed to return a bare JSON object but is not to be
//! trusted: responses show up wrapped in markdown fences or with commentary
//! around them. Try a direct parse first, then the outermost brace span.
//! Anything else is a parse failure the caller turns into a rule fallback.

use salus_core::error::SuggestError;
use serde::Deserialize;

/// The three fields the model must return.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionFields {
    pub activity: String,
    pub tip: String,
    pub meditation: String,
}

impl SuggestionFields {
    fn complete(&self) -> bool {
        !self.activity.trim().is_empty()
            && !self.tip.trim().is_empty()
            && !self.meditation.trim().is_empty()
    }
}

/// Parse the model's raw text, handling common formatting quirks.
pub fn parse_suggestion_fields(text: &str) -> Result<SuggestionFields, SuggestError> {
    let trimmed = text.trim();

    let fields = serde_json::from_str::<SuggestionFields>(trimmed)
        .ok()
        .or_else(|| {
            // Extract JSON from a markdown code block or surrounding chatter
            let start = trimmed.find('{')?;
            let end = trimmed.rfind('}')?;
            serde_json::from_str(&trimmed[start..=end]).ok()
        })
        .ok_or_else(|| {
            tracing::debug!("Unparseable generative response: {}", trimmed);
            SuggestError::ResponseParse("response is not a JSON suggestion object".to_string())
        })?;

    if !fields.complete() {
        return Err(SuggestError::ResponseParse(
            "response is missing one or more suggestion fields".to_string(),
        ));
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clean_json() {
        let json = r#"{"activity": "walk", "tip": "hydrate", "meditation": "breathe"}"#;
        let fields = parse_suggestion_fields(json).unwrap();
        assert_eq!(fields.activity, "walk");
        assert_eq!(fields.tip, "hydrate");
        assert_eq!(fields.meditation, "breathe");
    }

    #[test]
    fn test_parse_code_block_wrapped() {
        let text = "```json\n{\"activity\": \"stretch\", \"tip\": \"rest\", \"meditation\": \"body scan\"}\n```";
        let fields = parse_suggestion_fields(text).unwrap();
        assert_eq!(fields.meditation, "body scan");
    }

    #[test]
    fn test_parse_with_surrounding_commentary() {
        let text = "Here you go!\n{\"activity\": \"dance\", \"tip\": \"call a friend\", \"meditation\": \"loving-kindness\"}\nHope that helps.";
        let fields = parse_suggestion_fields(text).unwrap();
        assert_eq!(fields.activity, "dance");
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        let err = parse_suggestion_fields("I cannot produce JSON today").unwrap_err();
        assert!(matches!(err, SuggestError::ResponseParse(_)));
    }

    #[test]
    fn test_missing_field_is_a_parse_error() {
        let err =
            parse_suggestion_fields(r#"{"activity": "walk", "tip": "hydrate"}"#).unwrap_err();
        assert!(matches!(err, SuggestError::ResponseParse(_)));
    }

    #[test]
    fn test_empty_field_is_a_parse_error() {
        let err = parse_suggestion_fields(
            r#"{"activity": "walk", "tip": "", "meditation": "breathe"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SuggestError::ResponseParse(_)));
    }
}
