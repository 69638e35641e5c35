//! Prompt assembly for the generative suggestion path.

use salus_core::profile::UserProfile;

/// Render the optional profile as a context block for the prompt.
fn profile_context(profile: Option<&UserProfile>) -> String {
    match profile {
        Some(p) => format!(
            "\nUser Profile:\n\
             - Age: {}\n\
             - Gender: {}\n\
             - Stress Level: {}/5\n\
             - Wellness Goals: {}\n\
             - Meditation Experience: {}\n\
             - Preferred Activities: {}\n",
            p.age,
            p.gender,
            p.stress_level,
            p.wellness_goals.join(", "),
            p.meditation_experience,
            p.preferred_activities.join(", "),
        ),
        None => String::new(),
    }
}

/// Build the full prompt for a mood query.
///
/// The closing instruction demands a bare JSON object with exactly the three
/// suggestion fields; the model is untrusted, so the response parser stays
/// lenient and the caller treats any deviation as a failure.
pub fn build_prompt(mood: &str, profile: Option<&UserProfile>) -> String {
    format!(
        r#"You are a compassionate AI wellness coach. The user is feeling "{mood}".

{context}

Please provide exactly 3 personalized wellness suggestions in this exact JSON format:
{{
  "activity": "A specific, actionable physical or mental activity (1-2 sentences)",
  "tip": "A practical wellness tip or advice (1-2 sentences)",
  "meditation": "A specific meditation or breathing technique (1-2 sentences)"
}}

Make suggestions that are:
- Immediately actionable
- Personalized to their profile if available
- Scientifically sound
- Compassionate and supportive
- Specific and detailed

Respond with ONLY the JSON object, no additional text."#,
        mood = mood,
        context = profile_context(profile),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            age: 34,
            gender: "male".to_string(),
            stress_level: 4,
            wellness_goals: vec!["reduce stress".to_string(), "sleep better".to_string()],
            meditation_experience: "intermediate".to_string(),
            preferred_activities: vec!["running".to_string()],
        }
    }

    #[test]
    fn test_prompt_embeds_mood() {
        let prompt = build_prompt("anxious", None);
        assert!(prompt.contains("feeling \"anxious\""));
    }

    #[test]
    fn test_prompt_embeds_profile_context() {
        let prompt = build_prompt("tired", Some(&profile()));
        assert!(prompt.contains("Age: 34"));
        assert!(prompt.contains("Stress Level: 4/5"));
        assert!(prompt.contains("reduce stress, sleep better"));
        assert!(prompt.contains("intermediate"));
        assert!(prompt.contains("running"));
    }

    #[test]
    fn test_prompt_without_profile_has_no_profile_block() {
        let prompt = build_prompt("tired", None);
        assert!(!prompt.contains("User Profile:"));
    }

    #[test]
    fn test_prompt_demands_json_only() {
        let prompt = build_prompt("sad", None);
        assert!(prompt.contains("ONLY the JSON object"));
        assert!(prompt.contains("\"activity\""));
        assert!(prompt.contains("\"tip\""));
        assert!(prompt.contains("\"meditation\""));
    }
}
