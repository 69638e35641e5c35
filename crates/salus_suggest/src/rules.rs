//! Deterministic rule-based suggestion engine.
//!
//! A fixed table maps each canonical mood to an (activity, tip, meditation)
//! triple. Lookup canonicalizes the input via the mood resolver, but the
//! suggestion's `mood` field keeps the text the user typed — display follows
//! the user, selection follows the table. Unknown moods get a mood-agnostic
//! generic triple. This engine never fails and never suspends.

use salus_core::mood::{self, Mood, ResolvedMood};
use salus_core::suggestion::{Source, Suggestion};

type Triple = (&'static str, &'static str, &'static str);

fn rule_table(mood: Mood) -> Triple {
    match mood {
        Mood::Tired => (
            "Take a 20-minute power nap in a quiet, dark room. Set an alarm to avoid oversleeping and wake up feeling refreshed.",
            "Stay hydrated! Dehydration can cause fatigue. Drink a glass of water and consider a light snack with protein and complex carbs.",
            "Try a 10-minute body scan meditation. Lie down comfortably and focus on each part of your body, releasing tension as you go.",
        ),
        Mood::Anxious => (
            "Go for a 15-minute walk in nature. Physical movement and fresh air can help reduce anxiety and clear your mind.",
            "Write down your worries in a journal. Getting them out of your head and onto paper can provide immediate relief.",
            "Practice 4-7-8 breathing: inhale for 4 counts, hold for 7, exhale for 8. Repeat 4 times to activate your parasympathetic nervous system.",
        ),
        Mood::Stressed => (
            "Do some gentle stretching or yoga poses. Focus on deep breathing while holding each pose for 30 seconds.",
            "Take a 5-minute break to step away from your current task. Sometimes a brief mental reset is all you need.",
            "Try progressive muscle relaxation. Tense each muscle group for 5 seconds, then release. Start from your toes and work up to your head.",
        ),
        Mood::Sad => (
            "Listen to your favorite uplifting music and dance around your room. Movement releases endorphins that can improve your mood.",
            "Reach out to a friend or family member for a quick chat. Social connection is one of the most powerful mood boosters.",
            "Practice loving-kindness meditation. Send positive thoughts to yourself and others, starting with \"May I be happy, may I be peaceful.\"",
        ),
        Mood::Happy => (
            "Channel your positive energy into a creative project. Paint, write, or create something that brings you joy.",
            "Share your happiness with others! Compliment someone, help a friend, or simply smile at strangers to spread positivity.",
            "Practice gratitude meditation. Reflect on three things you're thankful for today and really feel the appreciation.",
        ),
        Mood::Energetic => (
            "Use your energy for a high-intensity workout or dance session. Channel that vitality into something productive and fun!",
            "Plan something exciting for later today or tomorrow. Having something to look forward to maintains positive momentum.",
            "Try a dynamic meditation like walking meditation or mindful movement to match your energy level.",
        ),
    }
}

/// Mood-agnostic triple for input neither canonical nor a known synonym.
const GENERIC_FALLBACK: Triple = (
    "Go for a short walk outside. Fresh air and movement can help with any mood or feeling.",
    "Take a moment to breathe deeply and check in with yourself. Sometimes just pausing can help clarify what you need.",
    "Try a 5-minute mindfulness meditation. Focus on your breath and observe your thoughts without judgment.",
);

#[derive(Debug, Clone, Default)]
pub struct RuleEngine;

impl RuleEngine {
    pub fn new() -> Self {
        Self
    }

    /// Produce a suggestion for any mood text. Infallible.
    pub fn generate(&self, raw_mood: &str) -> Suggestion {
        let normalized = raw_mood.trim().to_lowercase();
        let (activity, tip, meditation) = match mood::resolve(&normalized) {
            ResolvedMood::Canonical(m) => rule_table(m),
            ResolvedMood::Unknown(_) => GENERIC_FALLBACK,
        };
        Suggestion::new(normalized, activity, tip, meditation, Source::Rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salus_core::mood::CANONICAL_MOODS;

    #[test]
    fn test_every_canonical_mood_has_a_complete_triple() {
        let engine = RuleEngine::new();
        for mood in CANONICAL_MOODS {
            let s = engine.generate(mood.as_str());
            assert_eq!(s.source, Source::Rule);
            assert!(!s.activity.is_empty(), "{mood}: empty activity");
            assert!(!s.tip.is_empty(), "{mood}: empty tip");
            assert!(!s.meditation.is_empty(), "{mood}: empty meditation");
            // The three fields are distinct suggestions, not copies
            assert_ne!(s.activity, s.tip);
            assert_ne!(s.tip, s.meditation);
        }
    }

    #[test]
    fn test_synonym_matches_canonical_content() {
        let engine = RuleEngine::new();
        for (synonym, canonical) in [
            ("exhausted", "tired"),
            ("worried", "anxious"),
            ("overwhelmed", "stressed"),
            ("blue", "sad"),
            ("joyful", "happy"),
            ("pumped", "energetic"),
        ] {
            let from_synonym = engine.generate(synonym);
            let from_canonical = engine.generate(canonical);
            assert!(
                from_synonym.same_content(&from_canonical),
                "{synonym} should yield the same triple as {canonical}"
            );
            // Display keeps what the user typed, not the canonical category
            assert_eq!(from_synonym.mood, synonym);
        }
    }

    #[test]
    fn test_unknown_mood_gets_generic_fallback() {
        let engine = RuleEngine::new();
        let s = engine.generate("discombobulated");
        assert_eq!(s.mood, "discombobulated");
        assert_eq!(s.activity, GENERIC_FALLBACK.0);
        assert_eq!(s.tip, GENERIC_FALLBACK.1);
        assert_eq!(s.meditation, GENERIC_FALLBACK.2);
    }

    #[test]
    fn test_mood_field_is_normalized_input() {
        let engine = RuleEngine::new();
        let s = engine.generate("  Tired  ");
        assert_eq!(s.mood, "tired");
    }
}
