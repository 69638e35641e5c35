//! Mood normalization and synonym resolution.
//!
//! Free-text mood input is trimmed and lowercased, then mapped onto one of six
//! canonical categories. Words outside the canonical set go through a static
//! synonym table; anything still unmatched is carried through unchanged so the
//! rule engine can fall back to its generic triple.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six canonical mood categories with a dedicated rule-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Tired,
    Anxious,
    Stressed,
    Sad,
    Happy,
    Energetic,
}

/// All canonical moods, in display order.
pub const CANONICAL_MOODS: [Mood; 6] = [
    Mood::Tired,
    Mood::Anxious,
    Mood::Stressed,
    Mood::Sad,
    Mood::Happy,
    Mood::Energetic,
];

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Tired => "tired",
            Mood::Anxious => "anxious",
            Mood::Stressed => "stressed",
            Mood::Sad => "sad",
            Mood::Happy => "happy",
            Mood::Energetic => "energetic",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ();

    /// Exact canonical match only; synonym handling lives in [`resolve`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tired" => Ok(Mood::Tired),
            "anxious" => Ok(Mood::Anxious),
            "stressed" => Ok(Mood::Stressed),
            "sad" => Ok(Mood::Sad),
            "happy" => Ok(Mood::Happy),
            "energetic" => Ok(Mood::Energetic),
            _ => Err(()),
        }
    }
}

/// Outcome of resolving free-text mood input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedMood {
    /// Matched a canonical category, directly or via a synonym.
    Canonical(Mood),
    /// No match; carries the normalized input for generic-fallback handling.
    Unknown(String),
}

/// Map an alternate mood word to its canonical category.
fn synonym(word: &str) -> Option<Mood> {
    match word {
        "exhausted" | "sleepy" | "drained" => Some(Mood::Tired),
        "worried" | "nervous" | "fearful" => Some(Mood::Anxious),
        "overwhelmed" | "pressured" | "tense" => Some(Mood::Stressed),
        "depressed" | "down" | "blue" => Some(Mood::Sad),
        "joyful" => Some(Mood::Happy),
        "excited" | "pumped" | "motivated" => Some(Mood::Energetic),
        _ => None,
    }
}

/// Normalize raw mood text and resolve it to a canonical category if possible.
///
/// Pure function, no side effects. Empty input is the caller's problem — the
/// orchestrator rejects it before calling here.
pub fn resolve(raw: &str) -> ResolvedMood {
    let normalized = raw.trim().to_lowercase();
    if let Ok(mood) = normalized.parse() {
        return ResolvedMood::Canonical(mood);
    }
    if let Some(mood) = synonym(&normalized) {
        return ResolvedMood::Canonical(mood);
    }
    ResolvedMood::Unknown(normalized)
}
