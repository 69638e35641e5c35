//! User wellness profile, produced by the (external) onboarding flow and
//! consumed read-only by the AI suggestion path.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u8,
    pub gender: String,
    /// Self-reported stress, ordinal 1 (calm) to 5 (very stressed).
    pub stress_level: u8,
    pub wellness_goals: Vec<String>,
    pub meditation_experience: String,
    pub preferred_activities: Vec<String>,
}

impl UserProfile {
    /// Check that every field the onboarding form requires is present.
    pub fn validate(&self) -> Result<()> {
        if self.age == 0 {
            bail!("age is required");
        }
        if self.gender.trim().is_empty() {
            bail!("gender is required");
        }
        if !(1..=5).contains(&self.stress_level) {
            bail!("stress level must be between 1 and 5");
        }
        if self.meditation_experience.trim().is_empty() {
            bail!("meditation experience is required");
        }
        if self.wellness_goals.is_empty() {
            bail!("at least one wellness goal is required");
        }
        if self.preferred_activities.is_empty() {
            bail!("at least one preferred activity is required");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_profile() -> UserProfile {
        UserProfile {
            age: 29,
            gender: "female".to_string(),
            stress_level: 3,
            wellness_goals: vec!["sleep better".to_string()],
            meditation_experience: "beginner".to_string(),
            preferred_activities: vec!["walking".to_string(), "yoga".to_string()],
        }
    }

    #[test]
    fn test_complete_profile_validates() {
        assert!(complete_profile().validate().is_ok());
    }

    #[test]
    fn test_stress_level_out_of_range_rejected() {
        let mut p = complete_profile();
        p.stress_level = 0;
        assert!(p.validate().is_err());
        p.stress_level = 6;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_empty_goals_rejected() {
        let mut p = complete_profile();
        p.wellness_goals.clear();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_profile_json_roundtrip() {
        let p = complete_profile();
        let json = serde_json::to_string(&p).unwrap();
        let restored: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, p);
    }
}
