//! Opaque API credential for the generative endpoint.
//!
//! Presence of a credential toggles the AI suggestion path; its format is never
//! validated locally — a bad key only shows up as a failed remote call. The
//! value must never appear in logs, so `Debug` and `Display` are redacted.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiCredential(String);

impl ApiCredential {
    /// Wrap a credential, trimming surrounding whitespace.
    /// Returns `None` for empty input.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The raw secret, for embedding in the outgoing request only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Masked form for display: bullets plus the last four characters.
    pub fn masked(&self) -> String {
        let tail: String = self
            .0
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("••••••••{tail}")
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiCredential(<redacted>)")
    }
}

impl fmt::Display for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}
