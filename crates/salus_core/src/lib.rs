pub mod config;
pub mod credential;
pub mod error;
pub mod mood;
pub mod profile;
pub mod suggestion;

pub use config::SalusConfig;
pub use credential::ApiCredential;
pub use error::SuggestError;
pub use mood::{Mood, ResolvedMood};
pub use profile::UserProfile;
pub use suggestion::{Source, Suggestion};
