pub mod client;
pub mod orchestrator;
pub mod parse;
pub mod prompts;
pub mod providers;
pub mod rules;

pub use client::{AiSuggester, GenerativeClient};
pub use orchestrator::Orchestrator;
pub use rules::RuleEngine;
