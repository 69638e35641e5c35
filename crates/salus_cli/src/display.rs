//! Terminal rendering of suggestions and the saved-plan list.

use chrono::{DateTime, Utc};
use salus_core::suggestion::{Source, Suggestion};

/// Relative timestamp: "just now" under an hour, hours under a day, then a
/// calendar date.
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - timestamp).num_hours();
    if hours < 1 {
        "just now".to_string()
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        timestamp.format("%Y-%m-%d").to_string()
    }
}

fn source_label(source: Source) -> &'static str {
    match source {
        Source::Ai => "AI-powered",
        Source::Rule => "rule-based",
    }
}

pub fn print_suggestion(suggestion: &Suggestion) {
    println!();
    println!(
        "Suggestions for \"{}\" ({}):",
        suggestion.mood,
        source_label(suggestion.source)
    );
    println!("  Activity:   {}", suggestion.activity);
    println!("  Tip:        {}", suggestion.tip);
    println!("  Meditation: {}", suggestion.meditation);
    println!();
}

pub fn print_plans(plans: &[Suggestion]) {
    if plans.is_empty() {
        println!("No saved plans yet. Get your first suggestions!");
        return;
    }
    let now = Utc::now();
    for (i, plan) in plans.iter().enumerate() {
        println!(
            "{}. {} — {} ({})",
            i + 1,
            plan.mood,
            format_relative(plan.timestamp, now),
            source_label(plan.source)
        );
        println!("   Activity:   {}", plan.activity);
        println!("   Tip:        {}", plan.tip);
        println!("   Meditation: {}", plan.meditation);
    }
}
