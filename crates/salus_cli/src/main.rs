mod display;

use anyhow::Result;
use clap::Parser;
use salus_core::credential::ApiCredential;
use salus_core::error::SuggestError;
use salus_core::suggestion::{Source, Suggestion};
use salus_core::SalusConfig;
use salus_store::{settings, KvStore, PlanStore};
use salus_suggest::providers::GeminiClient;
use salus_suggest::{AiSuggester, Orchestrator};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(short, long, default_value = "salus.toml")]
    config: PathBuf,

    /// Override the data directory from the config
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Answer a single mood query and exit instead of starting the dashboard
    #[arg(short, long)]
    mood: Option<String>,
}

/// Composition root: everything long-lived hangs off this struct instead of
/// hidden globals.
struct App {
    config: SalusConfig,
    kv: KvStore,
    plans: PlanStore,
    orchestrator: Orchestrator,
    current: Option<Suggestion>,
}

impl App {
    fn new(config: SalusConfig) -> Result<Self> {
        let kv = KvStore::open(config.storage.data_dir.clone())?;
        let plans = PlanStore::open(kv.clone());
        let orchestrator = build_orchestrator(&config, &kv)?;
        Ok(Self {
            config,
            kv,
            plans,
            orchestrator,
            current: None,
        })
    }

    async fn query(&mut self, text: &str) {
        match self.orchestrator.query(text, settings::load_profile(&self.kv).as_ref()).await {
            Ok(suggestion) => {
                // A rule triple out of an AI-configured orchestrator means the
                // remote call failed and was recovered; tell the user once.
                if self.orchestrator.has_ai() && suggestion.source == Source::Rule {
                    println!("AI service temporarily unavailable. Using rule-based suggestions.");
                }
                display::print_suggestion(&suggestion);
                self.current = Some(suggestion);
            }
            Err(SuggestError::EmptyMood) => {
                println!("Please enter how you're feeling.");
            }
            Err(e) => {
                // Unreachable in the composed pipeline; the orchestrator
                // recovers remote and parse failures itself.
                println!("Could not produce a suggestion: {e}");
            }
        }
    }

    fn save_current(&mut self) {
        // The current plan stays current after saving; saving again appends
        // another copy, same as pressing save twice on the dashboard.
        match &self.current {
            Some(suggestion) => match self.plans.append(suggestion.clone()) {
                Ok(()) => println!("Wellness plan saved."),
                Err(e) => println!("Could not save plan: {e}"),
            },
            None => println!("No plan to save. Ask for suggestions first."),
        }
    }

    fn delete_plan(&mut self, arg: &str) {
        // The listing is 1-based; only indices it printed are valid.
        let index = match arg.trim().parse::<usize>() {
            Ok(n) if (1..=self.plans.len()).contains(&n) => n - 1,
            _ => {
                println!(
                    "Usage: delete <1-{}> (see 'plans' for the list)",
                    self.plans.len().max(1)
                );
                return;
            }
        };
        match self.plans.delete(index) {
            Ok(removed) => println!("Deleted the \"{}\" plan.", removed.mood),
            Err(e) => println!("Could not delete plan: {e}"),
        }
    }

    fn key_command(&mut self, rest: &str) {
        let rest = rest.trim();
        if rest.is_empty() {
            match settings::load_credential(&self.kv) {
                Some(cred) => println!("API key: {}", cred.masked()),
                None => println!("API key: not set (rule-based suggestions only)"),
            }
            println!("Use 'key <value>' to set or 'key clear' to remove.");
            return;
        }
        let result = if rest == "clear" {
            settings::clear_credential(&self.kv).map(|()| "API key removed.")
        } else {
            match ApiCredential::new(rest) {
                Some(cred) => {
                    settings::store_credential(&self.kv, &cred).map(|()| "API key saved.")
                }
                None => {
                    println!("Empty key ignored.");
                    return;
                }
            }
        };
        match result {
            Ok(message) => {
                println!("{message}");
                // Credential presence toggles the AI path; rebuild, then
                // report the mode actually in effect (a GEMINI_API_KEY env
                // fallback can keep AI on after a clear).
                match build_orchestrator(&self.config, &self.kv) {
                    Ok(orchestrator) => {
                        self.orchestrator = orchestrator;
                        if self.orchestrator.has_ai() {
                            println!("AI suggestions enabled.");
                        } else {
                            println!("Using rule-based suggestions.");
                        }
                    }
                    Err(e) => println!("Could not reconfigure suggestions: {e}"),
                }
            }
            Err(e) => println!("Could not update API key: {e}"),
        }
    }
}

/// Pick the AI path when a credential is configured (store first, then the
/// GEMINI_API_KEY environment variable), else rules only.
fn build_orchestrator(config: &SalusConfig, kv: &KvStore) -> Result<Orchestrator> {
    let credential = settings::load_credential(kv)
        .or_else(|| std::env::var("GEMINI_API_KEY").ok().and_then(|v| ApiCredential::new(&v)));
    match credential {
        Some(credential) => {
            let client = GeminiClient::new(&config.api, credential)?;
            Ok(Orchestrator::with_ai(AiSuggester::new(Arc::new(client))))
        }
        None => Ok(Orchestrator::rule_only()),
    }
}

fn print_help() {
    println!("Type how you're feeling to get suggestions, or one of:");
    println!("  tired | anxious | stressed | sad | happy | energetic   quick moods");
    println!("  save          keep the last suggestions in your plan history");
    println!("  plans         list saved plans");
    println!("  delete <n>    remove a saved plan");
    println!("  key [...]     show, set, or clear the API key");
    println!("  help          show this message");
    println!("  quit          exit");
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut config = SalusConfig::load_or_default(&args.config);
    if let Some(dir) = args.data_dir {
        config.storage.data_dir = dir;
    }

    let mut app = App::new(config)?;
    info!(
        "Salus ready (AI path {})",
        if app.orchestrator.has_ai() { "enabled" } else { "disabled" }
    );

    // One-shot mode for scripting
    if let Some(mood) = args.mood {
        app.query(&mood).await;
        return Ok(());
    }

    println!("Salus — how are you feeling today? Type 'help' for commands.");
    print!("> ");
    io::stdout().flush()?;

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        input.clear();
        if stdin.read_line(&mut input)? == 0 {
            break; // EOF
        }
        let trimmed = input.trim();

        match trimmed {
            "quit" | "exit" => break,
            "help" => print_help(),
            "save" => app.save_current(),
            "plans" => display::print_plans(app.plans.list()),
            "" => println!("Please enter how you're feeling."),
            _ if trimmed == "delete" || trimmed.starts_with("delete ") => {
                app.delete_plan(trimmed.trim_start_matches("delete"));
            }
            _ if trimmed == "key" || trimmed.starts_with("key ") => {
                app.key_command(trimmed.trim_start_matches("key"));
            }
            mood => app.query(mood).await,
        }

        print!("> ");
        io::stdout().flush()?;
    }

    Ok(())
}
