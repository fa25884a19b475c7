// Liam - Mental health companion chat service
// Main entry point

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use liam::backend::{ChatBackend, HostedBackend};
use liam::cli::run_chat;
use liam::companion::Companion;
use liam::config::{load_config, Config};
use liam::engine::TurnEngine;
use liam::response::Tone;
use liam::server::CompanionServer;
use liam::triage::KeywordSets;

#[derive(Parser, Debug)]
#[command(name = "liam")]
#[command(about = "Mental health companion chat service with crisis triage", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Run the HTTP companion server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Interactive chat in the terminal
    Chat {
        /// Tone identifier (supportive, professional, casual, youthful, mature)
        #[arg(long, default_value = "supportive")]
        tone: String,
    },
    /// Run a single message through the triage pipeline
    Query {
        /// Message text
        message: String,
        /// Tone identifier
        #[arg(long, default_value = "supportive")]
        tone: String,
        /// Also print the resource plan
        #[arg(long)]
        plan: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "liam=info,tower_http=info".into()),
        )
        .init();

    let args = Args::parse();
    let config = load_config()?;

    match args.command {
        Command::Serve { bind } => run_serve(config, bind).await,
        Command::Chat { tone } => {
            let engine = build_engine(&config)?;
            run_chat(engine, Tone::resolve(&tone)).await
        }
        Command::Query {
            message,
            tone,
            plan,
        } => run_query(&config, &message, &tone, plan),
    }
}

/// Build the turn engine from configuration
fn build_engine(config: &Config) -> Result<TurnEngine> {
    let keywords = match &config.keywords_path {
        Some(path) => KeywordSets::load_from_file(path)?,
        None => KeywordSets::default(),
    };

    let backend: Option<Arc<dyn ChatBackend>> = match &config.backend {
        Some(settings) => {
            let mut backend = HostedBackend::new(&settings.base_url, &settings.api_key)?;
            if let Some(model) = &settings.model {
                backend = backend.with_model(model);
            }
            Some(Arc::new(backend))
        }
        None => None,
    };

    Ok(TurnEngine::new(Companion::new(keywords), backend))
}

async fn run_serve(config: Config, bind: Option<String>) -> Result<()> {
    let engine = build_engine(&config)?;

    let mut settings = config.server.clone();
    if let Some(bind) = bind {
        settings.bind_address = bind;
    }

    let default_tone = config
        .default_tone
        .as_deref()
        .map(Tone::resolve)
        .unwrap_or_default();

    CompanionServer::new(engine, settings, default_tone)
        .serve()
        .await
}

fn run_query(config: &Config, message: &str, tone: &str, show_plan: bool) -> Result<()> {
    let engine = build_engine(config)?;
    let companion = engine.companion();
    let tone = Tone::resolve(tone);

    let classification = companion.classify(message);
    println!(
        "classification: crisis={} anxiety={} depression={}",
        classification.is_crisis, classification.has_anxiety, classification.has_depression
    );

    println!("\n{}", companion.select_reply(message, tone));

    println!();
    for action in companion.suggested_actions(message) {
        println!("  [{}] {}", action.label, action.url);
    }

    if show_plan {
        let plan = companion.resource_plan(message);
        println!("\n{}", plan.summary);
        for (i, advice) in plan.key_advice.iter().enumerate() {
            println!("  {}. {}", i + 1, advice);
        }
        for link in &plan.recommended_links {
            println!("  {} - {}", link.title, link.url);
        }
        for step in &plan.next_steps {
            println!("  - {}", step);
        }
    }

    Ok(())
}
