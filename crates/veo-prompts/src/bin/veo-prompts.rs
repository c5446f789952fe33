//! Video prompt generator binary
//!
//! Run with: cargo run -p veo-prompts
//!
//! Takes no arguments. Configuration comes from `veo-prompts.toml` (optional)
//! and environment variables; see `PipelineConfig::load`.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use veo_prompts::{Error, Pipeline, PipelineConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "veo_prompts=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match PipelineConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = config.validate_credential() {
        print_missing_key(&e);
        return ExitCode::FAILURE;
    }

    let rule = "=".repeat(80);
    println!("VIDEO PROMPT GENERATOR");
    println!("Input file: {}", config.input.path.display());
    match config.input.limit() {
        Some(n) => println!("Processing: {} paragraphs", n),
        None => println!("Processing: ALL paragraphs"),
    }
    println!("Model: {}", config.llm.model);
    println!("{}", rule);

    let pipeline = Pipeline::new(config);
    match pipeline.run().await {
        Ok(summary) => {
            println!("\nParagraphs found: {}", summary.paragraphs_found);
            println!("Paragraphs processed: {}", summary.paragraphs_processed);
            if summary.failures > 0 {
                println!("Paragraphs with errors: {}", summary.failures);
            }
            println!("\nResults saved:");
            println!("  • {}", summary.txt_path.display());
            println!("  • {}", summary.csv_path.display());
            ExitCode::SUCCESS
        }
        Err(e @ Error::MissingCredential(_)) => {
            print_missing_key(&e);
            ExitCode::FAILURE
        }
        Err(Error::FileNotFound(path)) => {
            eprintln!("ERROR: File not found: {}", path.display());
            ExitCode::FAILURE
        }
        Err(e) if e.is_fatal_input() => {
            eprintln!("ERROR while reading input: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_missing_key(err: &Error) {
    let rule = "=".repeat(80);
    eprintln!("{}", rule);
    eprintln!("ERROR: OpenRouter API key not found ({})", err);
    eprintln!("{}", rule);
    eprintln!("\nSet the OPENROUTER_API_KEY environment variable, for example:");
    eprintln!("  export OPENROUTER_API_KEY=sk-or-...");
    eprintln!("or add it to a .env file in the working directory.");
    eprintln!("{}", rule);
}
