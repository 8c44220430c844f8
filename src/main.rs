use anyhow::Result;
use clap::{Parser, Subcommand};
use promptgen::session;
use promptgen_core::config::{CliOverrides, PromptgenConfig, resolve_settings};
use promptgen_core::llm::create_generator;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "promptgen",
    version,
    about = "Craft effective prompts through a guided questionnaire and sample completions from a pretrained text-generation model"
)]
struct Cli {
    /// Generation backend: `huggingface` (hosted inference) or `ollama` (local)
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Model identifier, e.g. gpt2 or distilgpt2
    #[arg(long, global = true)]
    model: Option<String>,

    /// Maximum length of each generated response
    #[arg(long, global = true, alias = "max_length")]
    max_length: Option<u32>,

    /// Number of responses to generate per prompt
    #[arg(long, global = true, alias = "num_return_sequences")]
    num_return_sequences: Option<u32>,

    /// Config file path; defaults to ./promptgen.toml when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Menu-driven questionnaire, generation, and prompt persistence (default)
    Interactive,

    /// Single prompt; prints sampled completions without the menu
    Ask { prompt: Vec<String> },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let file_config = match &args.config {
        Some(path) => PromptgenConfig::load_from_file(path)?,
        None => PromptgenConfig::load_default()?,
    };

    // CLI flags beat the config file, which beats built-in defaults
    let settings = resolve_settings(
        CliOverrides {
            backend: args.backend,
            model: args.model,
            max_length: args.max_length,
            num_return_sequences: args.num_return_sequences,
        },
        file_config,
    );

    // The one fatal condition: without a reachable model nothing else can run
    let generator =
        match create_generator(&settings.backend, &settings.model, settings.base_url.clone()).await
        {
            Ok(generator) => generator,
            Err(err) => {
                error!("error initializing the model: {err}");
                std::process::exit(1);
            }
        };

    match args.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            session::welcome(generator.name(), generator.model());
            session::run(generator.as_ref(), &settings.generation).await
        }
        Commands::Ask { prompt } => {
            session::ask_once(generator.as_ref(), &prompt.join(" "), &settings.generation).await
        }
    }
}
