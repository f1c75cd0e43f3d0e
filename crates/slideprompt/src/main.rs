//! Slideprompt CLI binary.
//!
//! This binary provides command-line access to the slide prompt pipeline:
//! - Preview the assembled instructions
//! - Generate slide prompts with an OpenAI-compatible model
//! - Parse a saved model reply

use clap::Parser;
use slideprompt::{ObservabilityConfig, init_observability_with_config};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, assemble_command, generate_command, parse_command};

    // Load .env before settings are first read
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "info" };
    init_observability_with_config(
        ObservabilityConfig::new(log_level).with_json_logs(cli.json_logs),
    )?;

    // Execute the requested command
    match cli.command {
        Commands::Assemble {
            content,
            presentation,
            format,
        } => {
            assemble_command(&content, &presentation, format)?;
        }

        Commands::Generate {
            content,
            presentation,
            stream,
            format,
        } => {
            generate_command(&content, &presentation, stream, format).await?;
        }

        Commands::Parse { file, format } => {
            parse_command(&file, format)?;
        }
    }

    Ok(())
}
