//! CLI command definitions.

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Slideprompt - turn content into cinematic per-slide image prompts
#[derive(Parser, Debug)]
#[command(name = "slideprompt")]
#[command(about = "Turn content into cinematic per-slide image prompts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the instruction pair without calling the model
    Assemble {
        /// Source material
        #[command(flatten)]
        content: ContentArgs,

        /// Presentation settings
        #[command(flatten)]
        presentation: PresentationArgs,

        /// Output format
        #[arg(long, default_value = "text")]
        format: AssembleFormat,
    },

    /// Generate slide prompts with the configured model
    Generate {
        /// Source material
        #[command(flatten)]
        content: ContentArgs,

        /// Presentation settings
        #[command(flatten)]
        presentation: PresentationArgs,

        /// Echo reply fragments as they arrive
        #[arg(long)]
        stream: bool,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Parse a saved model reply into slides
    Parse {
        /// Path to the reply text
        file: PathBuf,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Where the source material comes from. Exactly one source is required.
#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("source").required(true).multiple(false)))]
pub struct ContentArgs {
    /// Raw text
    #[arg(long, group = "source")]
    pub text: Option<String>,

    /// Topic phrase for the model to expand
    #[arg(long, group = "source")]
    pub topic: Option<String>,

    /// Text file whose contents become the source
    #[arg(long, group = "source")]
    pub file: Option<PathBuf>,

    /// Web page address
    #[arg(long, group = "source")]
    pub url: Option<String>,

    /// File holding text already extracted from --url
    #[arg(long, requires = "url")]
    pub url_text: Option<PathBuf>,

    /// JSON request body with content and settings; presentation flags are ignored
    #[arg(long, group = "source")]
    pub request: Option<PathBuf>,

    /// Image or document sent alongside the instruction
    #[arg(long)]
    pub attach: Option<PathBuf>,
}

/// Presentation flags.
#[derive(Args, Debug, Clone)]
pub struct PresentationArgs {
    /// Visual style (e.g. professional, dark-neon, 3d-isometric)
    #[arg(long, default_value = "professional")]
    pub style: String,

    /// Colour palette (auto lets the model choose)
    #[arg(long, default_value = "auto")]
    pub palette: String,

    /// Layout balance: visual-heavy, text-heavy or balanced
    #[arg(long, default_value = "balanced")]
    pub layout: String,

    /// Aspect ratio: 16:9, 4:3, 1:1 or 9:16
    #[arg(long, default_value = "16:9")]
    pub aspect_ratio: String,

    /// Number of slides (1-20)
    #[arg(long, default_value_t = 10)]
    pub slides: u32,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

/// Output format of the assemble command
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssembleFormat {
    /// System and user instruction as plain text
    Text,
    /// The chat completion request body
    Json,
}
