//! Parse command handler.

use super::commands::OutputFormat;
use super::output::print_slides;
use slideprompt::parse_reply;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a saved reply and print its slides.
pub fn parse_command(file: &Path, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let reply = fs::read_to_string(file)
        .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;
    let parsed = parse_reply(&reply);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&parsed)?),
        OutputFormat::Human => {
            if !parsed.preamble().is_empty() {
                println!("{}", parsed.preamble());
                println!("{:-<80}", "");
            }
            print_slides(parsed.slides())?;
        }
    }
    Ok(())
}
