//! Assemble and generate command handlers.

use super::commands::{AssembleFormat, ContentArgs, OutputFormat, PresentationArgs};
use super::input::{attachment, build_request};
use super::output::{echo_fragment, print_slides};
use futures::StreamExt;
use slideprompt::{
    GeneratePromptResponse, GenerationClient, GenerationSettings, SlidePipeline,
    SlidePromptError, collect_result,
};
use std::error::Error;
use std::io;

/// Print the instruction pair for the given flags.
pub fn assemble_command(
    content: &ContentArgs,
    presentation: &PresentationArgs,
    format: AssembleFormat,
) -> Result<(), Box<dyn Error>> {
    let validated = build_request(content, presentation)?.validate()?;
    let pipeline = SlidePipeline::from_settings(GenerationSettings::global()?);
    let prompt = pipeline.prompt(&validated);

    match format {
        AssembleFormat::Text => println!("{}", prompt.to_plain_text()),
        AssembleFormat::Json => {
            let secondary = attachment(content)?;
            let request = pipeline
                .client()
                .build_request(&prompt, secondary.as_ref(), false);
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
    }
    Ok(())
}

/// Run the pipeline and print the slides.
pub async fn generate_command(
    content: &ContentArgs,
    presentation: &PresentationArgs,
    stream: bool,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let request = build_request(content, presentation)?;
    let secondary = attachment(content)?;
    let pipeline = SlidePipeline::new(GenerationClient::from_global()?);

    let validated = match request.validate() {
        Ok(validated) => validated,
        Err(e) => return fail(SlidePromptError::from(e), format),
    };

    let outcome = if stream {
        // Fragments go to stderr when stdout is reserved for JSON.
        let echo = format == OutputFormat::Human;
        match pipeline.run_stream(&validated, secondary.as_ref()).await {
            Ok(fragments) => {
                let fragments = fragments.inspect(move |fragment| {
                    if let Ok(text) = fragment {
                        let echoed = if echo {
                            echo_fragment(&mut io::stdout().lock(), text)
                        } else {
                            echo_fragment(&mut io::stderr().lock(), text)
                        };
                        if let Err(e) = echoed {
                            tracing::warn!(error = %e, "Failed to echo stream fragment");
                        }
                    }
                });
                collect_result(fragments).await
            }
            Err(e) => Err(e),
        }
    } else {
        pipeline.run(&validated, secondary.as_ref()).await
    };

    let result = match outcome {
        Ok(result) => result,
        Err(e) => return fail(e, format),
    };

    match format {
        OutputFormat::Human => {
            if stream {
                println!();
                println!("{:-<80}", "");
            }
            print_slides(result.slides())?;
        }
        OutputFormat::Json => {
            let response = GeneratePromptResponse::success(result, validated.config());
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }
    Ok(())
}

fn fail(error: SlidePromptError, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Human => Err(error.into()),
        OutputFormat::Json => {
            let response = GeneratePromptResponse::failure(&error);
            println!("{}", serde_json::to_string_pretty(&response)?);
            std::process::exit(1);
        }
    }
}
