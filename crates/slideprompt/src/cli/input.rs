//! Turning CLI flags into a request.

use super::commands::{ContentArgs, PresentationArgs};
use slideprompt::{ContentInput, GeneratePromptRequest, SecondaryContent};
use std::error::Error;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Build the request described by the flags.
pub fn build_request(
    content: &ContentArgs,
    presentation: &PresentationArgs,
) -> Result<GeneratePromptRequest, Box<dyn Error>> {
    if let Some(path) = &content.request {
        debug!(path = %path.display(), "Reading request body");
        let body = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let request = serde_json::from_str(&body)
            .map_err(|e| format!("Invalid request body in {}: {}", path.display(), e))?;
        return Ok(request);
    }

    Ok(GeneratePromptRequest::new(
        content_input(content)?,
        presentation.style.clone(),
        presentation.palette.clone(),
        presentation.layout.clone(),
        presentation.aspect_ratio.clone(),
        presentation.slides,
    ))
}

fn content_input(content: &ContentArgs) -> Result<ContentInput, Box<dyn Error>> {
    if let Some(text) = &content.text {
        return Ok(ContentInput::text(text.clone()));
    }
    if let Some(topic) = &content.topic {
        return Ok(ContentInput::topic(topic.clone()));
    }
    if let Some(path) = &content.file {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        return Ok(ContentInput::file(name, read_text(path)?));
    }
    if let Some(url) = &content.url {
        let extracted = content.url_text.as_deref().map(read_text).transpose()?;
        return Ok(ContentInput::url(url.clone(), extracted));
    }
    Err("No content source given".into())
}

fn read_text(path: &Path) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e).into())
}

/// Load `--attach` as a data URL.
pub fn attachment(content: &ContentArgs) -> Result<Option<SecondaryContent>, Box<dyn Error>> {
    let Some(path) = &content.attach else {
        return Ok(None);
    };
    let bytes =
        fs::read(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let mime = mime_for(path);
    debug!(path = %path.display(), mime, size = bytes.len(), "Loaded attachment");
    Ok(Some(SecondaryContent::from_bytes(mime, &bytes)))
}

fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for(Path::new("deck.PNG")), "image/png");
        assert_eq!(mime_for(Path::new("scan.jpeg")), "image/jpeg");
        assert_eq!(mime_for(Path::new("notes")), "application/octet-stream");
    }
}
