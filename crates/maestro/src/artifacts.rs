//! Flattening of task artifacts into plain text plus an optional audio
//! reference.

use a2a::types::core::Artifact;

use crate::error::DelegateError;

/// Flattened artifact content: text fragments joined with newlines, plus at
/// most one side-channel audio URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedContent {
    pub text: String,
    pub audio_url: Option<String>,
}

/// Walk artifacts in order, then parts within each artifact in order.
/// Non-empty text fragments accumulate; the first audio URL wins and later
/// ones are discarded. No text and no audio is an empty-content error.
pub fn extract(artifacts: &[Artifact]) -> Result<ExtractedContent, DelegateError> {
    let mut texts: Vec<&str> = Vec::new();
    let mut audio_url: Option<String> = None;

    for artifact in artifacts {
        for part in &artifact.parts {
            if let Some(text) = part.text.as_deref() {
                if !text.is_empty() {
                    texts.push(text);
                }
            }
            if audio_url.is_none() {
                if let Some(url) = &part.audio_url {
                    audio_url = Some(url.clone());
                }
            }
        }
    }

    if texts.is_empty() && audio_url.is_none() {
        return Err(DelegateError::NoContent);
    }

    Ok(ExtractedContent {
        text: texts.join("\n"),
        audio_url,
    })
}
