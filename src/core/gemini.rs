use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::mime::ImageMime;
use crate::core::models::extraction::ExtractionOutcome;

const GENERATE_CONTENT_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Instruction sent with every image.
const EXTRACTION_PROMPT: &str = "Please extract all the text visible in this image. \
    Do not add any commentary, just the extracted text.";

// --- Request payload ---

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

fn build_request(image_data: &[u8], mime: ImageMime) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                Part {
                    text: None,
                    inline_data: Some(InlineData {
                        mime_type: mime.as_str().to_string(),
                        data: STANDARD.encode(image_data),
                    }),
                },
                Part {
                    text: Some(EXTRACTION_PROMPT.to_string()),
                    inline_data: None,
                },
            ],
        }],
    }
}

// --- API response ---

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
struct ResponseCandidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<u64>,
    candidates_token_count: Option<u64>,
}

/// Concatenated text parts of the first candidate, or None when the
/// response carried no text at all.
fn response_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text: String = content
        .parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn token_counts(usage: Option<UsageMetadata>) -> (u64, u64) {
    match usage {
        Some(u) => (
            u.prompt_token_count.unwrap_or(0),
            u.candidates_token_count.unwrap_or(0),
        ),
        None => (0, 0),
    }
}

async fn request_extraction(
    client: &reqwest::Client,
    api_key: &str,
    model: &str,
    image_path: &Path,
) -> Result<(String, u64, u64)> {
    let image_data = std::fs::read(image_path)
        .with_context(|| format!("Failed to read {}", image_path.display()))?;

    let ext = image_path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    let body = build_request(&image_data, ImageMime::from_extension(ext));

    let url = format!(
        "{}/{}:generateContent?key={}",
        GENERATE_CONTENT_BASE, model, api_key
    );
    let response = client
        .post(&url)
        .json(&body)
        .send()
        .await
        .context("Failed to send request to the Gemini API")?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        bail!("HTTP {}: {}", status.as_u16(), body);
    }

    let data: GenerateContentResponse = response
        .json()
        .await
        .context("Failed to parse Gemini response")?;

    let text = response_text(&data).context("Response contained no extracted text")?;
    let (input_tokens, output_tokens) = token_counts(data.usage_metadata);

    Ok((text, input_tokens, output_tokens))
}

/// Run one extraction attempt for `image_path`.
///
/// Never fails from the caller's perspective: any error (file read,
/// network, HTTP status, malformed body, empty text) is logged against
/// the offending file and collapsed into an absent-text outcome with zero
/// token counts.
pub async fn extract_text(
    client: &reqwest::Client,
    api_key: &str,
    model: &str,
    image_path: &Path,
) -> ExtractionOutcome {
    match request_extraction(client, api_key, model, image_path).await {
        Ok((text, input_tokens, output_tokens)) => ExtractionOutcome {
            text: Some(text),
            input_tokens,
            output_tokens,
        },
        Err(e) => {
            let name = image_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| image_path.display().to_string());
            eprintln!("Error extracting text from '{}': {:#}", name, e);
            ExtractionOutcome::failed()
        }
    }
}
