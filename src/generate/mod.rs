//! Base avatar generation via a remote image service.
//!
//! The rest of the crate only needs "raw image bytes for a prompt", expressed
//! by the [`ImageGenerator`] trait. [`OpenAiGenerator`] implements it against
//! an OpenAI-compatible `/images/generations` endpoint.

mod prompts;

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AvatarError, Result};

pub use prompts::Prompts;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "dall-e-3";

/// Generation endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/images/generations";

/// Model that accepts arbitrary square sizes.
const SIZED_MODEL: &str = "gpt-image-1";

const GENERATE_TIMEOUT: Duration = Duration::from_secs(120);
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// A request for one generated image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub prompt: String,
    pub size: u32,
    pub model: String,
}

/// JSON body sent to the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationBody {
    pub model: String,
    pub prompt: String,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,
}

impl ImageRequest {
    pub fn new(prompt: impl Into<String>, size: u32, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            size,
            model: model.into(),
        }
    }

    /// Build the request body for this model.
    ///
    /// `gpt-image-1` takes the exact size; other models only support
    /// 1024x1024 or 512x512.
    pub fn body(&self) -> GenerationBody {
        if self.model == SIZED_MODEL {
            GenerationBody {
                model: self.model.clone(),
                prompt: self.prompt.clone(),
                size: format!("{0}x{0}", self.size),
                quality: None,
                n: None,
            }
        } else {
            let side = if self.size >= 1024 { 1024 } else { 512 };
            GenerationBody {
                model: self.model.clone(),
                prompt: self.prompt.clone(),
                size: format!("{0}x{0}", side),
                quality: Some("standard".to_string()),
                n: Some(1),
            }
        }
    }
}

/// The image reference returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePayload {
    /// A URL to download (may be a `data:` URL).
    Url(String),
    /// Inline base64 image data.
    Base64(String),
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    data: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
struct GeneratedImage {
    url: Option<String>,
    b64_json: Option<String>,
}

/// Extract the first image from a generation response body.
pub fn parse_response(body: &str) -> Result<ImagePayload> {
    let response: GenerationResponse =
        serde_json::from_str(body).map_err(|e| AvatarError::Remote {
            message: format!("Malformed response: {}", e),
        })?;

    let first = response.data.into_iter().next();
    match first {
        Some(GeneratedImage { url: Some(url), .. }) => Ok(ImagePayload::Url(url)),
        Some(GeneratedImage {
            b64_json: Some(data),
            ..
        }) => Ok(ImagePayload::Base64(data)),
        _ => Err(AvatarError::Remote {
            message: format!("Unexpected API response: {}", truncate(body, 200)),
        }),
    }
}

/// Decode base64 data, accepting an optional `data:<mime>;base64,` prefix.
pub fn decode_base64(data: &str) -> Result<Vec<u8>> {
    let encoded = match data.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map_or(rest, |(_, payload)| payload),
        None => data,
    };
    STANDARD.decode(encoded.trim()).map_err(|e| AvatarError::Remote {
        message: format!("Invalid base64 image data: {}", e),
    })
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Anything that can turn a prompt into image bytes.
pub trait ImageGenerator {
    fn generate(&self, request: &ImageRequest) -> Result<Vec<u8>>;
}

/// Client for an OpenAI-compatible image generation endpoint.
pub struct OpenAiGenerator {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl OpenAiGenerator {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Resolve a payload to raw bytes, downloading URLs.
    pub fn fetch_payload(&self, payload: &ImagePayload) -> Result<Vec<u8>> {
        match payload {
            ImagePayload::Base64(data) => decode_base64(data),
            ImagePayload::Url(url) if url.starts_with("data:") => decode_base64(url),
            ImagePayload::Url(url) => {
                let response = self.client.get(url).timeout(DOWNLOAD_TIMEOUT).send()?;
                let status = response.status();
                if !status.is_success() {
                    return Err(AvatarError::Remote {
                        message: format!("Download failed with HTTP {}", status),
                    });
                }
                Ok(response.bytes()?.to_vec())
            }
        }
    }
}

impl ImageGenerator for OpenAiGenerator {
    fn generate(&self, request: &ImageRequest) -> Result<Vec<u8>> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request.body())
            .timeout(GENERATE_TIMEOUT)
            .send()?;

        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            return Err(AvatarError::Remote {
                message: format!("HTTP {}: {}", status, truncate(&text, 500)),
            });
        }

        let payload = parse_response(&text)?;
        self.fetch_payload(&payload)
    }
}
