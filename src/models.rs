//! Data models and structures
//!
//! Defines the poster payloads exchanged with the AI services and the
//! environment-driven configuration.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const POSTER_ASPECT_RATIO: &str = "3:4";
pub const POSTER_MIME_TYPE: &str = "image/jpeg";
pub const QUOTE_WORD_LIMIT: usize = 7;

/// Structured reply from the text model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosterText {
    pub quote: String,
    pub visual_description: String,
}

impl PosterText {
    /// Parse the model's JSON reply, rejecting missing or blank fields.
    pub fn from_json(json: &str) -> Result<Self> {
        let text: PosterText = serde_json::from_str(json)
            .map_err(|e| Error::TextGeneration(format!("Malformed poster text: {}", e)))?;

        if text.quote.trim().is_empty() {
            return Err(Error::TextGeneration("Quote is empty".to_string()));
        }
        if text.visual_description.trim().is_empty() {
            return Err(Error::TextGeneration(
                "Visual description is empty".to_string(),
            ));
        }

        Ok(text)
    }

    /// Response schema handed to the text model.
    pub fn response_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "OBJECT",
            "properties": {
                "quote": {
                    "type": "STRING",
                    "description": "The funny short quote (max 7 words)"
                },
                "visualDescription": {
                    "type": "STRING",
                    "description": "Visual description of the weird puppet character(s)"
                }
            },
            "required": ["quote", "visualDescription"]
        })
    }

    pub fn quote_word_count(&self) -> usize {
        self.quote.split_whitespace().count()
    }
}

/// Final poster handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPoster {
    pub quote: String,
    pub image_data: String,
    pub visual_description: String,
}

impl GeneratedPoster {
    /// Decode the image back out of its data URI.
    pub fn image_bytes(&self) -> Result<Vec<u8>> {
        let (_, payload) = self
            .image_data
            .split_once(";base64,")
            .ok_or_else(|| Error::ImageGeneration("Image data is not a base64 data URI".to_string()))?;

        use base64::Engine as _;
        base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| Error::ImageGeneration(format!("Failed to decode image data: {}", e)))
    }
}

/// Wrap raw image bytes in a `data:` URI.
pub fn to_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    use base64::Engine as _;
    format!(
        "data:{};base64,{}",
        mime_type,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Options forwarded to the image service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageOptions {
    pub number_of_images: u32,
    pub aspect_ratio: String,
    pub output_mime_type: String,
}

impl ImageOptions {
    /// One portrait JPEG.
    pub fn poster() -> Self {
        Self {
            number_of_images: 1,
            aspect_ratio: POSTER_ASPECT_RATIO.to_string(),
            output_mime_type: POSTER_MIME_TYPE.to_string(),
        }
    }
}

// Configuration
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TEXT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub text_model: String,
    pub image_model: String,
    pub base_url: String,
    pub text_timeout: Duration,
    pub image_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("API_KEY")
            .or_else(|| non_empty("GEMINI_API_KEY"))
            .ok_or_else(|| Error::Config("API_KEY not set".to_string()))?;

        Ok(Self {
            api_key,
            text_model: non_empty("TEXT_MODEL").unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
            image_model: non_empty("IMAGE_MODEL")
                .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            base_url: non_empty("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            text_timeout: timeout_secs(
                "TEXT_TIMEOUT_SECS",
                non_empty("TEXT_TIMEOUT_SECS"),
                DEFAULT_TEXT_TIMEOUT_SECS,
            )?,
            image_timeout: timeout_secs(
                "IMAGE_TIMEOUT_SECS",
                non_empty("IMAGE_TIMEOUT_SECS"),
                DEFAULT_IMAGE_TIMEOUT_SECS,
            )?,
        })
    }
}

fn timeout_secs(key: &str, value: Option<String>, default: u64) -> Result<Duration> {
    let Some(value) = value else {
        return Ok(Duration::from_secs(default));
    };

    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(Error::Config(format!(
            "{} must be a positive number of seconds, got '{}'",
            key, value
        ))),
    }
}
