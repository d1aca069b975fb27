use super::client::GeminiHttpClient;
use super::types::PredictResponse;
use crate::ai::ImageGenerationService;
use crate::models::{ImageOptions, DEFAULT_IMAGE_TIMEOUT_SECS};
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    instances: Vec<PromptInstance<'a>>,
    parameters: PredictParameters<'a>,
}

#[derive(Debug, Serialize)]
struct PromptInstance<'a> {
    prompt: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters<'a> {
    sample_count: u32,
    aspect_ratio: &'a str,
    output_options: OutputOptions<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputOptions<'a> {
    mime_type: &'a str,
}

/// Imagen text-to-image client.
pub struct ImagenClient {
    http: GeminiHttpClient,
}

impl ImagenClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(DEFAULT_IMAGE_TIMEOUT_SECS),
                client,
            ),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = self.http.with_timeout(timeout);
        self
    }

    pub fn model(&self) -> &str {
        self.http.model()
    }
}

#[async_trait]
impl ImageGenerationService for ImagenClient {
    async fn generate_images(&self, prompt: &str, options: &ImageOptions) -> Result<Vec<Vec<u8>>> {
        let request = PredictRequest {
            instances: vec![PromptInstance { prompt }],
            parameters: PredictParameters {
                sample_count: options.number_of_images,
                aspect_ratio: &options.aspect_ratio,
                output_options: OutputOptions {
                    mime_type: &options.output_mime_type,
                },
            },
        };

        let response: PredictResponse = self.http.predict(&request).await?;

        use base64::Engine as _;
        let mut images = Vec::with_capacity(response.predictions.len());
        for prediction in response.predictions {
            let Some(b64) = prediction.bytes_base64_encoded else {
                tracing::warn!(
                    "Imagen prediction without image bytes (filtered: {})",
                    prediction.rai_filtered_reason.as_deref().unwrap_or("unknown")
                );
                continue;
            };

            tracing::debug!(
                "Imagen returned image with mime_type: {}",
                prediction.mime_type.as_deref().unwrap_or("unspecified")
            );

            let bytes = base64::engine::general_purpose::STANDARD
                .decode(b64)
                .map_err(|e| {
                    Error::AiProvider(format!("Failed to decode Imagen base64 image: {}", e))
                })?;
            images.push(bytes);
        }

        Ok(images)
    }
}
