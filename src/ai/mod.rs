//! AI service integration for poster text and image generation
//!
//! Provides interfaces to Gemini's structured text generation and Imagen's
//! image synthesis, plus in-memory mocks for tests.

pub mod gemini;
pub mod mock;

pub use gemini::{GeminiTextClient, ImagenClient};
pub use mock::{MockImageGenerationClient, MockTextGenerationClient};

use crate::models::ImageOptions;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TextGenerationService: Send + Sync {
    /// Generate JSON text constrained to `schema`.
    ///
    /// Returns `Ok(None)` when the service answered but produced no text.
    async fn generate_structured(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> Result<Option<String>>;
}

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Generate images for `prompt`. The result may be empty.
    async fn generate_images(&self, prompt: &str, options: &ImageOptions) -> Result<Vec<Vec<u8>>>;
}
