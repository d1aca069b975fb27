//! Poster orchestration: sample parameters, ask for text, then paint it.

use crate::ai::{GeminiTextClient, ImageGenerationService, ImagenClient, TextGenerationService};
use crate::models::{
    to_data_uri, Config, GeneratedPoster, ImageOptions, PosterText, QUOTE_WORD_LIMIT,
};
use crate::mood::Mood;
use crate::params::GenerationParameters;
use crate::{prompts, Error, Result};
use rand::Rng;
use tracing::{error, info, warn};

/// Builds demotivational posters from a mood.
///
/// Holds read-only service handles only, so one composer can serve
/// concurrent requests.
pub struct PosterComposer {
    text: Box<dyn TextGenerationService>,
    image: Box<dyn ImageGenerationService>,
}

/// Injectable service bundle used to construct [`PosterComposer`] in tests.
pub struct ComposerServices {
    pub text: Box<dyn TextGenerationService>,
    pub image: Box<dyn ImageGenerationService>,
}

impl PosterComposer {
    pub fn with_services(services: ComposerServices) -> Self {
        Self {
            text: services.text,
            image: services.image,
        }
    }

    /// Construct Gemini-backed services from configuration.
    pub fn from_config(config: &Config) -> Self {
        // Reuse one HTTP connection pool across both clients.
        let http_client = reqwest::Client::new();

        info!("Text provider: Gemini (model: {})", config.text_model);
        let text = GeminiTextClient::new_with_client(
            config.api_key.clone(),
            config.text_model.clone(),
            http_client.clone(),
        )
        .with_base_url(config.base_url.clone())
        .with_timeout(config.text_timeout);

        info!("Image provider: Imagen (model: {})", config.image_model);
        let image = ImagenClient::new_with_client(
            config.api_key.clone(),
            config.image_model.clone(),
            http_client,
        )
        .with_base_url(config.base_url.clone())
        .with_timeout(config.image_timeout);

        Self::with_services(ComposerServices {
            text: Box::new(text),
            image: Box::new(image),
        })
    }

    /// Generate a poster using the thread-local RNG.
    pub async fn generate(&self, mood: Mood) -> Result<GeneratedPoster> {
        let params = GenerationParameters::sample(&mut rand::thread_rng());
        self.compose(mood, &params).await
    }

    /// Generate a poster with parameters drawn from `rng`.
    pub async fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        mood: Mood,
        rng: &mut R,
    ) -> Result<GeneratedPoster> {
        let params = GenerationParameters::sample(rng);
        self.compose(mood, &params).await
    }

    /// Run both generation steps for already sampled parameters.
    pub async fn compose(
        &self,
        mood: Mood,
        params: &GenerationParameters,
    ) -> Result<GeneratedPoster> {
        info!(
            "[{}] Composing poster: style={:?} location={:?} texture={:?} subjects={}",
            mood, params.art_style, params.location, params.texture, params.subject_count
        );

        let result = self.compose_inner(mood, params).await;
        if let Err(e) = &result {
            error!("[{}] Poster generation failed: {}", mood, e);
        }
        result
    }

    async fn compose_inner(
        &self,
        mood: Mood,
        params: &GenerationParameters,
    ) -> Result<GeneratedPoster> {
        let text = self.generate_text(mood, params).await?;

        let options = ImageOptions::poster();
        let image_prompt = prompts::poster_image_prompt(&text, params, &options.aspect_ratio);
        let images = self.image.generate_images(&image_prompt, &options).await?;

        let image_bytes = images
            .into_iter()
            .next()
            .filter(|bytes| !bytes.is_empty())
            .ok_or_else(|| Error::ImageGeneration("Failed to generate image".to_string()))?;
        info!("[{}] Generated image ({} bytes)", mood, image_bytes.len());

        Ok(GeneratedPoster {
            quote: text.quote,
            image_data: to_data_uri(&options.output_mime_type, &image_bytes),
            visual_description: text.visual_description,
        })
    }

    async fn generate_text(&self, mood: Mood, params: &GenerationParameters) -> Result<PosterText> {
        let prompt = prompts::poster_text_prompt(mood, params);
        let json = self
            .text
            .generate_structured(&prompt, &PosterText::response_schema())
            .await?
            .ok_or_else(|| Error::TextGeneration("Failed to generate text content".to_string()))?;

        let text = PosterText::from_json(&json)?;
        info!("[{}] Generated quote: {}", mood, text.quote);

        let words = text.quote_word_count();
        if words > QUOTE_WORD_LIMIT {
            warn!(
                "[{}] Quote has {} words, over the {}-word limit; keeping it",
                mood, words, QUOTE_WORD_LIMIT
            );
        }

        Ok(text)
    }
}
