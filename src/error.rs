//! Error handling and custom error types
//!
//! Provides unified error handling across the crate using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The text service returned no text, or text that does not match the
    /// poster schema.
    #[error("Text generation error: {0}")]
    TextGeneration(String),

    /// The image service returned no usable image.
    #[error("Image generation error: {0}")]
    ImageGeneration(String),

    #[error("AI provider error: {0}")]
    AiProvider(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown mood: {0}")]
    InvalidMood(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display_includes_detail() {
        let err = Error::Timeout("imagen-4.0-generate-001 after 50ms".to_string());
        assert_eq!(
            err.to_string(),
            "Request timed out: imagen-4.0-generate-001 after 50ms"
        );
    }

    #[test]
    fn test_display_includes_detail() {
        let err = Error::InvalidMood("Grumpy".to_string());
        assert_eq!(err.to_string(), "Unknown mood: Grumpy");
    }
}
