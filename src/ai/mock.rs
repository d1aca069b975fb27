use super::{ImageGenerationService, TextGenerationService};
use crate::models::{ImageOptions, PosterText};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Smallest JPEG-looking payload: SOI marker, APP0 marker, EOI marker.
pub const TINY_JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0xFF, 0xD9];

#[derive(Clone)]
enum TextReply {
    Text(Option<String>),
    Failure(String),
}

/// Scripted text service. Replies cycle in insertion order.
#[derive(Clone)]
pub struct MockTextGenerationClient {
    replies: Arc<Mutex<Vec<TextReply>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockTextGenerationClient {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_poster_text(self, quote: &str, visual_description: &str) -> Self {
        let text = PosterText {
            quote: quote.to_string(),
            visual_description: visual_description.to_string(),
        };
        let json = serde_json::to_string(&text).unwrap_or_default();
        self.with_raw_response(Some(json))
    }

    /// Reply with exactly this payload; `None` simulates a response with no text.
    pub fn with_raw_response(self, response: Option<String>) -> Self {
        self.replies.lock().unwrap().push(TextReply::Text(response));
        self
    }

    pub fn with_failure(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push(TextReply::Failure(message.to_string()));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockTextGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerationService for MockTextGenerationClient {
    async fn generate_structured(
        &self,
        prompt: &str,
        _schema: &serde_json::Value,
    ) -> Result<Option<String>> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        self.prompts.lock().unwrap().push(prompt.to_string());

        let replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Ok(Some(
                r#"{"quote":"Be the problem","visualDescription":"A felt possum in a void"}"#
                    .to_string(),
            ));
        }

        match &replies[(*count - 1) % replies.len()] {
            TextReply::Text(text) => Ok(text.clone()),
            TextReply::Failure(message) => Err(Error::AiProvider(message.clone())),
        }
    }
}

/// Scripted image service. Replies cycle in insertion order.
#[derive(Clone)]
pub struct MockImageGenerationClient {
    image_responses: Arc<Mutex<Vec<Vec<Vec<u8>>>>>,
    requests: Arc<Mutex<Vec<(String, ImageOptions)>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockImageGenerationClient {
    pub fn new() -> Self {
        Self {
            image_responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_image_response(self, response: Vec<u8>) -> Self {
        self.image_responses.lock().unwrap().push(vec![response]);
        self
    }

    /// Simulate a response carrying zero images.
    pub fn with_no_images(self) -> Self {
        self.image_responses.lock().unwrap().push(Vec::new());
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Prompts and options received, in call order.
    pub fn requests(&self) -> Vec<(String, ImageOptions)> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockImageGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageGenerationClient {
    async fn generate_images(&self, prompt: &str, options: &ImageOptions) -> Result<Vec<Vec<u8>>> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        self.requests
            .lock()
            .unwrap()
            .push((prompt.to_string(), options.clone()));

        let responses = self.image_responses.lock().unwrap();
        if responses.is_empty() {
            Ok(vec![TINY_JPEG.to_vec()])
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
