//! Demotivational poster generator
//!
//! Turns a mood into a sarcastic quote, a weird scene description and a
//! matching image by composing prompts for Gemini text and Imagen image
//! generation.

pub mod ai;
pub mod composer;
pub mod error;
pub mod models;
pub mod mood;
pub mod params;
pub mod prompts;

pub use composer::{ComposerServices, PosterComposer};
pub use error::{Error, Result};
pub use models::{Config, GeneratedPoster};
pub use mood::Mood;
