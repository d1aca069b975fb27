pub mod client;
pub mod image;
pub mod text;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::GeminiHttpClient;
pub use image::ImagenClient;
pub use text::GeminiTextClient;
