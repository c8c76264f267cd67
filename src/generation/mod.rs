//! Image generation module.

mod provider;
pub mod providers;
mod types;

pub use provider::{ImageProvider, ImageProviderExt, RetryPolicy};
pub use types::{AspectRatio, GeneratedImage, GenerationMetadata, GenerationRequest, ImageFormat};

#[cfg(test)]
pub(crate) use provider::tests::{rate_limited, ScriptedProvider};
