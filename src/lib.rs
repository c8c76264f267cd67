#![warn(missing_docs)]
//! GenIcon - app icon sets from an AI-generated image.
//!
//! The crate asks Gemini for an image on a solid green backdrop, keys the
//! backdrop out, crops and squares the subject, and writes the icon files a
//! Tauri app bundle expects.
//!
//! # Quick Start
//!
//! ```no_run
//! use genicon::{
//!     CredentialResolver, GeminiProvider, GenerationRequest, IconPipeline, RetryPolicy,
//!     DEFAULT_ICON_PROMPT,
//! };
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> genicon::Result<()> {
//!     let api_key = CredentialResolver::default_chain().resolve()?;
//!     let provider = GeminiProvider::builder().api_key(api_key).build()?;
//!
//!     genicon::generate_icon_set(
//!         &provider,
//!         &GenerationRequest::new(DEFAULT_ICON_PROMPT),
//!         &RetryPolicy::default(),
//!         &IconPipeline::default(),
//!         Path::new("src-tauri/icons"),
//!     )
//!     .await?;
//!     Ok(())
//! }
//! ```
//!
//! # Outputs
//!
//! | file | contents |
//! |---|---|
//! | `32x32.png` | 32px PNG |
//! | `128x128.png` | 128px PNG |
//! | `128x128@2x.png` | 256px PNG |
//! | `icon.ico` | 16, 32, 48, 64, 128 and 256px frames |
//! | `icon.icns` | Apple icon family (`icns` feature) or a 128px PNG stand-in |
//!
//! # Features
//!
//! - `icns`: real macOS icon families via the `icns` crate
//! - `cli`: the `genicon` binary

pub mod config;
pub mod credentials;
mod error;
pub mod generation;
pub mod icon;
mod workflow;

// Re-export error types at crate root
pub use error::{GenIconError, Result};

pub use config::Settings;
pub use credentials::{CredentialResolver, CredentialSource};
pub use generation::providers::{GeminiModel, GeminiProvider, GeminiProviderBuilder};
pub use generation::{
    AspectRatio, GeneratedImage, GenerationMetadata, GenerationRequest, ImageFormat,
    ImageProvider, ImageProviderExt, RetryPolicy,
};
pub use icon::{IconPipeline, IconSet, MacIconStyle, PipelineConfig, DEFAULT_ICON_PROMPT};
pub use workflow::generate_icon_set;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{GenIconError, Result};
    pub use crate::generation::providers::GeminiProvider;
    pub use crate::generation::{
        GeneratedImage, GenerationRequest, ImageProvider, ImageProviderExt, RetryPolicy,
    };
    pub use crate::icon::{IconPipeline, PipelineConfig};
}
