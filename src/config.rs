//! Run settings read from the environment.

use crate::error::{GenIconError, Result};
use crate::generation::providers::GeminiModel;
use crate::generation::RetryPolicy;
use crate::icon::{MacIconStyle, PipelineConfig};
use std::path::PathBuf;

/// Output directory used when `GENICON_OUTPUT_DIR` is unset.
pub const DEFAULT_OUTPUT_DIR: &str = "src-tauri/icons";

/// Settings for one run of the generator.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory receiving the icon files.
    pub output_dir: PathBuf,
    /// Gemini model to ask.
    pub model: GeminiModel,
    /// Retry behavior for rate-limited requests.
    pub retry: RetryPolicy,
    /// Image post-processing settings.
    pub pipeline: PipelineConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            model: GeminiModel::default(),
            retry: RetryPolicy::default(),
            pipeline: PipelineConfig::default(),
        }
    }
}

impl Settings {
    /// Reads `GENICON_OUTPUT_DIR`, `GENICON_MODEL`, `GENICON_MAX_ATTEMPTS`
    /// and `GENICON_MACOS_ICON` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds settings from an arbitrary variable lookup. Unset or blank
    /// variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut settings = Self::default();

        if let Some(dir) = get("GENICON_OUTPUT_DIR") {
            settings.output_dir = PathBuf::from(dir);
        }
        if let Some(model) = get("GENICON_MODEL") {
            settings.model = model.parse()?;
        }
        if let Some(attempts) = get("GENICON_MAX_ATTEMPTS") {
            let attempts: u32 = attempts.trim().parse().map_err(|_| {
                GenIconError::Config(format!(
                    "GENICON_MAX_ATTEMPTS must be a positive integer, got '{attempts}'"
                ))
            })?;
            if attempts == 0 {
                return Err(GenIconError::Config(
                    "GENICON_MAX_ATTEMPTS must be at least 1".into(),
                ));
            }
            settings.retry.max_attempts = attempts;
        }
        if let Some(style) = get("GENICON_MACOS_ICON") {
            settings.pipeline.mac_style = style.parse::<MacIconStyle>()?;
        }

        Ok(settings)
    }
}
