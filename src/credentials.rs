//! API key lookup.
//!
//! The key is resolved from an ordered list of sources; the first source that
//! yields a non-empty value wins. Nothing is ever written back.

use crate::error::{GenIconError, Result};
use std::path::PathBuf;

/// Environment variable checked first for the Gemini API key.
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Application directory under `~/.config` that holds the key file.
pub const CONFIG_APP_DIR: &str = "mojimix";

/// A single place an API key may come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Environment variable with the given name.
    Env(String),
    /// Plain text file; surrounding whitespace is trimmed.
    File(PathBuf),
}

impl CredentialSource {
    /// Looks up this source. A missing variable or file is `Ok(None)`.
    pub fn lookup(&self) -> Result<Option<String>> {
        let value = match self {
            Self::Env(name) => std::env::var(name).ok(),
            Self::File(path) => match std::fs::read_to_string(path) {
                Ok(contents) => Some(contents),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
                Err(e) => return Err(e.into()),
            },
        };
        Ok(value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty()))
    }

    fn describe(&self) -> String {
        match self {
            Self::Env(name) => format!("set {name}"),
            Self::File(path) => format!("write the key to {}", path.display()),
        }
    }
}

/// Ordered chain of credential sources.
#[derive(Debug, Clone)]
pub struct CredentialResolver {
    sources: Vec<CredentialSource>,
}

impl CredentialResolver {
    /// Creates a resolver over the given sources, checked in order.
    pub fn new(sources: Vec<CredentialSource>) -> Self {
        Self { sources }
    }

    /// `GEMINI_API_KEY`, then `~/.config/mojimix/api_key`.
    pub fn default_chain() -> Self {
        let mut sources = vec![CredentialSource::Env(API_KEY_ENV_VAR.to_string())];
        if let Some(path) = default_key_file() {
            sources.push(CredentialSource::File(path));
        }
        Self::new(sources)
    }

    /// Returns the sources in lookup order.
    pub fn sources(&self) -> &[CredentialSource] {
        &self.sources
    }

    /// Returns the first non-empty key, or a `Config` error listing every
    /// way to provide one.
    pub fn resolve(&self) -> Result<String> {
        for source in &self.sources {
            if let Some(key) = source.lookup()? {
                tracing::debug!(?source, "resolved API key");
                return Ok(key);
            }
        }

        let remedies = self
            .sources
            .iter()
            .map(CredentialSource::describe)
            .collect::<Vec<_>>()
            .join(" or ");
        Err(GenIconError::Config(format!(
            "No API key found. {remedies}."
        )))
    }
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::default_chain()
    }
}

/// `~/.config/mojimix/api_key`, on every platform.
pub fn default_key_file() -> Option<PathBuf> {
    dirs_next::home_dir().map(|home| home.join(".config").join(CONFIG_APP_DIR).join("api_key"))
}
