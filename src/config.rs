use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Default listen address and port for `serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Which document vector backend the English pipeline uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorBackend {
    /// Local ONNX sentence embedder (default). Downloaded on first use.
    Onnx,
    /// Hashed lemma features. No model files, lexical similarity only.
    Hashed,
}

impl FromStr for VectorBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "onnx" => Ok(VectorBackend::Onnx),
            "hashed" => Ok(VectorBackend::Hashed),
            other => anyhow::bail!(
                "Unknown GLEAN_VECTORS backend '{}'. Expected 'onnx' or 'hashed'.",
                other
            ),
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Which vector backend to use (default: Onnx)
    pub vector_backend: VectorBackend,
    /// Directory containing the ONNX model files
    pub model_dir: PathBuf,
    /// Address the HTTP server binds to
    pub bind: String,
    /// Port the HTTP server listens on
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable has a default; only malformed values are errors.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let vector_backend = match lookup("GLEAN_VECTORS") {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => VectorBackend::Onnx,
        };

        let model_dir = lookup("GLEAN_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(crate::model::download::default_model_dir);

        let port = match lookup("GLEAN_PORT") {
            Some(value) => value
                .trim()
                .parse()
                .with_context(|| format!("GLEAN_PORT must be a port number, got '{}'", value))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            vector_backend,
            model_dir,
            bind: lookup("GLEAN_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string()),
            port,
        })
    }
}
