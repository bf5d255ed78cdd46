// Linguistic model provider.
//
// The analysis core depends only on the `LinguisticModel` trait. This module
// also ships the one concrete provider, a rule-and-lexicon English pipeline,
// and `load` which builds it once at startup.

pub mod chunker;
pub mod document;
pub mod download;
pub mod embeddings;
pub mod english;
pub mod lemma;
pub mod lexicon;
pub mod ner;
pub mod tagger;
pub mod tokenizer;
pub mod traits;
pub mod vectors;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::{Config, VectorBackend};

pub use document::{AnalyzedDocument, EntityLabel, EntitySpan, PosTag, Span, Token};
pub use english::EnglishModel;
pub use traits::LinguisticModel;

/// Build the configured model.
///
/// For the ONNX backend the embedding files are downloaded first if missing
/// (with one retry). Any failure here is fatal: the server must not start
/// without a model.
pub async fn load(config: &Config) -> Result<Arc<dyn LinguisticModel>> {
    let model = match config.vector_backend {
        VectorBackend::Hashed => EnglishModel::hashed()?,
        VectorBackend::Onnx => {
            download::ensure_embedding_model(&config.model_dir).await?;
            let embed_dir = download::embedding_model_dir(&config.model_dir);
            let embedder = tokio::task::spawn_blocking(move || {
                embeddings::SentenceEmbedder::load(&embed_dir)
            })
            .await
            .context("Model loading task panicked")??;
            EnglishModel::with_embedder(embedder)?
        }
    };

    info!(model = model.name(), "Linguistic model loaded");
    Ok(Arc::new(model))
}
