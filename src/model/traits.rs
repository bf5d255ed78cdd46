// Linguistic model trait — the swap-ready abstraction.
//
// The analysis core only ever talks to this trait. The bundled
// implementation is a rule-and-lexicon English pipeline, but anything that
// can tag, chunk, recognize entities and embed text can stand in for it.

use anyhow::Result;

use super::document::AnalyzedDocument;
use super::vectors;

/// Trait for turning raw text into an AnalyzedDocument and comparing two of
/// them.
///
/// Implementations are built once at startup and shared read-only across
/// concurrent requests, hence `Send + Sync` and `&self` everywhere. Inference
/// is synchronous and CPU-bound; async callers should run it on a blocking
/// thread.
pub trait LinguisticModel: Send + Sync {
    /// Short human-readable identifier, reported by the health endpoint.
    fn name(&self) -> &str;

    /// Tokenize, tag, lemmatize, chunk and recognize entities in `text`.
    fn analyze(&self, text: &str) -> Result<AnalyzedDocument>;

    /// Similarity of two documents in [0, 1].
    ///
    /// Default implementation is cosine similarity of the document vectors.
    fn similarity(&self, a: &AnalyzedDocument, b: &AnalyzedDocument) -> Result<f64> {
        Ok(vectors::document_similarity(a, b))
    }
}
