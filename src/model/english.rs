// The bundled English pipeline.
//
// tokenize → tag → lemmatize → entities → noun chunks → document vector.
// Everything except the ONNX embedder is deterministic and needs no files.

use anyhow::Result;
use tracing::debug;

use super::chunker;
use super::document::{AnalyzedDocument, Token};
use super::embeddings::SentenceEmbedder;
use super::lemma::lemmatize;
use super::lexicon::Lexicon;
use super::ner;
use super::tagger;
use super::tokenizer::Tokenizer;
use super::traits::LinguisticModel;
use super::vectors::hashed_vector;

/// Where document vectors come from.
enum VectorSource {
    Hashed,
    Onnx(SentenceEmbedder),
}

pub struct EnglishModel {
    tokenizer: Tokenizer,
    lexicon: Lexicon,
    vectors: VectorSource,
}

impl EnglishModel {
    /// Pipeline with hashed lemma vectors. Needs no model files.
    pub fn hashed() -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new()?,
            lexicon: Lexicon::english(),
            vectors: VectorSource::Hashed,
        })
    }

    /// Pipeline with sentence-embedding vectors.
    pub fn with_embedder(embedder: SentenceEmbedder) -> Result<Self> {
        Ok(Self {
            vectors: VectorSource::Onnx(embedder),
            ..Self::hashed()?
        })
    }

    /// Tokenize, tag and lemmatize.
    fn annotate(&self, text: &str) -> Vec<Token> {
        let raw = self.tokenizer.tokenize(text);
        let tags = tagger::tag(&raw, &self.lexicon);

        raw.into_iter()
            .zip(tags)
            .map(|(token, pos)| {
                let lemma = lemmatize(&token.text, pos, &self.lexicon);
                let is_stop = self.lexicon.is_stop(&token.text.to_lowercase());
                Token {
                    text: token.text,
                    lemma,
                    pos,
                    is_stop,
                    sent_start: token.sent_start,
                    start: token.start,
                    end: token.end,
                    byte_range: token.byte_range,
                }
            })
            .collect()
    }
}

impl LinguisticModel for EnglishModel {
    fn name(&self) -> &str {
        match self.vectors {
            VectorSource::Hashed => "en-rules-hashed",
            VectorSource::Onnx(_) => "en-rules-minilm",
        }
    }

    fn analyze(&self, text: &str) -> Result<AnalyzedDocument> {
        let tokens = self.annotate(text);
        let entities = ner::recognize(text, &tokens, &self.lexicon);
        let noun_chunks = chunker::chunk(text, &tokens, &self.lexicon);

        let vector = match &self.vectors {
            VectorSource::Hashed => hashed_vector(&tokens),
            VectorSource::Onnx(embedder) => embedder.embed(text)?,
        };

        debug!(
            tokens = tokens.len(),
            entities = entities.len(),
            chunks = noun_chunks.len(),
            "Analyzed document"
        );

        Ok(AnalyzedDocument {
            text: text.to_string(),
            tokens,
            entities,
            noun_chunks,
            vector,
        })
    }
}
