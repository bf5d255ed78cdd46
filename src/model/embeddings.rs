// Sentence embeddings using all-MiniLM-L6-v2.
//
// The hashed document vectors only see shared words. This module embeds the
// whole text into a 384-dimensional vector with a sentence transformer, so
// "the kitten slept" and "a cat was sleeping" land close together.
//
// The model runs locally via ONNX. Mean pooling is applied to the token
// embeddings (matching the model's training).

use std::path::Path;
use std::sync::{Mutex, PoisonError};

use anyhow::{Context, Result};
use ort::session::Session;
use ort::value::Tensor;
use tokenizers::Tokenizer;
use tracing::debug;

/// Embedding dimension for all-MiniLM-L6-v2.
pub const EMBEDDING_DIM: usize = 384;

/// Sentence embedder using a local ONNX model.
///
/// The session needs `&mut` to run, so it sits behind a mutex; the
/// tokenizer is read-only and shared freely.
pub struct SentenceEmbedder {
    session: Mutex<Session>,
    tokenizer: Tokenizer,
}

impl SentenceEmbedder {
    /// Load the sentence embedding model and tokenizer from the given directory.
    ///
    /// Expects `model.onnx` and `tokenizer.json` in the directory.
    pub fn load(model_dir: &Path) -> Result<Self> {
        let model_path = model_dir.join("model.onnx");
        let tokenizer_path = model_dir.join("tokenizer.json");

        if !model_path.exists() {
            anyhow::bail!(
                "Embedding model not found: {}\nRun `glean download-model` to download it.",
                model_path.display()
            );
        }
        if !tokenizer_path.exists() {
            anyhow::bail!(
                "Embedding tokenizer not found: {}\nRun `glean download-model` to download it.",
                tokenizer_path.display()
            );
        }

        let session = Session::builder()
            .context("Failed to create ONNX session builder")?
            .commit_from_file(&model_path)
            .with_context(|| {
                format!(
                    "Failed to load embedding model from {}",
                    model_path.display()
                )
            })?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| anyhow::anyhow!("Failed to load embedding tokenizer: {}", e))?;

        debug!(
            "Loaded sentence embedding model from {}",
            model_dir.display()
        );

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
        })
    }

    /// Embed one text into a 384-dimensional vector.
    ///
    /// Blocking: callers on an async runtime should run this inside
    /// `spawn_blocking`.
    pub fn embed(&self, text: &str) -> Result<Vec<f64>> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))?;

        let ids = encoding.get_ids();
        let seq_len = ids.len();
        if seq_len == 0 {
            return Ok(vec![0.0; EMBEDDING_DIM]);
        }

        // BERT inputs: token ids, attention mask, and all-zero token types
        // for single-sentence input.
        let input_ids: Vec<i64> = ids.iter().map(|&id| id as i64).collect();
        let attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();
        let token_type_ids = vec![0i64; seq_len];

        let shape = [1_i64, seq_len as i64];
        let input_ids_tensor =
            Tensor::from_array((shape, input_ids)).context("Failed to create input_ids tensor")?;
        let attention_mask_tensor = Tensor::from_array((shape, attention_mask.clone()))
            .context("Failed to create attention_mask tensor")?;
        let token_type_ids_tensor = Tensor::from_array((shape, token_type_ids))
            .context("Failed to create token_type_ids tensor")?;

        // Output is last_hidden_state: [1, seq_len, 384]
        let hidden_states = {
            let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);

            let outputs = session
                .run(ort::inputs! {
                    "input_ids" => input_ids_tensor,
                    "attention_mask" => attention_mask_tensor,
                    "token_type_ids" => token_type_ids_tensor
                })
                .context("Embedding ONNX inference failed")?;

            let (_shape, data) = outputs[0]
                .try_extract_tensor::<f32>()
                .context("Failed to extract embedding output tensor")?;

            data.to_vec()
        };

        let embedding = mean_pool(&hidden_states, &attention_mask);
        debug!(tokens = seq_len, dim = EMBEDDING_DIM, "Computed sentence embedding");
        Ok(embedding)
    }
}

/// Average token embeddings, weighted by the attention mask.
fn mean_pool(hidden_states: &[f32], attention_mask: &[i64]) -> Vec<f64> {
    let mut sum = vec![0.0_f64; EMBEDDING_DIM];
    let mut mask_sum = 0.0_f64;

    for (j, &mask) in attention_mask.iter().enumerate() {
        if mask <= 0 {
            continue;
        }
        let weight = mask as f64;
        mask_sum += weight;
        let offset = j * EMBEDDING_DIM;
        let Some(row) = hidden_states.get(offset..offset + EMBEDDING_DIM) else {
            break;
        };
        for (acc, &val) in sum.iter_mut().zip(row) {
            *acc += val as f64 * weight;
        }
    }

    if mask_sum > 0.0 {
        for val in &mut sum {
            *val /= mask_sum;
        }
    }
    sum
}
