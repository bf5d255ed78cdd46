// Document vectors and similarity.
//
// Two ways to turn a document into a vector:
//   - a hashed bag of lemmas plus character trigrams, needing no model files;
//   - a sentence embedding from the ONNX MiniLM model (see embeddings.rs).
//
// Similarity is the cosine of the two document vectors, clamped to [0, 1].
// The hashed vectors only capture lexical overlap: "cat" and "kitten" are
// unrelated to it. Use the ONNX backend when semantic similarity matters.

use tracing::warn;

use super::document::{AnalyzedDocument, Token};

/// Width of a hashed document vector.
pub const HASHED_DIM: usize = 512;

/// Weight of a whole-lemma feature relative to one of its trigrams.
const LEMMA_WEIGHT: f64 = 1.0;
const TRIGRAM_WEIGHT: f64 = 0.3;

/// Hashed vector for a tagged document.
///
/// Content words (not stop words, containing a letter or digit) carry the
/// meaning. A text made only of stop words falls back to all word tokens;
/// a text with no words at all gets the zero vector.
pub fn hashed_vector(tokens: &[Token]) -> Vec<f64> {
    let is_word = |t: &&Token| t.text.chars().any(char::is_alphanumeric);

    let mut words: Vec<&Token> = tokens.iter().filter(is_word).filter(|t| !t.is_stop).collect();
    if words.is_empty() {
        words = tokens.iter().filter(is_word).collect();
    }
    if words.is_empty() {
        return vec![0.0; HASHED_DIM];
    }

    let mut vector = vec![0.0_f64; HASHED_DIM];
    for token in &words {
        let lemma = token.lemma.to_lowercase();
        vector[bucket(lemma.as_bytes())] += LEMMA_WEIGHT;

        let marked: Vec<char> = format!("^{lemma}$").chars().collect();
        for gram in marked.windows(3) {
            let gram: String = gram.iter().collect();
            vector[bucket(gram.as_bytes())] += TRIGRAM_WEIGHT;
        }
    }

    let n = words.len() as f64;
    for val in &mut vector {
        *val /= n;
    }
    vector
}

/// FNV-1a, reduced to a vector index.
fn bucket(bytes: &[u8]) -> usize {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    (hash % HASHED_DIM as u64) as usize
}

/// Cosine similarity between two vectors.
///
/// Returns 0.0 to 1.0. Mismatched lengths, empty input and zero vectors all
/// give 0.0; opposite directions clamp to 0.0.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    let denom = mag_a * mag_b;
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(0.0, 1.0)
    }
}

/// Similarity between two analyzed documents.
///
/// A document without a usable vector makes the score meaningless; that is
/// logged and scored 0.0 rather than failing the comparison.
pub fn document_similarity(a: &AnalyzedDocument, b: &AnalyzedDocument) -> f64 {
    for doc in [a, b] {
        if !doc.has_vector() {
            warn!(
                text_chars = doc.text.chars().count(),
                "Document has no vector, similarity will be 0.0"
            );
        }
    }
    if !a.has_vector() || !b.has_vector() {
        return 0.0;
    }
    cosine_similarity(&a.vector, &b.vector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::document::PosTag;

    fn token(text: &str, is_stop: bool) -> Token {
        Token {
            text: text.to_string(),
            lemma: text.to_lowercase(),
            pos: PosTag::Noun,
            is_stop,
            sent_start: false,
            start: 0,
            end: text.chars().count(),
            byte_range: 0..text.len(),
        }
    }

    fn doc(vector: Vec<f64>) -> AnalyzedDocument {
        AnalyzedDocument {
            text: "x".to_string(),
            tokens: Vec::new(),
            entities: Vec::new(),
            noun_chunks: Vec::new(),
            vector,
        }
    }

    #[test]
    fn test_cosine_identical() {
        let a = vec![1.0, 2.0, 3.0];
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_cosine_orthogonal() {
        let sim = cosine_similarity(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]);
        assert!(sim.abs() < 1e-10);
    }

    #[test]
    fn test_cosine_proportional() {
        let sim = cosine_similarity(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
        assert!((sim - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_cosine_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn test_cosine_negative_values_clamp_to_zero() {
        let sim = cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]);
        assert!(sim.abs() < f64::EPSILON, "got {sim}");
    }

    #[test]
    fn test_cosine_is_symmetric() {
        let a = vec![1.0, 3.0, -2.0, 0.5];
        let b = vec![2.0, -1.0, 4.0, 0.0];
        assert!((cosine_similarity(&a, &b) - cosine_similarity(&b, &a)).abs() < 1e-10);
    }

    #[test]
    fn test_hashed_vector_ignores_stop_words() {
        let with_stops = hashed_vector(&[token("the", true), token("cat", false)]);
        let without = hashed_vector(&[token("cat", false)]);
        assert!((cosine_similarity(&with_stops, &without) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_hashed_vector_falls_back_to_stop_words() {
        let v = hashed_vector(&[token("it", true), token("is", true)]);
        assert!(v.iter().any(|x| *x != 0.0));
    }

    #[test]
    fn test_hashed_vector_of_punctuation_is_zero() {
        let v = hashed_vector(&[token("!", false), token("?", false)]);
        assert_eq!(v.len(), HASHED_DIM);
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_shared_words_raise_similarity() {
        let a = hashed_vector(&[token("cat", false), token("mat", false)]);
        let b = hashed_vector(&[token("cat", false), token("rug", false)]);
        let c = hashed_vector(&[token("stock", false), token("market", false)]);
        assert!(cosine_similarity(&a, &b) > cosine_similarity(&a, &c));
    }

    #[test]
    fn test_document_similarity_without_vector_is_zero() {
        let a = doc(vec![0.0; 4]);
        let b = doc(vec![1.0, 0.0, 0.0, 0.0]);
        assert_eq!(document_similarity(&a, &b), 0.0);
        assert_eq!(document_similarity(&b, &a), 0.0);
    }

    #[test]
    fn test_document_similarity_identical_vectors() {
        let a = doc(vec![0.2, 0.4, 0.1]);
        assert!((document_similarity(&a, &a.clone()) - 1.0).abs() < 1e-10);
    }
}
