// Unit tests for the linguistic model provider through its public API.
//
// Covers model loading from config, the default similarity on the trait,
// and the token-level annotations the analysis core relies on.

use std::path::PathBuf;

use glean::config::{Config, VectorBackend};
use glean::model::{self, AnalyzedDocument, EnglishModel, LinguisticModel, PosTag};

fn hashed_config() -> Config {
    Config {
        vector_backend: VectorBackend::Hashed,
        model_dir: PathBuf::from("/nonexistent/glean-models"),
        bind: "127.0.0.1".to_string(),
        port: 0,
    }
}

fn pos_of(doc: &AnalyzedDocument) -> Vec<PosTag> {
    doc.tokens.iter().map(|t| t.pos).collect()
}

// ============================================================
// Loading
// ============================================================

#[tokio::test]
async fn load_hashed_backend_needs_no_files() {
    let model = model::load(&hashed_config()).await.unwrap();
    assert_eq!(model.name(), "en-rules-hashed");
    let doc = model.analyze("Hello world").unwrap();
    assert_eq!(doc.tokens.len(), 2);
}

#[tokio::test]
async fn loaded_model_is_shareable_across_threads() {
    let model = model::load(&hashed_config()).await.unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let model = model.clone();
            tokio::task::spawn_blocking(move || model.analyze("The cat sat on the mat.").unwrap())
        })
        .collect();

    let mut docs = Vec::new();
    for handle in handles {
        docs.push(handle.await.unwrap());
    }
    assert!(docs.windows(2).all(|w| w[0] == w[1]));
}

// ============================================================
// Default similarity
// ============================================================

#[test]
fn default_similarity_is_bounded() {
    let m = EnglishModel::hashed().unwrap();
    let a = m.analyze("Apple is looking at buying a UK startup.").unwrap();
    let b = m.analyze("The cat sat on the mat.").unwrap();
    let sim = m.similarity(&a, &b).unwrap();
    assert!((0.0..=1.0).contains(&sim), "got {sim}");
}

#[test]
fn default_similarity_of_vectorless_document_is_zero() {
    let m = EnglishModel::hashed().unwrap();
    let empty = m.analyze("").unwrap();
    let full = m.analyze("The cat sat on the mat.").unwrap();
    assert!(!empty.has_vector());
    assert_eq!(m.similarity(&empty, &full).unwrap(), 0.0);
}

// ============================================================
// Token annotations
// ============================================================

#[test]
fn apple_sentence_part_of_speech() {
    let doc = EnglishModel::hashed()
        .unwrap()
        .analyze("Apple is looking at buying a UK startup.")
        .unwrap();
    assert_eq!(
        pos_of(&doc),
        vec![
            PosTag::Propn,
            PosTag::Aux,
            PosTag::Verb,
            PosTag::Adp,
            PosTag::Verb,
            PosTag::Det,
            PosTag::Propn,
            PosTag::Noun,
            PosTag::Punct,
        ]
    );
}

#[test]
fn lemmas_follow_part_of_speech() {
    let doc = EnglishModel::hashed()
        .unwrap()
        .analyze("The children were running to the shops.")
        .unwrap();
    let lemmas: Vec<&str> = doc.tokens.iter().map(|t| t.lemma.as_str()).collect();
    assert_eq!(
        lemmas,
        vec!["the", "child", "be", "run", "to", "the", "shop", "."]
    );
}

#[test]
fn stop_words_are_flagged() {
    let doc = EnglishModel::hashed()
        .unwrap()
        .analyze("The cat sat on the mat.")
        .unwrap();
    let stops: Vec<bool> = doc.tokens.iter().map(|t| t.is_stop).collect();
    assert!(stops[0]);
    assert!(!stops[1]);
    assert!(stops[3]);
}

#[test]
fn token_offsets_are_characters_not_bytes() {
    let doc = EnglishModel::hashed()
        .unwrap()
        .analyze("naïve café owners")
        .unwrap();
    let offsets: Vec<(usize, usize)> = doc.tokens.iter().map(|t| (t.start, t.end)).collect();
    assert_eq!(offsets, vec![(0, 5), (6, 10), (11, 17)]);
}
