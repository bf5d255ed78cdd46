// Document analyzer — reduces one text to entities, key phrases and tags.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::AnalysisError;
use crate::model::{AnalyzedDocument, EntityLabel, LinguisticModel};

/// A named entity as reported to clients. Offsets are in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

/// Structured signals extracted from one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSignals {
    pub entities: Vec<Entity>,
    pub key_phrases: Vec<String>,
    /// Deduplicated; serialized in sorted order so output is stable.
    pub tags: BTreeSet<String>,
}

/// Analyze `text` and extract its signals.
pub fn analyze(model: &dyn LinguisticModel, text: &str) -> Result<DocumentSignals, AnalysisError> {
    let doc = model.analyze(text)?;
    Ok(DocumentSignals {
        entities: extract_entities(&doc),
        key_phrases: extract_key_phrases(&doc),
        tags: extract_tags(&doc),
    })
}

/// Every entity span, in model order.
pub fn extract_entities(doc: &AnalyzedDocument) -> Vec<Entity> {
    doc.entities
        .iter()
        .map(|e| Entity {
            text: e.span.text.clone(),
            label: e.label,
            start: e.span.start,
            end: e.span.end,
        })
        .collect()
}

/// Surface text of every noun chunk, duplicates kept.
pub fn extract_key_phrases(doc: &AnalyzedDocument) -> Vec<String> {
    doc.noun_chunks.iter().map(|c| c.text.clone()).collect()
}

/// Lemmas of noun, verb and adjective tokens.
pub fn extract_tags(doc: &AnalyzedDocument) -> BTreeSet<String> {
    doc.tokens
        .iter()
        .filter(|t| t.pos.is_content())
        .map(|t| t.lemma.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntitySpan, PosTag, Span, Token};

    fn token(text: &str, lemma: &str, pos: PosTag, start: usize) -> Token {
        let end = start + text.chars().count();
        Token {
            text: text.to_string(),
            lemma: lemma.to_string(),
            pos,
            is_stop: false,
            sent_start: start == 0,
            start,
            end,
            byte_range: start..end,
        }
    }

    fn span(text: &str, first: usize, last: usize, start: usize) -> Span {
        Span {
            first,
            last,
            text: text.to_string(),
            start,
            end: start + text.chars().count(),
        }
    }

    /// "Dogs chase dogs" with a repeated chunk and repeated lemma.
    fn sample() -> AnalyzedDocument {
        AnalyzedDocument {
            text: "Dogs chase dogs".to_string(),
            tokens: vec![
                token("Dogs", "dog", PosTag::Noun, 0),
                token("chase", "chase", PosTag::Verb, 5),
                token("dogs", "dog", PosTag::Noun, 11),
            ],
            entities: vec![
                EntitySpan {
                    span: span("Dogs", 0, 1, 0),
                    label: EntityLabel::Org,
                },
                EntitySpan {
                    span: span("dogs", 2, 3, 11),
                    label: EntityLabel::Org,
                },
            ],
            noun_chunks: vec![span("Dogs", 0, 1, 0), span("dogs", 2, 3, 11)],
            vector: vec![1.0],
        }
    }

    #[test]
    fn test_entities_keep_order_and_duplicates() {
        let entities = extract_entities(&sample());
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].text, "Dogs");
        assert_eq!((entities[1].start, entities[1].end), (11, 15));
    }

    #[test]
    fn test_key_phrases_keep_duplicates() {
        assert_eq!(extract_key_phrases(&sample()), vec!["Dogs", "dogs"]);
    }

    #[test]
    fn test_tags_are_a_set_of_content_lemmas() {
        let tags: Vec<String> = extract_tags(&sample()).into_iter().collect();
        assert_eq!(tags, vec!["chase", "dog"]);
    }

    #[test]
    fn test_tags_skip_function_words() {
        let mut doc = sample();
        doc.tokens.push(token("the", "the", PosTag::Det, 16));
        doc.tokens.push(token("quickly", "quickly", PosTag::Adv, 20));
        doc.tokens.push(token("big", "big", PosTag::Adj, 28));
        let tags = extract_tags(&doc);
        assert!(!tags.contains("the"));
        assert!(!tags.contains("quickly"));
        assert!(tags.contains("big"));
    }

    #[test]
    fn test_signals_serialize_with_wire_names() {
        let signals = DocumentSignals {
            entities: extract_entities(&sample()),
            key_phrases: extract_key_phrases(&sample()),
            tags: extract_tags(&sample()),
        };
        let json = serde_json::to_value(&signals).unwrap();
        assert_eq!(json["entities"][0]["label"], "ORG");
        assert_eq!(json["entities"][0]["start"], 0);
        assert_eq!(json["key_phrases"][1], "dogs");
        assert_eq!(json["tags"], serde_json::json!(["chase", "dog"]));
    }
}
