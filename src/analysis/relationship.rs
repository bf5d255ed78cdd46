// Relationship scorer — similarity, classification and shared entities for
// a pair of texts.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::document::extract_entities;
use super::AnalysisError;
use crate::model::{AnalyzedDocument, EntityLabel, LinguisticModel};

/// Strictly above this: very_similar.
pub const VERY_SIMILAR_THRESHOLD: f64 = 0.8;
/// Strictly above this (and not very_similar): related.
pub const RELATED_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    VerySimilar,
    Related,
    SomewhatRelated,
}

impl RelationshipType {
    /// Classify a similarity score. Boundaries are exclusive: 0.8 is
    /// `Related`, 0.6 is `SomewhatRelated`.
    pub fn classify(similarity: f64) -> Self {
        if similarity > VERY_SIMILAR_THRESHOLD {
            RelationshipType::VerySimilar
        } else if similarity > RELATED_THRESHOLD {
            RelationshipType::Related
        } else {
            RelationshipType::SomewhatRelated
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::VerySimilar => "very_similar",
            RelationshipType::Related => "related",
            RelationshipType::SomewhatRelated => "somewhat_related",
        }
    }
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entity present in both texts, identified by text and label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SharedEntity {
    pub text: String,
    pub label: EntityLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipResult {
    pub similarity: f64,
    pub relationship_type: RelationshipType,
    pub shared_entities: BTreeSet<SharedEntity>,
}

/// Compare two texts.
pub fn compare(
    model: &dyn LinguisticModel,
    text1: &str,
    text2: &str,
) -> Result<RelationshipResult, AnalysisError> {
    let doc1 = model.analyze(text1)?;
    let doc2 = model.analyze(text2)?;

    let similarity = checked_similarity(model.similarity(&doc1, &doc2)?)?;
    let relationship_type = RelationshipType::classify(similarity);
    let shared_entities = shared_entities(&doc1, &doc2);

    debug!(
        similarity,
        relationship = relationship_type.as_str(),
        shared = shared_entities.len(),
        "Compared texts"
    );

    Ok(RelationshipResult {
        similarity,
        relationship_type,
        shared_entities,
    })
}

/// Entities whose (text, label) pair occurs in both documents.
pub fn shared_entities(a: &AnalyzedDocument, b: &AnalyzedDocument) -> BTreeSet<SharedEntity> {
    let pairs = |doc: &AnalyzedDocument| -> BTreeSet<SharedEntity> {
        extract_entities(doc)
            .into_iter()
            .map(|e| SharedEntity {
                text: e.text,
                label: e.label,
            })
            .collect()
    };
    let left = pairs(a);
    let right = pairs(b);
    left.intersection(&right).cloned().collect()
}

/// Reject scores a classifier can't place.
fn checked_similarity(similarity: f64) -> Result<f64, AnalysisError> {
    if similarity.is_finite() && (0.0..=1.0).contains(&similarity) {
        Ok(similarity)
    } else {
        Err(AnalysisError::InvalidSimilarity(similarity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(RelationshipType::classify(1.0), RelationshipType::VerySimilar);
        assert_eq!(RelationshipType::classify(0.801), RelationshipType::VerySimilar);
        assert_eq!(RelationshipType::classify(0.8), RelationshipType::Related);
        assert_eq!(RelationshipType::classify(0.61), RelationshipType::Related);
        assert_eq!(RelationshipType::classify(0.6), RelationshipType::SomewhatRelated);
        assert_eq!(RelationshipType::classify(0.0), RelationshipType::SomewhatRelated);
    }

    #[test]
    fn test_relationship_type_wire_names() {
        let json = serde_json::to_string(&RelationshipType::SomewhatRelated).unwrap();
        assert_eq!(json, "\"somewhat_related\"");
        assert_eq!(RelationshipType::VerySimilar.to_string(), "very_similar");
    }

    #[test]
    fn test_checked_similarity_rejects_nonsense() {
        assert!(checked_similarity(0.5).is_ok());
        assert!(checked_similarity(0.0).is_ok());
        assert!(checked_similarity(1.0).is_ok());
        assert!(matches!(
            checked_similarity(f64::NAN),
            Err(AnalysisError::InvalidSimilarity(_))
        ));
        assert!(checked_similarity(1.5).is_err());
        assert!(checked_similarity(-0.1).is_err());
    }
}
