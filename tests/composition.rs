// Composition tests — the bundled English pipeline wired into the analysis
// core, end to end.
//
// These run the real tokenizer, tagger, entity recognizer and chunker with
// the hashed vector backend, so they need no model files or network.

use glean::analysis::{self, RelationshipType, SharedEntity};
use glean::model::{EnglishModel, EntityLabel};

fn model() -> EnglishModel {
    EnglishModel::hashed().unwrap()
}

// ============================================================
// Chain: text -> pipeline -> document signals
// ============================================================

#[test]
fn apple_sentence_yields_entities_phrases_and_tags() {
    let signals = analysis::analyze(&model(), "Apple is looking at buying a UK startup.").unwrap();

    assert_eq!(signals.entities.len(), 2);
    assert_eq!(signals.entities[0].text, "Apple");
    assert_eq!(signals.entities[0].label, EntityLabel::Org);
    assert_eq!((signals.entities[0].start, signals.entities[0].end), (0, 5));
    assert_eq!(signals.entities[1].text, "UK");
    assert_eq!(signals.entities[1].label, EntityLabel::Gpe);
    assert_eq!((signals.entities[1].start, signals.entities[1].end), (29, 31));

    assert_eq!(signals.key_phrases, vec!["Apple", "a UK startup"]);

    let tags: Vec<&str> = signals.tags.iter().map(String::as_str).collect();
    assert_eq!(tags, vec!["buy", "look", "startup"]);
}

#[test]
fn signals_serialize_to_the_wire_shape() {
    let signals = analysis::analyze(&model(), "Apple is looking at buying a UK startup.").unwrap();
    let json = serde_json::to_value(&signals).unwrap();

    assert_eq!(
        json["entities"][0],
        serde_json::json!({ "text": "Apple", "label": "ORG", "start": 0, "end": 5 })
    );
    assert_eq!(json["key_phrases"][1], "a UK startup");
    assert!(json["tags"].is_array());
}

#[test]
fn entity_offsets_stay_within_the_text() {
    let text = "Dr. Müller flew from Zürich to New York on Monday with €3 million.";
    let signals = analysis::analyze(&model(), text).unwrap();
    let chars = text.chars().count();

    assert!(!signals.entities.is_empty());
    for entity in &signals.entities {
        assert!(entity.start <= entity.end && entity.end <= chars, "{entity:?}");
        let slice: String = text
            .chars()
            .skip(entity.start)
            .take(entity.end - entity.start)
            .collect();
        assert_eq!(slice, entity.text);
    }
}

#[test]
fn repeated_analysis_is_identical() {
    let text = "The British government announced new rules for Google on 3 March 2024.";
    let first = serde_json::to_string(&analysis::analyze(&model(), text).unwrap()).unwrap();
    let second = serde_json::to_string(&analysis::analyze(&model(), text).unwrap()).unwrap();
    assert_eq!(first, second);
}

// ============================================================
// Chain: two texts -> pipeline -> relationship
// ============================================================

#[test]
fn identical_texts_are_very_similar() {
    let text = "The cat sat on the mat.";
    let result = analysis::compare(&model(), text, text).unwrap();

    assert!(result.similarity > 0.999, "got {}", result.similarity);
    assert!(result.similarity <= 1.0);
    assert_eq!(result.relationship_type, RelationshipType::VerySimilar);
    assert!(result.shared_entities.is_empty());
}

#[test]
fn shared_entities_found_across_texts() {
    let result = analysis::compare(
        &model(),
        "Apple bought a startup in London.",
        "Apple opened a store in London.",
    )
    .unwrap();

    let shared: Vec<SharedEntity> = result.shared_entities.into_iter().collect();
    assert_eq!(
        shared,
        vec![
            SharedEntity {
                text: "Apple".to_string(),
                label: EntityLabel::Org
            },
            SharedEntity {
                text: "London".to_string(),
                label: EntityLabel::Gpe
            },
        ]
    );
}

#[test]
fn unrelated_texts_score_below_related_ones() {
    let m = model();
    let base = "Investors bought shares in the technology company.";
    let close = analysis::compare(&m, base, "Investors sold shares in the technology company.")
        .unwrap();
    let far = analysis::compare(&m, base, "My grandmother bakes bread every Sunday morning.")
        .unwrap();

    assert!(close.similarity > far.similarity);
    assert_eq!(far.relationship_type, RelationshipType::SomewhatRelated);
}

#[test]
fn comparison_is_symmetric_with_the_real_pipeline() {
    let m = model();
    let a = "Tim Cook visited Paris in June.";
    let b = "Paris hosted a technology summit.";
    let forward = analysis::compare(&m, a, b).unwrap();
    let backward = analysis::compare(&m, b, a).unwrap();

    assert!((forward.similarity - backward.similarity).abs() < 1e-12);
    assert_eq!(forward.relationship_type, backward.relationship_type);
    assert_eq!(forward.shared_entities, backward.shared_entities);
}

#[test]
fn punctuation_only_text_scores_zero() {
    let result = analysis::compare(&model(), "?!", "The cat sat on the mat.").unwrap();
    assert_eq!(result.similarity, 0.0);
    assert_eq!(result.relationship_type, RelationshipType::SomewhatRelated);
}
