// Noun chunker — base noun phrases from tagged tokens.
//
// A chunk is an optional determiner or possessive, any number of
// adjective/number/noun modifiers, and a nominal head. Possessive "'s"
// continues the phrase ("Apple's new phone"). A personal pronoun on its
// own is also a chunk. Chunks never nest and never cross a sentence start.

use super::document::{PosTag, Span, Token};
use super::lexicon::Lexicon;

/// Find noun chunks in a tagged document, left to right.
pub fn chunk(source: &str, tokens: &[Token], lex: &Lexicon) -> Vec<Span> {
    let mut chunks = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if let Some(end) = pronoun_chunk(tokens, i, lex).or_else(|| nominal_run(tokens, i, lex)) {
            chunks.push(Span::from_tokens(source, tokens, i, end));
            i = end;
        } else {
            i += 1;
        }
    }

    chunks
}

fn lower(token: &Token) -> String {
    token.text.to_lowercase()
}

/// "she", "them", but not "her" in "her car".
fn pronoun_chunk(tokens: &[Token], i: usize, lex: &Lexicon) -> Option<usize> {
    let token = &tokens[i];
    let word = lower(token);
    if token.pos != PosTag::Pron || !lex.is_personal_pronoun(&word) {
        return None;
    }
    if lex.is_possessive(&word) && opens_phrase(tokens.get(i + 1)) {
        return None;
    }
    Some(i + 1)
}

fn opens_phrase(token: Option<&Token>) -> bool {
    token.is_some_and(|t| {
        !t.sent_start && matches!(t.pos, PosTag::Adj | PosTag::Num | PosTag::Noun | PosTag::Propn)
    })
}

/// End (exclusive) of the noun phrase starting at `i`, if there is one.
fn nominal_run(tokens: &[Token], i: usize, lex: &Lexicon) -> Option<usize> {
    let first = &tokens[i];
    let mut j = i;

    let is_opener = first.pos == PosTag::Det
        || (first.pos == PosTag::Pron && lex.is_possessive(&lower(first)));
    if is_opener {
        j += 1;
    }

    let mut head: Option<usize> = None;
    // Modifiers are allowed until the first head, and again after "'s".
    let mut modifiers_open = true;

    while let Some(token) = tokens.get(j) {
        if j > i && token.sent_start {
            break;
        }
        match token.pos {
            PosTag::Noun | PosTag::Propn => {
                head = Some(j);
                modifiers_open = false;
            }
            PosTag::Adj | PosTag::Num if modifiers_open => {}
            PosTag::Adv
                if modifiers_open
                    && tokens
                        .get(j + 1)
                        .is_some_and(|next| next.pos == PosTag::Adj) => {}
            PosTag::Part if head.is_some() && matches!(token.text.as_str(), "'s" | "’s") => {
                modifiers_open = true;
            }
            _ => break,
        }
        j += 1;
    }

    head.map(|h| h + 1)
}

#[cfg(test)]
mod tests {
    use crate::model::english::EnglishModel;
    use crate::model::LinguisticModel;

    fn chunks(text: &str) -> Vec<String> {
        let model = EnglishModel::hashed().unwrap();
        let doc = model.analyze(text).unwrap();
        doc.noun_chunks.into_iter().map(|c| c.text).collect()
    }

    #[test]
    fn test_determiner_adjective_noun() {
        assert_eq!(
            chunks("Apple is looking at buying a UK startup."),
            vec!["Apple", "a UK startup"]
        );
        assert_eq!(chunks("The cat sat on the mat."), vec!["The cat", "the mat"]);
    }

    #[test]
    fn test_pronouns_are_chunks() {
        assert_eq!(chunks("She bought it"), vec!["She", "it"]);
    }

    #[test]
    fn test_possessive_pronoun_opens_phrase() {
        assert_eq!(chunks("They sold their old house"), vec!["They", "their old house"]);
    }

    #[test]
    fn test_possessive_clitic_continues_phrase() {
        assert_eq!(
            chunks("Apple's new phone is fast"),
            vec!["Apple's new phone"]
        );
    }

    #[test]
    fn test_chunk_offsets_match_source() {
        let model = EnglishModel::hashed().unwrap();
        let text = "The cat sat on the mat.";
        let doc = model.analyze(text).unwrap();
        let mat = &doc.noun_chunks[1];
        assert_eq!((mat.start, mat.end), (15, 22));
        assert_eq!(&text[15..22], "the mat");
    }

    #[test]
    fn test_no_chunks_without_nouns() {
        assert!(chunks("Run quickly!").is_empty());
    }
}
