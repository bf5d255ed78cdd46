// Part-of-speech tagger.
//
// A left-to-right heuristic tagger: each token is tagged from its own shape,
// the lexicon, and the tag already assigned to the token before it. The
// order of checks matters: shape first (punctuation, numbers, clitics,
// capitalization), then closed-class words, then open-class lexicon entries,
// then suffix rules, then a NOUN default.

use super::document::PosTag;
use super::lemma::known_verb_base;
use super::lexicon::Lexicon;
use super::tokenizer::RawToken;

const MODALS: &[&str] = &[
    "will", "would", "shall", "should", "can", "could", "may", "might", "must", "ca", "wo", "do",
    "does", "did",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "ical", "less"];

/// Tag every token, in order.
pub fn tag(tokens: &[RawToken], lex: &Lexicon) -> Vec<PosTag> {
    let mut tags: Vec<PosTag> = Vec::with_capacity(tokens.len());
    for i in 0..tokens.len() {
        let context = Context::new(tokens, &tags, i);
        tags.push(tag_token(tokens, i, &context, lex));
    }
    tags
}

/// What the tagger knows about the token to the left.
struct Context {
    prev: Option<PosTag>,
    prev_lower: Option<String>,
}

impl Context {
    fn new(tokens: &[RawToken], tags: &[PosTag], i: usize) -> Self {
        if i == 0 || tokens[i].sent_start {
            return Self {
                prev: None,
                prev_lower: None,
            };
        }
        Self {
            prev: tags.get(i - 1).copied(),
            prev_lower: Some(tokens[i - 1].text.to_lowercase()),
        }
    }

    fn prev_is(&self, tag: PosTag) -> bool {
        self.prev == Some(tag)
    }

    /// Left context that makes the next word a noun (or adjective):
    /// "the ...", "big ...", "their ...", "Apple's ...".
    fn expects_nominal(&self, lex: &Lexicon) -> bool {
        match (self.prev, self.prev_lower.as_deref()) {
            (Some(PosTag::Det | PosTag::Adj), _) => true,
            (Some(PosTag::Pron), Some(word)) => lex.is_possessive(word),
            (Some(PosTag::Part), Some(word)) => word == "'s" || word == "’s",
            _ => false,
        }
    }

    /// Left context that makes the next word a verb: "they ...", "will ...",
    /// "to ...".
    fn expects_verb(&self, lex: &Lexicon) -> bool {
        match (self.prev, self.prev_lower.as_deref()) {
            (Some(PosTag::Pron), Some(word)) => {
                lex.is_personal_pronoun(word) && !lex.is_possessive(word)
            }
            (Some(PosTag::Aux), Some(word)) => MODALS.contains(&word),
            (Some(PosTag::Part), Some(word)) => word == "to" || word == "not" || word == "n't",
            _ => false,
        }
    }
}

fn tag_token(tokens: &[RawToken], i: usize, ctx: &Context, lex: &Lexicon) -> PosTag {
    let token = &tokens[i];
    let text = token.text.as_str();
    let lower = text.to_lowercase();

    if !text.chars().any(char::is_alphanumeric) {
        return if text == "&" {
            PosTag::Cconj
        } else if is_symbol(text) {
            PosTag::Sym
        } else {
            PosTag::Punct
        };
    }

    if text.starts_with(|c: char| c.is_ascii_digit()) {
        return PosTag::Num;
    }

    match lower.as_str() {
        "n't" | "n’t" => return PosTag::Part,
        "'s" | "’s" => {
            return if matches!(ctx.prev, Some(PosTag::Noun | PosTag::Propn)) {
                PosTag::Part
            } else {
                PosTag::Aux
            };
        }
        "'re" | "’re" | "'m" | "’m" | "'ve" | "’ve" | "'ll" | "’ll" | "'d" | "’d" => {
            return PosTag::Aux
        }
        "i" => return PosTag::Pron,
        _ => {}
    }

    if is_acronym(text) && matches!(lex.closed_class(&lower), None | Some(PosTag::Pron)) {
        return PosTag::Propn;
    }

    let capitalized = text.chars().next().is_some_and(char::is_uppercase);
    if capitalized {
        if !token.sent_start {
            if lex.is_month(&lower) || lex.closed_class(&lower).is_none() {
                return PosTag::Propn;
            }
        } else if looks_proper(tokens, i, &lower, lex) {
            return PosTag::Propn;
        }
    }

    if let Some(tag) = lex.closed_class(&lower) {
        return match tag {
            PosTag::Aux if lex.is_light_verb(&lower) => {
                if next_is_verbal(tokens, i, lex) {
                    PosTag::Aux
                } else {
                    PosTag::Verb
                }
            }
            PosTag::Adp if lower == "to" => match tokens.get(i + 1) {
                Some(next) if lex.is_verb(&next.text.to_lowercase()) => PosTag::Part,
                _ => PosTag::Adp,
            },
            other => other,
        };
    }

    if lex.irregular_verb(&lower).is_some() {
        return if ctx.prev_is(PosTag::Det) {
            PosTag::Noun
        } else {
            PosTag::Verb
        };
    }

    if lex.irregular_adjective(&lower).is_some() || lex.is_ordinal_word(&lower) {
        return PosTag::Adj;
    }

    if lex.is_verb(&lower) {
        if lex.is_adjective(&lower) && (ctx.expects_nominal(lex) || ctx.prev_is(PosTag::Aux)) {
            return PosTag::Adj;
        }
        if ctx.expects_nominal(lex) || ctx.prev_is(PosTag::Adp) {
            return PosTag::Noun;
        }
        return PosTag::Verb;
    }

    if known_verb_base(&lower, lex).is_some() {
        return inflected_verb_tag(&lower, ctx, lex);
    }

    if lex.is_adjective(&lower) {
        return PosTag::Adj;
    }
    if lex.is_noun(&lower) {
        return PosTag::Noun;
    }

    suffix_tag(&lower, ctx, lex)
}

/// Tag for a recognised inflection of a lexicon verb.
fn inflected_verb_tag(lower: &str, ctx: &Context, lex: &Lexicon) -> PosTag {
    if lower.ends_with("ing") {
        if ctx.expects_nominal(lex) {
            PosTag::Noun
        } else {
            PosTag::Verb
        }
    } else if lower.ends_with("ed") {
        if ctx.expects_nominal(lex) {
            PosTag::Adj
        } else {
            PosTag::Verb
        }
    } else if matches!(
        ctx.prev,
        Some(PosTag::Noun | PosTag::Propn | PosTag::Adv)
    ) || ctx.expects_verb(lex)
    {
        PosTag::Verb
    } else {
        PosTag::Noun
    }
}

/// Fallback for words no list knows about.
fn suffix_tag(lower: &str, ctx: &Context, lex: &Lexicon) -> PosTag {
    let len = lower.chars().count();

    if len > 4 && lower.ends_with("ly") {
        return PosTag::Adv;
    }
    if len > 5 && lower.ends_with("ing") {
        return if ctx.expects_nominal(lex) {
            PosTag::Noun
        } else {
            PosTag::Verb
        };
    }
    if len > 4 && lower.ends_with("ed") {
        return if ctx.expects_nominal(lex) {
            PosTag::Adj
        } else {
            PosTag::Verb
        };
    }
    if len > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PosTag::Adj;
    }
    if ctx.expects_verb(lex) {
        return PosTag::Verb;
    }
    PosTag::Noun
}

/// Sentence-initial capitalized word: is it a name or just capitalized?
fn looks_proper(tokens: &[RawToken], i: usize, lower: &str, lex: &Lexicon) -> bool {
    let next = tokens.get(i + 1);

    if lex.is_month(lower) {
        return next.is_some_and(|t| t.text.starts_with(|c: char| c.is_ascii_digit()));
    }
    if lex.closed_class(lower).is_some() {
        return false;
    }
    if lex.gazetteer(lower).is_some() || lex.is_first_name(lower) || lex.is_honorific(lower) {
        return true;
    }
    let next_capitalized = next.is_some_and(|t| {
        !t.sent_start && t.text.chars().next().is_some_and(char::is_uppercase)
    });
    !lex.knows(lower) && next_capitalized
}

/// Whether the token after a light verb ("have", "do") continues a verb
/// group, making the light verb an auxiliary.
fn next_is_verbal(tokens: &[RawToken], i: usize, lex: &Lexicon) -> bool {
    let Some(next) = tokens.get(i + 1) else {
        return false;
    };
    let next_lower = next.text.to_lowercase();

    if matches!(next_lower.as_str(), "not" | "n't" | "n’t" | "been") {
        return true;
    }
    if tokens[i].sent_start && lex.is_personal_pronoun(&next_lower) {
        return true;
    }
    if lex.is_verb(&next_lower) {
        return true;
    }
    match known_verb_base(&next_lower, lex) {
        Some(_) => {
            lex.irregular_verb(&next_lower).is_some()
                || next_lower.ends_with("ed")
                || next_lower.ends_with("en")
        }
        None => false,
    }
}

fn is_acronym(text: &str) -> bool {
    let letters = text.chars().filter(|c| c.is_alphabetic()).count();
    letters >= 2
        && text
            .chars()
            .all(|c| !c.is_alphabetic() || c.is_uppercase())
}

fn is_symbol(text: &str) -> bool {
    text.chars().all(|c| {
        matches!(
            c,
            '$' | '€' | '£' | '¥' | '%' | '+' | '=' | '#' | '@' | '°' | '©' | '®' | '™' | '<'
                | '>' | '^' | '~' | '|' | '*' | '/'
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tokenizer::Tokenizer;

    fn tags_for(text: &str) -> Vec<(String, PosTag)> {
        let lex = Lexicon::english();
        let tokens = Tokenizer::new().unwrap().tokenize(text);
        let tags = tag(&tokens, &lex);
        tokens.into_iter().map(|t| t.text).zip(tags).collect()
    }

    fn tag_of(text: &str, word: &str) -> PosTag {
        tags_for(text)
            .into_iter()
            .find(|(w, _)| w == word)
            .map(|(_, t)| t)
            .unwrap_or_else(|| panic!("{word} not in {text}"))
    }

    #[test]
    fn test_apple_sentence() {
        let tags: Vec<PosTag> = tags_for("Apple is looking at buying a UK startup.")
            .into_iter()
            .map(|(_, t)| t)
            .collect();
        assert_eq!(
            tags,
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
    fn test_cat_sentence() {
        let tags: Vec<PosTag> = tags_for("The cat sat on the mat.")
            .into_iter()
            .map(|(_, t)| t)
            .collect();
        assert_eq!(
            tags,
            vec![
                PosTag::Det,
                PosTag::Noun,
                PosTag::Verb,
                PosTag::Adp,
                PosTag::Det,
                PosTag::Noun,
                PosTag::Punct,
            ]
        );
    }

    #[test]
    fn test_context_disambiguates_verbs_and_nouns() {
        assert_eq!(tag_of("They work hard", "work"), PosTag::Verb);
        assert_eq!(tag_of("The work is done", "work"), PosTag::Noun);
        assert_eq!(tag_of("She looks tired", "looks"), PosTag::Verb);
        assert_eq!(tag_of("the building was old", "building"), PosTag::Noun);
    }

    #[test]
    fn test_light_verbs() {
        assert_eq!(tag_of("I have a cat", "have"), PosTag::Verb);
        assert_eq!(tag_of("I have seen it", "have"), PosTag::Aux);
        assert_eq!(tag_of("We did not go", "did"), PosTag::Aux);
    }

    #[test]
    fn test_capitalization() {
        assert_eq!(tag_of("We met John in Paris", "John"), PosTag::Propn);
        assert_eq!(tag_of("We met John in Paris", "Paris"), PosTag::Propn);
        assert_eq!(tag_of("Cats sleep a lot", "Cats"), PosTag::Noun);
        assert_eq!(tag_of("the US economy", "US"), PosTag::Propn);
        assert_eq!(tag_of("they told us", "us"), PosTag::Pron);
    }

    #[test]
    fn test_to_before_verb_is_particle() {
        assert_eq!(tag_of("I want to buy it", "to"), PosTag::Part);
        assert_eq!(tag_of("I went to Paris", "to"), PosTag::Adp);
    }

    #[test]
    fn test_suffix_fallbacks() {
        assert_eq!(tag_of("a dangerous plan", "dangerous"), PosTag::Adj);
        assert_eq!(tag_of("it moved quickly", "quickly"), PosTag::Adv);
        assert_eq!(tag_of("a zorblax appeared", "zorblax"), PosTag::Noun);
    }

    #[test]
    fn test_numbers_and_symbols() {
        assert_eq!(tag_of("it costs $ 5", "$"), PosTag::Sym);
        assert_eq!(tag_of("it costs $ 5", "5"), PosTag::Num);
        assert_eq!(tag_of("done.", "."), PosTag::Punct);
    }
}
