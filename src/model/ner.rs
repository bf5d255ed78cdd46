// Named entity recognition over tagged tokens.
//
// Two kinds of entity are recognised:
//   - numeric and temporal expressions (MONEY, PERCENT, DATE, ORDINAL,
//     CARDINAL), matched from token shapes;
//   - names: maximal runs of proper nouns, labeled from the gazetteer,
//     organisation/place suffixes, honorifics and first names.
//
// Entities never overlap and are returned left to right.

use super::document::{EntityLabel, EntitySpan, PosTag, Span, Token};
use super::lexicon::Lexicon;

/// Lowercase words allowed inside a name: "Bank of America", "Procter & Gamble".
const NAME_CONNECTORS: &[&str] = &["of", "&", "de", "del", "da", "van", "von", "la", "le"];

/// Verbs of speech that mark the word before them as a person.
const SPEECH_VERBS: &[&str] = &["said", "says", "told", "tells", "wrote", "asked", "added"];

const CURRENCY_SYMBOLS: &[&str] = &["$", "€", "£", "¥"];

/// Find entity spans in a tagged document.
pub fn recognize(source: &str, tokens: &[Token], lex: &Lexicon) -> Vec<EntitySpan> {
    let mut entities = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let found = money(tokens, i, lex)
            .or_else(|| percent(tokens, i))
            .or_else(|| date(tokens, i, lex))
            .or_else(|| ordinal(tokens, i, lex))
            .or_else(|| cardinal(tokens, i))
            .or_else(|| name(tokens, i, lex));

        match found {
            Some((start, end, label)) => {
                entities.push(EntitySpan {
                    span: Span::from_tokens(source, tokens, start, end),
                    label,
                });
                i = end;
            }
            None => i += 1,
        }
    }

    entities
}

type Match = Option<(usize, usize, EntityLabel)>;

fn lower(token: &Token) -> String {
    token.text.to_lowercase()
}

/// Token at `i` continues the current sentence.
fn continues(tokens: &[Token], i: usize) -> Option<&Token> {
    tokens.get(i).filter(|t| !t.sent_start)
}

fn is_digits(token: &Token) -> bool {
    token.text.starts_with(|c: char| c.is_ascii_digit())
}

fn is_number(token: &Token) -> bool {
    token.pos == PosTag::Num
}

/// "$5", "$ 3.5 million", "40 dollars", "two million euros"
fn money(tokens: &[Token], i: usize, lex: &Lexicon) -> Match {
    let token = &tokens[i];

    if CURRENCY_SYMBOLS.contains(&token.text.as_str()) {
        if !continues(tokens, i + 1).is_some_and(is_number) {
            return None;
        }
        let mut end = i + 2;
        if continues(tokens, end).is_some_and(|t| lex.is_magnitude(&lower(t))) {
            end += 1;
        }
        return Some((i, end, EntityLabel::Money));
    }

    if is_number(token) {
        let mut end = i + 1;
        if continues(tokens, end).is_some_and(|t| lex.is_magnitude(&lower(t))) {
            end += 1;
        }
        if continues(tokens, end).is_some_and(|t| lex.is_currency_word(&lower(t))) {
            return Some((i, end + 1, EntityLabel::Money));
        }
    }

    None
}

/// "12%", "3.5 percent"
fn percent(tokens: &[Token], i: usize) -> Match {
    if !is_number(&tokens[i]) {
        return None;
    }
    let next = continues(tokens, i + 1)?;
    if next.text == "%" || next.text.eq_ignore_ascii_case("percent") {
        Some((i, i + 2, EntityLabel::Percent))
    } else {
        None
    }
}

/// "March 3, 2024", "3 March", "Monday", "yesterday", "in 1999"
fn date(tokens: &[Token], i: usize, lex: &Lexicon) -> Match {
    let token = &tokens[i];
    let word = lower(token);

    if lex.is_relative_day(&word) {
        return Some((i, i + 1, EntityLabel::Date));
    }
    if token.pos == PosTag::Propn && lex.is_weekday(&word) {
        return Some((i, i + 1, EntityLabel::Date));
    }

    // "3 March 2024"
    if is_day_number(token) {
        let month = continues(tokens, i + 1)?;
        if month.pos == PosTag::Propn && lex.is_month(&lower(month)) {
            let end = extend_with_year(tokens, i + 2);
            return Some((i, end, EntityLabel::Date));
        }
    }

    if token.pos == PosTag::Propn && lex.is_month(&word) {
        let mut end = i + 1;
        if continues(tokens, end).is_some_and(is_day_number) {
            end += 1;
        }
        let end = extend_with_year(tokens, end);
        return Some((i, end, EntityLabel::Date));
    }

    if is_year(token) {
        return Some((i, i + 1, EntityLabel::Date));
    }

    None
}

/// Absorb a trailing year, with or without a comma before it.
fn extend_with_year(tokens: &[Token], end: usize) -> usize {
    match continues(tokens, end) {
        Some(t) if is_year(t) => end + 1,
        Some(t) if t.text == "," => match continues(tokens, end + 1) {
            Some(year) if is_year(year) => end + 2,
            _ => end,
        },
        _ => end,
    }
}

fn is_year(token: &Token) -> bool {
    token.text.len() == 4
        && token.text.chars().all(|c| c.is_ascii_digit())
        && token
            .text
            .parse::<u32>()
            .is_ok_and(|y| (1000..=2999).contains(&y))
}

fn is_day_number(token: &Token) -> bool {
    let digits: String = token
        .text
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    !digits.is_empty()
        && digits.len() <= 2
        && digits.parse::<u32>().is_ok_and(|d| (1..=31).contains(&d))
        && matches!(
            &token.text[digits.len()..],
            "" | "st" | "nd" | "rd" | "th"
        )
}

/// "21st", "third"
fn ordinal(tokens: &[Token], i: usize, lex: &Lexicon) -> Match {
    let token = &tokens[i];
    let word = lower(token);
    let numeric_ordinal = is_digits(token)
        && ["st", "nd", "rd", "th"].iter().any(|s| word.ends_with(s));
    if numeric_ordinal || lex.is_ordinal_word(&word) {
        Some((i, i + 1, EntityLabel::Ordinal))
    } else {
        None
    }
}

/// "42", "two million", "1,200"
fn cardinal(tokens: &[Token], i: usize) -> Match {
    if !is_number(&tokens[i]) {
        return None;
    }
    let mut end = i + 1;
    while continues(tokens, end).is_some_and(is_number) {
        end += 1;
    }
    Some((i, end, EntityLabel::Cardinal))
}

/// A run of proper nouns, optionally preceded by an honorific.
fn name(tokens: &[Token], i: usize, lex: &Lexicon) -> Match {
    if tokens[i].pos != PosTag::Propn {
        return None;
    }

    // The title in "Dr. Jane Smith" is not part of the name.
    let mut start = i;
    let titled = lex.is_honorific(&lower(&tokens[i]));
    if titled {
        let next = continues(tokens, i + 1)?;
        if next.pos != PosTag::Propn {
            return None;
        }
        start = i + 1;
    }

    let mut end = start + 1;
    loop {
        match continues(tokens, end) {
            Some(t) if t.pos == PosTag::Propn && !lex.is_honorific(&lower(t)) => end += 1,
            Some(t)
                if NAME_CONNECTORS.contains(&lower(t).as_str())
                    && continues(tokens, end + 1).is_some_and(|n| n.pos == PosTag::Propn) =>
            {
                end += 2
            }
            _ => break,
        }
    }

    let label = label_name(tokens, start, end, titled, lex);
    Some((start, end, label))
}

fn label_name(
    tokens: &[Token],
    start: usize,
    end: usize,
    titled: bool,
    lex: &Lexicon,
) -> EntityLabel {
    if titled {
        return EntityLabel::Person;
    }

    let words: Vec<String> = tokens[start..end].iter().map(lower).collect();
    let joined = words.join(" ");
    if let Some(label) = lex.gazetteer(&joined) {
        return label;
    }

    let first = words[0].as_str();
    let last = words[words.len() - 1].as_str();

    if lex.is_org_suffix(last) || first == "university" {
        return EntityLabel::Org;
    }
    if words.len() > 1 {
        if let Some(label) = lex.place_suffix(last) {
            return label;
        }
    }
    if lex.is_first_name(first) {
        return EntityLabel::Person;
    }
    if words.len() > 1 && lex.gazetteer(first) == Some(EntityLabel::Org) {
        return EntityLabel::Org;
    }

    let single = &tokens[start];
    if words.len() == 1 {
        let letters = single.text.chars().filter(|c| c.is_alphabetic());
        if letters.clone().count() >= 2 && letters.clone().all(char::is_uppercase) {
            return EntityLabel::Org;
        }
        if first.ends_with("ese") || first.ends_with("ian") {
            return EntityLabel::Norp;
        }
    }

    let followed_by_speech = continues(tokens, end)
        .is_some_and(|t| SPEECH_VERBS.contains(&lower(t).as_str()));
    if followed_by_speech || (2..=3).contains(&words.len()) {
        EntityLabel::Person
    } else {
        EntityLabel::Org
    }
}
