// Rule-based lemmatizer.
//
// Irregular tables are consulted first, then POS-specific suffix rules.
// Verb stems are "repaired" after a suffix is stripped: doubled final
// consonants are undoubled (running -> run) and a silent e is restored
// where English spelling drops it (making -> make, creating -> create).

use super::document::PosTag;
use super::lexicon::Lexicon;

/// Lemma for a token given its part of speech.
///
/// Proper nouns keep their surface form; everything else is lowercased.
pub fn lemmatize(text: &str, pos: PosTag, lex: &Lexicon) -> String {
    let lower = text.to_lowercase();
    match pos {
        PosTag::Propn | PosTag::Num | PosTag::Sym | PosTag::Punct => text.to_string(),
        PosTag::Verb | PosTag::Aux => verb_lemma(&lower, lex),
        PosTag::Noun => noun_lemma(&lower, lex),
        PosTag::Adj => lex
            .irregular_adjective(&lower)
            .map(str::to_string)
            .unwrap_or(lower),
        PosTag::Part if lower == "n't" || lower == "n’t" => "not".to_string(),
        _ => lower,
    }
}

/// Base form of a verb.
pub fn verb_lemma(lower: &str, lex: &Lexicon) -> String {
    if let Some(base) = lex.irregular_verb(lower) {
        return base.to_string();
    }
    if lex.is_verb(lower) {
        return lower.to_string();
    }
    inflected_verb_base(lower, lex).unwrap_or_else(|| lower.to_string())
}

/// If `lower` looks like an inflection of a verb, return the base form.
///
/// Returns a result for any word with a verbal suffix, known or not; use
/// `known_verb_base` when only lexicon verbs should count.
fn inflected_verb_base(lower: &str, lex: &Lexicon) -> Option<String> {
    let len = lower.chars().count();

    if let Some(stem) = lower.strip_suffix("ies") {
        if len > 4 {
            return Some(format!("{stem}y"));
        }
    }
    if let Some(stem) = lower.strip_suffix("ied") {
        if len > 4 {
            return Some(format!("{stem}y"));
        }
    }
    if let Some(stem) = lower.strip_suffix("ing") {
        if len >= 5 && has_vowel(stem) {
            return Some(repair_stem(stem, lex));
        }
    }
    if let Some(stem) = lower.strip_suffix("ed") {
        if len >= 4 && has_vowel(stem) {
            return Some(repair_stem(stem, lex));
        }
    }
    if let Some(stem) = lower.strip_suffix("es") {
        if ["ch", "sh", "ss", "x", "zz", "o"]
            .iter()
            .any(|end| stem.ends_with(end))
        {
            return Some(stem.to_string());
        }
    }
    if let Some(stem) = lower.strip_suffix('s') {
        if len > 2 && !stem.ends_with('s') && !stem.ends_with('u') && !stem.ends_with('i') {
            return Some(stem.to_string());
        }
    }
    None
}

/// Base form of `lower` only when it is an inflection of a lexicon verb.
pub fn known_verb_base(lower: &str, lex: &Lexicon) -> Option<String> {
    if let Some(base) = lex.irregular_verb(lower) {
        return Some(base.to_string());
    }
    inflected_verb_base(lower, lex).filter(|base| lex.is_verb(base))
}

/// Base form of a noun.
pub fn noun_lemma(lower: &str, lex: &Lexicon) -> String {
    if let Some(base) = lex.irregular_noun(lower) {
        return base.to_string();
    }
    if lex.is_noun(lower) {
        return lower.to_string();
    }

    let len = lower.chars().count();
    if let Some(stem) = lower.strip_suffix("ies") {
        if len > 4 {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = lower.strip_suffix("es") {
        if ["ch", "sh", "ss", "x", "z"].iter().any(|end| stem.ends_with(end)) {
            return stem.to_string();
        }
    }
    if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        return lower.to_string();
    }
    if let Some(stem) = lower.strip_suffix('s') {
        if len > 3 {
            return stem.to_string();
        }
    }
    lower.to_string()
}

/// Turn a stripped stem back into a base verb.
fn repair_stem(stem: &str, lex: &Lexicon) -> String {
    if lex.is_verb(stem) {
        return stem.to_string();
    }
    let with_e = format!("{stem}e");
    if lex.is_verb(&with_e) {
        return with_e;
    }

    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();

    // planned -> plann -> plan, but calling -> call, passing -> pass
    if n >= 3
        && chars[n - 1] == chars[n - 2]
        && !"lsfz".contains(chars[n - 1])
        && !is_vowel(chars[n - 1])
    {
        return chars[..n - 1].iter().collect();
    }

    if needs_silent_e(&chars) {
        return with_e;
    }

    stem.to_string()
}

/// Spelling patterns where the base form ends in a dropped silent e.
fn needs_silent_e(chars: &[char]) -> bool {
    let n = chars.len();
    if n < 2 {
        return false;
    }
    let last = chars[n - 1];
    let prev = chars[n - 2];
    if last == prev {
        return false;
    }

    match last {
        // receiving, organizing, analysing, continuing
        'v' | 'z' | 'u' => true,
        // announcing, producing (but not attacking)
        'c' => true,
        // locating, operating, updating (consonant + "at")
        't' if prev == 'a' => n >= 4 && !is_vowel(chars[n - 3]),
        // acquiring, requiring, securing, enduring
        'r' if prev == 'i' || prev == 'u' => n >= 4,
        // handling, settling, struggling
        'l' if "bcdfgkptz".contains(prev) => true,
        // merging, judging, charging
        'g' if prev == 'r' || prev == 'd' => true,
        // changing, arranging, challenging
        'g' if prev == 'n' => n >= 5 && (chars[n - 3] == 'a' || chars[n - 3] == 'e'),
        // nursing, sensing, collapsing
        's' if "rnp".contains(prev) => true,
        // deciding, providing, including, exploding
        'd' if "iou".contains(prev) => n >= 5 && !is_vowel(chars[n - 3]),
        _ => false,
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| is_vowel(c) || c == 'y')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verb(word: &str) -> String {
        verb_lemma(word, &Lexicon::english())
    }

    fn noun(word: &str) -> String {
        noun_lemma(word, &Lexicon::english())
    }

    #[test]
    fn test_regular_verb_forms() {
        assert_eq!(verb("looking"), "look");
        assert_eq!(verb("buying"), "buy");
        assert_eq!(verb("looked"), "look");
        assert_eq!(verb("looks"), "look");
        assert_eq!(verb("watches"), "watch");
        assert_eq!(verb("tries"), "try");
        assert_eq!(verb("studied"), "study");
    }

    #[test]
    fn test_stem_repair() {
        assert_eq!(verb("running"), "run");
        assert_eq!(verb("planned"), "plan");
        assert_eq!(verb("making"), "make");
        assert_eq!(verb("calling"), "call");
        assert_eq!(verb("locating"), "locate");
        assert_eq!(verb("organizing"), "organize");
        assert_eq!(verb("handling"), "handle");
        assert_eq!(verb("deciding"), "decide");
    }

    #[test]
    fn test_irregular_verbs() {
        assert_eq!(verb("sat"), "sit");
        assert_eq!(verb("bought"), "buy");
        assert_eq!(verb("is"), "be");
        assert_eq!(verb("'s"), "be");
        assert_eq!(verb("went"), "go");
    }

    #[test]
    fn test_noun_plurals() {
        assert_eq!(noun("startups"), "startup");
        assert_eq!(noun("companies"), "company");
        assert_eq!(noun("boxes"), "box");
        assert_eq!(noun("churches"), "church");
        assert_eq!(noun("children"), "child");
        assert_eq!(noun("status"), "status");
        assert_eq!(noun("class"), "class");
        assert_eq!(noun("analysis"), "analysis");
        assert_eq!(noun("news"), "news");
    }

    #[test]
    fn test_lemmatize_by_pos() {
        let lex = Lexicon::english();
        assert_eq!(lemmatize("Apple", PosTag::Propn, &lex), "Apple");
        assert_eq!(lemmatize("Better", PosTag::Adj, &lex), "good");
        assert_eq!(lemmatize("Cats", PosTag::Noun, &lex), "cat");
        assert_eq!(lemmatize("n't", PosTag::Part, &lex), "not");
        assert_eq!(lemmatize("Quickly", PosTag::Adv, &lex), "quickly");
    }

    #[test]
    fn test_known_verb_base_ignores_unknown_words() {
        let lex = Lexicon::english();
        assert_eq!(known_verb_base("looking", &lex).as_deref(), Some("look"));
        assert_eq!(known_verb_base("sat", &lex).as_deref(), Some("sit"));
        assert_eq!(known_verb_base("startups", &lex), None);
    }
}
