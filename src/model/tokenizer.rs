// Tokenizer — splits raw text into words, numbers and punctuation.
//
// One regex does the coarse split; two small fix-ups follow it:
// clitics ("n't", "'s", "'re", ...) are peeled off their host word, and
// title abbreviations ("Mr.", "Dr.", "Inc.") keep their trailing period so
// they don't end a sentence.
//
// Offsets are tracked both in bytes (for slicing) and in characters (what
// the API reports), so multi-byte text never produces split code points.

use std::ops::Range;

use anyhow::{Context, Result};
use regex_lite::Regex;

/// Characters that may appear inside a word. Everything except whitespace,
/// ASCII punctuation and the common typographic quotes and dashes.
const WORD_CHAR: &str = r"[^\s\x{A0}\x21-\x2F\x3A-\x40\x5B-\x60\x7B-\x7E—–“”‘’…«»]";

/// Clitics split from the end of a word, checked in order.
const CLITICS: [&str; 14] = [
    "n't", "n’t", "'s", "’s", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'d", "’d", "'m", "’m",
];

/// Abbreviations that absorb a following period.
const ABBREVIATIONS: [&str; 22] = [
    "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "inc", "corp", "ltd", "co", "vs", "etc",
    "gen", "gov", "sen", "rep", "mt", "ft", "dept", "est",
];

/// A token before tagging: surface text plus position.
#[derive(Debug, Clone, PartialEq)]
pub struct RawToken {
    pub text: String,
    pub byte_range: Range<usize>,
    pub start: usize,
    pub end: usize,
    pub sent_start: bool,
}

pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        let pattern = format!(
            r"[A-Za-z](?:\.[A-Za-z])+\.?|\d+(?:[.,:/]\d+)*(?:st|nd|rd|th)?|{w}+(?:['’\-]{w}+)*|\S",
            w = WORD_CHAR
        );
        let pattern = Regex::new(&pattern).context("Failed to compile tokenizer pattern")?;
        Ok(Self { pattern })
    }

    /// Split `text` into tokens in source order.
    pub fn tokenize(&self, text: &str) -> Vec<RawToken> {
        let mut pieces: Vec<Range<usize>> = Vec::new();
        let mut pos = 0;

        while let Some(m) = self.pattern.find_at(text, pos) {
            let mut range = m.range();
            if text[range.end..].starts_with('.') && is_abbreviation(&text[range.clone()]) {
                range.end += 1;
            }
            pos = range.end;
            split_clitic(text, range, &mut pieces);
        }

        let mut tokens = Vec::with_capacity(pieces.len());
        let mut chars_seen = 0;
        let mut bytes_seen = 0;
        let mut sent_start = true;

        for range in pieces {
            chars_seen += text[bytes_seen..range.start].chars().count();
            let piece = &text[range.clone()];
            let len = piece.chars().count();

            tokens.push(RawToken {
                text: piece.to_string(),
                byte_range: range.clone(),
                start: chars_seen,
                end: chars_seen + len,
                sent_start,
            });

            chars_seen += len;
            bytes_seen = range.end;
            sent_start = matches!(piece, "." | "!" | "?" | "…");
        }

        tokens
    }
}

fn is_abbreviation(word: &str) -> bool {
    ABBREVIATIONS
        .iter()
        .any(|abbr| abbr.eq_ignore_ascii_case(word))
}

/// Push `range` onto `out`, split in two if the word ends with a clitic.
fn split_clitic(text: &str, range: Range<usize>, out: &mut Vec<Range<usize>>) {
    let word_len = range.end - range.start;
    for clitic in CLITICS {
        if word_len <= clitic.len() {
            continue;
        }
        let cut = range.end - clitic.len();
        if text.is_char_boundary(cut) && text[cut..range.end].eq_ignore_ascii_case(clitic) {
            out.push(range.start..cut);
            out.push(cut..range.end);
            return;
        }
    }
    out.push(range);
}
