// Analyzed document types produced by a linguistic model.
//
// An AnalyzedDocument lives for a single request: the model builds it,
// the analysis layer reads it, and it is dropped with the response.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Noun,
    Propn,
    Verb,
    Aux,
    Adj,
    Adv,
    Adp,
    Det,
    Pron,
    Cconj,
    Sconj,
    Part,
    Num,
    Punct,
    Sym,
    Intj,
    X,
}

impl PosTag {
    /// Content-bearing tags: the ones that become topical tags.
    pub fn is_content(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::Verb | PosTag::Adj)
    }
}

/// Named entity categories. The set is fixed; recognizers only ever emit
/// one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Person,
    Norp,
    Fac,
    Org,
    Gpe,
    Loc,
    Product,
    Event,
    WorkOfArt,
    Law,
    Language,
    Date,
    Time,
    Percent,
    Money,
    Quantity,
    Ordinal,
    Cardinal,
}

impl EntityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Norp => "NORP",
            EntityLabel::Fac => "FAC",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Loc => "LOC",
            EntityLabel::Product => "PRODUCT",
            EntityLabel::Event => "EVENT",
            EntityLabel::WorkOfArt => "WORK_OF_ART",
            EntityLabel::Law => "LAW",
            EntityLabel::Language => "LANGUAGE",
            EntityLabel::Date => "DATE",
            EntityLabel::Time => "TIME",
            EntityLabel::Percent => "PERCENT",
            EntityLabel::Money => "MONEY",
            EntityLabel::Quantity => "QUANTITY",
            EntityLabel::Ordinal => "ORDINAL",
            EntityLabel::Cardinal => "CARDINAL",
        }
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single token with its annotations.
///
/// `start`/`end` are character offsets into the source text (what clients
/// see); `byte_range` is the same span in bytes, used for slicing.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub pos: PosTag,
    pub is_stop: bool,
    pub sent_start: bool,
    pub start: usize,
    pub end: usize,
    pub byte_range: Range<usize>,
}

/// A contiguous run of tokens `[first, last)` with its surface text.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub first: usize,
    pub last: usize,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Build a span covering `tokens[first..last]` of `source`.
    ///
    /// The surface text is sliced from the source, so internal whitespace is
    /// preserved exactly as written.
    pub fn from_tokens(source: &str, tokens: &[Token], first: usize, last: usize) -> Self {
        debug_assert!(first < last && last <= tokens.len());
        let head = &tokens[first];
        let tail = &tokens[last - 1];
        Self {
            first,
            last,
            text: source[head.byte_range.start..tail.byte_range.end].to_string(),
            start: head.start,
            end: tail.end,
        }
    }
}

/// A span classified as a named entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySpan {
    pub span: Span,
    pub label: EntityLabel,
}

/// Everything a linguistic model knows about one text.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedDocument {
    pub text: String,
    pub tokens: Vec<Token>,
    pub entities: Vec<EntitySpan>,
    pub noun_chunks: Vec<Span>,
    /// Dense document representation used for similarity. Opaque to callers.
    pub vector: Vec<f64>,
}

impl AnalyzedDocument {
    /// Whether the model produced a usable vector for this document.
    pub fn has_vector(&self) -> bool {
        self.vector.iter().any(|v| *v != 0.0)
    }
}
