use rkyv::{Archive, Deserialize, Serialize};
use crate::unit::UnitFlags;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One candidate analysis of a surface form.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UnitFields"))]
#[archive(check_bytes)]
pub struct LexicalUnit {
    lemma: String,
    /// Bracketed tag run such as `<n><f><sg>`. Echoes the lemma for unknown units.
    symbols: String,
    flags: UnitFlags,
}

/// Unchecked wire form of a [`LexicalUnit`].
#[cfg(feature = "serde")]
#[derive(SerdeDeserialize)]
struct UnitFields {
    lemma: String,
    symbols: String,
    flags: UnitFlags,
}

/// A deserialised unit broke the unknown/space invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidUnit {
    SpaceWithoutUnknown,
    UnknownSymbolsDiffer,
}

impl fmt::Display for InvalidUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidUnit::SpaceWithoutUnknown => f.write_str("space token not marked unknown"),
            InvalidUnit::UnknownSymbolsDiffer => f.write_str("unknown unit whose symbols differ from its lemma"),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<UnitFields> for LexicalUnit {
    type Error = InvalidUnit;

    fn try_from(fields: UnitFields) -> Result<Self, Self::Error> {
        LexicalUnit::from_parts(fields.lemma, fields.symbols, fields.flags)
    }
}

impl LexicalUnit {
    pub fn analysis(lemma: impl Into<String>, symbols: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            symbols: symbols.into(),
            flags: UnitFlags::empty(),
        }
    }

    pub fn unknown(surface_form: &str) -> Self {
        Self {
            lemma: surface_form.into(),
            symbols: surface_form.into(),
            flags: UnitFlags::UNKNOWN,
        }
    }

    pub fn space(surface_form: &str) -> Self {
        Self {
            lemma: surface_form.into(),
            symbols: surface_form.into(),
            flags: UnitFlags::UNKNOWN | UnitFlags::SPACE_TOKEN,
        }
    }

    /// Rebuilds a unit from stored parts, rejecting combinations the
    /// constructors above never produce.
    pub fn from_parts(lemma: String, symbols: String, flags: UnitFlags) -> Result<Self, InvalidUnit> {
        if flags.contains(UnitFlags::SPACE_TOKEN) && !flags.contains(UnitFlags::UNKNOWN) {
            return Err(InvalidUnit::SpaceWithoutUnknown);
        }
        if flags.contains(UnitFlags::UNKNOWN) && symbols != lemma {
            return Err(InvalidUnit::UnknownSymbolsDiffer);
        }
        Ok(Self { lemma, symbols, flags })
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn symbols(&self) -> &str {
        &self.symbols
    }

    pub fn flags(&self) -> UnitFlags {
        self.flags
    }

    pub fn is_unknown(&self) -> bool {
        self.flags.contains(UnitFlags::UNKNOWN)
    }

    pub fn is_space_token(&self) -> bool {
        self.flags.contains(UnitFlags::SPACE_TOKEN)
    }
}

/// A surface form together with its ambiguity set, in stream order.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Entry {
    pub surface_form: String,
    pub analyses: Vec<LexicalUnit>,
}

impl Entry {
    pub fn new(surface_form: impl Into<String>, analyses: Vec<LexicalUnit>) -> Self {
        Self {
            surface_form: surface_form.into(),
            analyses,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        self.analyses.len() > 1
    }
}

/// A token as emitted by an external tagger, optionally already lemmatised.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct TaggedToken {
    pub lexeme: String,
    pub tag: String,
    pub lemma: Option<String>,
}

impl TaggedToken {
    pub fn new(lexeme: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            lexeme: lexeme.into(),
            tag: tag.into(),
            lemma: None,
        }
    }

    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = Some(lemma.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct TagPair {
    pub source: String,
    pub target: String,
}

/// Source-tag to target-tag table, kept sorted by source tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct TagLexicon {
    pub version: u32,
    pairs: Vec<TagPair>,
}

impl TagLexicon {
    /// Builds a lexicon from pairs in file order. When a source tag repeats,
    /// the last pair wins.
    pub fn from_pairs<I>(version: u32, pairs: I) -> Self
    where
        I: IntoIterator<Item = TagPair>,
    {
        let mut sorted: Vec<TagPair> = pairs.into_iter().collect();
        sorted.sort_by(|a, b| a.source.cmp(&b.source));

        let mut deduped: Vec<TagPair> = Vec::with_capacity(sorted.len());
        for pair in sorted {
            match deduped.last_mut() {
                Some(last) if last.source == pair.source => *last = pair,
                _ => deduped.push(pair),
            }
        }

        Self { version, pairs: deduped }
    }

    pub fn get(&self, source: &str) -> Option<&str> {
        self.pairs
            .binary_search_by(|pair| pair.source.as_str().cmp(source))
            .ok()
            .map(|i| self.pairs[i].target.as_str())
    }

    pub fn pairs(&self) -> &[TagPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl ArchivedTagLexicon {
    pub fn get(&self, source: &str) -> Option<&str> {
        self.pairs
            .binary_search_by(|pair| pair.source.as_str().cmp(source))
            .ok()
            .map(|i| self.pairs[i].target.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
