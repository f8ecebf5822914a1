use alloc::collections::BTreeMap;
use alloc::string::String;
use core::fmt;

use ltbridge_protocol::{ArchivedTagLexicon, TagLexicon};

/// Rendered in place of a target tag when the lexicon has no entry.
pub const NOT_MAPPED_PREFIX: &str = "<NOT MAPPED>:";

/// Read-only source-tag to target-tag table consulted by the mapper.
pub trait TagLookup {
    fn lookup(&self, source_tag: &str) -> Option<&str>;
}

impl<T: TagLookup + ?Sized> TagLookup for &T {
    fn lookup(&self, source_tag: &str) -> Option<&str> {
        (**self).lookup(source_tag)
    }
}

impl TagLookup for TagLexicon {
    fn lookup(&self, source_tag: &str) -> Option<&str> {
        self.get(source_tag)
    }
}

impl TagLookup for ArchivedTagLexicon {
    fn lookup(&self, source_tag: &str) -> Option<&str> {
        self.get(source_tag)
    }
}

impl TagLookup for BTreeMap<String, String> {
    fn lookup(&self, source_tag: &str) -> Option<&str> {
        self.get(source_tag).map(String::as_str)
    }
}

#[cfg(feature = "std")]
impl<S: std::hash::BuildHasher> TagLookup for std::collections::HashMap<String, String, S> {
    fn lookup(&self, source_tag: &str) -> Option<&str> {
        self.get(source_tag).map(String::as_str)
    }
}

/// Outcome of mapping one source tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappedTag {
    Mapped(String),
    /// Keeps the source tag so the gap shows up in the output.
    Unmapped { source: String },
}

impl MappedTag {
    pub fn is_mapped(&self) -> bool {
        matches!(self, MappedTag::Mapped(_))
    }
}

impl fmt::Display for MappedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappedTag::Mapped(target) => f.write_str(target),
            MappedTag::Unmapped { source } => write!(f, "{}{}", NOT_MAPPED_PREFIX, source),
        }
    }
}
