use alloc::string::String;

use ltbridge_protocol::TaggedToken;

use crate::{MappedTag, TagLookup, TagMapper};

/// Supplies the lemma for a token the tagger left unlemmatised.
pub trait Lemmatizer {
    fn lemmatize(&self, lexeme: &str, tag: &str) -> String;
}

impl<F> Lemmatizer for F
where
    F: Fn(&str, &str) -> String,
{
    fn lemmatize(&self, lexeme: &str, tag: &str) -> String {
        self(lexeme, tag)
    }
}

/// Falls back to the lower-cased lexeme.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseLemmatizer;

impl Lemmatizer for LowercaseLemmatizer {
    fn lemmatize(&self, lexeme: &str, _tag: &str) -> String {
        lexeme.to_lowercase()
    }
}

/// Accumulates `^lemma<tags>$ ` records.
#[derive(Debug)]
pub struct ApertiumWriter<'m> {
    mapper: &'m TagMapper,
    out: String,
    unmapped: usize,
}

impl<'m> ApertiumWriter<'m> {
    pub fn new(mapper: &'m TagMapper) -> Self {
        Self {
            mapper,
            out: String::new(),
            unmapped: 0,
        }
    }

    /// Maps `source_tag` and appends one record. The returned tag is what was written.
    pub fn push<L: TagLookup + ?Sized>(&mut self, lemma: &str, source_tag: &str, lookup: &L) -> MappedTag {
        let tag = self.mapper.resolve(lemma, source_tag, lookup);
        if !tag.is_mapped() {
            self.unmapped += 1;
        }

        self.out.push('^');
        self.out.push_str(lemma);
        match &tag {
            MappedTag::Mapped(target) => self.out.push_str(target),
            MappedTag::Unmapped { source } => {
                self.out.push_str(crate::NOT_MAPPED_PREFIX);
                self.out.push_str(source);
            }
        }
        self.out.push_str("$ ");

        tag
    }

    pub fn unmapped(&self) -> usize {
        self.unmapped
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Converts tagger output to an Apertium stream. Tokens carrying a lemma keep
/// it; the others are lemmatised on the fly.
pub fn to_apertium<Z, L>(tokens: &[TaggedToken], lemmatizer: &Z, mapper: &TagMapper, lookup: &L) -> String
where
    Z: Lemmatizer + ?Sized,
    L: TagLookup + ?Sized,
{
    let mut writer = ApertiumWriter::new(mapper);
    for token in tokens {
        match &token.lemma {
            Some(lemma) => writer.push(lemma, &token.tag, lookup),
            None => {
                let lemma = lemmatizer.lemmatize(&token.lexeme, &token.tag);
                writer.push(&lemma, &token.tag, lookup)
            }
        };
    }
    writer.finish()
}
