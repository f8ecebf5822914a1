#![no_std]

#[macro_use]
extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

use alloc::string::{String, ToString};

pub mod apertium;
pub mod lookup;
pub mod overrides;

pub use apertium::{to_apertium, ApertiumWriter, Lemmatizer, LowercaseLemmatizer};
pub use lookup::{MappedTag, TagLookup, NOT_MAPPED_PREFIX};
pub use overrides::{LemmaOverride, ICELANDIC_VERB_OVERRIDES, LEXICAL_VERB};

/// Maps source tags to target tags and applies lemma-conditioned category
/// overrides to the result.
#[derive(Debug, Clone, Copy)]
pub struct TagMapper {
    overrides: &'static [LemmaOverride],
}

impl TagMapper {
    pub const fn new() -> Self {
        Self::with_overrides(ICELANDIC_VERB_OVERRIDES)
    }

    pub const fn with_overrides(overrides: &'static [LemmaOverride]) -> Self {
        Self { overrides }
    }

    pub fn overrides(&self) -> &'static [LemmaOverride] {
        self.overrides
    }

    pub fn resolve<L: TagLookup + ?Sized>(&self, lemma: &str, source_tag: &str, lookup: &L) -> MappedTag {
        match lookup.lookup(source_tag) {
            Some(target) => MappedTag::Mapped(self.apply_overrides(lemma, target)),
            None => MappedTag::Unmapped {
                source: source_tag.to_string(),
            },
        }
    }

    /// Like [`resolve`](Self::resolve), rendered to the output tag string.
    pub fn map_tag<L: TagLookup + ?Sized>(&self, lemma: &str, source_tag: &str, lookup: &L) -> String {
        self.resolve(lemma, source_tag, lookup).to_string()
    }

    fn apply_overrides(&self, lemma: &str, target: &str) -> String {
        let lemma = lemma.to_lowercase();

        // Only the first rule that matches both lemma and marker fires.
        self.overrides
            .iter()
            .find(|rule| rule.lemma == lemma && target.contains(rule.marker))
            .map(|rule| target.replacen(rule.marker, rule.replacement, 1))
            .unwrap_or_else(|| target.to_string())
    }
}

impl Default for TagMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a tag with the built-in override table.
pub fn map_tag<L: TagLookup + ?Sized>(lemma: &str, source_tag: &str, lookup: &L) -> String {
    TagMapper::new().map_tag(lemma, source_tag, lookup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use ltbridge_protocol::{TagLexicon, TagPair};
    use proptest::prelude::*;

    fn lookup(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(s, t)| (s.to_string(), t.to_string()))
            .collect()
    }

    #[test]
    fn test_absent_mapping_sentinel() {
        let table = lookup(&[]);
        assert_eq!(map_tag("hestur", "nkeng", &table), "<NOT MAPPED>:nkeng");
    }

    #[test]
    fn test_unmapped_keeps_source_verbatim() {
        // The override never touches the sentinel, even for an override lemma.
        let table = lookup(&[]);
        assert_eq!(map_tag("vera", "<vblex>", &table), "<NOT MAPPED>:<vblex>");
    }

    #[test]
    fn test_plain_mapping() {
        let table = lookup(&[("nkeng", "<n><m><sg><nom>")]);
        assert_eq!(map_tag("hestur", "nkeng", &table), "<n><m><sg><nom>");
    }

    #[test]
    fn test_copula_override() {
        let table = lookup(&[("sfg3en", "<vblex><pri><p3><sg>")]);
        assert_eq!(map_tag("vera", "sfg3en", &table), "<vbser><pri><p3><sg>");
        assert_eq!(map_tag("VERA", "sfg3en", &table), "<vbser><pri><p3><sg>");
        assert_eq!(map_tag("Vera", "sfg3en", &table), "<vbser><pri><p3><sg>");
    }

    #[test]
    fn test_auxiliary_overrides() {
        let table = lookup(&[("sfg3en", "<vblex><pri><p3><sg>")]);
        assert_eq!(map_tag("hafa", "sfg3en", &table), "<vbhaver><pri><p3><sg>");
        assert_eq!(map_tag("Geta", "sfg3en", &table), "<vaux><pri><p3><sg>");
        assert_eq!(map_tag("fara", "sfg3en", &table), "<vblex><pri><p3><sg>");
    }

    #[test]
    fn test_override_replaces_first_marker_only() {
        let table = lookup(&[("x", "<vblex><pp>+<vblex>")]);
        assert_eq!(map_tag("vera", "x", &table), "<vbser><pp>+<vblex>");
    }

    #[test]
    fn test_override_needs_marker() {
        let table = lookup(&[("nven", "<n><f><sg>")]);
        assert_eq!(map_tag("vera", "nven", &table), "<n><f><sg>");
    }

    #[test]
    fn test_custom_override_table() {
        static RULES: &[LemmaOverride] = &[LemmaOverride::new("være", "<vblex>", "<vbser>")];
        let mapper = TagMapper::with_overrides(RULES);
        let table = lookup(&[("v", "<vblex><inf>")]);

        assert_eq!(mapper.map_tag("VÆRE", "v", &table), "<vbser><inf>");
        assert_eq!(mapper.map_tag("vera", "v", &table), "<vblex><inf>");
    }

    #[test]
    fn test_resolve_against_lexicon() {
        let lexicon = TagLexicon::from_pairs(
            1,
            vec![TagPair {
                source: "sfg3en".to_string(),
                target: "<vblex><pri><p3><sg>".to_string(),
            }],
        );
        let mapper = TagMapper::default();

        assert_eq!(
            mapper.resolve("hafa", "sfg3en", &lexicon),
            MappedTag::Mapped("<vbhaver><pri><p3><sg>".to_string())
        );
        assert_eq!(
            mapper.resolve("hafa", "nkeng", &lexicon),
            MappedTag::Unmapped {
                source: "nkeng".to_string()
            }
        );
    }

    proptest! {
        #[test]
        fn test_mapping_is_idempotent(lemma in "[a-zA-Z]{1,8}", source in "[a-z0-9]{1,6}", target in "(<[a-z]{1,6}>){1,4}") {
            let table = lookup(&[(source.as_str(), target.as_str())]);

            let first = map_tag(&lemma, &source, &table);
            let second = map_tag(&lemma, &source, &table);
            assert_eq!(first, second);
        }

        #[test]
        fn test_absent_always_sentinel(lemma in "[a-zA-Z]{1,8}", source in "[a-z0-9]{1,6}") {
            let table = lookup(&[]);
            assert_eq!(map_tag(&lemma, &source, &table), format!("<NOT MAPPED>:{}", source));
        }
    }
}
