/// Category marker of an ordinary lexical verb.
pub const LEXICAL_VERB: &str = "<vblex>";

/// Rewrites the first `marker` run of a mapped tag when the lemma matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LemmaOverride {
    /// Lower-case lemma.
    pub lemma: &'static str,
    pub marker: &'static str,
    pub replacement: &'static str,
}

impl LemmaOverride {
    pub const fn new(lemma: &'static str, marker: &'static str, replacement: &'static str) -> Self {
        Self {
            lemma,
            marker,
            replacement,
        }
    }
}

/// Icelandic copula and auxiliaries, which the tagger labels as plain verbs.
pub const ICELANDIC_VERB_OVERRIDES: &[LemmaOverride] = &[
    // copula
    LemmaOverride::new("vera", LEXICAL_VERB, "<vbser>"),
    LemmaOverride::new("hafa", LEXICAL_VERB, "<vbhaver>"),
    // modal
    LemmaOverride::new("geta", LEXICAL_VERB, "<vaux>"),
];
