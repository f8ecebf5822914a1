use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context};
use ltbridge_parser::{parse_lexicon, LtProcParser};
use ltbridge_protocol::{ArchivedTagLexicon, Entry, TagLexicon, TaggedToken};
use ltbridge_tagmap::{ApertiumWriter, Lemmatizer, LowercaseLemmatizer, TagLookup, TagMapper};
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use rkyv::AlignedVec;
use serde::Serialize;

/// One decoded block as printed by `parse`.
#[derive(Serialize)]
pub struct ParsedBlock {
    pub start: usize,
    pub end: usize,
    pub entry: Entry,
}

pub fn parse_report(input: &str, pretty: bool) -> anyhow::Result<String> {
    let parser = LtProcParser::new(input);

    let mut report = Vec::with_capacity(parser.len());
    for (span, entry) in parser.spans().zip(parser.entries()) {
        let entry = entry.with_context(|| format!("in bytes {}..{}", span.start, span.end))?;
        report.push(ParsedBlock {
            start: span.start,
            end: span.end,
            entry,
        });
    }

    let unknown = report
        .iter()
        .filter(|b| b.entry.analyses.iter().any(|u| u.is_unknown() && !u.is_space_token()))
        .count();
    tracing::debug!(entries = report.len(), unknown, "parsed lt-proc stream");

    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    Ok(json)
}

pub fn compile_lexicon(text: &str) -> anyhow::Result<AlignedVec> {
    let lexicon = parse_lexicon(text)?;
    tracing::info!(version = lexicon.version, pairs = lexicon.len(), "compiling tag lexicon");

    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(&lexicon)
        .map_err(|e| anyhow!("failed to archive lexicon: {e:?}"))?;
    Ok(serializer.into_serializer().into_inner())
}

/// A tag lexicon as loaded from disk.
pub enum Lexicon {
    Text(TagLexicon),
    Compiled(AlignedVec),
}

impl Lexicon {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let compiled = path.extension().is_some_and(|ext| ext == "rkyv");

        if compiled {
            let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let mut bytes = AlignedVec::with_capacity(data.len());
            bytes.extend_from_slice(&data);
            // Fail early on a corrupt archive.
            check_compiled(&bytes).with_context(|| format!("loading {}", path.display()))?;
            Ok(Lexicon::Compiled(bytes))
        } else {
            let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            let lexicon = parse_lexicon(&text).with_context(|| format!("loading {}", path.display()))?;
            Ok(Lexicon::Text(lexicon))
        }
    }

    pub fn map_tokens(&self, tokens: &[TaggedToken], strict: bool) -> anyhow::Result<String> {
        match self {
            Lexicon::Text(lexicon) => map_tokens(tokens, lexicon, strict),
            Lexicon::Compiled(bytes) => map_tokens(tokens, check_compiled(bytes)?, strict),
        }
    }
}

fn check_compiled(bytes: &AlignedVec) -> anyhow::Result<&ArchivedTagLexicon> {
    rkyv::check_archived_root::<TagLexicon>(bytes).map_err(|e| anyhow!("invalid compiled lexicon: {e}"))
}

fn map_tokens<L: TagLookup + ?Sized>(tokens: &[TaggedToken], lookup: &L, strict: bool) -> anyhow::Result<String> {
    let mapper = TagMapper::new();
    let mut writer = ApertiumWriter::new(&mapper);

    for token in tokens {
        let lemma = match &token.lemma {
            Some(lemma) => lemma.clone(),
            None => LowercaseLemmatizer.lemmatize(&token.lexeme, &token.tag),
        };

        if !writer.push(&lemma, &token.tag, lookup).is_mapped() {
            tracing::warn!(lexeme = %token.lexeme, tag = %token.tag, "no mapping for tag");
        }
    }

    if strict && writer.unmapped() > 0 {
        bail!("{} of {} tags have no mapping", writer.unmapped(), tokens.len());
    }

    tracing::debug!(tokens = tokens.len(), unmapped = writer.unmapped(), "mapped tagged tokens");
    Ok(writer.finish())
}
