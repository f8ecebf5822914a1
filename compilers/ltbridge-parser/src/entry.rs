use ltbridge_protocol::{BlockIndex, Entry, LexicalUnit, PieceIndex};

use crate::error::{AnalysisDefect, ParseError};

/// Start of the invariable part of a multiword lemma.
const MULTIWORD_MARKER: char = '#';

/// Decodes every block in order. The first malformed analysis aborts the parse.
pub fn parse<I, S>(blocks: I) -> Result<Vec<Entry>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    blocks
        .into_iter()
        .enumerate()
        .map(|(i, block)| parse_block(BlockIndex::from_usize(i), block.as_ref()))
        .collect()
}

/// Decodes one token-block: `surface/analysis/analysis...`.
pub fn parse_block(index: BlockIndex, block: &str) -> Result<Entry, ParseError> {
    let mut pieces: Vec<&str> = block.split('/').collect();
    // Trailing empty pieces are dropped; empty pieces mid-block stay and are reported.
    while pieces.len() > 1 && pieces.last().is_some_and(|piece| piece.is_empty()) {
        pieces.pop();
    }
    let (surface_form, analyses) = match pieces.split_first() {
        Some((surface_form, analyses)) => (*surface_form, analyses),
        None => (block, &[][..]),
    };

    let units = match analyses {
        // Unknown word: `xyz/*xyz`
        [only] if only.starts_with('*') => vec![LexicalUnit::unknown(surface_form)],
        // Blank or bare punctuation carried through the analyser
        [] if !surface_form.contains('<') => vec![LexicalUnit::space(surface_form)],
        _ => analyses
            .iter()
            .enumerate()
            .map(|(i, text)| parse_analysis(index, PieceIndex::from_usize(i + 1), text))
            .collect::<Result<Vec<_>, _>>()?,
    };

    Ok(Entry::new(surface_form, units))
}

/// Splits `lemma<tags>` at the first `<`, then folds a `#invariable` suffix
/// back into the lemma.
fn parse_analysis(block: BlockIndex, piece: PieceIndex, text: &str) -> Result<LexicalUnit, ParseError> {
    let malformed = |defect| ParseError::MalformedAnalysis {
        block,
        piece,
        text: text.to_string(),
        defect,
    };

    let tag_start = text
        .find('<')
        .ok_or_else(|| malformed(AnalysisDefect::MissingTagStart))?;
    let (lemma, symbols) = text.split_at(tag_start);

    match symbols.split_once(MULTIWORD_MARKER) {
        None => Ok(LexicalUnit::analysis(lemma, symbols)),
        Some((_, invariable)) if invariable.contains(MULTIWORD_MARKER) => {
            Err(malformed(AnalysisDefect::RepeatedMultiwordMarker))
        }
        Some((_, "")) => Err(malformed(AnalysisDefect::EmptyInvariablePart)),
        Some((symbols, invariable)) => Ok(LexicalUnit::analysis(format!("{}{}", lemma, invariable), symbols)),
    }
}
