use ltbridge_protocol::{BlockIndex, PieceIndex};
use thiserror::Error;

/// What is wrong with an analysis piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisDefect {
    /// No `<` opens the tag run.
    #[error("no `<` starts the tag symbols")]
    MissingTagStart,
    /// More than one `#` multiword marker in the tag run.
    #[error("more than one `#` multiword marker")]
    RepeatedMultiwordMarker,
    /// A `#` multiword marker with nothing after it.
    #[error("`#` multiword marker without an invariable part")]
    EmptyInvariablePart,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed analysis {text:?} in block {block}, piece {piece}: {defect}")]
    MalformedAnalysis {
        block: BlockIndex,
        piece: PieceIndex,
        text: String,
        defect: AnalysisDefect,
    },

    #[error("malformed lexicon line {line}: {text:?} (expected `source-tag target-tag`)")]
    MalformedLexiconLine { line: usize, text: String },

    #[error("malformed tagged line {line}: {text:?} (expected `lexeme tag [lemma]`)")]
    MalformedTaggedLine { line: usize, text: String },
}
