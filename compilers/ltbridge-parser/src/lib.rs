pub mod entry;
pub mod error;
pub mod lexicon;
pub mod stream;
pub mod tagged;

mod fields;

use ltbridge_protocol::{BlockIndex, Entry};

pub use entry::{parse, parse_block};
pub use error::{AnalysisDefect, ParseError};
pub use lexicon::{parse_lexicon, LEXICON_VERSION};
pub use stream::{split, split_with_spans, Span};
pub use tagged::parse_tagged;

/// Decodes an lt-proc stream into entries, one per token-block.
pub struct LtProcParser<'a> {
    blocks: Vec<(Span, &'a str)>,
}

impl<'a> LtProcParser<'a> {
    pub fn new(input: &'a str) -> Self {
        let blocks = split_with_spans(input);
        tracing::debug!(bytes = input.len(), blocks = blocks.len(), "split lt-proc stream");
        Self { blocks }
    }

    pub fn blocks(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.blocks.iter().map(|(_, block)| *block)
    }

    pub fn spans(&self) -> impl Iterator<Item = Span> + '_ {
        self.blocks.iter().map(|(span, _)| *span)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Lazily decodes each block. Later blocks are still reachable after an error.
    pub fn entries(&self) -> impl Iterator<Item = Result<Entry, ParseError>> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .map(|(i, (_, block))| parse_block(BlockIndex::from_usize(i), block))
    }

    /// Decodes every block, stopping at the first malformed analysis.
    pub fn parse(&self) -> Result<Vec<Entry>, ParseError> {
        self.entries().collect()
    }
}
