use nom::{
    branch::alt,
    bytes::complete::{is_not, tag},
    combinator::{map, value},
    IResult,
};

/// Byte range of a token-block within the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Token delimiters, longest first so `^ $` and `^$` are never read as two
/// separate delimiters.
fn delimiter(input: &str) -> IResult<&str, &str> {
    alt((tag("^ $"), tag("^$"), tag("^"), tag("$")))(input)
}

/// Either a delimiter (`None`) or the non-empty text up to the next one.
fn piece(input: &str) -> IResult<&str, Option<&str>> {
    alt((value(None, delimiter), map(is_not("^$"), Some)))(input)
}

/// Cuts an lt-proc stream into token-blocks, reporting where each one sits.
pub fn split_with_spans(original_input: &str) -> Vec<(Span, &str)> {
    let mut input = original_input;
    let mut result = Vec::new();

    while !input.is_empty() {
        let Ok((next_input, found)) = piece(input) else {
            break;
        };

        if let Some(block) = found {
            let start = original_input.len() - input.len();
            result.push((Span::new(start, start + block.len()), block));
        }
        input = next_input;
    }

    result
}

/// Cuts an lt-proc stream into token-blocks. Adjacent delimiters produce no
/// block; order follows the input.
pub fn split(input: &str) -> Vec<&str> {
    split_with_spans(input)
        .into_iter()
        .map(|(_, block)| block)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_separators_between_tokens() {
        let blocks = split("^hús/hús<n><nt><sg><nom>$ ^er/vera<vbser><pri><p3><sg>$");
        assert_eq!(
            blocks,
            vec!["hús/hús<n><nt><sg><nom>", " ", "er/vera<vbser><pri><p3><sg>"]
        );
    }

    #[test]
    fn test_long_delimiters_take_priority() {
        assert!(split("^ $").is_empty());
        assert!(split("^$").is_empty());
        assert_eq!(split("a^ $b"), vec!["a", "b"]);
        assert_eq!(split("a^$b"), vec!["a", "b"]);
    }

    #[test]
    fn test_adjacent_delimiters_yield_nothing() {
        assert!(split("").is_empty());
        assert!(split("^^$$").is_empty());
        assert_eq!(split("^a$^b$"), vec!["a", "b"]);
    }

    #[test]
    fn test_no_trimming_inside_blocks() {
        assert_eq!(split("^ a b $\n"), vec![" a b ", "\n"]);
    }

    #[test]
    fn test_spans_point_into_input() {
        let input = "^á/á<pr>$ ^.$";
        let blocks = split_with_spans(input);

        assert_eq!(blocks.len(), 3);
        for (span, text) in &blocks {
            assert_eq!(&input[span.start..span.end], *text);
            assert_eq!(span.len(), text.len());
        }
        assert_eq!(blocks[0].0, Span::new(1, "á/á<pr>".len() + 1));
    }
}
