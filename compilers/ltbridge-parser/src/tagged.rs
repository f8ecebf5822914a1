use ltbridge_protocol::TaggedToken;

use crate::error::ParseError;
use crate::fields;

/// Reads tagger output, one `lexeme tag [lemma]` token per line. Blank lines
/// (sentence breaks) are skipped.
pub fn parse_tagged(text: &str) -> Result<Vec<TaggedToken>, ParseError> {
    let mut tokens = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (lexeme, tag, lemma) = fields::pair_or_triple(line).ok_or_else(|| ParseError::MalformedTaggedLine {
            line: i + 1,
            text: line.to_string(),
        })?;

        let token = TaggedToken::new(lexeme, tag);
        tokens.push(match lemma {
            Some(lemma) => token.with_lemma(lemma),
            None => token,
        });
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tagged() {
        let tokens = parse_tagged("Hann fpken hann\ner sfg3en\n\n. .\n").expect("tokens should parse");

        assert_eq!(
            tokens,
            vec![
                TaggedToken::new("Hann", "fpken").with_lemma("hann"),
                TaggedToken::new("er", "sfg3en"),
                TaggedToken::new(".", "."),
            ]
        );
    }

    #[test]
    fn test_dangling_lexeme() {
        let err = parse_tagged("er sfg3en\nhestur\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedTaggedLine {
                line: 2,
                text: "hestur".to_string()
            }
        );
    }
}
