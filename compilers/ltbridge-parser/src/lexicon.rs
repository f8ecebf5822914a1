use ltbridge_protocol::{TagLexicon, TagPair};

use crate::error::ParseError;
use crate::fields;

/// Version stamped on lexicons read from text.
pub const LEXICON_VERSION: u32 = 1;

/// Reads a `source-tag target-tag` per line mapping table. Blank lines are
/// skipped; a repeated source tag keeps its last target.
pub fn parse_lexicon(text: &str) -> Result<TagLexicon, ParseError> {
    let mut pairs = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (source, target) = fields::pair(line).ok_or_else(|| ParseError::MalformedLexiconLine {
            line: i + 1,
            text: line.to_string(),
        })?;

        pairs.push(TagPair {
            source: source.to_string(),
            target: target.to_string(),
        });
    }

    Ok(TagLexicon::from_pairs(LEXICON_VERSION, pairs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lexicon() {
        let text = "nkeng <n><m><sg><nom>\n\nsfg3en\t<vblex><pri><p3><sg>\r\nnkeng <n><m><sg><nom><def>\n";
        let lexicon = parse_lexicon(text).expect("lexicon should parse");

        assert_eq!(lexicon.version, LEXICON_VERSION);
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.get("nkeng"), Some("<n><m><sg><nom><def>"));
        assert_eq!(lexicon.get("sfg3en"), Some("<vblex><pri><p3><sg>"));
    }

    #[test]
    fn test_malformed_line_number() {
        let err = parse_lexicon("a <adv>\nbroken\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedLexiconLine {
                line: 2,
                text: "broken".to_string()
            }
        );
    }

    #[test]
    fn test_empty_lexicon() {
        assert!(parse_lexicon("").expect("empty text is a valid lexicon").is_empty());
    }
}
