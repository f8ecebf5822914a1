//! Whitespace-separated line readers shared by the lexicon and tagged-token formats.

use nom::{
    bytes::complete::take_till1,
    character::complete::{space0, space1},
    combinator::{all_consuming, opt},
    sequence::{delimited, preceded, tuple},
    IResult,
};

fn field(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace())(input)
}

/// Exactly two fields.
pub(crate) fn pair(line: &str) -> Option<(&str, &str)> {
    let parsed: IResult<&str, (&str, &str)> = all_consuming(delimited(
        space0,
        tuple((field, preceded(space1, field))),
        space0,
    ))(line);

    parsed.ok().map(|(_, fields)| fields)
}

/// Two fields and an optional third.
pub(crate) fn pair_or_triple(line: &str) -> Option<(&str, &str, Option<&str>)> {
    let parsed: IResult<&str, (&str, &str, Option<&str>)> = all_consuming(delimited(
        space0,
        tuple((field, preceded(space1, field), opt(preceded(space1, field)))),
        space0,
    ))(line);

    parsed.ok().map(|(_, fields)| fields)
}
