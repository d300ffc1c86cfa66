//! Parser for `<g1,g2,...|r1,r2,...>` presentation strings.

use cayley_core::{CayleyError, ErrorInfo, RESERVED_CHARS};
use nom::{
    bytes::complete::take_while1,
    character::complete::{char as nomchar, multispace0, satisfy},
    combinator::{map as nommap, opt},
    error::{ParseError, VerboseError},
    multi::separated_list0,
    sequence::{delimited, pair, preceded},
};
use serde::{Deserialize, Serialize};

/// Result type of the presentation combinators.
pub type IResult<I, O, E = VerboseError<I>> = Result<(I, O), nom::Err<E>>;

type In<'a> = &'a str;

/// Generators and raw relation strings split out of a presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    /// Single-character generators in declaration order.
    pub generators: Vec<char>,
    /// Relations as written, still carrying power notation.
    pub relations: Vec<String>,
}

/// Skips leading whitespace before `inner`.
pub fn wsl<'a, F, O, E>(inner: F) -> impl FnMut(In<'a>) -> IResult<In<'a>, O, E>
where
    E: ParseError<In<'a>>,
    F: FnMut(In<'a>) -> IResult<In<'a>, O, E>,
{
    preceded(multispace0, inner)
}

fn symbol_char(c: char) -> bool {
    !c.is_whitespace() && !RESERVED_CHARS.contains(&c)
}

fn relation_char(c: char) -> bool {
    !matches!(c, ',' | '|' | '<' | '>')
}

/// One generator character.
pub fn generator(s: In) -> IResult<In, char> {
    wsl(satisfy(symbol_char))(s)
}

/// One relation up to the next `,` or `>`, trailing whitespace trimmed.
pub fn relation(s: In) -> IResult<In, String> {
    nommap(wsl(take_while1(relation_char)), |text: &str| {
        text.trim_end().to_string()
    })(s)
}

/// A full `<generators|relations>` block. The `|relations` part is optional.
pub fn presentation(s: In) -> IResult<In, Presentation> {
    let generators = separated_list0(wsl(nomchar(',')), generator);
    let relations = nommap(
        opt(preceded(
            wsl(nomchar('|')),
            separated_list0(wsl(nomchar(',')), relation),
        )),
        Option::unwrap_or_default,
    );
    nommap(
        delimited(wsl(nomchar('<')), pair(generators, relations), wsl(nomchar('>'))),
        |(generators, relations)| Presentation {
            generators,
            relations,
        },
    )(s)
}

/// Parses a presentation string, rejecting anything after the closing `>`.
pub fn parse_presentation(text: &str) -> Result<Presentation, CayleyError> {
    match presentation(text) {
        Ok((rest, parsed)) if rest.trim().is_empty() => Ok(parsed),
        Ok((rest, _)) => Err(CayleyError::Parse(
            ErrorInfo::new("trailing-input", "unexpected text after the presentation")
                .with_context("rest", rest.trim()),
        )),
        Err(nom::Err::Error(err)) | Err(nom::Err::Failure(err)) => Err(CayleyError::Parse(
            ErrorInfo::new("presentation-syntax", nom::error::convert_error(text, err))
                .with_context("input", text)
                .with_hint("expected <g1,g2,...|w1=w2,...>"),
        )),
        Err(nom::Err::Incomplete(_)) => Err(CayleyError::Parse(
            ErrorInfo::new("presentation-syntax", "presentation ended early")
                .with_context("input", text),
        )),
    }
}
