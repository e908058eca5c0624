use log::debug;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_until, take_while1},
    combinator::{rest, verify},
    multi::many0,
    sequence::delimited,
    IResult,
};
use thiserror::Error;

use crate::{Conjugations, PronounForm};

const TOKEN_START: &str = "${";
const TOKEN_END: &str = "}";

/// Text with places for pronouns, like "${they} said ${they} would bring ${their} own cake".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronounFormat(Vec<FormatChunk>);

#[derive(Debug, Clone, PartialEq, Eq)]
enum FormatChunk {
    Text(String),
    Form(PronounForm),
}

/// An error while parsing a pronoun format string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token didn't name one of the pronoun forms.
    #[error("unknown token: {0:?}")]
    UnknownToken(String),
    /// Some of the input remained unparsed for some reason.
    /// The unparsed part is included.
    #[error("unparsed input: {0:?}")]
    UnparsedInput(String),
}

enum RawChunk<'i> {
    Text(&'i str),
    Token(&'i str),
}

impl PronounFormat {
    /// Creates a `PronounFormat` with the provided format string.
    ///
    /// Places for pronouns in the format string are enclosed in `${}`, and named by the matching form of "they":
    /// * `${they}`: the subjective form
    /// * `${them}`: the objective form
    /// * `${their}`: the possessive determiner form
    /// * `${theirs}`: the possessive form
    /// * `${themself}`: the reflexive form
    ///
    /// Token names are case-sensitive.
    pub fn new(format_string: &str) -> Result<PronounFormat, ParseError> {
        let (remaining, raw_chunks) = match many0(parse_chunk)(format_string) {
            Ok(x) => x,
            Err(e) => return Err(ParseError::UnparsedInput(e.to_string())),
        };
        if !remaining.is_empty() {
            return Err(ParseError::UnparsedInput(remaining.to_string()));
        }

        let chunks = raw_chunks
            .into_iter()
            .map(|chunk| match chunk {
                RawChunk::Text(text) => Ok(FormatChunk::Text(text.to_string())),
                RawChunk::Token(name) => PronounForm::from_token(name)
                    .map(FormatChunk::Form)
                    .ok_or_else(|| ParseError::UnknownToken(name.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Parsed format {format_string:?} into {chunks:?}");

        Ok(PronounFormat(chunks))
    }

    /// Produces a string with the provided conjugations filled in.
    pub fn interpolate(&self, conjugations: &Conjugations) -> String {
        self.0
            .iter()
            .map(|chunk| match chunk {
                FormatChunk::Text(text) => text.as_str(),
                FormatChunk::Form(form) => conjugations.get(*form),
            })
            .collect()
    }
}

fn parse_chunk(input: &str) -> IResult<&str, RawChunk<'_>> {
    alt((parse_token_chunk, parse_text_chunk))(input)
}

fn parse_token_chunk(input: &str) -> IResult<&str, RawChunk<'_>> {
    let (remaining, name) = delimited(
        tag(TOKEN_START),
        take_while1(is_valid_token_name_char),
        tag(TOKEN_END),
    )(input)?;

    Ok((remaining, RawChunk::Token(name)))
}

fn parse_text_chunk(input: &str) -> IResult<&str, RawChunk<'_>> {
    let (remaining, text) = verify(alt((take_until(TOKEN_START), rest)), |s: &str| {
        !s.is_empty()
    })(input)?;

    Ok((remaining, RawChunk::Text(text)))
}

/// Checks whether a character is allowed to be part of a token name.
fn is_valid_token_name_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}
