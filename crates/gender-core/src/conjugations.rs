use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use log::debug;
use nom::{
    bytes::complete::{tag, take_till},
    multi::separated_list1,
    IResult,
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::PronounForm;

const FORM_SEPARATOR: &str = "/";

/// A full set of English pronoun conjugations, for use in text about someone.
///
/// Intended for singular 3rd-person pronouns, but nothing stops it being used for any plurality or perspective.
/// The forms are free text; no grammar is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conjugations {
    subjective: String,
    objective: String,
    possessive_determiner: String,
    possessive: String,
    reflexive: String,
}

impl Conjugations {
    /// Creates a set of conjugations.
    pub fn new<T: Into<String>>(
        subjective: T,
        objective: T,
        possessive_determiner: T,
        possessive: T,
        reflexive: T,
    ) -> Conjugations {
        Conjugations {
            subjective: subjective.into(),
            objective: objective.into(),
            possessive_determiner: possessive_determiner.into(),
            possessive: possessive.into(),
            reflexive: reflexive.into(),
        }
    }

    /// The subjective form (e.g. they, she, he)
    pub fn subjective(&self) -> &str {
        &self.subjective
    }

    /// The objective form (e.g. them, her, him)
    pub fn objective(&self) -> &str {
        &self.objective
    }

    /// The possessive determiner form (e.g. their, her, his)
    pub fn possessive_determiner(&self) -> &str {
        &self.possessive_determiner
    }

    /// The possessive form (e.g. theirs, hers, his)
    pub fn possessive(&self) -> &str {
        &self.possessive
    }

    /// The reflexive form (e.g. themself, herself, himself)
    pub fn reflexive(&self) -> &str {
        &self.reflexive
    }

    /// Gets the provided form.
    pub fn get(&self, form: PronounForm) -> &str {
        match form {
            PronounForm::Subjective => &self.subjective,
            PronounForm::Objective => &self.objective,
            PronounForm::PossessiveDeterminer => &self.possessive_determiner,
            PronounForm::Possessive => &self.possessive,
            PronounForm::Reflexive => &self.reflexive,
        }
    }

    /// Builds a short two-term summary of these conjugations, like "they/them".
    ///
    /// The first term is the subjective form. The second term is the first of the other forms,
    /// in declaration order, that differs from the subjective form, so "it/it/its/its/itself" is
    /// summarized as "it/its" rather than "it/it". If every form is the same, the subjective form
    /// is repeated.
    pub fn describe(&self) -> String {
        let first = self.subjective();
        let second = PronounForm::iter()
            .skip(1)
            .map(|form| self.get(form))
            .find(|form| *form != first)
            .unwrap_or(first);

        format!("{first}{FORM_SEPARATOR}{second}")
    }
}

/// Writes all five forms separated by slashes, like "they/them/their/theirs/themself".
///
/// Forms aren't escaped, so this only parses back into equal conjugations when no form contains a slash
/// or begins or ends with whitespace.
impl Display for Conjugations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = PronounForm::iter()
            .map(|form| self.get(form))
            .join(FORM_SEPARATOR);
        f.write_str(&joined)
    }
}

/// An error while parsing conjugations from slash notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseConjugationsError {
    /// The input didn't have exactly five forms.
    #[error("expected 5 pronoun forms, got {0}")]
    WrongFormCount(usize),
    /// The form at the provided position was blank.
    #[error("pronoun form {0} is empty")]
    EmptyForm(usize),
    /// Some of the input remained unparsed.
    #[error("unparsed input: {0:?}")]
    UnparsedInput(String),
}

impl FromStr for Conjugations {
    type Err = ParseConjugationsError;

    /// Parses conjugations from slash notation, like "they/them/their/theirs/themself".
    ///
    /// Whitespace around each form is ignored, and a slash always separates forms, so a form can't
    /// contain a slash.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (remaining, forms) = match parse_forms(s) {
            Ok(x) => x,
            Err(e) => return Err(ParseConjugationsError::UnparsedInput(e.to_string())),
        };
        if !remaining.is_empty() {
            return Err(ParseConjugationsError::UnparsedInput(remaining.to_string()));
        }

        debug!("Parsed forms {forms:?} from {s:?}");

        let forms: Vec<&str> = forms.into_iter().map(str::trim).collect();
        if let Some(position) = forms.iter().position(|form| form.is_empty()) {
            return Err(ParseConjugationsError::EmptyForm(position));
        }

        match forms.as_slice() {
            [subjective, objective, possessive_determiner, possessive, reflexive] => {
                Ok(Conjugations::new(
                    *subjective,
                    *objective,
                    *possessive_determiner,
                    *possessive,
                    *reflexive,
                ))
            }
            _ => Err(ParseConjugationsError::WrongFormCount(forms.len())),
        }
    }
}

fn parse_forms(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(tag(FORM_SEPARATOR), take_till(|c: char| c == '/'))(input)
}
