use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// One of the five grammatical forms of an English pronoun set.
///
/// Forms are declared in display order, which is also the order they're iterated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PronounForm {
    /// The subjective form, like "they". For example: "_ loves cake"
    Subjective,
    /// The objective form, like "them". For example: "Morgan will give _ some"
    Objective,
    /// The possessive determiner form, like "their". For example: "That's _ favorite"
    PossessiveDeterminer,
    /// The possessive form, like "theirs". For example: "That spot is _"
    Possessive,
    /// The reflexive form, like "themself". For example: "More cake all to _"
    Reflexive,
}

impl PronounForm {
    /// Gets the form of "they" that names this form (e.g. "their" for the possessive determiner).
    pub fn token(&self) -> &'static str {
        match self {
            PronounForm::Subjective => "they",
            PronounForm::Objective => "them",
            PronounForm::PossessiveDeterminer => "their",
            PronounForm::Possessive => "theirs",
            PronounForm::Reflexive => "themself",
        }
    }

    /// Finds the form named by the provided form of "they", if there is one.
    pub fn from_token(token: &str) -> Option<PronounForm> {
        match token {
            "they" => Some(PronounForm::Subjective),
            "them" => Some(PronounForm::Objective),
            "their" => Some(PronounForm::PossessiveDeterminer),
            "theirs" => Some(PronounForm::Possessive),
            "themself" => Some(PronounForm::Reflexive),
            _ => None,
        }
    }
}
