use std::fmt::Display;

use log::{debug, warn};
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use crate::{Conjugations, ResolutionOptions};

/// How "no preference" is summarized by `PronounSet::describe`.
const ANY_DESCRIPTION: &str = "any/all";

/// A set of pronouns someone accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PronounSet {
    /// A concrete set of English conjugations.
    EnglishConjugated(Conjugations),
    /// No specific preference. Any concrete set is acceptable.
    Any,
}

impl From<Conjugations> for PronounSet {
    fn from(conjugations: Conjugations) -> Self {
        PronounSet::EnglishConjugated(conjugations)
    }
}

impl PronounSet {
    /// Gets conjugations to use for this pronoun set.
    ///
    /// Concrete sets return their own conjugations. `Any` picks a built-in preset using the provided RNG,
    /// so a seeded RNG gives repeatable results.
    pub fn resolve_conjugations<R: Rng + ?Sized>(&self, rng: &mut R) -> Conjugations {
        self.resolve_conjugations_with(&ResolutionOptions::default(), rng)
    }

    /// Gets conjugations to use for this pronoun set, resolving `Any` according to the provided options.
    pub fn resolve_conjugations_with<R: Rng + ?Sized>(
        &self,
        options: &ResolutionOptions,
        rng: &mut R,
    ) -> Conjugations {
        match self {
            PronounSet::EnglishConjugated(conjugations) => conjugations.clone(),
            PronounSet::Any => {
                let preset = match options.candidates.choose(rng) {
                    Some(preset) => *preset,
                    None => {
                        warn!(
                            "No candidate pronoun sets to pick from, falling back to {:?}",
                            options.fallback
                        );
                        options.fallback
                    }
                };
                debug!("Resolved any pronouns to {preset:?}");
                preset.conjugations()
            }
        }
    }

    /// Gets the conjugations of this pronoun set, if it's a concrete one.
    pub fn conjugations(&self) -> Option<&Conjugations> {
        match self {
            PronounSet::EnglishConjugated(conjugations) => Some(conjugations),
            PronounSet::Any => None,
        }
    }

    /// Builds a short two-term summary of this pronoun set, like "they/them".
    ///
    /// See `Conjugations::describe` for how the terms are picked. `Any` is summarized as "any/all".
    pub fn describe(&self) -> String {
        match self {
            PronounSet::EnglishConjugated(conjugations) => conjugations.describe(),
            PronounSet::Any => ANY_DESCRIPTION.to_string(),
        }
    }
}

impl Display for PronounSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
