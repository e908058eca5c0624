use strum::IntoEnumIterator;

use crate::PronounPreset;

/// Options for resolving `PronounSet::Any` into concrete conjugations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionOptions {
    /// The presets to pick from.
    ///
    /// Defaults to every built-in preset, in catalog order.
    pub candidates: Vec<PronounPreset>,
    /// The preset to use if there are no candidates to pick from.
    ///
    /// Unreachable with the default candidates.
    pub fallback: PronounPreset,
}

impl Default for ResolutionOptions {
    fn default() -> Self {
        ResolutionOptions::new()
    }
}

impl ResolutionOptions {
    /// Creates options that pick from every built-in preset.
    pub fn new() -> ResolutionOptions {
        ResolutionOptions {
            candidates: PronounPreset::iter().collect(),
            fallback: PronounPreset::TheyThem,
        }
    }

    /// Creates options that pick from only the provided presets.
    pub fn with_candidates(
        candidates: impl IntoIterator<Item = PronounPreset>,
    ) -> ResolutionOptions {
        ResolutionOptions {
            candidates: candidates.into_iter().collect(),
            ..ResolutionOptions::new()
        }
    }
}
