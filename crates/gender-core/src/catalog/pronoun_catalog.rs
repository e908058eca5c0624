use log::debug;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::{Conjugations, PronounSet};

/// The built-in pronoun sets.
///
/// This is the universe `PronounSet::Any` is resolved from, so it deliberately has no "any" entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PronounPreset {
    /// they/them/their/theirs/themself
    TheyThem,
    /// she/her/her/hers/herself
    SheHer,
    /// he/him/his/his/himself
    HeHim,
    /// it/it/its/its/itself
    ItIts,
    /// fae/faer/faer/faers/faerself
    FaeFaer,
    /// ey/em/eir/eirs/emself
    EyEm,
    /// e/em/er/ers/emself
    EEm,
    /// sie/hir/hir/hirs/hirself
    SieHir,
    /// xe/xem/xyr/xyrs/xemself
    XeXem,
}

impl PronounPreset {
    /// Builds the conjugations of this preset.
    pub fn conjugations(&self) -> Conjugations {
        match self {
            PronounPreset::TheyThem => {
                Conjugations::new("they", "them", "their", "theirs", "themself")
            }
            PronounPreset::SheHer => Conjugations::new("she", "her", "her", "hers", "herself"),
            PronounPreset::HeHim => Conjugations::new("he", "him", "his", "his", "himself"),
            PronounPreset::ItIts => Conjugations::new("it", "it", "its", "its", "itself"),
            PronounPreset::FaeFaer => {
                Conjugations::new("fae", "faer", "faer", "faers", "faerself")
            }
            PronounPreset::EyEm => Conjugations::new("ey", "em", "eir", "eirs", "emself"),
            PronounPreset::EEm => Conjugations::new("e", "em", "er", "ers", "emself"),
            PronounPreset::SieHir => Conjugations::new("sie", "hir", "hir", "hirs", "hirself"),
            PronounPreset::XeXem => Conjugations::new("xe", "xem", "xyr", "xyrs", "xemself"),
        }
    }

    /// Builds the pronoun set of this preset.
    pub fn pronoun_set(&self) -> PronounSet {
        PronounSet::EnglishConjugated(self.conjugations())
    }

    /// Finds the first preset whose short description (e.g. "they/them") matches the provided one exactly.
    pub fn from_description(description: &str) -> Option<PronounPreset> {
        let found = PronounPreset::iter()
            .find(|preset| preset.conjugations().describe() == description);
        debug!("Preset for description {description:?}: {found:?}");
        found
    }
}

impl From<PronounPreset> for PronounSet {
    fn from(preset: PronounPreset) -> Self {
        preset.pronoun_set()
    }
}

impl PronounSet {
    /// they/them/their/theirs/themself
    pub fn they_them() -> PronounSet {
        PronounPreset::TheyThem.pronoun_set()
    }

    /// she/her/her/hers/herself
    pub fn she_her() -> PronounSet {
        PronounPreset::SheHer.pronoun_set()
    }

    /// he/him/his/his/himself
    pub fn he_him() -> PronounSet {
        PronounPreset::HeHim.pronoun_set()
    }

    /// it/it/its/its/itself
    pub fn it_its() -> PronounSet {
        PronounPreset::ItIts.pronoun_set()
    }

    /// fae/faer/faer/faers/faerself
    pub fn fae_faer() -> PronounSet {
        PronounPreset::FaeFaer.pronoun_set()
    }

    /// ey/em/eir/eirs/emself
    pub fn ey_em() -> PronounSet {
        PronounPreset::EyEm.pronoun_set()
    }

    /// e/em/er/ers/emself
    pub fn e_em() -> PronounSet {
        PronounPreset::EEm.pronoun_set()
    }

    /// sie/hir/hir/hirs/hirself
    pub fn sie_hir() -> PronounSet {
        PronounPreset::SieHir.pronoun_set()
    }

    /// xe/xem/xyr/xyrs/xemself
    pub fn xe_xem() -> PronounSet {
        PronounPreset::XeXem.pronoun_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_descriptions() {
        assert_eq!("they/them", PronounSet::they_them().describe());
        assert_eq!("she/her", PronounSet::she_her().describe());
        assert_eq!("he/him", PronounSet::he_him().describe());

        assert_eq!("it/its", PronounSet::it_its().describe());

        assert_eq!("fae/faer", PronounSet::fae_faer().describe());
        assert_eq!("ey/em", PronounSet::ey_em().describe());
        assert_eq!("e/em", PronounSet::e_em().describe());

        assert_eq!("sie/hir", PronounSet::sie_hir().describe());
        assert_eq!("xe/xem", PronounSet::xe_xem().describe());
    }

    #[test]
    fn preset_full_forms() {
        let expected = [
            "they/them/their/theirs/themself",
            "she/her/her/hers/herself",
            "he/him/his/his/himself",
            "it/it/its/its/itself",
            "fae/faer/faer/faers/faerself",
            "ey/em/eir/eirs/emself",
            "e/em/er/ers/emself",
            "sie/hir/hir/hirs/hirself",
            "xe/xem/xyr/xyrs/xemself",
        ];
        let actual: Vec<String> = PronounPreset::iter()
            .map(|preset| preset.conjugations().to_string())
            .collect();

        assert_eq!(expected.to_vec(), actual);
    }

    #[test]
    fn presets_are_distinct() {
        let presets: Vec<PronounSet> = PronounPreset::iter().map(PronounSet::from).collect();
        for (i, a) in presets.iter().enumerate() {
            for (j, b) in presets.iter().enumerate() {
                assert_eq!(i == j, a == b, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn from_description_finds_every_preset() {
        for preset in PronounPreset::iter() {
            let description = preset.conjugations().describe();
            assert_eq!(Some(preset), PronounPreset::from_description(&description));
        }
    }

    #[test]
    fn json_names() {
        let expected = [
            r#""theyThem""#,
            r#""sheHer""#,
            r#""heHim""#,
            r#""itIts""#,
            r#""faeFaer""#,
            r#""eyEm""#,
            r#""eEm""#,
            r#""sieHir""#,
            r#""xeXem""#,
        ];

        for (preset, name) in PronounPreset::iter().zip(expected) {
            let json = serde_json::to_string(&preset).unwrap();
            assert_eq!(name, json);
            assert_eq!(preset, serde_json::from_str::<PronounPreset>(&json).unwrap());
        }
        assert_eq!(expected.len(), PronounPreset::iter().count());
    }

    #[test]
    fn from_description_unknown() {
        assert_eq!(None, PronounPreset::from_description("they/their"));
        assert_eq!(None, PronounPreset::from_description("They/Them"));
        assert_eq!(None, PronounPreset::from_description(""));
    }
}
