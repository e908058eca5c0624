use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::{GenderProfile, PronounPreset};

/// The built-in gender profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GenderPreset {
    /// "Woman", with she/her pronouns
    Woman,
    /// "Man", with he/him pronouns
    Man,
    /// "Non-Binary", with they/them pronouns
    NonBinary,
    /// "Agender", with they/them pronouns
    Agender,
    /// "Genderfae", with fae/faer pronouns
    Genderfae,
    /// "Genderfaun", with he/him pronouns
    Genderfaun,
}

impl GenderPreset {
    /// Gets the display name of this preset.
    pub fn gender_name(&self) -> &'static str {
        match self {
            GenderPreset::Woman => "Woman",
            GenderPreset::Man => "Man",
            GenderPreset::NonBinary => "Non-Binary",
            GenderPreset::Agender => "Agender",
            GenderPreset::Genderfae => "Genderfae",
            GenderPreset::Genderfaun => "Genderfaun",
        }
    }

    /// Gets the pronouns this preset uses.
    pub fn pronoun_preset(&self) -> PronounPreset {
        match self {
            GenderPreset::Woman => PronounPreset::SheHer,
            GenderPreset::Man => PronounPreset::HeHim,
            GenderPreset::NonBinary | GenderPreset::Agender => PronounPreset::TheyThem,
            GenderPreset::Genderfae => PronounPreset::FaeFaer,
            GenderPreset::Genderfaun => PronounPreset::HeHim,
        }
    }

    /// Builds the profile of this preset.
    pub fn profile(&self) -> GenderProfile {
        GenderProfile::new(self.gender_name(), [self.pronoun_preset().pronoun_set()])
    }
}

impl From<GenderPreset> for GenderProfile {
    fn from(preset: GenderPreset) -> Self {
        preset.profile()
    }
}

impl GenderProfile {
    /// "Woman", with she/her pronouns
    pub fn woman() -> GenderProfile {
        GenderPreset::Woman.profile()
    }

    /// "Man", with he/him pronouns
    pub fn man() -> GenderProfile {
        GenderPreset::Man.profile()
    }

    /// "Non-Binary", with they/them pronouns
    pub fn non_binary() -> GenderProfile {
        GenderPreset::NonBinary.profile()
    }

    /// "Agender", with they/them pronouns
    pub fn agender() -> GenderProfile {
        GenderPreset::Agender.profile()
    }

    /// "Genderfae", with fae/faer pronouns
    pub fn genderfae() -> GenderProfile {
        GenderPreset::Genderfae.profile()
    }

    /// "Genderfaun", with he/him pronouns
    pub fn genderfaun() -> GenderProfile {
        GenderPreset::Genderfaun.profile()
    }
}
