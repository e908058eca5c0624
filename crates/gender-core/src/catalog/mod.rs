mod pronoun_catalog;
pub use pronoun_catalog::PronounPreset;

mod gender_catalog;
pub use gender_catalog::GenderPreset;
