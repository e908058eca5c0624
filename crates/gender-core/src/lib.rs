mod catalog;
pub use catalog::GenderPreset;
pub use catalog::PronounPreset;

mod conjugations;
pub use conjugations::Conjugations;
pub use conjugations::ParseConjugationsError;

mod gender_profile;
pub use gender_profile::GenderProfile;

mod pronoun_form;
pub use pronoun_form::PronounForm;

mod pronoun_format;
pub use pronoun_format::ParseError;
pub use pronoun_format::PronounFormat;

mod pronoun_set;
pub use pronoun_set::PronounSet;

mod resolution_options;
pub use resolution_options::ResolutionOptions;
