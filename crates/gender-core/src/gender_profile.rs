use log::debug;
use serde::{Deserialize, Serialize};

use crate::PronounSet;

/// A person's gender: a display name plus the pronoun sets they accept.
///
/// Pronoun sets are kept in the order they were provided, duplicates included. The first one is
/// conventionally the primary one, but nothing here depends on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderProfile {
    gender_name: String,
    pronouns: Vec<PronounSet>,
}

impl GenderProfile {
    /// Creates a gender profile.
    ///
    /// The name isn't validated. An empty name is allowed, but won't display well.
    pub fn new(
        gender_name: impl Into<String>,
        pronouns: impl IntoIterator<Item = PronounSet>,
    ) -> GenderProfile {
        let gender_name = gender_name.into();
        if gender_name.is_empty() {
            debug!("Creating gender profile with an empty name");
        }

        GenderProfile {
            gender_name,
            pronouns: pronouns.into_iter().collect(),
        }
    }

    /// Creates a gender profile with at most one pronoun set.
    pub fn with_optional_pronouns(
        gender_name: impl Into<String>,
        pronouns: Option<PronounSet>,
    ) -> GenderProfile {
        GenderProfile::new(gender_name, pronouns)
    }

    /// The display name of the gender (e.g. "Non-Binary")
    pub fn gender_name(&self) -> &str {
        &self.gender_name
    }

    /// The pronoun sets accepted, in order of preference.
    pub fn pronouns(&self) -> &[PronounSet] {
        &self.pronouns
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn no_pronouns() {
        let profile = GenderProfile::new("Questioning", Vec::new());

        assert_eq!("Questioning", profile.gender_name());
        assert!(profile.pronouns().is_empty());
    }

    #[test]
    fn optional_pronouns() {
        let none = GenderProfile::with_optional_pronouns("Questioning", None);
        assert!(none.pronouns().is_empty());

        let some = GenderProfile::with_optional_pronouns("Man", Some(PronounSet::he_him()));
        assert_eq!(GenderProfile::man(), some);
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let pronouns = vec![
            PronounSet::she_her(),
            PronounSet::Any,
            PronounSet::they_them(),
            PronounSet::she_her(),
        ];
        let profile = GenderProfile::new("Genderfluid", pronouns.clone());

        assert_eq!(pronouns.as_slice(), profile.pronouns());
    }

    #[test]
    fn empty_name_is_allowed() {
        let profile = GenderProfile::new("", [PronounSet::Any]);
        assert_eq!("", profile.gender_name());
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a = GenderProfile::new("Bigender", [PronounSet::she_her(), PronounSet::he_him()]);
        let b = GenderProfile::new("Bigender", [PronounSet::she_her(), PronounSet::he_him()]);
        let c = GenderProfile::new("Bigender", [PronounSet::she_her(), PronounSet::he_him()]);
        let reordered =
            GenderProfile::new("Bigender", [PronounSet::he_him(), PronounSet::she_her()]);

        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(b, c);
        assert_eq!(a, c);
        assert_ne!(a, reordered);
        assert_ne!(
            a,
            GenderProfile::new("bigender", [PronounSet::she_her(), PronounSet::he_him()])
        );
    }

    #[test]
    fn equal_profiles_hash_the_same() {
        let set: HashSet<GenderProfile> = [
            GenderProfile::new("Bigender", [PronounSet::she_her(), PronounSet::he_him()]),
            GenderProfile::new("Bigender", [PronounSet::she_her(), PronounSet::he_him()]),
            GenderProfile::new("Bigender", [PronounSet::he_him(), PronounSet::she_her()]),
        ]
        .into();

        assert_eq!(2, set.len());
        assert!(set.contains(&GenderProfile::new(
            "Bigender",
            [PronounSet::he_him(), PronounSet::she_her()]
        )));
    }

    #[test]
    fn json_round_trip() {
        let profiles = [
            GenderProfile::woman(),
            GenderProfile::new("Questioning", Vec::new()),
            GenderProfile::new(
                "Genderfluid",
                [PronounSet::Any, PronounSet::xe_xem(), PronounSet::xe_xem()],
            ),
        ];

        for profile in profiles {
            let json = serde_json::to_string(&profile).unwrap();
            assert_eq!(profile, serde_json::from_str::<GenderProfile>(&json).unwrap());
        }
    }

    #[test]
    fn json_field_order() {
        let profile = GenderProfile::new("Agender", [PronounSet::Any]);
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(r#"{"genderName":"Agender","pronouns":["any"]}"#, json);
    }
}
