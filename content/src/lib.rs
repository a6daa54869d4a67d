//! Localized site content for Folio.
//!
//! Everything user-facing is resolved once through a [`Localizer`] and
//! frozen into immutable values: the project [`Catalog`] and the personal
//! [`Profile`]. Switching language builds a fresh [`SiteContent`].

mod catalog;
mod error;
mod localizer;
mod profile;

pub use catalog::Catalog;
pub use error::ContentError;
pub use localizer::{Dictionary, Localizer, TranslationValue};
pub use profile::{ExperienceEntry, Profile, SkillGroup};

use folio_types::Language;

/// All content for one language.
#[derive(Debug, Clone)]
pub struct SiteContent {
    dictionary: Dictionary,
    catalog: Catalog,
    profile: Profile,
}

impl SiteContent {
    /// Build content from the dictionary bundled for `language`.
    pub fn bundled(language: Language) -> Result<Self, ContentError> {
        Self::from_dictionary(Dictionary::bundled(language)?)
    }

    pub fn from_dictionary(dictionary: Dictionary) -> Result<Self, ContentError> {
        let catalog = Catalog::localized(&dictionary)?;
        let profile = Profile::localized(&dictionary);
        Ok(Self {
            dictionary,
            catalog,
            profile,
        })
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.dictionary.language()
    }

    #[must_use]
    pub fn localizer(&self) -> &dyn Localizer {
        &self.dictionary
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }
}
