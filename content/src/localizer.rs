//! Translation lookup.
//!
//! Dictionaries are TOML documents whose nested tables are flattened into
//! dotted keys (`[projects.endless-aisle] title = ".."` becomes
//! `projects.endless-aisle.title`). Values are either strings or arrays of
//! strings; nothing else is accepted.

use std::borrow::Cow;
use std::collections::HashMap;

use folio_types::Language;

use crate::ContentError;

const EN_SOURCE: &str = include_str!("../locales/en.toml");
const ES_SOURCE: &str = include_str!("../locales/es.toml");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationValue {
    Text(String),
    List(Vec<String>),
}

/// Lookup interface the rest of the site uses for user-facing text.
///
/// Missing keys never fail: `text` echoes the key back and `list` yields an
/// empty list, so partially translated content still renders.
pub trait Localizer {
    fn language(&self) -> Language;

    fn lookup(&self, key: &str) -> Option<&TranslationValue>;

    fn text(&self, key: &str) -> Cow<'_, str> {
        match self.lookup(key) {
            Some(TranslationValue::Text(text)) => Cow::Borrowed(text.as_str()),
            Some(TranslationValue::List(items)) => Cow::Owned(items.join(" ")),
            None => {
                tracing::debug!(key, language = %self.language(), "Missing translation");
                Cow::Owned(key.to_string())
            }
        }
    }

    fn list(&self, key: &str) -> Vec<String> {
        match self.lookup(key) {
            Some(TranslationValue::List(items)) => items.clone(),
            Some(TranslationValue::Text(text)) => vec![text.clone()],
            None => {
                tracing::debug!(key, language = %self.language(), "Missing translation list");
                Vec::new()
            }
        }
    }

    /// `text(key)` with every `{name}` placeholder replaced.
    fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut out = self.text(key).into_owned();
        for (name, value) in args {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }
}

/// Flattened translation dictionary for one language.
#[derive(Debug, Clone)]
pub struct Dictionary {
    language: Language,
    entries: HashMap<String, TranslationValue>,
}

impl Dictionary {
    /// Dictionary shipped with the binary.
    pub fn bundled(language: Language) -> Result<Self, ContentError> {
        let source = match language {
            Language::En => EN_SOURCE,
            Language::Es => ES_SOURCE,
        };
        Self::parse(language, source)
    }

    pub fn parse(language: Language, source: &str) -> Result<Self, ContentError> {
        let table: toml::Table =
            toml::from_str(source).map_err(|source| ContentError::Parse { language, source })?;
        let mut entries = HashMap::new();
        flatten(language, "", &table, &mut entries)?;
        tracing::debug!(%language, keys = entries.len(), "Loaded dictionary");
        Ok(Self { language, entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Localizer for Dictionary {
    fn language(&self) -> Language {
        self.language
    }

    fn lookup(&self, key: &str) -> Option<&TranslationValue> {
        self.entries.get(key)
    }
}

fn flatten(
    language: Language,
    prefix: &str,
    table: &toml::Table,
    out: &mut HashMap<String, TranslationValue>,
) -> Result<(), ContentError> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            toml::Value::String(text) => {
                out.insert(key, TranslationValue::Text(text.clone()));
            }
            toml::Value::Array(items) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        toml::Value::String(text) => list.push(text.clone()),
                        _ => return Err(ContentError::InvalidValue { language, key }),
                    }
                }
                out.insert(key, TranslationValue::List(list));
            }
            toml::Value::Table(nested) => flatten(language, &key, nested, out)?,
            _ => return Err(ContentError::InvalidValue { language, key }),
        }
    }
    Ok(())
}
