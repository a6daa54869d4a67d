use folio_types::{Language, ProjectId};

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to parse {language} dictionary: {source}")]
    Parse {
        language: Language,
        #[source]
        source: toml::de::Error,
    },
    #[error("{language} dictionary: `{key}` must be a string or a list of strings")]
    InvalidValue { language: Language, key: String },
    #[error("duplicate project id in catalog: {0}")]
    DuplicateProject(ProjectId),
}
