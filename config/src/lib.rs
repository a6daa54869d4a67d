//! Configuration loading for Folio.
//!
//! Reads `~/.folio/config.toml` and resolves it into [`SiteSettings`].
//! A missing file means defaults; an unreadable or invalid file is logged
//! and also falls back to defaults, so a bad config never blocks startup.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use folio_types::{Language, SiteSettings, TerminalSettings, Theme};

#[derive(Debug, Default, Deserialize)]
pub struct FolioConfig {
    pub app: Option<AppConfig>,
    pub terminal: Option<TerminalConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// `en` or `es`.
    pub language: Option<String>,
    /// `dark` or `light`.
    pub theme: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TerminalConfig {
    pub prompt: Option<String>,
    pub exit_delay_ms: Option<u64>,
    pub clear_delay_ms: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl FolioConfig {
    /// Load the user config, logging and swallowing any failure.
    #[must_use]
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{err}");
                None
            }
        }
    }

    /// Load a config file; `Ok(None)` when it does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolve into settings, replacing unknown values with defaults.
    #[must_use]
    pub fn settings(&self) -> SiteSettings {
        let app = self.app.as_ref();
        let language = app
            .and_then(|app| app.language.as_deref())
            .map_or_else(Language::default, |raw| {
                raw.parse().unwrap_or_else(|err| {
                    tracing::warn!("{err}; using {}", Language::default());
                    Language::default()
                })
            });
        let theme = app
            .and_then(|app| app.theme.as_deref())
            .map_or_else(Theme::default, |raw| {
                raw.parse().unwrap_or_else(|err| {
                    tracing::warn!("{err}; using {}", Theme::default());
                    Theme::default()
                })
            });

        let defaults = TerminalSettings::default();
        let terminal = match &self.terminal {
            None => defaults,
            Some(terminal) => TerminalSettings {
                prompt: terminal
                    .prompt
                    .as_deref()
                    .map(str::trim)
                    .filter(|prompt| !prompt.is_empty())
                    .map_or(defaults.prompt, ToString::to_string),
                exit_delay: terminal
                    .exit_delay_ms
                    .map_or(defaults.exit_delay, Duration::from_millis),
                clear_delay: terminal
                    .clear_delay_ms
                    .map_or(defaults.clear_delay, Duration::from_millis),
            },
        };

        SiteSettings {
            language,
            theme,
            terminal,
        }
    }
}

/// `~/.folio/config.toml`
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".folio").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::Duration;

    use super::{ConfigError, FolioConfig};
    use folio_types::{Language, SiteSettings, Theme};

    fn parse(source: &str) -> FolioConfig {
        toml::from_str(source).unwrap()
    }

    #[test]
    fn empty_config_resolves_to_defaults() {
        assert_eq!(parse("").settings(), SiteSettings::default());
    }

    #[test]
    fn full_config_resolves() {
        let settings = parse(
            r#"
            [app]
            language = "es"
            theme = "light"

            [terminal]
            prompt = "visitor$"
            exit_delay_ms = 250
            clear_delay_ms = 10
            "#,
        )
        .settings();

        assert_eq!(settings.language, Language::Es);
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.terminal.prompt, "visitor$");
        assert_eq!(settings.terminal.exit_delay, Duration::from_millis(250));
        assert_eq!(settings.terminal.clear_delay, Duration::from_millis(10));
    }

    #[test]
    fn unknown_values_fall_back() {
        let settings = parse(
            r#"
            [app]
            language = "klingon"
            theme = "sepia"

            [terminal]
            prompt = "   "
            "#,
        )
        .settings();

        let defaults = SiteSettings::default();
        assert_eq!(settings.language, defaults.language);
        assert_eq!(settings.theme, defaults.theme);
        assert_eq!(settings.terminal, defaults.terminal);
    }

    #[test]
    fn load_from_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = FolioConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[app]\ntheme = \"light\"\n").unwrap();

        let config = FolioConfig::load_from(&path).unwrap().unwrap();
        assert_eq!(config.settings().theme, Theme::Light);
    }

    #[test]
    fn load_from_invalid_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[app\nlanguage = ").unwrap();

        let err = FolioConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn wrong_value_type_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[terminal]\nexit_delay_ms = \"soon\"\n").unwrap();

        assert!(matches!(
            FolioConfig::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
