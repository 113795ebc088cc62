//! Start-up configuration read from the environment.
//!
//! | Variable          | Meaning                                   | Default             |
//! |-------------------|-------------------------------------------|---------------------|
//! | `ZABAH_SITE_HOST` | host shown after the subtitle             | `www.zabahsoft.com` |
//! | `ZABAH_LANG`      | initial language (`en`, `fa`, `ps`)       | `en`                |
//! | `ZABAH_THEME`     | initial theme (`light`, `dark`)           | `dark`              |
//! | `ZABAH_RTL_FONT`  | font file with Arabic-script glyphs       | unset               |
//!
//! Bad values are logged and replaced by the default; nothing here stops the
//! window from opening.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::i18n::{Language, ParseLanguageError};
use crate::theme::{ParseThemeError, Theme};

pub const HOST_VAR: &str = "ZABAH_SITE_HOST";
pub const LANG_VAR: &str = "ZABAH_LANG";
pub const THEME_VAR: &str = "ZABAH_THEME";
pub const RTL_FONT_VAR: &str = "ZABAH_RTL_FONT";

pub const DEFAULT_HOST: &str = "www.zabahsoft.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Language(#[from] ParseLanguageError),
    #[error(transparent)]
    Theme(#[from] ParseThemeError),
    #[error("failed to read font file {}: {source}", path.display())]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub host: String,
    pub language: Language,
    pub theme: Theme,
    pub rtl_font: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            language: Language::default(),
            theme: Theme::default(),
            rtl_font: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(host) = lookup(HOST_VAR).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(code) = lookup(LANG_VAR) {
            match parse_language(&code) {
                Ok(language) => config.language = language,
                Err(err) => log::warn!("{LANG_VAR}: {err}, using {}", config.language),
            }
        }

        if let Some(name) = lookup(THEME_VAR) {
            match parse_theme(&name) {
                Ok(theme) => config.theme = theme,
                Err(err) => log::warn!("{THEME_VAR}: {err}, using {}", config.theme),
            }
        }

        config.rtl_font = lookup(RTL_FONT_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        config
    }
}

fn parse_language(code: &str) -> Result<Language, ConfigError> {
    Ok(code.parse::<Language>()?)
}

fn parse_theme(name: &str) -> Result<Theme, ConfigError> {
    Ok(name.parse::<Theme>()?)
}

pub fn read_font(path: &Path) -> Result<Vec<u8>, ConfigError> {
    std::fs::read(path).map_err(|source| ConfigError::FontRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Host as shown on the page: a leading literal `www.` is dropped.
pub fn display_host(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}
