//! Error types for locale configuration and parsing

use gosky_config::ConfigError;
use thiserror::Error;

/// Errors raised while building or installing locale configuration.
///
/// Resolution itself never fails; these only surface from parsing and
/// configuration entry points.
#[derive(Debug, Error)]
pub enum I18nError {
    /// Malformed locale tag
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Well-formed tag outside the supported set
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Default locale missing from the supported set
    #[error("Default locale {0} is not in the supported locale set")]
    DefaultNotSupported(String),

    /// No supported locales configured
    #[error("Supported locale set is empty")]
    EmptyLocaleSet,

    /// Global locale configuration was already installed
    #[error("Locale configuration is already initialized")]
    AlreadyInitialized,

    /// Configuration source error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
