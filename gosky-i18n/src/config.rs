//! Process-wide locale configuration.
//!
//! The supported locale set and the default locale are fixed at startup.
//! [`install`] publishes a configuration once; afterwards it is read-only.
//! Code that never installs one gets [`LocaleConfig::default`].

use crate::{I18nError, LocaleCode, Result};
use gosky_config::{ConfigLoader, ConfigValidator, EnvLoader, Validate};
use gosky_log::{debug, info};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Built-in default locale.
pub const DEFAULT_LOCALE: &str = "tr";

/// Built-in supported locales.
pub const SUPPORTED_LOCALES: [&str; 5] = ["tr", "en", "de", "ru", "ar"];

/// Environment prefix for locale settings (`GOSKY_LOCALES`, `GOSKY_DEFAULT_LOCALE`).
pub const ENV_PREFIX: &str = "GOSKY";

static GLOBAL: OnceCell<LocaleConfig> = OnceCell::new();

/// Closed set of supported locales with a distinguished default.
///
/// The default is always a member of the supported set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    supported: Vec<LocaleCode>,
    default: LocaleCode,
}

impl LocaleConfig {
    /// Build a configuration. Duplicate codes are collapsed, keeping the
    /// first occurrence.
    pub fn new(
        supported: impl IntoIterator<Item = LocaleCode>,
        default: LocaleCode,
    ) -> Result<Self> {
        let mut codes: Vec<LocaleCode> = Vec::new();
        for code in supported {
            if !codes.contains(&code) {
                codes.push(code);
            }
        }

        if codes.is_empty() {
            return Err(I18nError::EmptyLocaleSet);
        }
        if !codes.contains(&default) {
            return Err(I18nError::DefaultNotSupported(default.to_string()));
        }

        Ok(Self {
            supported: codes,
            default,
        })
    }

    /// Build from string tags.
    pub fn from_tags<S: AsRef<str>>(supported: &[S], default: &str) -> Result<Self> {
        let codes = supported
            .iter()
            .map(|tag| LocaleCode::parse(tag.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(codes, LocaleCode::parse(default)?)
    }

    /// Read `GOSKY_LOCALES` and `GOSKY_DEFAULT_LOCALE`, after loading a
    /// `.env` file from the working directory if one exists. Unset variables
    /// fall back to the built-in values.
    pub fn from_env() -> Result<Self> {
        let loader = EnvLoader::new(Some(ENV_PREFIX.to_string())).with_dotenv(None)?;
        Self::from_env_loader(&loader)
    }

    /// Same as [`LocaleConfig::from_env`] with a caller-provided loader.
    pub fn from_env_loader(loader: &EnvLoader) -> Result<Self> {
        let settings = LocaleSettings {
            supported_locales: loader
                .load_list("LOCALES")
                .unwrap_or_else(|| SUPPORTED_LOCALES.iter().map(|s| s.to_string()).collect()),
            default_locale: loader.load_var_or("DEFAULT_LOCALE", DEFAULT_LOCALE),
        };
        settings.validate()?;
        settings.try_into()
    }

    /// Load a JSON or TOML file with `supported_locales` and `default_locale`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings: LocaleSettings = ConfigLoader::auto(path)?.load_validated(path)?;
        settings.try_into()
    }

    /// Supported locales, in configuration order.
    pub fn supported(&self) -> &[LocaleCode] {
        &self.supported
    }

    /// The default (fallback) locale.
    pub fn default_locale(&self) -> &LocaleCode {
        &self.default
    }

    /// Whether `code` is exactly one of the supported codes.
    pub fn is_supported(&self, code: &str) -> bool {
        self.supported.iter().any(|c| c.as_str() == code)
    }

    /// Parse `tag` and return it if it names a supported locale.
    pub fn match_locale(&self, tag: &str) -> Option<LocaleCode> {
        match LocaleCode::parse(tag) {
            Ok(code) if self.supported.contains(&code) => Some(code),
            Ok(code) => {
                debug!("Locale {} is not supported", code);
                None
            }
            Err(_) => {
                debug!("Ignoring malformed locale hint {:?}", tag);
                None
            }
        }
    }

    /// Strict form of [`LocaleConfig::match_locale`] for call sites that must
    /// reject bad input, such as admin edits keyed by locale.
    pub fn require(&self, tag: &str) -> Result<LocaleCode> {
        let code = LocaleCode::parse(tag)?;
        if self.supported.contains(&code) {
            Ok(code)
        } else {
            Err(I18nError::UnsupportedLocale(code.to_string()))
        }
    }

    /// The settings form of this configuration.
    pub fn to_settings(&self) -> LocaleSettings {
        LocaleSettings {
            supported_locales: self.supported.iter().map(|c| c.to_string()).collect(),
            default_locale: self.default.to_string(),
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            supported: SUPPORTED_LOCALES
                .iter()
                .map(|code| LocaleCode(code.to_string()))
                .collect(),
            default: LocaleCode(DEFAULT_LOCALE.to_string()),
        }
    }
}

/// Serialized locale settings, as found in config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleSettings {
    pub supported_locales: Vec<String>,
    pub default_locale: String,
}

impl LocaleSettings {
    fn normalized(tag: &str, field: &str) -> gosky_config::Result<LocaleCode> {
        LocaleCode::parse(tag).map_err(|e| {
            gosky_config::ConfigError::ValidationError(format!("{}: {}", field, e))
        })
    }
}

impl Validate for LocaleSettings {
    fn validate(&self) -> gosky_config::Result<()> {
        ConfigValidator::non_empty_list(self.supported_locales.as_slice(), "supported_locales")?;
        ConfigValidator::not_empty(&self.default_locale, "default_locale")?;

        // Compare codes, not raw tags: `en-US` and `EN` both mean `en`
        let supported = self
            .supported_locales
            .iter()
            .map(|tag| Self::normalized(tag, "supported_locales"))
            .collect::<gosky_config::Result<Vec<_>>>()?;
        let default = Self::normalized(&self.default_locale, "default_locale")?;

        ConfigValidator::unique(supported.as_slice(), "supported_locales")?;
        ConfigValidator::one_of(&default, supported.as_slice(), "default_locale")
    }
}

impl TryFrom<LocaleSettings> for LocaleConfig {
    type Error = I18nError;

    fn try_from(settings: LocaleSettings) -> Result<Self> {
        LocaleConfig::from_tags(settings.supported_locales.as_slice(), &settings.default_locale)
    }
}

/// Install the process-wide configuration. Fails if one is already in place
/// (including the lazily installed default).
pub fn install(config: LocaleConfig) -> Result<&'static LocaleConfig> {
    let default = config.default.clone();
    GLOBAL
        .set(config)
        .map_err(|_| I18nError::AlreadyInitialized)?;
    info!("Locale configuration installed (default: {})", default);
    Ok(global())
}

/// The process-wide configuration, installing the built-in default on
/// first use.
pub fn global() -> &'static LocaleConfig {
    GLOBAL.get_or_init(LocaleConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn code(tag: &str) -> LocaleCode {
        LocaleCode::parse(tag).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = LocaleConfig::default();
        assert_eq!(config.default_locale(), &code("tr"));
        assert!(config.is_supported("tr"));
        assert!(config.is_supported("en"));
        assert_eq!(config.supported().len(), SUPPORTED_LOCALES.len());
    }

    #[test]
    fn test_new_rejects_default_outside_set() {
        let result = LocaleConfig::new([code("en"), code("de")], code("tr"));
        assert!(matches!(result, Err(I18nError::DefaultNotSupported(ref d)) if d == "tr"));
    }

    #[test]
    fn test_new_rejects_empty_set() {
        let result = LocaleConfig::new(Vec::new(), code("tr"));
        assert!(matches!(result, Err(I18nError::EmptyLocaleSet)));
    }

    #[test]
    fn test_new_collapses_duplicates() {
        let config = LocaleConfig::from_tags(&["en", "en-US", "tr"], "tr").unwrap();
        assert_eq!(config.supported(), &[code("en"), code("tr")]);
    }

    #[test]
    fn test_from_tags_rejects_malformed() {
        assert!(matches!(
            LocaleConfig::from_tags(&["tr", "english"], "tr"),
            Err(I18nError::InvalidLocale(_))
        ));
    }

    #[test]
    fn test_match_locale() {
        let config = LocaleConfig::default();
        assert_eq!(config.match_locale("EN-gb"), Some(code("en")));
        assert_eq!(config.match_locale("fr"), None);
        assert_eq!(config.match_locale("??"), None);
    }

    #[test]
    fn test_require() {
        let config = LocaleConfig::default();
        assert_eq!(config.require("ar-SA").unwrap(), code("ar"));
        assert!(matches!(config.require("fr"), Err(I18nError::UnsupportedLocale(ref c)) if c == "fr"));
        assert!(matches!(config.require("f"), Err(I18nError::InvalidLocale(_))));
    }

    #[test]
    fn test_settings_validation() {
        let settings = LocaleSettings {
            supported_locales: vec!["tr".into(), "en".into(), "tr".into()],
            default_locale: "tr".into(),
        };
        assert!(settings.validate().is_err());

        let settings = LocaleSettings {
            supported_locales: vec!["tr".into(), "en".into()],
            default_locale: "de".into(),
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_validation_normalizes_tags() {
        let settings = LocaleSettings {
            supported_locales: vec!["tr".into(), "en-US".into()],
            default_locale: "EN".into(),
        };
        assert!(settings.validate().is_ok());

        let settings = LocaleSettings {
            supported_locales: vec!["en".into(), "en-GB".into()],
            default_locale: "en".into(),
        };
        assert!(settings.validate().is_err());

        let settings = LocaleSettings {
            supported_locales: vec!["tr".into(), "english".into()],
            default_locale: "tr".into(),
        };
        assert!(matches!(
            settings.validate(),
            Err(gosky_config::ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_settings_roundtrip() {
        let config = LocaleConfig::from_tags(&["en", "de"], "en").unwrap();
        let back = LocaleConfig::try_from(config.to_settings()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_from_env_defaults() {
        // No GOSKY_TEST_UNSET_* variables exist, so built-ins apply.
        let loader = EnvLoader::new(Some("GOSKY_TEST_UNSET".to_string()));
        let config = LocaleConfig::from_env_loader(&loader).unwrap();
        assert_eq!(config, LocaleConfig::default());
    }

    #[test]
    fn test_from_env_with_dotenv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "GOSKY_TEST_DOTENV_LOCALES=en,de\nGOSKY_TEST_DOTENV_DEFAULT_LOCALE=de"
        )
        .unwrap();

        let loader = EnvLoader::new(Some("GOSKY_TEST_DOTENV".to_string()))
            .with_dotenv(file.path().to_str())
            .unwrap();
        let config = LocaleConfig::from_env_loader(&loader).unwrap();
        assert_eq!(config.supported(), &[code("en"), code("de")]);
        assert_eq!(config.default_locale(), &code("de"));
    }

    #[test]
    fn test_from_env_missing_dotenv_file() {
        let result = EnvLoader::new(Some("GOSKY_TEST_DOTENV".to_string()))
            .with_dotenv(Some("/nonexistent/gosky/.env"))
            .map_err(I18nError::from);
        assert!(matches!(result, Err(I18nError::Config(_))));
    }

    #[test]
    fn test_from_file_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"supported_locales": ["en", "tr"], "default_locale": "en"}}"#
        )
        .unwrap();

        let config = LocaleConfig::from_file(file.path()).unwrap();
        assert_eq!(config.default_locale(), &code("en"));
        assert_eq!(config.supported(), &[code("en"), code("tr")]);
    }

    #[test]
    fn test_from_file_regional_tags() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"supported_locales": ["tr", "en-US"], "default_locale": "en"}}"#
        )
        .unwrap();

        let config = LocaleConfig::from_file(file.path()).unwrap();
        assert_eq!(config, LocaleConfig::from_tags(&["tr", "en-US"], "en").unwrap());
        assert_eq!(config.default_locale(), &code("en"));
    }

    #[test]
    fn test_from_env_normalizes_tags() {
        // SAFETY: the variables carry a prefix no other test reads
        unsafe {
            std::env::set_var("GOSKY_TEST_NORM_LOCALES", "tr, de-DE");
            std::env::set_var("GOSKY_TEST_NORM_DEFAULT_LOCALE", "TR");
        }
        let loader = EnvLoader::new(Some("GOSKY_TEST_NORM".to_string()));
        let config = LocaleConfig::from_env_loader(&loader).unwrap();
        assert_eq!(config.supported(), &[code("tr"), code("de")]);
        assert_eq!(config.default_locale(), &code("tr"));
    }

    #[test]
    fn test_from_file_toml_invalid_default() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "supported_locales = [\"en\"]\ndefault_locale = \"tr\"").unwrap();

        assert!(matches!(
            LocaleConfig::from_file(file.path()),
            Err(I18nError::Config(_))
        ));
    }

    #[test]
    fn test_global_install_once() {
        let first = global();
        assert!(first.is_supported(DEFAULT_LOCALE));
        assert!(matches!(
            install(LocaleConfig::default()),
            Err(I18nError::AlreadyInitialized)
        ));
        assert!(std::ptr::eq(first, global()));
    }
}
