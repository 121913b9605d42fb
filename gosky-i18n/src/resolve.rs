//! Value resolution with locale fallback.
//!
//! Resolution is total: missing or malformed data degrades to the default
//! locale and then to an empty value. Nothing here returns an error.

use crate::config::{LocaleConfig, global};
use crate::{LocalizedArray, LocalizedString};
use gosky_log::trace;

impl LocalizedString {
    /// Text for `locale`, falling back to `default`.
    ///
    /// Plain values are returned as-is. For per-locale values an empty entry
    /// counts as missing, and an empty or missing default yields `""`.
    pub fn resolve<'a>(&'a self, locale: &str, default: &str) -> &'a str {
        match self {
            LocalizedString::Plain(text) => text.as_str(),
            LocalizedString::Localized(_) => self.get(locale).unwrap_or_else(|| {
                trace!("No {} text, falling back to {}", locale, default);
                self.get(default).unwrap_or_default()
            }),
        }
    }
}

impl LocalizedArray {
    /// List for `locale`, falling back to `default`.
    ///
    /// Fallback is per list: a per-locale map falls back only when the
    /// requested key is absent, not when its list is empty. Elements are
    /// resolved individually with [`LocalizedString::resolve`].
    pub fn resolve(&self, locale: &str, default: &str) -> Vec<String> {
        let items: &[LocalizedString] = match self {
            LocalizedArray::Items(items) => items,
            LocalizedArray::PerLocale(_) => self
                .get(locale)
                .or_else(|| {
                    trace!("No {} list, falling back to {}", locale, default);
                    self.get(default)
                })
                .unwrap_or_default(),
        };

        items
            .iter()
            .map(|item| item.resolve(locale, default).to_string())
            .collect()
    }
}

/// Resolve a single value against the global locale configuration.
///
/// `None` for `locale` means the default locale.
///
/// ```
/// use gosky_i18n::{LocalizedString, resolve_value};
///
/// let greeting = LocalizedString::localized([("tr", "Merhaba"), ("en", "Hello")]);
/// assert_eq!(resolve_value(Some(&greeting), None), "Merhaba");
/// assert_eq!(resolve_value(Some(&greeting), Some("en")), "Hello");
/// assert_eq!(resolve_value(None, Some("en")), "");
/// ```
pub fn resolve_value(value: Option<&LocalizedString>, locale: Option<&str>) -> String {
    resolve_value_with(global(), value, locale)
}

/// [`resolve_value`] with an explicit configuration.
pub fn resolve_value_with(
    config: &LocaleConfig,
    value: Option<&LocalizedString>,
    locale: Option<&str>,
) -> String {
    let default = config.default_locale().as_str();
    value
        .map(|v| v.resolve(locale.unwrap_or(default), default).to_string())
        .unwrap_or_default()
}

/// Resolve a list value against the global locale configuration.
pub fn resolve_array(value: Option<&LocalizedArray>, locale: Option<&str>) -> Vec<String> {
    resolve_array_with(global(), value, locale)
}

/// [`resolve_array`] with an explicit configuration.
pub fn resolve_array_with(
    config: &LocaleConfig,
    value: Option<&LocalizedArray>,
    locale: Option<&str>,
) -> Vec<String> {
    let default = config.default_locale().as_str();
    value
        .map(|v| v.resolve(locale.unwrap_or(default), default))
        .unwrap_or_default()
}
