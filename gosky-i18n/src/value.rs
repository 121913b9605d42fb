//! Localized field values.
//!
//! Stored documents hold display fields either as a plain string (legacy
//! records) or as a map from locale code to text. The shape is decided once,
//! when the value is read, and carried as an explicit variant.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single display string, plain or per locale.
///
/// ```
/// use gosky_i18n::LocalizedString;
///
/// let plain: LocalizedString = serde_json::from_str(r#""Kapadokya""#).unwrap();
/// assert!(plain.is_plain());
///
/// let map: LocalizedString = serde_json::from_str(r#"{"tr": "Balon", "en": "Balloon"}"#).unwrap();
/// assert_eq!(map.get("en"), Some("Balloon"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedString {
    /// Same text for every locale
    Plain(String),
    /// Text keyed by locale code; need not cover every supported locale
    Localized(BTreeMap<String, String>),
}

impl LocalizedString {
    /// Per-locale value from `(locale, text)` pairs.
    pub fn localized<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        LocalizedString::Localized(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Read a raw JSON value. Strings become [`Plain`](Self::Plain), objects
    /// become [`Localized`](Self::Localized) keeping only string entries.
    /// Anything else is not a localized string.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(LocalizedString::Plain(s.clone())),
            Value::Object(map) => Some(LocalizedString::Localized(
                map.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect(),
            )),
            _ => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, LocalizedString::Plain(_))
    }

    /// Non-empty entry stored for `locale`. Plain values have no entries.
    pub fn get(&self, locale: &str) -> Option<&str> {
        match self {
            LocalizedString::Plain(_) => None,
            LocalizedString::Localized(map) => {
                map.get(locale).map(String::as_str).filter(|s| !s.is_empty())
            }
        }
    }
}

impl From<String> for LocalizedString {
    fn from(value: String) -> Self {
        LocalizedString::Plain(value)
    }
}

impl From<&str> for LocalizedString {
    fn from(value: &str) -> Self {
        LocalizedString::Plain(value.to_string())
    }
}

impl From<BTreeMap<String, String>> for LocalizedString {
    fn from(value: BTreeMap<String, String>) -> Self {
        LocalizedString::Localized(value)
    }
}

/// An ordered list of display strings.
///
/// Either one list whose elements are each plain or per-locale, or a map
/// from locale code to a whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedArray {
    /// Shared list; elements resolve individually
    Items(Vec<LocalizedString>),
    /// A separate list per locale
    PerLocale(BTreeMap<String, Vec<LocalizedString>>),
}

impl LocalizedArray {
    /// Read a raw JSON value.
    ///
    /// Arrays become [`Items`](Self::Items), objects become
    /// [`PerLocale`](Self::PerLocale) keeping only array entries. Elements
    /// that are neither strings nor objects are dropped.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(LocalizedArray::Items(elements(items))),
            Value::Object(map) => Some(LocalizedArray::PerLocale(
                map.iter()
                    .filter_map(|(k, v)| v.as_array().map(|items| (k.clone(), elements(items))))
                    .collect(),
            )),
            _ => None,
        }
    }

    /// The list stored for `locale`, if the key exists (even when empty).
    pub fn get(&self, locale: &str) -> Option<&[LocalizedString]> {
        match self {
            LocalizedArray::Items(_) => None,
            LocalizedArray::PerLocale(map) => map.get(locale).map(Vec::as_slice),
        }
    }
}

impl From<Vec<LocalizedString>> for LocalizedArray {
    fn from(items: Vec<LocalizedString>) -> Self {
        LocalizedArray::Items(items)
    }
}

impl From<Vec<String>> for LocalizedArray {
    fn from(items: Vec<String>) -> Self {
        LocalizedArray::Items(items.into_iter().map(LocalizedString::Plain).collect())
    }
}

fn elements(items: &[Value]) -> Vec<LocalizedString> {
    items.iter().filter_map(LocalizedString::from_json).collect()
}
