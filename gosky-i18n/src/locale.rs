//! Locale Codes and Accept-Language Parsing
//!
//! Content is keyed by bare language codes (`tr`, `en`), so a parsed tag
//! keeps only its primary language subtag.

use crate::{I18nError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// A validated language code: 2-3 ASCII letters, lowercase.
///
/// # Examples
///
/// ```
/// use gosky_i18n::LocaleCode;
///
/// let en = LocaleCode::parse("en-US").unwrap();
/// assert_eq!(en.as_str(), "en");
/// assert!(LocaleCode::parse("english").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleCode(pub(crate) String);

impl LocaleCode {
    /// Parse a locale code or BCP 47 tag (`tr`, `en-US`, `de_DE`).
    pub fn parse(tag: &str) -> Result<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        if primary.len() < 2
            || primary.len() > 3
            || !primary.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(I18nError::InvalidLocale(tag.to_string()));
        }

        Ok(Self(primary))
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for LocaleCode {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LocaleCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LocaleCode {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        LocaleCode::parse(s)
    }
}

impl TryFrom<String> for LocaleCode {
    type Error = I18nError;

    fn try_from(value: String) -> Result<Self> {
        LocaleCode::parse(&value)
    }
}

impl From<LocaleCode> for String {
    fn from(code: LocaleCode) -> Self {
        code.0
    }
}

impl PartialEq<str> for LocaleCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LocaleCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ============================================================================
// Accept-Language Parsing
// ============================================================================

#[derive(Debug, Clone)]
struct AcceptLanguageEntry {
    locale: LocaleCode,
    quality: f32,
}

/// Parse an Accept-Language header into locale codes.
///
/// Entries are ordered by quality (highest first, ties keep header order).
/// Wildcards, malformed tags and `q=0` entries are skipped. Regional
/// variants collapse to their language, keeping the first occurrence.
///
/// # Example
///
/// ```
/// use gosky_i18n::parse_accept_language;
///
/// let locales = parse_accept_language("de;q=0.5,en-US,en;q=0.9,*;q=0.1");
/// let codes: Vec<&str> = locales.iter().map(|l| l.as_str()).collect();
/// assert_eq!(codes, ["en", "de"]);
/// ```
pub fn parse_accept_language(header: &str) -> Vec<LocaleCode> {
    let mut entries: Vec<AcceptLanguageEntry> = header
        .split(',')
        .filter_map(|part| {
            let mut split = part.trim().splitn(2, ';');
            let tag = split.next()?.trim();

            if tag.is_empty() || tag == "*" {
                return None;
            }

            let quality = split
                .next()
                .and_then(|q| q.trim().strip_prefix("q="))
                .and_then(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);

            if quality <= 0.0 {
                return None;
            }

            let locale = LocaleCode::parse(tag).ok()?;
            Some(AcceptLanguageEntry { locale, quality })
        })
        .collect();

    // Stable: equal qualities keep header order
    entries.sort_by(|a, b| {
        b.quality
            .partial_cmp(&a.quality)
            .unwrap_or(Ordering::Equal)
    });

    let mut locales: Vec<LocaleCode> = Vec::with_capacity(entries.len());
    for entry in entries {
        if !locales.contains(&entry.locale) {
            locales.push(entry.locale);
        }
    }
    locales
}
