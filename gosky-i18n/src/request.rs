//! Requested-locale extraction.
//!
//! Precedence: `lang` query parameter, `locale` query parameter, then the
//! `Accept-Language` header (by quality), then the default locale. Only the
//! first present hint is consulted; if it names no supported locale the
//! default is returned, so the result is always a supported locale.

use crate::config::{LocaleConfig, global};
use crate::{LocaleCode, parse_accept_language};
use gosky_log::debug;
use std::borrow::Cow;
use std::collections::HashMap;

/// Query parameters checked for an explicit locale, in order.
pub const LOCALE_QUERY_PARAMS: [&str; 2] = ["lang", "locale"];

/// Header carrying the client's language preferences.
pub const ACCEPT_LANGUAGE: &str = "accept-language";

/// Read access to the parts of a request that carry a locale hint.
pub trait LocaleSource {
    /// First value of query parameter `name`.
    fn query_param(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Value of header `name` (case-insensitive).
    fn header(&self, name: &str) -> Option<&str>;
}

/// Owned query parameters and headers, for callers without an
/// `http::Request` at hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParts {
    query: HashMap<String, String>,
    headers: HashMap<String, String>,
}

impl RequestParts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter. The first value for a name wins.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.entry(name.into()).or_insert_with(|| value.into());
        self
    }

    /// Set a header. Names are stored lowercase.
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }
}

impl LocaleSource for RequestParts {
    fn query_param(&self, name: &str) -> Option<Cow<'_, str>> {
        self.query.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

#[cfg(feature = "http")]
impl<B> LocaleSource for http::Request<B> {
    fn query_param(&self, name: &str) -> Option<Cow<'_, str>> {
        let query = self.uri().query()?;
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers().get(name).and_then(|v| v.to_str().ok())
    }
}

/// Locale requested by `req`, validated against the global configuration.
pub fn locale_from_request<R: LocaleSource + ?Sized>(req: &R) -> LocaleCode {
    locale_from_request_with(global(), req)
}

/// [`locale_from_request`] with an explicit configuration.
pub fn locale_from_request_with<R: LocaleSource + ?Sized>(
    config: &LocaleConfig,
    req: &R,
) -> LocaleCode {
    let query_hint = LOCALE_QUERY_PARAMS.iter().find_map(|param| {
        req.query_param(param)
            .map(|hint| hint.trim().to_string())
            .filter(|hint| !hint.is_empty())
    });

    if let Some(hint) = query_hint {
        return config.match_locale(&hint).unwrap_or_else(|| {
            debug!("Unsupported locale hint {:?}, using default", hint);
            config.default_locale().clone()
        });
    }

    if let Some(header) = req.header(ACCEPT_LANGUAGE).filter(|h| !h.trim().is_empty()) {
        if let Some(code) = parse_accept_language(header)
            .into_iter()
            .find(|code| config.is_supported(code))
        {
            return code;
        }
        debug!("No supported locale in Accept-Language {:?}", header);
    }

    config.default_locale().clone()
}
