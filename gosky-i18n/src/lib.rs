//! Localized Content Resolution for gosky
//!
//! Stored content documents keep their display fields per locale. Before a
//! document goes out in a JSON response it is flattened for one locale:
//!
//! - **Value resolution**: requested locale, then the default locale, then
//!   an empty value. Never fails.
//! - **Document flattening**: configured fields of a JSON document reduced
//!   to plain strings and string lists.
//! - **Locale detection**: `?lang=`, `?locale=`, then `Accept-Language`,
//!   always validated against the supported set.
//!
//! # Quick Start
//!
//! ```rust
//! use gosky_i18n::{RequestParts, catalog, locale_from_request, localize_document};
//! use serde_json::json;
//!
//! let req = RequestParts::new().with_header("Accept-Language", "en-US,en;q=0.9");
//! let locale = locale_from_request(&req);
//!
//! let stored = json!({
//!     "name": {"tr": "Balon Turu", "en": "Balloon Tour"},
//!     "includes": [{"tr": "Transfer", "en": "Transfer"}, "Sertifika"],
//!     "price": 250
//! });
//! let out = localize_document(stored.as_object().unwrap(), Some(locale.as_str()), catalog::activity());
//!
//! assert_eq!(out["name"], "Balloon Tour");
//! assert_eq!(out["includes"], json!(["Transfer", "Sertifika"]));
//! ```
//!
//! # Configuration
//!
//! The supported locales (`tr`, `en`, `de`, `ru`, `ar`) and the default
//! (`tr`) can be replaced once at startup:
//!
//! ```rust,ignore
//! gosky_i18n::install(gosky_i18n::LocaleConfig::from_env()?)?;
//! ```

pub mod catalog;
mod config;
mod document;
mod error;
mod locale;
mod request;
mod resolve;
mod value;

pub use config::{
    DEFAULT_LOCALE, ENV_PREFIX, LocaleConfig, LocaleSettings, SUPPORTED_LOCALES, global, install,
};
pub use document::{
    Document, FieldSet, localize_document, localize_document_with, localize_documents,
    localize_json,
};
pub use error::I18nError;
pub use locale::{LocaleCode, parse_accept_language};
pub use request::{
    ACCEPT_LANGUAGE, LOCALE_QUERY_PARAMS, LocaleSource, RequestParts, locale_from_request,
    locale_from_request_with,
};
pub use resolve::{resolve_array, resolve_array_with, resolve_value, resolve_value_with};
pub use value::{LocalizedArray, LocalizedString};

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Document, FieldSet, I18nError, LocaleCode, LocaleConfig, LocaleSource, LocalizedArray,
        LocalizedString, RequestParts, Result, catalog, locale_from_request, localize_document,
        localize_documents, resolve_array, resolve_value,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_types_are_thread_safe() {
        assert_send_sync::<LocaleConfig>();
        assert_send_sync::<LocalizedString>();
        assert_send_sync::<LocalizedArray>();
        assert_send_sync::<FieldSet>();
        assert_send_sync::<RequestParts>();
    }

    #[test]
    fn test_builtin_constants() {
        assert_eq!(DEFAULT_LOCALE, "tr");
        assert!(SUPPORTED_LOCALES.contains(&"tr"));
        assert!(SUPPORTED_LOCALES.contains(&"en"));
        assert!(SUPPORTED_LOCALES.contains(&DEFAULT_LOCALE));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_resolution() {
        let stored = std::sync::Arc::new(
            serde_json::json!({"question": {"tr": "Ne giymeliyim?", "en": "What should I wear?"}})
                .as_object()
                .cloned()
                .unwrap_or_default(),
        );

        let mut handles = Vec::new();
        for i in 0..32 {
            let stored = stored.clone();
            handles.push(tokio::spawn(async move {
                let locale = if i % 2 == 0 { "tr" } else { "en" };
                let out = localize_document(&stored, Some(locale), catalog::faq());
                (locale, out["question"].as_str().map(str::to_string))
            }));
        }

        for handle in handles {
            let (locale, question) = handle.await.unwrap();
            let expected = if locale == "tr" { "Ne giymeliyim?" } else { "What should I wear?" };
            assert_eq!(question.as_deref(), Some(expected));
        }
    }
}
