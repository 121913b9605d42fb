//! Document flattening.
//!
//! A stored document is a JSON object whose display fields hold per-locale
//! values. [`localize_document`] produces a copy in which the configured
//! fields are reduced to one locale, ready to serialize into a response.

use crate::config::{LocaleConfig, global};
use crate::{LocalizedArray, LocalizedString};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// A JSON document as read from the store.
pub type Document = Map<String, Value>;

/// Which fields of an entity hold localized values.
///
/// Each call site passes its own field set; there is no global registry.
///
/// ```
/// use gosky_i18n::FieldSet;
///
/// let faq = FieldSet::new().strings(["question", "answer"]);
/// assert!(faq.is_string_field("answer"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    strings: BTreeSet<String>,
    arrays: BTreeSet<String>,
    nested: BTreeMap<String, FieldSet>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add fields holding a [`LocalizedString`].
    pub fn strings<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strings.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Add fields holding a [`LocalizedArray`].
    pub fn arrays<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arrays.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Add a field holding a sub-document, or a list of sub-documents,
    /// localized with `fields`.
    pub fn nested(mut self, field: impl Into<String>, fields: FieldSet) -> Self {
        self.nested.insert(field.into(), fields);
        self
    }

    pub fn is_string_field(&self, field: &str) -> bool {
        self.strings.contains(field)
    }

    pub fn is_array_field(&self, field: &str) -> bool {
        self.arrays.contains(field)
    }

    pub fn nested_fields(&self, field: &str) -> Option<&FieldSet> {
        self.nested.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty() && self.arrays.is_empty() && self.nested.is_empty()
    }
}

/// Flatten `doc` for `locale` using the global locale configuration.
///
/// ```
/// use gosky_i18n::{FieldSet, localize_document};
/// use serde_json::json;
///
/// let doc = json!({"title": {"tr": "Balon", "en": "Balloon"}, "order": 2});
/// let fields = FieldSet::new().strings(["title"]);
///
/// let out = localize_document(doc.as_object().unwrap(), Some("en"), &fields);
/// assert_eq!(out["title"], "Balloon");
/// assert_eq!(out["order"], 2);
/// ```
pub fn localize_document(doc: &Document, locale: Option<&str>, fields: &FieldSet) -> Document {
    localize_document_with(global(), doc, locale, fields)
}

/// [`localize_document`] with an explicit configuration.
///
/// The input is never modified. Each field is handled by the first kind
/// that names it: string, then array, then nested. Fields absent from `doc`
/// stay absent; every other field is copied unchanged.
pub fn localize_document_with(
    config: &LocaleConfig,
    doc: &Document,
    locale: Option<&str>,
    fields: &FieldSet,
) -> Document {
    let default = config.default_locale().as_str();
    flatten(doc, locale.unwrap_or(default), default, fields)
}

/// Flatten a list of documents, preserving order.
pub fn localize_documents<'a, I>(docs: I, locale: Option<&str>, fields: &FieldSet) -> Vec<Document>
where
    I: IntoIterator<Item = &'a Document>,
{
    let config = global();
    docs.into_iter()
        .map(|doc| localize_document_with(config, doc, locale, fields))
        .collect()
}

/// Flatten an arbitrary JSON value: objects are localized, anything else
/// (including `null` for a missing record) is returned as-is.
pub fn localize_json(value: &Value, locale: Option<&str>, fields: &FieldSet) -> Value {
    match value {
        Value::Object(doc) => Value::Object(localize_document(doc, locale, fields)),
        other => other.clone(),
    }
}

fn flatten(doc: &Document, locale: &str, default: &str, fields: &FieldSet) -> Document {
    doc.iter()
        .map(|(key, value)| {
            let localized = if fields.is_string_field(key) {
                let resolved = LocalizedString::from_json(value)
                    .map(|v| v.resolve(locale, default).to_string())
                    .unwrap_or_default();
                Value::String(resolved)
            } else if fields.is_array_field(key) {
                let resolved = LocalizedArray::from_json(value)
                    .map(|v| v.resolve(locale, default))
                    .unwrap_or_default();
                Value::Array(resolved.into_iter().map(Value::String).collect())
            } else if let Some(nested) = fields.nested_fields(key) {
                flatten_nested(value, locale, default, nested)
            } else {
                value.clone()
            };
            (key.clone(), localized)
        })
        .collect()
}

fn flatten_nested(value: &Value, locale: &str, default: &str, fields: &FieldSet) -> Value {
    match value {
        Value::Object(doc) => Value::Object(flatten(doc, locale, default, fields)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| match item {
                    Value::Object(doc) => Value::Object(flatten(doc, locale, default, fields)),
                    other => other.clone(),
                })
                .collect(),
        ),
        other => other.clone(),
    }
}
