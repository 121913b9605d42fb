//! Localization Benchmarks
//!
//! Measures value resolution, document flattening and request-locale
//! detection on the shapes the API serves.
//!
//! Run benchmarks:
//!   cargo bench --bench localize_benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use gosky::{
    LocaleConfig, LocalizedString, RequestParts, catalog, locale_from_request_with,
    localize_document_with, resolve_value_with,
};
use serde_json::json;
use std::hint::black_box;

fn bench_resolve_value(c: &mut Criterion) {
    let config = LocaleConfig::default();
    let value = LocalizedString::localized([("tr", "Merhaba"), ("en", ""), ("de", "Hallo")]);

    let mut group = c.benchmark_group("resolve_value");
    group.bench_function("requested", |b| {
        b.iter(|| resolve_value_with(&config, Some(black_box(&value)), Some("de")))
    });
    group.bench_function("fallback", |b| {
        b.iter(|| resolve_value_with(&config, Some(black_box(&value)), Some("en")))
    });
    group.finish();
}

fn bench_localize_activity(c: &mut Criterion) {
    let config = LocaleConfig::default();
    let stored = json!({
        "_id": "65a1f0c2",
        "slug": "cappadocia-balloon",
        "name": {"tr": "Kapadokya Balon Turu", "en": "Cappadocia Balloon Tour", "de": "Ballonfahrt"},
        "description": {"tr": "Gün doğumunda uçuş", "en": "Sunrise flight"},
        "shortDescription": {"tr": "Klasik uçuş", "en": "Classic flight"},
        "location": {"tr": "Göreme", "en": "Goreme"},
        "meetingPoint": {"tr": "Otel lobisi", "en": "Hotel lobby"},
        "duration": {"tr": "3 saat", "en": "3 hours"},
        "includes": [{"tr": "Transfer", "en": "Transfer"}, {"tr": "Kahvaltı", "en": "Breakfast"}, "Sertifika"],
        "excludes": [{"tr": "Fotoğraf", "en": "Photos"}],
        "price": 250,
        "currency": "EUR",
        "images": ["a.jpg", "b.jpg", "c.jpg"]
    });
    let doc = stored.as_object().cloned().unwrap_or_default();

    c.bench_function("localize_activity", |b| {
        b.iter(|| localize_document_with(&config, black_box(&doc), Some("en"), catalog::activity()))
    });
}

fn bench_locale_from_request(c: &mut Criterion) {
    let config = LocaleConfig::default();
    let req = RequestParts::new().with_header("Accept-Language", "fr-FR,fr;q=0.9,en-US;q=0.8,en;q=0.7");

    c.bench_function("locale_from_accept_language", |b| {
        b.iter(|| locale_from_request_with(&config, black_box(&req)))
    });
}

criterion_group!(
    benches,
    bench_resolve_value,
    bench_localize_activity,
    bench_locale_from_request
);
criterion_main!(benches);
