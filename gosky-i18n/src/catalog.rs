//! Field sets for the site's stored entities.

use crate::FieldSet;
use once_cell::sync::Lazy;

static ACTIVITY: Lazy<FieldSet> = Lazy::new(|| {
    FieldSet::new()
        .strings([
            "name",
            "description",
            "shortDescription",
            "location",
            "meetingPoint",
            "duration",
            "importantNote",
        ])
        .arrays(["includes", "excludes"])
});

static GALLERY_ITEM: Lazy<FieldSet> = Lazy::new(|| {
    FieldSet::new()
        .strings(["title", "description"])
        .nested("activity", FieldSet::new().strings(["name"]))
});

static FAQ: Lazy<FieldSet> = Lazy::new(|| FieldSet::new().strings(["question", "answer"]));

static SETTINGS: Lazy<FieldSet> = Lazy::new(|| {
    FieldSet::new()
        .strings([
            "heroTitle",
            "heroSubtitle",
            "siteDescription",
            "address",
            "aboutText",
            "termsText",
            "privacyText",
            "seoTitle",
            "seoDescription",
            "seoKeywords",
        ])
        .arrays(["whyUsItems"])
        .nested("trustBadges", FieldSet::new().strings(["text"]))
        .nested("testimonials", FieldSet::new().strings(["location", "text"]))
        .nested("stepperItems", FieldSet::new().strings(["title", "description"]))
});

/// Tour activities (paragliding, gyrocopter, balloon).
pub fn activity() -> &'static FieldSet {
    &ACTIVITY
}

/// Gallery items. The populated `activity` reference carries a localized name.
pub fn gallery_item() -> &'static FieldSet {
    &GALLERY_ITEM
}

/// Frequently asked questions.
pub fn faq() -> &'static FieldSet {
    &FAQ
}

/// Site-wide settings, including the badge, testimonial and stepper lists.
pub fn settings() -> &'static FieldSet {
    &SETTINGS
}
