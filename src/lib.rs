// gosky - localized content for the GoSkyTurkey booking backend
//
// Flattens multi-language content documents (activities, gallery, FAQ,
// site settings) for the locale a request asks for.

// Re-export the localization layer
pub use gosky_i18n::*;

// Logging macros used across the workspace
pub use gosky_log;

#[cfg(feature = "config")]
pub use gosky_config;

// Prelude for common imports
pub mod prelude {
    pub use gosky_i18n::prelude::*;
    pub use gosky_i18n::{
        LocaleSettings, install, locale_from_request_with, localize_document_with, localize_json,
        resolve_array_with, resolve_value_with,
    };
}
