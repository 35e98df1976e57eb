//! Render contexts handed to page templates.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

/// Environment variable holding the Google Analytics measurement ID.
pub const GA_MEASUREMENT_ID_VAR: &str = "GA_MEASUREMENT_ID";

/// Environment variable holding the Google Tag Manager container ID.
pub const GTM_CONTAINER_ID_VAR: &str = "GTM_CONTAINER_ID";

/// Placeholder used when no measurement ID is configured.
pub const DEFAULT_GA_MEASUREMENT_ID: &str = "G-XXXXXXXXXX";

/// Placeholder used when no container ID is configured.
pub const DEFAULT_GTM_CONTAINER_ID: &str = "GTM-XXXXXXX";

/// Nav keys and the page identity that marks each one active.
///
/// Adding a nav entry to the site means adding a row here; templates read the
/// flag as `isActive.<key>`.
pub const ACTIVE_PAGES: &[(&str, &str)] = &[
    ("home", "index"),
    ("features", "features"),
    ("useCases", "use-cases"),
    ("docs", "docs"),
];

/// Analytics identifiers injected into every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsIds {
    /// Google Analytics measurement ID
    pub ga_measurement_id: String,
    /// Google Tag Manager container ID
    pub gtm_container_id: String,
}

impl AnalyticsIds {
    /// Read the IDs from the process environment, falling back to placeholders.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the IDs through `lookup`. Unset and empty values fall back to
    /// the placeholders.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |key: &str, fallback: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        Self {
            ga_measurement_id: resolve(GA_MEASUREMENT_ID_VAR, DEFAULT_GA_MEASUREMENT_ID),
            gtm_container_id: resolve(GTM_CONTAINER_ID_VAR, DEFAULT_GTM_CONTAINER_ID),
        }
    }
}

impl Default for AnalyticsIds {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Values shared by every page of a build run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContext {
    pub google_analytics_id: String,
    pub google_tag_manager_id: String,
    pub year: i32,
}

impl SiteContext {
    pub fn new(analytics: AnalyticsIds, year: i32) -> Self {
        Self {
            google_analytics_id: analytics.ga_measurement_id,
            google_tag_manager_id: analytics.gtm_container_id,
            year,
        }
    }

    /// Shared context stamped with the current local year.
    pub fn current(analytics: AnalyticsIds) -> Self {
        Self::new(analytics, chrono::Local::now().year())
    }
}

/// Which nav entries are active for a page, keyed by nav key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActiveFlags(BTreeMap<&'static str, bool>);

impl ActiveFlags {
    /// Look up the flags for a page identity. Unknown pages get all-false flags.
    pub fn for_page(page: &str) -> Self {
        Self(
            ACTIVE_PAGES
                .iter()
                .map(|(key, identity)| (*key, *identity == page))
                .collect(),
        )
    }
}

/// Context for rendering a single page template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    pub google_analytics_id: String,
    pub google_tag_manager_id: String,
    pub year: i32,
    /// Page identity, e.g. `index` or `use-cases`
    pub page: String,
    pub is_active: ActiveFlags,
}

impl PageContext {
    /// Build the context for `page` on top of the shared site values.
    pub fn for_page(site: &SiteContext, page: &str) -> Self {
        Self {
            google_analytics_id: site.google_analytics_id.clone(),
            google_tag_manager_id: site.google_tag_manager_id.clone(),
            year: site.year,
            page: page.to_string(),
            is_active: ActiveFlags::for_page(page),
        }
    }
}

/// Derive the page identity from a template file name.
///
/// `index.html.hbs` and `index.hbs` both map to `index`.
pub fn page_identity(template_file: &str, extension: &str) -> String {
    let stem = strip_extension(template_file, extension);
    stem.strip_suffix(".html").unwrap_or(stem).to_string()
}

/// Strip `.<extension>` from a file name, leaving it untouched otherwise.
pub fn strip_extension<'a>(file_name: &'a str, extension: &str) -> &'a str {
    file_name
        .strip_suffix(extension)
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or(file_name)
}
