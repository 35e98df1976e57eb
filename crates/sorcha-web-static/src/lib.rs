//! Template build pipeline for the Sorcha.dev marketing site.
//!
//! Renders page templates (with partials) into a flat output directory and
//! copies the site's static assets next to them.

pub mod assets;
pub mod builder;
pub mod context;
pub mod templates;

pub use assets::{AssetPipeline, STATIC_ASSETS};
pub use builder::{BuildConfig, BuildError, BuildReport, SiteBuilder};
pub use context::{ActiveFlags, AnalyticsIds, PageContext, SiteContext};
pub use templates::TemplateEngine;
