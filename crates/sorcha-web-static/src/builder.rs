//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use walkdir::WalkDir;

use crate::assets::{AssetPipeline, STATIC_ASSETS};
use crate::context::{page_identity, strip_extension, AnalyticsIds, PageContext, SiteContext};
use crate::templates::TemplateEngine;

/// Configuration for building the site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Project root; static assets are resolved against it
    pub root: PathBuf,

    /// Page templates directory
    pub templates_dir: PathBuf,

    /// Partials directory
    pub partials_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Template file extension, without the leading dot
    pub template_extension: String,

    /// Minify stylesheets while copying them
    pub minify: bool,

    /// Assets copied in addition to the built-in list
    pub extra_assets: Vec<String>,

    /// Analytics identifiers injected into every page
    pub analytics: AnalyticsIds,

    /// Copyright year; the current year when unset
    pub year: Option<i32>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            templates_dir: PathBuf::from("src/templates"),
            partials_dir: PathBuf::from("src/partials"),
            output_dir: PathBuf::from("dist"),
            template_extension: "hbs".to_string(),
            minify: false,
            extra_assets: vec![],
            analytics: AnalyticsIds::from_env(),
            year: None,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildReport {
    /// Output file names of the rendered pages, in build order
    pub pages: Vec<String>,

    /// Registered partial names
    pub partials: Vec<String>,

    /// Assets that were found and copied
    pub assets: Vec<String>,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Failed to register partial {name}: {message}")]
    PartialError { name: String, message: String },

    #[error("Failed to render template {template}: {message}")]
    TemplateError { template: String, message: String },

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

impl BuildError {
    fn read(path: &Path, err: impl std::fmt::Display) -> Self {
        BuildError::ReadError {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

/// Static site builder.
pub struct SiteBuilder {
    config: BuildConfig,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Build the site: register partials, render every page, copy assets.
    ///
    /// The output directory is rewritten from scratch on every run; any error
    /// aborts the build.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let start = Instant::now();
        tracing::info!("Starting build...");

        // Ensure output directory exists
        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let site = self.site_context();
        tracing::info!("GA ID: {}", site.google_analytics_id);
        tracing::info!("GTM ID: {}", site.google_tag_manager_id);

        let mut engine = TemplateEngine::new();
        let partials = self.register_partials(&mut engine)?;

        let mut pages = Vec::new();
        for template_file in self.list_templates(&self.config.templates_dir)? {
            let page = page_identity(&template_file, self.extension());
            let context = PageContext::for_page(&site, &page);
            let output = self.build_page(&engine, &template_file, &context)?;
            pages.push(file_name(&output));
        }

        let assets = self.copy_static_assets()?;

        let duration = start.elapsed();

        Ok(BuildReport {
            pages,
            partials,
            assets,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Shared context for this run.
    pub fn site_context(&self) -> SiteContext {
        let analytics = self.config.analytics.clone();
        match self.config.year {
            Some(year) => SiteContext::new(analytics, year),
            None => SiteContext::current(analytics),
        }
    }

    /// Register every partial in the partials directory, named after its file.
    pub fn register_partials(
        &self,
        engine: &mut TemplateEngine,
    ) -> Result<Vec<String>, BuildError> {
        let mut names = Vec::new();

        for file in self.list_templates(&self.config.partials_dir)? {
            let path = self.config.partials_dir.join(&file);
            let source = fs::read_to_string(&path).map_err(|e| BuildError::read(&path, e))?;

            let name = strip_extension(&file, self.extension()).to_string();
            engine
                .register_partial(&name, &source)
                .map_err(|e| BuildError::PartialError {
                    name: name.clone(),
                    message: e.to_string(),
                })?;

            tracing::info!("Registered partial: {}", name);
            names.push(name);
        }

        Ok(names)
    }

    /// Render one page template and write it to the output directory.
    ///
    /// The output file is the template file name minus the template
    /// extension. Returns the written path.
    pub fn build_page(
        &self,
        engine: &TemplateEngine,
        template_file: &str,
        context: &PageContext,
    ) -> Result<PathBuf, BuildError> {
        let template_path = self.config.templates_dir.join(template_file);
        let source = fs::read_to_string(&template_path)
            .map_err(|e| BuildError::read(&template_path, e))?;

        let html = engine
            .render_page(template_file, &source, context)
            .map_err(|e| BuildError::TemplateError {
                template: template_file.to_string(),
                message: e.to_string(),
            })?;

        let output_name = strip_extension(template_file, self.extension());
        let output_path = self.config.output_dir.join(output_name);

        fs::write(&output_path, html).map_err(|e| BuildError::WriteError(e.to_string()))?;
        tracing::info!("Built: {}", output_name);

        Ok(output_path)
    }

    /// Copy the static assets that exist under the project root.
    pub fn copy_static_assets(&self) -> Result<Vec<String>, BuildError> {
        let mut copied = Vec::new();

        let assets = STATIC_ASSETS
            .iter()
            .copied()
            .chain(self.config.extra_assets.iter().map(String::as_str));

        for asset in assets {
            let result = AssetPipeline::copy_asset(
                &self.config.root,
                &self.config.output_dir,
                asset,
                self.config.minify,
            )
            .map_err(|e| BuildError::WriteError(format!("{}: {}", asset, e)))?;

            if result.is_some() {
                tracing::info!("Copied: {}", asset);
                copied.push(asset.to_string());
            }
        }

        Ok(copied)
    }

    /// List template files directly inside `dir`, sorted by file name.
    fn list_templates(&self, dir: &Path) -> Result<Vec<String>, BuildError> {
        if !dir.is_dir() {
            return Err(BuildError::read(dir, "directory not found"));
        }

        let suffix = format!(".{}", self.extension());
        let mut files = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| BuildError::read(dir, e))?;

            if !entry.file_type().is_file() {
                continue;
            }

            match entry.file_name().to_str() {
                Some(name) if name.ends_with(&suffix) => files.push(name.to_string()),
                Some(_) => {}
                None => tracing::warn!("Skipping non UTF-8 file name in {}", dir.display()),
            }
        }

        Ok(files)
    }

    fn extension(&self) -> &str {
        self.config.template_extension.trim_start_matches('.')
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
