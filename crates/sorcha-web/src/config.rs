//! Configuration file loading (site.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use sorcha_web_static::{AnalyticsIds, BuildConfig};

/// Configuration file structure (site.toml).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub build: BuildSection,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteSection {
    /// Project root; every other path is relative to it
    pub root: PathBuf,
    pub templates: PathBuf,
    pub partials: PathBuf,
    pub output: PathBuf,
    pub template_extension: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            templates: PathBuf::from("src/templates"),
            partials: PathBuf::from("src/partials"),
            output: PathBuf::from("dist"),
            template_extension: "hbs".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BuildSection {
    pub minify: bool,
    /// Assets copied in addition to the built-in list
    pub extra_assets: Vec<String>,
}

impl ConfigFile {
    /// Resolve into a build configuration. Configured paths are relative to
    /// `base_dir`, the directory holding the config file. `output` overrides
    /// the configured output directory; `minify` can only switch minification
    /// on.
    pub fn into_build_config(
        self,
        base_dir: &Path,
        output: Option<PathBuf>,
        minify: bool,
    ) -> BuildConfig {
        let root = base_dir.join(&self.site.root);

        BuildConfig {
            templates_dir: root.join(&self.site.templates),
            partials_dir: root.join(&self.site.partials),
            output_dir: output.unwrap_or_else(|| root.join(&self.site.output)),
            template_extension: self.site.template_extension,
            minify: minify || self.build.minify,
            extra_assets: self.build.extra_assets,
            analytics: AnalyticsIds::from_env(),
            year: None,
            root,
        }
    }
}

/// Directory that paths inside the config file at `path` are relative to.
pub fn config_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No {} found, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("site.toml")).unwrap();

        assert_eq!(config, ConfigFile::default());
        assert_eq!(config.site.template_extension, "hbs");
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site]\noutput = \"public\"\n\n[build]\nminify = true\n").unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.site.output, PathBuf::from("public"));
        assert_eq!(config.site.templates, PathBuf::from("src/templates"));
        assert!(config.build.minify);
        assert!(config.build.extra_assets.is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site\noutput = ").unwrap();

        let err = load_config(&path).unwrap_err();

        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn resolves_paths_against_root() {
        let config = ConfigFile {
            site: SiteSection {
                root: PathBuf::from("www"),
                ..Default::default()
            },
            build: BuildSection {
                minify: false,
                extra_assets: vec!["pkg/interact.js".to_string()],
            },
        };

        let build = config.into_build_config(Path::new(""), None, false);

        assert_eq!(build.templates_dir, PathBuf::from("www/src/templates"));
        assert_eq!(build.partials_dir, PathBuf::from("www/src/partials"));
        assert_eq!(build.output_dir, PathBuf::from("www/dist"));
        assert_eq!(build.extra_assets, vec!["pkg/interact.js"]);
        assert!(!build.minify);
    }

    #[test]
    fn flags_override_file_settings() {
        let build = ConfigFile::default().into_build_config(
            Path::new("."),
            Some(PathBuf::from("out")),
            true,
        );

        assert_eq!(build.output_dir, PathBuf::from("out"));
        assert!(build.minify);
    }

    #[test]
    fn paths_are_relative_to_the_config_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("other/site.toml");
        fs::create_dir_all(temp.path().join("other")).unwrap();
        fs::write(&path, "[site]\noutput = \"public\"\n").unwrap();

        let build = load_config(&path)
            .unwrap()
            .into_build_config(config_dir(&path), None, false);

        let other = temp.path().join("other");
        assert_eq!(build.root, other.join("."));
        assert_eq!(build.templates_dir, other.join("./src/templates"));
        assert_eq!(build.output_dir, other.join("./public"));
    }

    #[test]
    fn bare_config_name_resolves_against_current_dir() {
        assert_eq!(config_dir(Path::new("site.toml")), Path::new("."));
        assert_eq!(config_dir(Path::new("web/site.toml")), Path::new("web"));
    }
}
