//! Static asset copying and CSS processing.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Assets copied from the project root into the output directory.
pub const STATIC_ASSETS: &[&str] = &[
    "styles.css",
    "script.js",
    "CNAME",
    "vercel.json",
    "netlify.toml",
    "favicon.svg",
    "site.webmanifest",
];

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Copy `asset` from `root` into `output_dir`, keeping its relative path.
    ///
    /// Returns `Ok(None)` when the source does not exist. Stylesheets are
    /// minified when `minify` is set; one that fails to parse is copied as is.
    /// Absolute asset paths and paths with `..` are rejected.
    pub fn copy_asset(
        root: &Path,
        output_dir: &Path,
        asset: &str,
        minify: bool,
    ) -> io::Result<Option<PathBuf>> {
        if !is_relative_asset(asset) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("asset path must stay inside the project: {}", asset),
            ));
        }

        let source = root.join(asset);
        if !source.is_file() {
            tracing::debug!("Skipping missing asset: {}", asset);
            return Ok(None);
        }

        let dest = output_dir.join(asset);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        if minify && is_stylesheet(asset) {
            let css = fs::read_to_string(&source)?;
            let css = match Self::minify_css(&css) {
                Ok(minified) => minified,
                Err(e) => {
                    tracing::warn!("Could not minify {}, copying as is: {}", asset, e);
                    css
                }
            };
            fs::write(&dest, css)?;
        } else {
            fs::copy(&source, &dest)?;
        }

        Ok(Some(dest))
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

/// Whether `asset` is a plain relative path that cannot leave its base directory.
fn is_relative_asset(asset: &str) -> bool {
    !asset.is_empty()
        && Path::new(asset)
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

fn is_stylesheet(asset: &str) -> bool {
    Path::new(asset)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("css"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn copies_existing_asset() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");
        fs::create_dir_all(&out).unwrap();
        fs::write(temp.path().join("CNAME"), "sorcha.dev\n").unwrap();

        let copied = AssetPipeline::copy_asset(temp.path(), &out, "CNAME", false).unwrap();

        assert_eq!(copied, Some(out.join("CNAME")));
        assert_eq!(fs::read_to_string(out.join("CNAME")).unwrap(), "sorcha.dev\n");
    }

    #[test]
    fn skips_missing_asset() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");
        fs::create_dir_all(&out).unwrap();

        let copied = AssetPipeline::copy_asset(temp.path(), &out, "vercel.json", false).unwrap();

        assert_eq!(copied, None);
        assert!(!out.join("vercel.json").exists());
    }

    #[test]
    fn keeps_nested_asset_paths() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");
        fs::create_dir_all(temp.path().join("pkg")).unwrap();
        fs::write(temp.path().join("pkg/site.js"), "export {};").unwrap();

        AssetPipeline::copy_asset(temp.path(), &out, "pkg/site.js", false).unwrap();

        assert!(out.join("pkg/site.js").exists());
    }

    #[test]
    fn minifies_stylesheets_when_enabled() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");
        fs::create_dir_all(&out).unwrap();
        fs::write(
            temp.path().join("styles.css"),
            ".navbar {\n  color: red;\n}\n",
        )
        .unwrap();

        AssetPipeline::copy_asset(temp.path(), &out, "styles.css", true).unwrap();

        let css = fs::read_to_string(out.join("styles.css")).unwrap();
        assert!(!css.contains('\n'));
        assert!(css.starts_with(".navbar{"));
    }

    #[test]
    fn rejects_absolute_asset_paths() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");
        let source = temp.path().join("pkg.js");
        fs::write(&source, "export const x = 1;").unwrap();

        let err = AssetPipeline::copy_asset(temp.path(), &out, source.to_str().unwrap(), false)
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(fs::read_to_string(&source).unwrap(), "export const x = 1;");
    }

    #[test]
    fn rejects_parent_directory_asset_paths() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("site");
        let out = root.join("dist");
        fs::create_dir_all(temp.path().join("up")).unwrap();
        fs::write(temp.path().join("up/evil.js"), "evil").unwrap();

        let err = AssetPipeline::copy_asset(&root, &out, "../up/evil.js", false).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(!root.join("up/evil.js").exists());
        assert!(!out.exists());
    }

    #[test]
    fn accepts_plain_relative_asset_paths() {
        assert!(is_relative_asset("styles.css"));
        assert!(is_relative_asset("pkg/site.js"));
        assert!(is_relative_asset("./pkg/site.js"));
        assert!(!is_relative_asset(""));
        assert!(!is_relative_asset("/etc/passwd"));
        assert!(!is_relative_asset("pkg/../../secret"));
    }

    #[test]
    fn only_stylesheets_are_minified() {
        assert!(is_stylesheet("styles.css"));
        assert!(is_stylesheet("theme/print.CSS"));
        assert!(!is_stylesheet("script.js"));
        assert!(!is_stylesheet("CNAME"));
    }
}
