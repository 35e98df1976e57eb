//! Template engine for rendering site pages.

use minijinja::{AutoEscape, Environment, Value};
use serde::Serialize;

/// Template engine using minijinja.
///
/// Partials are registered by name and pulled into pages with
/// `{% include "nav" %}`. Pages themselves are compiled on demand, rendered
/// once and dropped.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine with no partials and the `eq` helper installed.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.set_keep_trailing_newline(true);
        env.add_function("eq", eq);

        Self { env }
    }

    /// Register a partial under `name`, replacing any previous one.
    pub fn register_partial(&mut self, name: &str, source: &str) -> Result<(), minijinja::Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Compile `source` as the page template `name` and render it.
    pub fn render_page<S: Serialize>(
        &self,
        name: &str,
        source: &str,
        context: &S,
    ) -> Result<String, minijinja::Error> {
        self.env.render_named_str(name, source, context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Equality helper for conditionals: `{% if eq(page, "docs") %}`.
fn eq(a: Value, b: Value) -> bool {
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{AnalyticsIds, PageContext, SiteContext};
    use pretty_assertions::assert_eq;

    fn context(page: &str) -> PageContext {
        PageContext::for_page(&SiteContext::new(AnalyticsIds::default(), 2025), page)
    }

    #[test]
    fn renders_context_values() {
        let engine = TemplateEngine::new();

        let html = engine
            .render_page(
                "index.html.hbs",
                "<p>{{ googleAnalyticsId }} {{ googleTagManagerId }} &copy; {{ year }}</p>",
                &context("index"),
            )
            .unwrap();

        assert_eq!(html, "<p>G-XXXXXXXXXX GTM-XXXXXXX &copy; 2025</p>");
    }

    #[test]
    fn includes_registered_partials() {
        let mut engine = TemplateEngine::new();
        engine
            .register_partial(
                "nav",
                r#"<a href="/features.html"{% if isActive.features %} class="active"{% endif %}>Features</a>"#,
            )
            .unwrap();

        let html = engine
            .render_page("features.html.hbs", r#"{% include "nav" %}"#, &context("features"))
            .unwrap();

        assert_eq!(html, r#"<a href="/features.html" class="active">Features</a>"#);
    }

    #[test]
    fn eq_helper_compares_values() {
        let engine = TemplateEngine::new();
        let source = r#"{% if eq(page, "docs") %}docs{% else %}other{% endif %}"#;

        assert_eq!(engine.render_page("docs", source, &context("docs")).unwrap(), "docs");
        assert_eq!(engine.render_page("index", source, &context("index")).unwrap(), "other");
    }

    #[test]
    fn escapes_html_in_values() {
        let engine = TemplateEngine::new();
        let html = engine
            .render_page("page", "{{ page }}", &context("<b>"))
            .unwrap();

        assert_eq!(html, "&lt;b&gt;");
    }

    #[test]
    fn keeps_trailing_newline() {
        let engine = TemplateEngine::new();
        let html = engine
            .render_page("page", "<html></html>\n", &context("index"))
            .unwrap();

        assert_eq!(html, "<html></html>\n");
    }

    #[test]
    fn missing_partial_is_an_error() {
        let engine = TemplateEngine::new();
        let result = engine.render_page("page", r#"{% include "header" %}"#, &context("index"));

        assert!(result.is_err());
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut engine = TemplateEngine::new();
        engine.register_partial("footer", "<footer>{{ year }}</footer>").unwrap();
        let source = r#"<main>{{ page }}</main>{% include "footer" %}"#;

        let first = engine.render_page("index", source, &context("index")).unwrap();
        let second = engine.render_page("index", source, &context("index")).unwrap();

        assert_eq!(first, second);
    }
}
