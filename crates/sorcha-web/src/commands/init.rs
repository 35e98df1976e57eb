//! Scaffold a starter site.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Files written by `init`, relative to the project root.
const STARTER_FILES: &[(&str, &str)] = &[
    ("site.toml", DEFAULT_CONFIG),
    ("src/partials/head.hbs", DEFAULT_HEAD),
    ("src/partials/nav.hbs", DEFAULT_NAV),
    ("src/partials/footer.hbs", DEFAULT_FOOTER),
    ("src/templates/index.html.hbs", DEFAULT_INDEX),
    ("src/templates/features.html.hbs", DEFAULT_FEATURES),
    ("styles.css", DEFAULT_STYLES),
    ("script.js", DEFAULT_SCRIPT),
];

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing site...");

    let written = scaffold(Path::new("."), yes)?;
    if written.is_empty() {
        tracing::warn!("All starter files already exist. Use --yes to overwrite.");
        return Ok(());
    }

    tracing::info!("Initialization complete!");
    tracing::info!(
        "Build the interaction module with \
         'wasm-pack build crates/sorcha-web-interact --target web --out-dir ../../pkg'"
    );
    tracing::info!("Run 'sorcha-web dev' to start the development server.");

    Ok(())
}

/// Write the starter files under `root`. Existing files are kept unless
/// `overwrite` is set. Returns the files written.
pub fn scaffold(root: &Path, overwrite: bool) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for (relative, content) in STARTER_FILES {
        let path = root.join(relative);
        if path.exists() && !overwrite {
            tracing::debug!("Keeping existing {}", relative);
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", relative))?;
        tracing::info!("Created {}", relative);

        written.push(path);
    }

    Ok(written)
}

const DEFAULT_CONFIG: &str = r#"# Sorcha.dev site configuration

[site]
# Project root; the paths below are relative to it
root = "."

# Page templates and partials
templates = "src/templates"
partials = "src/partials"
template_extension = "hbs"

# Output directory for the built site
output = "dist"

[build]
# Minify stylesheets while copying
minify = false

# Interaction module produced by wasm-pack
extra_assets = [
  "pkg/sorcha_web_interact.js",
  "pkg/sorcha_web_interact_bg.wasm",
]
"#;

const DEFAULT_HEAD: &str = r#"<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<link rel="icon" href="/favicon.svg" type="image/svg+xml">
<link rel="manifest" href="/site.webmanifest">
<link rel="stylesheet" href="/styles.css">
<script async src="https://www.googletagmanager.com/gtag/js?id={{ googleAnalyticsId }}"></script>
<script>
  window.dataLayer = window.dataLayer || [];
  function gtag(){dataLayer.push(arguments);}
  gtag('js', new Date());
  gtag('config', '{{ googleAnalyticsId }}');
</script>
<!-- {{ googleTagManagerId }} -->
"#;

const DEFAULT_NAV: &str = r#"<nav class="navbar">
  <div class="nav-wrapper">
    <a href="/" class="nav-logo">Sorcha</a>
    <button class="mobile-menu-toggle" aria-label="Toggle menu">&#9776;</button>
    <ul class="nav-menu">
      <li><a href="/"{% if isActive.home %} class="active"{% endif %}>Home</a></li>
      <li><a href="/features.html"{% if isActive.features %} class="active"{% endif %}>Features</a></li>
      <li><a href="/use-cases.html"{% if isActive.useCases %} class="active"{% endif %}>Use Cases</a></li>
      <li><a href="/docs.html"{% if isActive.docs %} class="active"{% endif %}>Docs</a></li>
      <li><a href="https://github.com/StuartF303/Sorcha" target="_blank" rel="noopener">GitHub</a></li>
    </ul>
  </div>
</nav>
"#;

const DEFAULT_FOOTER: &str = r#"<footer class="footer">
  <p>&copy; {{ year }} Sorcha. Secure Data Flow Orchestration Platform.</p>
</footer>
"#;

const DEFAULT_INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  {% include "head" %}
  <title>Sorcha - Secure Data Flow Orchestration</title>
</head>
<body>
  {% include "nav" %}
  <header class="hero">
    <h1>Secure Data Flow Orchestration</h1>
    <div class="hero-stats">
      <div class="stat"><span class="stat-number">80%</span> less glue code</div>
      <div class="stat"><span class="stat-number">12</span> connectors</div>
      <div class="stat"><span class="stat-number">∞</span> workflows</div>
    </div>
  </header>
  <section id="overview">
    <div class="feature-card"><h2>Declarative flows</h2></div>
    <div class="feature-card"><h2>Signed payloads</h2></div>
  </section>
  <section id="quickstart">
    <div class="code-block"><pre><code>docker compose up -d</code></pre></div>
  </section>
  {% include "footer" %}
  <script type="module" src="/script.js"></script>
</body>
</html>
"#;

const DEFAULT_FEATURES: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  {% include "head" %}
  <title>Features - Sorcha</title>
</head>
<body>
  {% include "nav" %}
  <main>
    <div class="use-case-card"><h2>Audit trails</h2></div>
    <div class="benefit-item"><h2>Zero trust by default</h2></div>
  </main>
  {% include "footer" %}
  <script type="module" src="/script.js"></script>
</body>
</html>
"#;

const DEFAULT_STYLES: &str = r#"body { margin: 0; font-family: system-ui, sans-serif; }
.navbar { position: sticky; top: 0; transition: transform 0.3s ease; }
.navbar.scroll-down { transform: translateY(-100%); }
.navbar.scroll-up { transform: translateY(0); }
.nav-menu a.active, .docs-nav a.active { font-weight: 600; }
@media (max-width: 768px) {
  .nav-menu { display: none; }
  .nav-menu.active { display: block; }
}
"#;

const DEFAULT_SCRIPT: &str = r#"import init from './pkg/sorcha_web_interact.js';

init();
"#;
