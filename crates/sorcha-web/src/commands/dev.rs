//! Development server command.

use std::path::Path;

use anyhow::Result;
use sorcha_web_server::{DevServer, DevServerConfig};

use crate::config::{config_dir, load_config};

/// Run the dev server.
pub async fn run(config_path: &Path, port: u16, open_browser: bool) -> Result<()> {
    tracing::info!("Starting development server on port {}", port);

    let build =
        load_config(config_path)?.into_build_config(config_dir(config_path), None, false);

    let config = DevServerConfig {
        build,
        port,
        open: open_browser,
        ..Default::default()
    };

    DevServer::new(config).start().await?;

    Ok(())
}
