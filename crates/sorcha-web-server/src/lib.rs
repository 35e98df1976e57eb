//! Preview server with watch-and-rebuild for the Sorcha.dev site.
//!
//! Serves the build output directory and rebuilds the whole site whenever a
//! template, partial or static asset changes.

pub mod server;
pub mod watcher;

pub use server::{rebuild, static_router, DevServer, DevServerConfig, ServerError};
pub use watcher::{FileWatcher, WatchEvent, WatchRoots};
