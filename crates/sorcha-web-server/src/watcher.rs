//! File watching for rebuilds.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use sorcha_web_static::{BuildConfig, STATIC_ASSETS};
use tokio::sync::mpsc as async_mpsc;

/// Quiet period that ends a burst of file events, in milliseconds.
const DEBOUNCE_MS: u64 = 100;

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// A page template changed
    Template(PathBuf),

    /// A partial changed
    Partial(PathBuf),

    /// A static asset changed
    Asset(PathBuf),
}

impl WatchEvent {
    pub fn path(&self) -> &Path {
        match self {
            WatchEvent::Template(path) | WatchEvent::Partial(path) | WatchEvent::Asset(path) => {
                path
            }
        }
    }
}

/// The locations a site build reads from.
#[derive(Debug, Clone)]
pub struct WatchRoots {
    /// Project root, watched non-recursively for top-level assets
    pub root: PathBuf,
    pub templates: PathBuf,
    pub partials: PathBuf,
    /// Every asset source, top-level or nested
    pub assets: Vec<PathBuf>,
}

impl WatchRoots {
    /// Collect the inputs of a build.
    ///
    /// Every path is absolute, including assets that do not exist yet, so
    /// they match the paths the OS watcher reports once they are created.
    pub fn from_config(config: &BuildConfig) -> Self {
        let root = canonical(&config.root);
        let assets = STATIC_ASSETS
            .iter()
            .copied()
            .chain(config.extra_assets.iter().map(String::as_str))
            .map(|asset| canonical(&root.join(asset)))
            .collect();

        Self {
            root,
            templates: canonical(&config.templates_dir),
            partials: canonical(&config.partials_dir),
            assets,
        }
    }

    /// Map a changed path to a watch event. Paths outside the build inputs and
    /// access-only events are ignored.
    pub fn classify(&self, path: &Path, kind: &EventKind) -> Option<WatchEvent> {
        match kind {
            EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
            _ => return None,
        }

        let path = canonical(path);
        if path.starts_with(&self.templates) {
            Some(WatchEvent::Template(path))
        } else if path.starts_with(&self.partials) {
            Some(WatchEvent::Partial(path))
        } else if self.assets.contains(&path) {
            Some(WatchEvent::Asset(path))
        } else {
            None
        }
    }

    /// Paths to register with the OS watcher and how.
    fn watch_list(&self) -> Vec<(PathBuf, RecursiveMode)> {
        let mut list = vec![
            (self.root.clone(), RecursiveMode::NonRecursive),
            (self.templates.clone(), RecursiveMode::Recursive),
            (self.partials.clone(), RecursiveMode::Recursive),
        ];

        // Nested assets live outside the root's non-recursive watch
        for asset in &self.assets {
            if asset.parent() != Some(self.root.as_path()) {
                list.push((asset.clone(), RecursiveMode::NonRecursive));
            }
        }

        list
    }
}

/// File watcher for detecting changes.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Create a new file watcher for the given build inputs.
    ///
    /// Returns the watcher and a channel to receive events.
    pub fn new(
        roots: WatchRoots,
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        // Create the watcher
        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        for (path, mode) in roots.watch_list() {
            if path.exists() {
                watcher.watch(&path, mode).map_err(std::io::Error::other)?;
            }
        }

        // Forward classified events once a burst of saves has settled
        std::thread::spawn(move || {
            let quiet = Duration::from_millis(DEBOUNCE_MS);

            while let Some(watch_event) =
                next_settled(&sync_rx, quiet, |event| classify_event(&roots, event))
            {
                if async_tx.blocking_send(watch_event).is_err() {
                    break;
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Wait for the next classified event, then keep absorbing events until
/// `quiet` passes without one. Returns the last classified event of the
/// burst, or `None` once the channel closes with nothing pending.
fn next_settled<E, T>(
    rx: &mpsc::Receiver<E>,
    quiet: Duration,
    classify: impl Fn(&E) -> Option<T>,
) -> Option<T> {
    let mut pending = loop {
        let event = rx.recv().ok()?;
        if let Some(classified) = classify(&event) {
            break classified;
        }
    };

    loop {
        match rx.recv_timeout(quiet) {
            Ok(event) => {
                if let Some(classified) = classify(&event) {
                    pending = classified;
                }
            }
            Err(_) => return Some(pending),
        }
    }
}

fn classify_event(roots: &WatchRoots, event: &notify::Event) -> Option<WatchEvent> {
    event
        .paths
        .iter()
        .find_map(|path| roots.classify(path, &event.kind))
}

/// Absolute, symlink-free form of `path`. A path that does not exist is
/// resolved through its parent directory.
fn canonical(path: &Path) -> PathBuf {
    if let Ok(resolved) = path.canonicalize() {
        return resolved;
    }

    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => {
            canonical(parent).join(name)
        }
        _ => std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()),
    }
}
