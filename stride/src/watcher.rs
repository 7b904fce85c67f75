//! # Patch File Watching
//!
//! Backs `stride show --watch`: the patch file is monitored and every save
//! wakes the main thread, which resolves the preset again.
//!
//! The watcher is implemented using the [`notify`](https://crates.io/crates/notify)
//! crate. It watches the directory containing the patch file rather than the
//! file itself, because many editors save by writing a temporary file and
//! renaming it over the original, which would silently end a watch on the
//! file. Events for other files in the directory are ignored.
//!
//! Change notifications travel from notify's thread to the caller over an
//! [`mpsc`] channel; nothing else is shared.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use anyhow::Result;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use tracing::{error, info};

// Editors typically emit several events per save
const SETTLE_TIME: Duration = Duration::from_millis(50);

/// A live watch on one patch file.
///
/// Dropping it stops the watch.
pub struct PatchWatcher {
    _watcher: RecommendedWatcher,
    changes: Receiver<()>,
}

impl PatchWatcher {
    /// Block until the patch file changes.
    ///
    /// Returns `false` once the watcher has shut down.
    pub fn wait_for_change(&self) -> bool {
        if self.changes.recv().is_err() {
            return false;
        }
        std::thread::sleep(SETTLE_TIME);
        while self.changes.try_recv().is_ok() {}
        true
    }
}

/// Decides which file system events concern the patch file.
struct PatchChangeFilter {
    file_name: OsString,
}

impl PatchChangeFilter {
    fn is_patch_file(&self, path: &Path) -> bool {
        path.file_name() == Some(self.file_name.as_os_str())
    }

    fn process_file_event(&self, event: &Event, changes: &Sender<()>) {
        // Only care about file modifications and creations
        if !event.kind.is_modify() && !event.kind.is_create() {
            return;
        }

        if event.paths.iter().any(|path| self.is_patch_file(path)) {
            info!("Patch file modified: {:?}", self.file_name);
            // the receiver is gone only while the process is shutting down
            let _ = changes.send(());
        }
    }
}

/// Start watching `patch_file` for changes.
///
/// The returned [`PatchWatcher`] must be kept alive for as long as changes
/// should be reported.
///
/// # Errors
///
/// Returns an error if the path has no file name, if its directory does not
/// exist, or if the underlying `notify` watcher cannot be created or started.
pub fn start(patch_file: &Path) -> Result<PatchWatcher> {
    let file_name = patch_file
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("patch path {:?} has no file name", patch_file))?
        .to_os_string();
    let directory = watched_directory(patch_file);

    info!("Watching {:?} for changes to {:?}...", directory, file_name);

    let (tx, rx) = mpsc::channel();
    let filter = PatchChangeFilter { file_name };
    let mut watcher = create_file_watcher(filter, tx)?;
    start_watching_directory(&mut watcher, &directory)?;

    Ok(PatchWatcher {
        _watcher: watcher,
        changes: rx,
    })
}

fn watched_directory(patch_file: &Path) -> PathBuf {
    match patch_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Create the file system watcher with the patch-file event handler
fn create_file_watcher(filter: PatchChangeFilter, changes: Sender<()>) -> Result<RecommendedWatcher> {
    notify::recommended_watcher(move |result: notify::Result<Event>| match result {
        Ok(event) => filter.process_file_event(&event, &changes),
        Err(e) => error!("File watcher error: {:?}", e),
    })
    .map_err(|e| anyhow::anyhow!("Failed to create file watcher: {}", e))
}

fn start_watching_directory(watcher: &mut RecommendedWatcher, directory: &Path) -> Result<()> {
    if !directory.exists() {
        error!("Patch directory {:?} not found", directory);
        return Err(anyhow::anyhow!("Patch directory not found"));
    }

    watcher
        .watch(directory, RecursiveMode::NonRecursive)
        .map_err(|e| anyhow::anyhow!("Failed to watch patch directory: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_patch_file_matches() {
        let filter = PatchChangeFilter {
            file_name: OsString::from("overrides.json"),
        };
        assert!(filter.is_patch_file(Path::new("/tmp/configs/overrides.json")));
        assert!(!filter.is_patch_file(Path::new("/tmp/configs/overrides.json.swp")));
        assert!(!filter.is_patch_file(Path::new("/tmp/configs")));
    }

    #[test]
    fn bare_file_name_watches_current_directory() {
        assert_eq!(watched_directory(Path::new("overrides.json")), PathBuf::from("."));
        assert_eq!(watched_directory(Path::new("cfg/overrides.json")), PathBuf::from("cfg"));
    }
}
