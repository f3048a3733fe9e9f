//! Mount list used to build bwrap/unshare argv (§4.5).

use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountMode {
    ReadOnly,
    ReadWrite,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountEntry {
    pub host_path: PathBuf,
    /// Path the mount is visible at inside the sandbox. `None` means the
    /// sandbox sees it at the same path as the host (the common case).
    pub sandbox_path: Option<PathBuf>,
    pub mode: MountMode,
}

impl MountEntry {
    /// Where this mount is visible inside the sandbox — `sandbox_path` if
    /// remapped, else `host_path` unchanged.
    pub fn sandbox_path(&self) -> &Path {
        self.sandbox_path.as_deref().unwrap_or(&self.host_path)
    }
}

/// A consolidated list of bind mounts. Adding the same host path twice
/// upgrades read-only to read-write rather than duplicating the entry;
/// adding a path that is already covered read-write by an ancestor mount is
/// a no-op; adding an ancestor of an existing mount replaces it (§4.5
/// `add_mount` consolidation, §8 "consolidate on addMount").
#[derive(Debug, Clone, Default)]
pub struct MountList {
    entries: Vec<MountEntry>,
}

impl MountList {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Adds a mount with no sandbox-side remap (`sandbox_path == host_path`).
    pub fn add(&mut self, path: impl Into<PathBuf>, mode: MountMode) {
        self.add_mount(MountEntry {
            host_path: path.into(),
            sandbox_path: None,
            mode,
        });
    }

    /// Adds `entry` (§4.5 `Mount{hostPath, sandboxPath, mode}`), consolidating
    /// against existing entries by `host_path`.
    pub fn add_mount(&mut self, entry: MountEntry) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.host_path == entry.host_path) {
            if entry.mode == MountMode::ReadWrite {
                existing.mode = MountMode::ReadWrite;
            }
            existing.sandbox_path = entry.sandbox_path;
            return;
        }

        if let Some(covering) = self
            .entries
            .iter()
            .find(|e| entry.host_path.starts_with(&e.host_path) && e.host_path != entry.host_path)
        {
            if covering.mode == MountMode::ReadWrite || entry.mode == MountMode::ReadOnly {
                return;
            }
        }

        self.entries
            .retain(|e| !(e.host_path.starts_with(&entry.host_path) && e.host_path != entry.host_path));
        self.entries.push(entry);
    }

    /// Removes the mount at `host_path`, if any (§4.5 `remove_mount`).
    /// Returns whether an entry was removed.
    pub fn remove(&mut self, host_path: &Path) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.host_path != host_path);
        self.entries.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &MountEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|e| e.host_path == path)
    }
}

#[cfg(test)]
#[path = "mounts.test.rs"]
mod tests;
