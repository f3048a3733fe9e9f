//! Workspace isolation: an exclusive, mode-0700 directory the sandboxed
//! process is confined to (§4.5).

use std::path::Path;
use std::path::PathBuf;

use crate::error::Result;
use crate::error::sandbox_error::WorkspaceErrorSnafu;
use snafu::ResultExt;

/// An isolated workspace directory. The symlink chain to its root is
/// resolved exactly once, at creation, so later path checks don't need to
/// re-walk it on every access. Destroying it is idempotent.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    owns_dir: bool,
}

impl Workspace {
    /// Creates a fresh workspace directory under `base`, mode 0700 on Unix.
    pub fn create(base: &Path) -> Result<Self> {
        std::fs::create_dir_all(base).context(WorkspaceErrorSnafu {
            message: format!("failed to create workspace base {}", base.display()),
        })?;

        set_owner_only(base)?;

        let resolved = std::fs::canonicalize(base).context(WorkspaceErrorSnafu {
            message: format!("failed to canonicalize workspace root {}", base.display()),
        })?;

        Ok(Self {
            root: resolved,
            owns_dir: true,
        })
    }

    /// Wraps an already-existing, already-resolved directory without
    /// taking ownership of its lifecycle (it won't be removed on drop).
    pub fn attach(root: PathBuf) -> Self {
        Self { root, owns_dir: false }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Removes the workspace directory tree. Safe to call more than once
    /// or on an already-removed directory.
    pub fn destroy(&mut self) -> Result<()> {
        if !self.owns_dir {
            return Ok(());
        }
        match std::fs::remove_dir_all(&self.root) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => WorkspaceErrorSnafu {
                message: format!("failed to remove workspace {}: {e}", self.root.display()),
            }
            .fail(),
        }
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        let _ = self.destroy();
    }
}

#[cfg(unix)]
fn set_owner_only(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700)).context(WorkspaceErrorSnafu {
        message: format!("failed to chmod 0700 {}", path.display()),
    })
}

#[cfg(not(unix))]
fn set_owner_only(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
#[path = "workspace.test.rs"]
mod tests;
