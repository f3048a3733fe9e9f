//! `resolve_safe_path`: turns a caller-supplied path string into a
//! canonical, policy-checked [`PathBuf`] (§4.5).
//!
//! Steps:
//! 1. reject embedded NUL bytes outright.
//! 2. canonicalize the deepest *existing* ancestor (so a write to a
//!    not-yet-created file still resolves symlinks in its parent chain),
//!    then rejoin the remaining, not-yet-existing components.
//! 3. consult the one-time allow set, then the [`PermissionChecker`].
//! 4. on denial, give the caller's `recover` callback a chance to grant
//!    access either for this call only or for the rest of the session.

use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use crate::checker::PermissionChecker;
use crate::error::Result;
use crate::error::sandbox_error::InvalidPathSnafu;

/// Outcome of a `recover` callback invoked on a path denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Deny stands; propagate the original error.
    Deny,
    /// Allow this one call, without changing standing policy.
    AllowOnce,
    /// Allow this and all future accesses to the same path.
    AllowAlways,
}

/// Tracks paths granted one-time access so repeat requests for the same
/// path don't re-trigger recovery.
#[derive(Debug, Default)]
pub struct OneTimeAllows(HashSet<PathBuf>);

impl OneTimeAllows {
    pub fn new() -> Self {
        Self(HashSet::new())
    }

    fn contains(&self, path: &Path) -> bool {
        self.0.contains(path)
    }

    fn grant(&mut self, path: PathBuf) {
        self.0.insert(path);
    }
}

/// Resolves and policy-checks `requested` for access (read or, if `write`,
/// write) under `checker`. `recover` is consulted only on denial; it is
/// free to prompt a user or apply static policy and returns a [`Recovery`].
pub fn resolve_safe_path(
    checker: &mut PermissionChecker,
    one_time: &mut OneTimeAllows,
    requested: &str,
    write: bool,
    recover: impl FnOnce(&Path) -> Recovery,
) -> Result<PathBuf> {
    if requested.as_bytes().contains(&0) {
        return InvalidPathSnafu {
            message: "path contains a NUL byte",
        }
        .fail();
    }

    let raw = PathBuf::from(requested);
    let resolved = canonicalize_with_missing_tail(&raw)?;

    if one_time.contains(&resolved) {
        return Ok(resolved);
    }

    match checker.check_path(&resolved, write) {
        Ok(()) => Ok(resolved),
        Err(original) => match recover(&resolved) {
            Recovery::Deny => Err(original),
            Recovery::AllowOnce => {
                one_time.grant(resolved.clone());
                Ok(resolved)
            }
            Recovery::AllowAlways => {
                checker.allow_path(resolved.clone());
                Ok(resolved)
            }
        },
    }
}

/// Canonicalizes the deepest existing ancestor of `path` and rejoins the
/// remaining components verbatim (they may not exist yet, e.g. a file
/// about to be written).
fn canonicalize_with_missing_tail(path: &Path) -> Result<PathBuf> {
    let mut existing = path;
    let mut tail: Vec<&std::ffi::OsStr> = Vec::new();

    loop {
        if existing.exists() {
            break;
        }
        match (existing.file_name(), existing.parent()) {
            (Some(name), Some(parent)) => {
                tail.push(name);
                existing = parent;
            }
            _ => break,
        }
    }

    let mut canonical = if existing.as_os_str().is_empty() {
        std::env::current_dir().map_err(|e| {
            InvalidPathSnafu {
                message: format!("cannot resolve relative path without a cwd: {e}"),
            }
            .build()
        })?
    } else {
        std::fs::canonicalize(existing).map_err(|e| {
            InvalidPathSnafu {
                message: format!("cannot canonicalize {}: {e}", existing.display()),
            }
            .build()
        })?
    };

    for component in tail.into_iter().rev() {
        canonical.push(component);
    }

    Ok(canonical)
}

#[cfg(test)]
#[path = "path.test.rs"]
mod tests;
