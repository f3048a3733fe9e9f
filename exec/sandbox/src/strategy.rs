//! Sandbox strategy selection (§4.5).
//!
//! Linux prefers `bwrap` (bubblewrap) over `unshare` over no sandbox at all;
//! macOS prefers `sandbox-exec` (Seatbelt) over no sandbox. An explicit
//! override is validated against what's actually probed as available
//! rather than trusted blindly.

use crate::error::Result;
use crate::error::sandbox_error::StrategyUnavailableSnafu;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SandboxStrategy {
    /// Linux: bubblewrap (`bwrap`), unprivileged namespace sandboxing.
    Bwrap,
    /// Linux: `unshare(1)`, a weaker namespace-only fallback.
    Unshare,
    /// macOS: `sandbox-exec` with a generated SBPL profile.
    SandboxExec,
    /// No sandboxing; the command runs directly.
    None,
}

impl SandboxStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SandboxStrategy::Bwrap => "bwrap",
            SandboxStrategy::Unshare => "unshare",
            SandboxStrategy::SandboxExec => "sandbox-exec",
            SandboxStrategy::None => "none",
        }
    }

    fn probe(name: &str) -> bool {
        binary_on_path(name)
    }

    /// Is this strategy usable on the current host.
    pub fn is_available(&self) -> bool {
        match self {
            SandboxStrategy::Bwrap => cfg!(target_os = "linux") && Self::probe("bwrap"),
            SandboxStrategy::Unshare => cfg!(target_os = "linux") && Self::probe("unshare"),
            SandboxStrategy::SandboxExec => cfg!(target_os = "macos") && Self::probe("sandbox-exec"),
            SandboxStrategy::None => true,
        }
    }
}

/// Capability-probes in priority order and returns the best available
/// strategy for this platform. Never fails — falls back to `None`.
pub fn select_strategy() -> SandboxStrategy {
    let candidates: &[SandboxStrategy] = if cfg!(target_os = "linux") {
        &[SandboxStrategy::Bwrap, SandboxStrategy::Unshare]
    } else if cfg!(target_os = "macos") {
        &[SandboxStrategy::SandboxExec]
    } else {
        &[]
    };

    candidates
        .iter()
        .copied()
        .find(SandboxStrategy::is_available)
        .unwrap_or(SandboxStrategy::None)
}

/// Validates an explicit strategy override the caller asked for, rather
/// than letting capability-probing silently downgrade it.
pub fn validate_requested(requested: SandboxStrategy) -> Result<SandboxStrategy> {
    if requested.is_available() {
        return Ok(requested);
    }
    StrategyUnavailableSnafu {
        requested: requested.as_str(),
        reason: "capability probe failed (binary missing or wrong platform)",
    }
    .fail()
}

fn binary_on_path(name: &str) -> bool {
    let Some(path_var) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&path_var).any(|dir| dir.join(name).is_file())
}

#[cfg(test)]
#[path = "strategy.test.rs"]
mod tests;
