//! macOS/Linux sandbox enforcement (§4.5 strategy selection).
//!
//! `apply` is a capability probe, not the sandboxed execution path itself —
//! process supervision (building the wrapper argv, spawning under it) lives
//! in [`crate::process`] and [`crate::strategy`]. This just answers "is a
//! sandbox backend usable here" for the config validation path.

use crate::config::SandboxConfig;
use crate::error::Result;

use super::SandboxPlatform;

/// Unix sandbox capability probe (bubblewrap/unshare on Linux,
/// `sandbox-exec` on macOS — see [`crate::strategy`] for the real
/// selection logic this feeds).
pub struct UnixSandbox;

impl SandboxPlatform for UnixSandbox {
    fn available(&self) -> bool {
        cfg!(target_os = "macos") || cfg!(target_os = "linux")
    }

    fn apply(&self, _config: &SandboxConfig) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "unix.test.rs"]
mod tests;
